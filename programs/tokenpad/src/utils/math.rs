use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::TokenpadError;

/// floor(a * b / denominator), widened through U256 so the product cannot wrap
pub fn mul_div_floor(a: u64, b: u64, denominator: u64) -> Result<u64> {
    if denominator == 0 {
        return err!(TokenpadError::DivisionByZero);
    }

    let prod = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(TokenpadError::MathOverflow)?;

    let quotient = prod
        .checked_div(U256::from(denominator))
        .ok_or(TokenpadError::DivisionByZero)?;

    quotient
        .try_into()
        .map_err(|_| error!(TokenpadError::MathOverflow))
}

/// floor(amount * bps / 10000)
pub fn bps_amount(amount: u64, bps: u64) -> Result<u64> {
    mul_div_floor(amount, bps, BPS_DENOMINATOR)
}

/// Validate a fee setting against a component-specific ceiling
pub fn require_fee_bps(bps: u64, ceiling: u64) -> Result<()> {
    require!(bps <= ceiling, TokenpadError::FeeTooHigh);
    Ok(())
}

/// Validate a percentage-style bps value (e.g. TGE unlock)
pub fn require_bps(bps: u64) -> Result<()> {
    require!(bps <= BPS_DENOMINATOR, TokenpadError::BpsOutOfRange);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div_floor(1000, 50, 10_000).unwrap(), 5);
        assert_eq!(mul_div_floor(999, 1, 10_000).unwrap(), 0);
        assert_eq!(mul_div_floor(7, 3, 2).unwrap(), 10);
    }

    #[test]
    fn mul_div_survives_u64_products() {
        // u64::MAX * u64::MAX overflows u128 squared terms in naive impls
        assert_eq!(
            mul_div_floor(u64::MAX, u64::MAX, u64::MAX).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn mul_div_rejects_zero_denominator() {
        assert!(mul_div_floor(1, 1, 0).is_err());
    }

    #[test]
    fn mul_div_rejects_result_overflow() {
        assert!(mul_div_floor(u64::MAX, 2, 1).is_err());
    }

    #[test]
    fn bps_amount_floors() {
        assert_eq!(bps_amount(1000, 50).unwrap(), 5);
        assert_eq!(bps_amount(1000, 500).unwrap(), 50);
        assert_eq!(bps_amount(1000, 2000).unwrap(), 200);
        assert_eq!(bps_amount(1999, 50).unwrap(), 9);
        assert_eq!(bps_amount(0, 10_000).unwrap(), 0);
    }

    #[test]
    fn fee_ceilings_enforced() {
        assert!(require_fee_bps(500, crate::constants::MAX_LOCK_FEE_BPS).is_ok());
        assert!(require_fee_bps(501, crate::constants::MAX_LOCK_FEE_BPS).is_err());
        assert!(require_bps(10_000).is_ok());
        assert!(require_bps(10_001).is_err());
    }
}
