use anchor_lang::prelude::*;

use crate::errors::TokenpadError;
use crate::utils::math::{bps_amount, mul_div_floor};

/// Cumulative vested amount at `now` for a TGE + cliff + linear schedule.
///
/// - before `start`: nothing
/// - inside the cliff: only the TGE portion
/// - inside the linear window: TGE portion plus elapsed share of the rest
/// - past the window: everything
///
/// `vesting_slots == 0` is rejected at schedule creation, so the linear
/// division here never sees a zero duration.
pub fn vested_amount(
    total: u64,
    start_slot: u64,
    cliff_slots: u64,
    vesting_slots: u64,
    tge_bps: u64,
    now_slot: u64,
) -> Result<u64> {
    if now_slot < start_slot {
        return Ok(0);
    }

    let tge_amount = bps_amount(total, tge_bps)?;

    let cliff_end = start_slot
        .checked_add(cliff_slots)
        .ok_or(TokenpadError::MathOverflow)?;
    if now_slot < cliff_end {
        return Ok(tge_amount);
    }

    let vest_end = cliff_end
        .checked_add(vesting_slots)
        .ok_or(TokenpadError::MathOverflow)?;
    if now_slot >= vest_end {
        return Ok(total);
    }

    let elapsed = now_slot - cliff_end;
    let remainder = total
        .checked_sub(tge_amount)
        .ok_or(TokenpadError::MathOverflow)?;
    let linear = mul_div_floor(remainder, elapsed, vesting_slots)?;

    tge_amount
        .checked_add(linear)
        .ok_or_else(|| error!(TokenpadError::MathOverflow))
}

/// Newly claimable amount, i.e. vested-so-far minus already claimed.
pub fn claimable_amount(
    total: u64,
    start_slot: u64,
    cliff_slots: u64,
    vesting_slots: u64,
    tge_bps: u64,
    claimed: u64,
    now_slot: u64,
) -> Result<u64> {
    let vested = vested_amount(total, start_slot, cliff_slots, vesting_slots, tge_bps, now_slot)?;
    Ok(vested.saturating_sub(claimed))
}

#[cfg(test)]
mod tests {
    use super::*;

    // total=1000, tge=2000 bps, cliff=10, duration=100, start=0
    fn vested(now: u64) -> u64 {
        vested_amount(1000, 0, 10, 100, 2000, now).unwrap()
    }

    #[test]
    fn tge_only_during_cliff() {
        assert_eq!(vested(0), 200);
        assert_eq!(vested(9), 200);
    }

    #[test]
    fn cliff_boundary_has_zero_elapsed_linear() {
        assert_eq!(vested(10), 200);
    }

    #[test]
    fn linear_midpoint() {
        // 200 + floor(800 * 50 / 100) = 600
        assert_eq!(vested(60), 600);
    }

    #[test]
    fn fully_vested_at_and_after_window_end() {
        assert_eq!(vested(110), 1000);
        assert_eq!(vested(u64::MAX), 1000);
    }

    #[test]
    fn nothing_before_start() {
        assert_eq!(vested_amount(1000, 50, 10, 100, 2000, 49).unwrap(), 0);
        assert_eq!(vested_amount(1000, 50, 10, 100, 2000, 50).unwrap(), 200);
    }

    #[test]
    fn zero_tge_is_cliff_then_linear() {
        assert_eq!(vested_amount(1000, 0, 10, 100, 0, 5).unwrap(), 0);
        assert_eq!(vested_amount(1000, 0, 10, 100, 0, 60).unwrap(), 500);
        assert_eq!(vested_amount(1000, 0, 10, 100, 0, 110).unwrap(), 1000);
    }

    #[test]
    fn full_tge_vests_immediately() {
        assert_eq!(vested_amount(1000, 0, 10, 100, 10_000, 0).unwrap(), 1000);
    }

    #[test]
    fn claimable_subtracts_claimed() {
        assert_eq!(claimable_amount(1000, 0, 10, 100, 2000, 200, 60).unwrap(), 400);
        assert_eq!(claimable_amount(1000, 0, 10, 100, 2000, 600, 60).unwrap(), 0);
        // claimed can momentarily exceed vested after a revocation freeze
        assert_eq!(claimable_amount(500, 0, 10, 100, 2000, 600, 60).unwrap(), 0);
    }

    #[test]
    fn monotone_in_time() {
        let mut prev = 0;
        for now in 0..130 {
            let v = vested(now);
            assert!(v >= prev);
            assert!(v <= 1000);
            prev = v;
        }
    }
}
