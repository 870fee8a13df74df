use anchor_lang::prelude::*;

use crate::errors::TokenpadError;

#[account]
pub struct Airdrop {
    /// Sequential id (also the PDA salt)
    pub id: u64,

    /// Campaign creator
    pub creator: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Vault holding the undistributed pool
    pub token_vault: Pubkey,

    /// Total pool funded at creation
    pub total_amount: u64,

    /// Sum of all successful claims
    pub claimed_amount: u64,

    /// Merkle root gating claims
    pub merkle_root: [u8; 32],

    /// Slot after which the creator can recover the remainder
    pub expiry_slot: u64,

    /// Set on cancellation or expiry recovery; no claims once set
    pub closed: bool,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl Airdrop {
    pub const SIZE: usize = 8 + // discriminator
        8 + // id
        32 + // creator
        32 + // token_mint
        32 + // token_vault
        8 + // total_amount
        8 + // claimed_amount
        32 + // merkle_root
        8 + // expiry_slot
        1 + // closed
        1 + // bump
        8 * 4; // reserved

    pub fn remaining(&self) -> u64 {
        self.total_amount.saturating_sub(self.claimed_amount)
    }

    pub fn is_expired(&self, now_slot: u64) -> bool {
        now_slot >= self.expiry_slot
    }

    /// Record a claim; rejects anything that would push the pool past its total.
    pub fn record_claim(&mut self, amount: u64, now_slot: u64) -> Result<()> {
        require!(!self.closed, TokenpadError::AirdropClosed);
        require!(!self.is_expired(now_slot), TokenpadError::AirdropExpired);
        require!(amount > 0, TokenpadError::InvalidAmount);
        require!(amount <= self.remaining(), TokenpadError::InsufficientRemaining);

        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(TokenpadError::MathOverflow)?;

        Ok(())
    }

    /// Cancel a still-live campaign; past expiry the remainder goes through
    /// `recover_remainder` instead.
    pub fn cancel_active(&mut self, now_slot: u64) -> Result<u64> {
        require!(!self.is_expired(now_slot), TokenpadError::AirdropExpired);
        self.close_campaign()
    }

    /// Recover the remainder once the campaign has expired.
    pub fn recover_remainder(&mut self, now_slot: u64) -> Result<u64> {
        require!(self.is_expired(now_slot), TokenpadError::NotExpired);
        self.close_campaign()
    }

    /// Close the campaign and report the amount to refund to the creator.
    fn close_campaign(&mut self) -> Result<u64> {
        require!(!self.closed, TokenpadError::AirdropClosed);
        self.closed = true;
        Ok(self.remaining())
    }
}

/// Write-once record marking a (airdrop, claimer) pair as claimed. The account
/// is created with `init` at claim time, so a second claim fails before any
/// state is touched.
#[account]
pub struct ClaimRecord {
    /// Airdrop the claim belongs to
    pub airdrop: Pubkey,

    /// Claimer address
    pub claimer: Pubkey,

    /// Amount claimed
    pub amount: u64,

    /// Slot of the claim
    pub claimed_at_slot: u64,

    /// bump seed
    pub bump: u8,
}

impl ClaimRecord {
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airdrop(total: u64, expiry: u64) -> Airdrop {
        Airdrop {
            id: 0,
            creator: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            total_amount: total,
            claimed_amount: 0,
            merkle_root: [1u8; 32],
            expiry_slot: expiry,
            closed: false,
            bump: 255,
            reserved: [0; 4],
        }
    }

    #[test]
    fn claims_never_exceed_total() {
        let mut drop = airdrop(1000, 100);
        drop.record_claim(600, 10).unwrap();
        drop.record_claim(400, 20).unwrap();
        assert_eq!(drop.claimed_amount, 1000);
        assert_eq!(drop.remaining(), 0);
        assert!(drop.record_claim(1, 30).is_err());
    }

    #[test]
    fn claim_rejections() {
        let mut drop = airdrop(1000, 100);
        assert!(drop.record_claim(0, 10).is_err());
        assert!(drop.record_claim(1001, 10).is_err());
        assert!(drop.record_claim(10, 100).is_err()); // expired at boundary
        drop.closed = true;
        assert!(drop.record_claim(10, 10).is_err());
    }

    #[test]
    fn close_refunds_remainder_once() {
        let mut drop = airdrop(1000, 100);
        drop.record_claim(300, 10).unwrap();
        assert_eq!(drop.cancel_active(20).unwrap(), 700);
        // the closed flag doubles as the recovered flag
        assert!(drop.cancel_active(20).is_err());
        assert!(drop.recover_remainder(100).is_err());
    }

    #[test]
    fn cancel_and_recovery_split_at_expiry() {
        let mut drop = airdrop(1000, 100);
        assert!(drop.recover_remainder(99).is_err());
        assert!(drop.cancel_active(100).is_err());
        assert_eq!(drop.cancel_active(99).unwrap(), 1000);

        let mut drop = airdrop(1000, 100);
        drop.record_claim(300, 10).unwrap();
        assert_eq!(drop.recover_remainder(100).unwrap(), 700);
    }
}
