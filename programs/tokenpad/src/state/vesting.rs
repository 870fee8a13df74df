use anchor_lang::prelude::*;

use crate::errors::TokenpadError;
use crate::utils::vesting::{claimable_amount, vested_amount};

#[account]
pub struct VestingSchedule {
    /// Sequential id (also the PDA salt)
    pub id: u64,

    /// Beneficiary entitled to claim
    pub beneficiary: Pubkey,

    /// Creator who funded the schedule
    pub creator: Pubkey,

    /// Token mint vested
    pub token_mint: Pubkey,

    /// Vault holding the unvested balance
    pub token_vault: Pubkey,

    /// Total amount; frozen at vested-so-far on revocation
    pub total_amount: u64,

    /// Amount already claimed by the beneficiary
    pub claimed_amount: u64,

    /// Vesting start slot
    pub start_slot: u64,

    /// Cliff length in slots after start
    pub cliff_slots: u64,

    /// Linear release duration in slots after the cliff
    pub vesting_slots: u64,

    /// Portion released at the start slot, in basis points
    pub tge_bps: u64,

    /// Whether the creator may revoke
    pub revocable: bool,

    /// Set once revoked; no further claims beyond the frozen total
    pub revoked: bool,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl VestingSchedule {
    pub const SIZE: usize = 8 + // discriminator
        8 + // id
        32 + // beneficiary
        32 + // creator
        32 + // token_mint
        32 + // token_vault
        8 + // total_amount
        8 + // claimed_amount
        8 + // start_slot
        8 + // cliff_slots
        8 + // vesting_slots
        8 + // tge_bps
        1 + // revocable
        1 + // revoked
        1 + // bump
        8 * 4; // reserved

    pub fn vested(&self, now_slot: u64) -> Result<u64> {
        vested_amount(
            self.total_amount,
            self.start_slot,
            self.cliff_slots,
            self.vesting_slots,
            self.tge_bps,
            now_slot,
        )
    }

    pub fn claimable(&self, now_slot: u64) -> Result<u64> {
        claimable_amount(
            self.total_amount,
            self.start_slot,
            self.cliff_slots,
            self.vesting_slots,
            self.tge_bps,
            self.claimed_amount,
            now_slot,
        )
    }

    /// Record a beneficiary claim of everything currently claimable. After a
    /// revocation the frozen total keeps the already-vested portion claimable.
    pub fn record_claim(&mut self, now_slot: u64) -> Result<u64> {
        let amount = self.claimable(now_slot)?;
        require!(amount > 0, TokenpadError::NothingToClaim);

        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(TokenpadError::MathOverflow)?;

        Ok(amount)
    }

    /// Freeze the schedule at vested-so-far and report the unvested remainder
    /// to return to the creator.
    pub fn revoke(&mut self, now_slot: u64) -> Result<u64> {
        require!(self.revocable, TokenpadError::NotRevocable);
        require!(!self.revoked, TokenpadError::ScheduleRevoked);

        let vested = self.vested(now_slot)?;
        let returned = self
            .total_amount
            .checked_sub(vested)
            .ok_or(TokenpadError::MathOverflow)?;

        self.total_amount = vested;
        self.revoked = true;

        Ok(returned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> VestingSchedule {
        VestingSchedule {
            id: 0,
            beneficiary: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            total_amount: 1000,
            claimed_amount: 0,
            start_slot: 0,
            cliff_slots: 10,
            vesting_slots: 100,
            tge_bps: 2000,
            revocable: true,
            revoked: false,
            bump: 255,
            reserved: [0; 4],
        }
    }

    #[test]
    fn claim_tracks_vested_curve() {
        let mut schedule = schedule();
        assert_eq!(schedule.record_claim(5).unwrap(), 200);
        assert!(schedule.record_claim(5).is_err()); // nothing new yet
        assert_eq!(schedule.record_claim(60).unwrap(), 400);
        assert_eq!(schedule.record_claim(110).unwrap(), 400);
        assert_eq!(schedule.claimed_amount, 1000);
    }

    #[test]
    fn claimed_never_exceeds_vested() {
        let mut schedule = schedule();
        for now in [0, 10, 35, 60, 99, 110, 200] {
            let _ = schedule.record_claim(now);
            assert!(schedule.claimed_amount <= schedule.vested(now).unwrap());
        }
        assert_eq!(schedule.claimed_amount, 1000);
    }

    #[test]
    fn revoke_freezes_total_and_returns_remainder() {
        let mut schedule = schedule();
        // at slot 60: vested = 600, so 400 goes back
        assert_eq!(schedule.revoke(60).unwrap(), 400);
        assert!(schedule.revoked);
        assert_eq!(schedule.total_amount, 600);
        // beneficiary can still claim what vested before the revocation
        assert_eq!(schedule.record_claim(1000).unwrap(), 600);
        assert!(schedule.record_claim(1000).is_err());
    }

    #[test]
    fn revoke_requires_revocable_and_once() {
        let mut schedule = schedule();
        schedule.revocable = false;
        assert!(schedule.revoke(60).is_err());
        schedule.revocable = true;
        schedule.revoke(60).unwrap();
        assert!(schedule.revoke(80).is_err());
    }
}
