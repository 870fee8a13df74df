use anchor_lang::prelude::*;

use crate::errors::TokenpadError;

#[account]
pub struct TokenLock {
    /// Sequential id (also the PDA salt)
    pub id: u64,

    /// Current owner; reassignable via explicit transfer
    pub owner: Pubkey,

    /// Token mint held
    pub token_mint: Pubkey,

    /// Vault holding the locked balance
    pub token_vault: Pubkey,

    /// Net amount still locked (post-fee at creation)
    pub remaining_amount: u64,

    /// Total withdrawn across full and partial unlocks
    pub withdrawn_total: u64,

    /// Slot at which withdrawal opens
    pub unlock_slot: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl TokenLock {
    pub const SIZE: usize = 8 + // discriminator
        8 + // id
        32 + // owner
        32 + // token_mint
        32 + // token_vault
        8 + // remaining_amount
        8 + // withdrawn_total
        8 + // unlock_slot
        1 + // bump
        8 * 4; // reserved

    pub fn is_unlocked(&self, now_slot: u64) -> bool {
        now_slot >= self.unlock_slot
    }

    /// Move `amount` from remaining to withdrawn.
    pub fn withdraw(&mut self, amount: u64, now_slot: u64) -> Result<()> {
        require!(self.is_unlocked(now_slot), TokenpadError::StillLocked);
        require!(amount > 0, TokenpadError::InvalidAmount);
        require!(amount <= self.remaining_amount, TokenpadError::InsufficientRemaining);

        self.remaining_amount = self
            .remaining_amount
            .checked_sub(amount)
            .ok_or(TokenpadError::MathOverflow)?;
        self.withdrawn_total = self
            .withdrawn_total
            .checked_add(amount)
            .ok_or(TokenpadError::MathOverflow)?;

        Ok(())
    }

    /// Strictly extend the unlock height; emptied locks cannot be extended.
    pub fn extend(&mut self, new_unlock_slot: u64) -> Result<()> {
        require!(self.remaining_amount > 0, TokenpadError::LockEmpty);
        require!(
            new_unlock_slot > self.unlock_slot,
            TokenpadError::UnlockHeightNotExtended
        );
        self.unlock_slot = new_unlock_slot;
        Ok(())
    }
}

/// Per-owner lock counter, kept in step by lock creation and ownership
/// transfer so `count()` stays O(1).
#[account]
#[derive(Default)]
pub struct OwnerLockStats {
    /// Owner the counter belongs to
    pub owner: Pubkey,

    /// Number of locks currently owned
    pub lock_count: u64,

    /// bump seed
    pub bump: u8,
}

impl OwnerLockStats {
    pub const SIZE: usize = 8 + 32 + 8 + 1;

    pub fn increment(&mut self) -> Result<()> {
        self.lock_count = self
            .lock_count
            .checked_add(1)
            .ok_or(TokenpadError::MathOverflow)?;
        Ok(())
    }

    pub fn decrement(&mut self) -> Result<()> {
        self.lock_count = self
            .lock_count
            .checked_sub(1)
            .ok_or(TokenpadError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock(remaining: u64, unlock_slot: u64) -> TokenLock {
        TokenLock {
            id: 0,
            owner: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            remaining_amount: remaining,
            withdrawn_total: 0,
            unlock_slot,
            bump: 255,
            reserved: [0; 4],
        }
    }

    #[test]
    fn partial_then_full_withdrawal() {
        let mut lock = lock(950, 100);
        lock.withdraw(400, 100).unwrap();
        assert_eq!(lock.remaining_amount, 550);
        assert_eq!(lock.withdrawn_total, 400);
        lock.withdraw(550, 150).unwrap();
        assert_eq!(lock.remaining_amount, 0);
        assert_eq!(lock.withdrawn_total, 950);
        assert!(lock.withdraw(1, 200).is_err());
    }

    #[test]
    fn withdraw_requires_unlock_height() {
        let mut lock = lock(950, 100);
        assert!(lock.withdraw(1, 99).is_err());
        assert!(lock.withdraw(1, 100).is_ok());
    }

    #[test]
    fn withdraw_bounds() {
        let mut lock = lock(950, 100);
        assert!(lock.withdraw(0, 100).is_err());
        assert!(lock.withdraw(951, 100).is_err());
    }

    #[test]
    fn extend_is_strictly_increasing() {
        let mut lock = lock(950, 100);
        assert!(lock.extend(100).is_err());
        assert!(lock.extend(99).is_err());
        lock.extend(101).unwrap();
        assert_eq!(lock.unlock_slot, 101);
    }

    #[test]
    fn emptied_lock_cannot_extend() {
        let mut lock = lock(950, 100);
        lock.withdraw(950, 100).unwrap();
        assert!(lock.extend(200).is_err());
    }

    #[test]
    fn owner_stats_counters() {
        let mut stats = OwnerLockStats::default();
        stats.increment().unwrap();
        stats.increment().unwrap();
        stats.decrement().unwrap();
        assert_eq!(stats.lock_count, 1);
        stats.decrement().unwrap();
        assert!(stats.decrement().is_err());
    }
}
