use anchor_lang::prelude::*;

use crate::errors::TokenpadError;

/// Immutable registry entry for a factory-deployed token mint. The record
/// PDA is salted with the global id, so `token_count` plus PDA derivation
/// gives the uniform count/by-index enumeration surface.
#[account]
pub struct TokenRecord {
    /// Global sequential id (PDA salt)
    pub id: u64,

    /// Deployer (reverse map program -> deployer)
    pub deployer: Pubkey,

    /// Deployed mint address
    pub mint: Pubkey,

    /// Slot of deployment
    pub deployed_at_slot: u64,

    /// Index within the deployer's own enumeration
    pub deployer_index: u64,

    /// bump seed
    pub bump: u8,
}

impl TokenRecord {
    pub const SIZE: usize = 8 + 8 + 32 + 32 + 8 + 8 + 1;
}

/// Immutable registry entry for a factory-deployed presale instance.
#[account]
pub struct PresaleRecord {
    /// Global sequential id (PDA salt)
    pub id: u64,

    /// Creator (reverse map program -> creator)
    pub creator: Pubkey,

    /// Deployed presale instance address
    pub presale: Pubkey,

    /// Slot of deployment
    pub deployed_at_slot: u64,

    /// Index within the creator's own enumeration
    pub creator_index: u64,

    /// bump seed
    pub bump: u8,
}

impl PresaleRecord {
    pub const SIZE: usize = 8 + 8 + 32 + 32 + 8 + 8 + 1;
}

/// Per-creator deployment counter; doubles as the salt source for the
/// creator-scoped index PDAs, giving O(1) `byOwnerAndIndex` lookups
/// instead of a registry scan.
#[account]
#[derive(Default)]
pub struct CreatorStats {
    /// Creator the counters belong to
    pub creator: Pubkey,

    /// Tokens deployed by this creator
    pub token_count: u64,

    /// Presales deployed by this creator
    pub presale_count: u64,

    /// bump seed
    pub bump: u8,
}

impl CreatorStats {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 1;

    pub fn next_token_index(&mut self) -> Result<u64> {
        let index = self.token_count;
        self.token_count = index.checked_add(1).ok_or(TokenpadError::MathOverflow)?;
        Ok(index)
    }

    pub fn next_presale_index(&mut self) -> Result<u64> {
        let index = self.presale_count;
        self.presale_count = index.checked_add(1).ok_or(TokenpadError::MathOverflow)?;
        Ok(index)
    }
}

/// Creator-scoped index entry mapping (creator, n) to a global registry id.
#[account]
pub struct CreatorIndexEntry {
    /// Creator
    pub creator: Pubkey,

    /// Index within the creator's enumeration
    pub index: u64,

    /// Global registry id the entry points at
    pub global_id: u64,

    /// bump seed
    pub bump: u8,
}

impl CreatorIndexEntry {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_counters_are_independent() {
        let mut stats = CreatorStats::default();
        assert_eq!(stats.next_token_index().unwrap(), 0);
        assert_eq!(stats.next_token_index().unwrap(), 1);
        assert_eq!(stats.next_presale_index().unwrap(), 0);
        assert_eq!(stats.token_count, 2);
        assert_eq!(stats.presale_count, 1);
    }
}
