use anchor_lang::prelude::*;

use crate::constants::{MAX_LOCK_FEE_BPS, MAX_PRESALE_FEE_BPS};
use crate::errors::TokenpadError;
use crate::utils::math::require_fee_bps;

#[account]
pub struct PlatformConfig {
    /// Admin address (can update configuration)
    pub admin: Pubkey,

    /// Wallet receiving lock and presale fees
    pub platform_wallet: Pubkey,

    /// Fee taken at lock time, in basis points
    pub lock_fee_bps: u64,

    /// Fee taken at presale finalization, in basis points
    pub presale_fee_bps: u64,

    /// Whether new deployments are paused
    pub paused: bool,

    /// Factory reentrancy guard
    pub deploy_guard: bool,

    // ===== Registry Counters =====
    // Each counter is the id of the next record and the salt of its PDA.
    pub airdrop_count: u64,
    pub lock_count: u64,
    pub schedule_count: u64,
    pub token_count: u64,
    pub presale_count: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

impl PlatformConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // platform_wallet
        8 + // lock_fee_bps
        8 + // presale_fee_bps
        1 + // paused
        1 + // deploy_guard
        8 * 5 + // counters
        1 + // bump
        8 * 8; // reserved

    /// Initialize default configuration
    pub fn initialize_defaults(
        &mut self,
        admin: Pubkey,
        platform_wallet: Pubkey,
        lock_fee_bps: u64,
        presale_fee_bps: u64,
        bump: u8,
    ) -> Result<()> {
        require_fee_bps(lock_fee_bps, MAX_LOCK_FEE_BPS)?;
        require_fee_bps(presale_fee_bps, MAX_PRESALE_FEE_BPS)?;

        self.admin = admin;
        self.platform_wallet = platform_wallet;
        self.lock_fee_bps = lock_fee_bps;
        self.presale_fee_bps = presale_fee_bps;
        self.paused = false;
        self.deploy_guard = false;
        self.airdrop_count = 0;
        self.lock_count = 0;
        self.schedule_count = 0;
        self.token_count = 0;
        self.presale_count = 0;
        self.bump = bump;

        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, TokenpadError::PlatformPaused);
        Ok(())
    }

    /// Reserve the next id from a registry counter
    pub fn next_id(counter: &mut u64) -> Result<u64> {
        let id = *counter;
        *counter = counter
            .checked_add(1)
            .ok_or(TokenpadError::MathOverflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlatformConfig {
        let mut config = PlatformConfig {
            admin: Pubkey::new_unique(),
            platform_wallet: Pubkey::new_unique(),
            lock_fee_bps: 0,
            presale_fee_bps: 0,
            paused: false,
            deploy_guard: false,
            airdrop_count: 0,
            lock_count: 0,
            schedule_count: 0,
            token_count: 0,
            presale_count: 0,
            bump: 255,
            reserved: [0; 8],
        };
        config
            .initialize_defaults(config.admin, config.platform_wallet, 50, 300, 255)
            .unwrap();
        config
    }

    #[test]
    fn defaults_reject_fees_above_ceiling() {
        let mut config = config();
        let admin = config.admin;
        let wallet = config.platform_wallet;
        assert!(config.initialize_defaults(admin, wallet, 501, 300, 255).is_err());
        assert!(config.initialize_defaults(admin, wallet, 50, 1001, 255).is_err());
    }

    #[test]
    fn ids_are_sequential() {
        let mut config = config();
        assert_eq!(PlatformConfig::next_id(&mut config.airdrop_count).unwrap(), 0);
        assert_eq!(PlatformConfig::next_id(&mut config.airdrop_count).unwrap(), 1);
        assert_eq!(config.airdrop_count, 2);
        // other registries are independent
        assert_eq!(PlatformConfig::next_id(&mut config.lock_count).unwrap(), 0);
    }

    #[test]
    fn paused_blocks() {
        let mut config = config();
        assert!(config.require_not_paused().is_ok());
        config.paused = true;
        assert!(config.require_not_paused().is_err());
    }
}
