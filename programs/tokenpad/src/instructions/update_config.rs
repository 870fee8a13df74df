use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::ConfigUpdated;
use crate::state::PlatformConfig;
use crate::utils::math::require_fee_bps;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateConfigParams {
    pub admin: Option<Pubkey>,
    pub platform_wallet: Option<Pubkey>,
    pub lock_fee_bps: Option<u64>,
    pub presale_fee_bps: Option<u64>,
    pub paused: Option<bool>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ TokenpadError::Unauthorized,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,
}

pub fn update_config(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;

    if let Some(admin) = params.admin {
        require!(admin != Pubkey::default(), TokenpadError::InvalidAddress);
        config.admin = admin;
    }

    if let Some(platform_wallet) = params.platform_wallet {
        require!(platform_wallet != Pubkey::default(), TokenpadError::InvalidAddress);
        config.platform_wallet = platform_wallet;
    }

    if let Some(lock_fee_bps) = params.lock_fee_bps {
        require_fee_bps(lock_fee_bps, MAX_LOCK_FEE_BPS)?;
        config.lock_fee_bps = lock_fee_bps;
    }

    if let Some(presale_fee_bps) = params.presale_fee_bps {
        require_fee_bps(presale_fee_bps, MAX_PRESALE_FEE_BPS)?;
        config.presale_fee_bps = presale_fee_bps;
    }

    if let Some(paused) = params.paused {
        config.paused = paused;
    }

    let clock = Clock::get()?;
    emit!(ConfigUpdated {
        admin: ctx.accounts.admin.key(),
        platform_wallet: config.platform_wallet,
        lock_fee_bps: config.lock_fee_bps,
        presale_fee_bps: config.presale_fee_bps,
        paused: config.paused,
        timestamp: clock.unix_timestamp,
    });

    msg!("Platform config updated successfully");

    Ok(())
}
