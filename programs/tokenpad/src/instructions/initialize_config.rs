use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::PlatformConfig;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeConfigParams {
    pub platform_wallet: Pubkey,
    pub lock_fee_bps: Option<u64>,
    pub presale_fee_bps: Option<u64>,
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = PlatformConfig::SIZE,
        seeds = [PLATFORM_CONFIG_SEED],
        bump,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    params: InitializeConfigParams,
) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;

    config.initialize_defaults(
        ctx.accounts.admin.key(),
        params.platform_wallet,
        params.lock_fee_bps.unwrap_or(0),
        params.presale_fee_bps.unwrap_or(0),
        ctx.bumps.platform_config,
    )?;

    msg!("Platform config initialized successfully");
    msg!("Admin: {}", config.admin);
    msg!("Platform wallet: {}", config.platform_wallet);

    Ok(())
}
