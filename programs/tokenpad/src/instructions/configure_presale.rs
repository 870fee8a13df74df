use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::state::{PresaleState, PresaleVesting};

#[derive(Accounts)]
pub struct ConfigurePresale<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PRESALE_SEED, &presale.id.to_le_bytes()],
        bump = presale.bump,
        constraint = presale.creator == creator.key() @ TokenpadError::NotCreator,
    )]
    pub presale: Box<Account<'info, PresaleState>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct PresaleVestingParams {
    pub enabled: bool,
    pub tge_bps: u64,
    pub cliff_slots: u64,
    pub vesting_slots: u64,
}

/// Claim vesting terms are fixed before the sale window opens.
pub fn set_presale_vesting(
    ctx: Context<ConfigurePresale>,
    params: PresaleVestingParams,
) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    presale.require_config_window(clock.slot)?;
    presale.set_vesting(PresaleVesting {
        enabled: params.enabled,
        tge_bps: params.tge_bps,
        cliff_slots: params.cliff_slots,
        vesting_slots: params.vesting_slots,
    })?;

    msg!("Presale {} vesting updated", presale.id);

    Ok(())
}

/// Throttle on distinct new contributors per slot; 0 disables it.
pub fn set_anti_bot(ctx: Context<ConfigurePresale>, max_entrants_per_slot: u64) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    presale.require_config_window(clock.slot)?;
    presale.max_entrants_per_slot = max_entrants_per_slot;

    msg!(
        "Presale {} max entrants per slot set to {}",
        presale.id,
        max_entrants_per_slot
    );

    Ok(())
}

pub fn set_whitelist_enabled(ctx: Context<ConfigurePresale>, enabled: bool) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    presale.require_config_window(clock.slot)?;
    presale.whitelist_enabled = enabled;

    msg!("Presale {} whitelist gating: {}", presale.id, enabled);

    Ok(())
}

/// Pause toggles any time while the sale is live; it blocks new
/// contributions only, never claims or refunds.
pub fn set_presale_paused(ctx: Context<ConfigurePresale>, paused: bool) -> Result<()> {
    let presale = &mut ctx.accounts.presale;

    require!(!presale.is_terminal(), TokenpadError::InvalidStatus);
    presale.paused = paused;

    msg!("Presale {} paused: {}", presale.id, paused);

    Ok(())
}
