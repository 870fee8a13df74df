use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::WhitelistUpdated;
use crate::state::PresaleState;

#[derive(Accounts)]
pub struct UpdateWhitelist<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PRESALE_SEED, &presale.id.to_le_bytes()],
        bump = presale.bump,
        constraint = presale.creator == creator.key() @ TokenpadError::NotCreator,
    )]
    pub presale: Box<Account<'info, PresaleState>>,
}

/// Batch-add whitelist entries before the sale opens. Returns the number
/// actually added; zero addresses and duplicates are skipped, and entries
/// past capacity are dropped without failing the rest of the batch.
pub fn add_to_whitelist(
    ctx: Context<UpdateWhitelist>,
    addresses: Vec<Pubkey>,
) -> Result<u32> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    presale.require_config_window(clock.slot)?;
    let added = presale.add_to_whitelist(&addresses);

    emit!(WhitelistUpdated {
        presale_id: presale.id,
        added,
        total: presale.whitelist.len() as u32,
        enabled: presale.whitelist_enabled,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Presale {} whitelist: {} added, {} total",
        presale.id,
        added,
        presale.whitelist.len()
    );

    Ok(added)
}
