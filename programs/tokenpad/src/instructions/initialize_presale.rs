use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::PresaleInitialized;
use crate::state::{PresaleState, PresaleTerms};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializePresaleParams {
    pub hard_cap: u64,
    pub soft_cap: u64,
    pub rate: u64,
    pub min_buy: u64,
    pub max_buy: u64,
    pub start_slot: u64,
    pub end_slot: u64,
}

#[derive(Accounts)]
pub struct InitializePresale<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PRESALE_SEED, &presale.id.to_le_bytes()],
        bump = presale.bump,
        constraint = presale.creator == creator.key() @ TokenpadError::NotCreator,
    )]
    pub presale: Box<Account<'info, PresaleState>>,
}

/// Phase two of clone-and-initialize: the funded instance adopts its sale
/// parameters. The platform fee was pinned at deployment and cannot be
/// smuggled in here.
pub fn initialize_presale(
    ctx: Context<InitializePresale>,
    params: InitializePresaleParams,
) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    let terms = PresaleTerms {
        hard_cap: params.hard_cap,
        soft_cap: params.soft_cap,
        rate: params.rate,
        min_buy: params.min_buy,
        max_buy: params.max_buy,
        start_slot: params.start_slot,
        end_slot: params.end_slot,
        fee_bps: presale.terms.fee_bps,
    };
    presale.apply_terms(terms, clock.slot)?;

    emit!(PresaleInitialized {
        presale_id: presale.id,
        creator: presale.creator,
        hard_cap: terms.hard_cap,
        soft_cap: terms.soft_cap,
        rate: terms.rate,
        start_slot: terms.start_slot,
        end_slot: terms.end_slot,
        fee_bps: terms.fee_bps,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Presale {} initialized, window [{}, {})",
        presale.id,
        terms.start_slot,
        terms.end_slot
    );

    Ok(())
}
