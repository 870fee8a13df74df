use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::ContributionReceived;
use crate::state::{ContributorPosition, ContributorRecord, PresaleState};

#[derive(Accounts)]
pub struct Contribute<'info> {
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
        mut,
        seeds = [PRESALE_SEED, &presale.id.to_le_bytes()],
        bump = presale.bump,
    )]
    pub presale: Box<Account<'info, PresaleState>>,

    #[account(
        init_if_needed,
        payer = contributor,
        space = ContributorPosition::SIZE,
        seeds = [CONTRIBUTOR_SEED, presale.key().as_ref(), contributor.key().as_ref()],
        bump,
    )]
    pub contributor_position: Box<Account<'info, ContributorPosition>>,

    /// Enumeration entry. First-timers land at the next free index; top-ups
    /// re-derive their own existing entry from the position.
    #[account(
        init_if_needed,
        payer = contributor,
        space = ContributorRecord::SIZE,
        seeds = [
            CONTRIBUTOR_RECORD_SEED,
            presale.key().as_ref(),
            &(if contributor_position.contributed == 0 {
                presale.contributors_count
            } else {
                contributor_position.index
            })
            .to_le_bytes(),
        ],
        bump,
    )]
    pub contributor_record: Box<Account<'info, ContributorRecord>>,

    #[account(
        mut,
        address = presale.quote_vault @ TokenpadError::InvalidAddress,
    )]
    pub quote_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let position = &mut ctx.accounts.contributor_position;
    let clock = Clock::get()?;

    let contributor_key = ctx.accounts.contributor.key();
    let whitelisted = presale.is_whitelisted(&contributor_key);
    let prior = position.contributed;

    // All gating and totals happen before any lamports move
    let is_first = presale.record_contribution(prior, amount, clock.slot, whitelisted)?;

    if is_first {
        let index = presale
            .contributors_count
            .checked_sub(1)
            .ok_or(TokenpadError::MathOverflow)?;

        position.contributor = contributor_key;
        position.presale = presale.key();
        position.first_contribution_slot = clock.slot;
        position.index = index;
        position.bump = ctx.bumps.contributor_position;

        let record = &mut ctx.accounts.contributor_record;
        record.presale = presale.key();
        record.index = index;
        record.contributor = contributor_key;
        record.bump = ctx.bumps.contributor_record;
    }

    position.contributed = prior
        .checked_add(amount)
        .ok_or(TokenpadError::MathOverflow)?;

    // Move the quote in and wrap it
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.contributor.to_account_info(),
                to: ctx.accounts.quote_vault.to_account_info(),
            },
        ),
        amount,
    )?;
    token::sync_native(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        token::SyncNative {
            account: ctx.accounts.quote_vault.to_account_info(),
        },
    ))?;

    emit!(ContributionReceived {
        presale_id: presale.id,
        contributor: contributor_key,
        amount,
        total_contribution: position.contributed,
        total_raised: presale.total_raised,
        is_first_contribution: is_first,
        contributors_count: presale.contributors_count,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Presale {}: {} contributed {}, raised {}",
        presale.id,
        contributor_key,
        amount,
        presale.total_raised
    );

    Ok(())
}
