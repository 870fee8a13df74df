use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::PresaleTokensClaimed;
use crate::state::{ContributorPosition, PresaleState, PresaleStatus};

#[derive(Accounts)]
pub struct ClaimPresale<'info> {
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
        mut,
        seeds = [PRESALE_SEED, &presale.id.to_le_bytes()],
        bump = presale.bump,
    )]
    pub presale: Box<Account<'info, PresaleState>>,

    #[account(
        mut,
        seeds = [CONTRIBUTOR_SEED, presale.key().as_ref(), contributor.key().as_ref()],
        bump = contributor_position.bump,
        constraint = contributor_position.contributor == contributor.key()
            @ TokenpadError::Unauthorized,
    )]
    pub contributor_position: Box<Account<'info, ContributorPosition>>,

    /// CHECK: custody authority PDA
    #[account(address = VAULT_ID)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = presale.token_vault @ TokenpadError::InvalidAddress,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = presale.token_mint,
        token::authority = contributor,
    )]
    pub contributor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Claim the (possibly vested) token allocation of a successful sale.
/// Available once the window closes with the soft cap met; finalization is
/// not a prerequisite for contributors to get their tokens.
pub fn claim_presale_tokens(ctx: Context<ClaimPresale>) -> Result<()> {
    let presale = &ctx.accounts.presale;
    let position = &mut ctx.accounts.contributor_position;
    let clock = Clock::get()?;

    match presale.status {
        PresaleStatus::Initialized | PresaleStatus::Finalized => {}
        _ => return err!(TokenpadError::InvalidStatus),
    }
    presale.require_ended(clock.slot)?;
    require!(presale.soft_cap_met(), TokenpadError::SoftCapNotReached);
    require!(!position.refunded, TokenpadError::AlreadyRefunded);

    let amount = presale.claimable_for(
        position.contributed,
        position.claimed_tokens,
        clock.slot,
    )?;
    require!(amount > 0, TokenpadError::NothingToClaim);

    // Bookkeeping first, transfer second
    position.claimed_tokens = position
        .claimed_tokens
        .checked_add(amount)
        .ok_or(TokenpadError::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.contributor_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(PresaleTokensClaimed {
        presale_id: presale.id,
        contributor: position.contributor,
        amount,
        total_claimed: position.claimed_tokens,
        allocation: presale.allocation_for(position.contributed)?,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
