use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::ContributionRefunded;
use crate::state::{ContributorPosition, PresaleState, PresaleStatus};

#[derive(Accounts)]
pub struct RefundContribution<'info> {
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
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
        address = presale.quote_vault @ TokenpadError::InvalidAddress,
    )]
    pub quote_vault: Account<'info, TokenAccount>,

    /// Contributor's WSOL account receiving the refund
    #[account(
        mut,
        token::mint = anchor_spl::token::spl_token::native_mint::ID,
        token::authority = contributor,
    )]
    pub contributor_quote_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Contributor-side withdrawal of the quote after a failed or cancelled
/// sale. One shot per position, and closed to anyone who already took
/// tokens out of it.
pub fn refund_contribution(ctx: Context<RefundContribution>) -> Result<()> {
    let presale = &ctx.accounts.presale;
    let position = &mut ctx.accounts.contributor_position;
    let clock = Clock::get()?;

    match presale.status {
        PresaleStatus::Refunded | PresaleStatus::Cancelled => {}
        _ => return err!(TokenpadError::InvalidStatus),
    }
    position.require_refundable()?;

    let amount = position.contributed;
    position.refunded = true;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.quote_vault.to_account_info(),
                to: ctx.accounts.contributor_quote_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(ContributionRefunded {
        presale_id: presale.id,
        contributor: position.contributor,
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Presale {}: refunded {} to {}", presale.id, amount, position.contributor);

    Ok(())
}
