use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::PresaleCancelled;
use crate::state::{PresaleState, PresaleStatus};

#[derive(Accounts)]
pub struct AbortPresaleDeployment<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PRESALE_SEED, &presale.id.to_le_bytes()],
        bump = presale.bump,
        constraint = presale.creator == creator.key() @ TokenpadError::NotCreator,
    )]
    pub presale: Box<Account<'info, PresaleState>>,

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
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Backs out of a deployment that never reached initialization, returning
/// any custodied tokens. Once the instance is `Initialized` the only exits
/// are finalize, refund, or emergency withdrawal.
pub fn abort_presale_deployment(ctx: Context<AbortPresaleDeployment>) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    match presale.status {
        PresaleStatus::Deployed | PresaleStatus::Funded => {}
        _ => return err!(TokenpadError::InvalidStatus),
    }

    let returned = presale.total_tokens;
    presale.total_tokens = 0;
    presale.status = PresaleStatus::Cancelled;

    if returned > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.token_vault.to_account_info(),
                    to: ctx.accounts.creator_token_account.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            returned,
        )?;
    }

    emit!(PresaleCancelled {
        presale_id: presale.id,
        creator: presale.creator,
        token_amount: returned,
        timestamp: clock.unix_timestamp,
    });

    msg!("Presale {} deployment aborted", presale.id);

    Ok(())
}
