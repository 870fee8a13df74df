use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::TokensUnlocked;
use crate::state::TokenLock;

#[derive(Accounts)]
pub struct UnlockTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOCK_SEED, &lock.id.to_le_bytes()],
        bump = lock.bump,
        constraint = lock.owner == owner.key() @ TokenpadError::NotLockOwner,
    )]
    pub lock: Box<Account<'info, TokenLock>>,

    /// CHECK: custody authority PDA
    #[account(address = VAULT_ID)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = lock.token_vault @ TokenpadError::InvalidAddress,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = lock.token_mint,
        token::authority = owner,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

fn withdraw(ctx: Context<UnlockTokens>, amount: u64) -> Result<()> {
    let lock = &mut ctx.accounts.lock;
    let clock = Clock::get()?;

    lock.withdraw(amount, clock.slot)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensUnlocked {
        lock_id: lock.id,
        owner: lock.owner,
        amount,
        remaining_amount: lock.remaining_amount,
        withdrawn_total: lock.withdrawn_total,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Withdraw the entire remaining balance in one transfer.
pub fn unlock(ctx: Context<UnlockTokens>) -> Result<()> {
    let amount = ctx.accounts.lock.remaining_amount;
    withdraw(ctx, amount)
}

/// Withdraw part of the remaining balance.
pub fn partial_unlock(ctx: Context<UnlockTokens>, amount: u64) -> Result<()> {
    withdraw(ctx, amount)
}
