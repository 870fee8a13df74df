use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::AirdropClosed;
use crate::state::Airdrop;

#[derive(Accounts)]
pub struct CloseAirdrop<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [AIRDROP_SEED, &airdrop.id.to_le_bytes()],
        bump = airdrop.bump,
        constraint = airdrop.creator == creator.key() @ TokenpadError::NotCreator,
    )]
    pub airdrop: Box<Account<'info, Airdrop>>,

    /// CHECK: custody authority PDA
    #[account(address = VAULT_ID)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = airdrop.token_vault @ TokenpadError::InvalidAddress,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

fn refund_remainder(ctx: &Context<CloseAirdrop>, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
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
        amount,
    )
}

/// Cancel a still-live campaign and refund the unclaimed remainder. Once
/// the campaign has expired the remainder goes through `recover_expired`.
pub fn cancel_airdrop(ctx: Context<CloseAirdrop>) -> Result<()> {
    let clock = Clock::get()?;
    let refund = ctx.accounts.airdrop.cancel_active(clock.slot)?;
    refund_remainder(&ctx, refund)?;

    let airdrop = &ctx.accounts.airdrop;
    emit!(AirdropClosed {
        airdrop_id: airdrop.id,
        creator: airdrop.creator,
        refunded_amount: refund,
        expired: false,
        timestamp: clock.unix_timestamp,
    });

    msg!("Airdrop {} cancelled, {} refunded", airdrop.id, refund);

    Ok(())
}

/// Recover the remainder of an expired campaign. Reuses the closed flag, so
/// recovering twice fails inside `recover_remainder`.
pub fn recover_expired(ctx: Context<CloseAirdrop>) -> Result<()> {
    let clock = Clock::get()?;
    let refund = ctx.accounts.airdrop.recover_remainder(clock.slot)?;
    refund_remainder(&ctx, refund)?;

    let airdrop = &ctx.accounts.airdrop;
    emit!(AirdropClosed {
        airdrop_id: airdrop.id,
        creator: airdrop.creator,
        refunded_amount: refund,
        expired: true,
        timestamp: clock.unix_timestamp,
    });

    msg!("Airdrop {} expired remainder recovered: {}", airdrop.id, refund);

    Ok(())
}
