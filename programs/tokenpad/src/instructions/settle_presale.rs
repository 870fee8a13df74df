use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::{PresaleCancelled, PresaleFinalized, PresaleRefunded};
use crate::state::{PlatformConfig, PresaleState, PresaleStatus};
use crate::utils::math::bps_amount;

#[derive(Accounts)]
pub struct FinalizePresale<'info> {
    pub creator: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,

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
        address = presale.quote_vault @ TokenpadError::InvalidAddress,
    )]
    pub quote_vault: Account<'info, TokenAccount>,

    /// Fee destination, owned by the platform wallet
    #[account(
        mut,
        token::mint = presale.token_mint,
        token::authority = platform_config.platform_wallet,
    )]
    pub platform_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = presale.token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    /// Creator's WSOL account receiving the raise
    #[account(
        mut,
        token::mint = anchor_spl::token::spl_token::native_mint::ID,
        token::authority = creator,
    )]
    pub creator_quote_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Settle a successful sale: fix the sold amount, take the platform fee in
/// tokens, return the surplus, and hand the raise to the creator.
pub fn finalize_presale(ctx: Context<FinalizePresale>) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    presale.require_status(PresaleStatus::Initialized)?;
    presale.require_ended(clock.slot)?;
    require!(presale.soft_cap_met(), TokenpadError::SoftCapNotReached);

    let tokens_sold = presale.allocation_for(presale.total_raised)?;
    let fee_amount = bps_amount(tokens_sold, presale.terms.fee_bps)?;
    let surplus = presale
        .total_tokens
        .checked_sub(tokens_sold)
        .and_then(|rest| rest.checked_sub(fee_amount))
        .ok_or(TokenpadError::InsufficientRemaining)?;

    presale.tokens_sold = tokens_sold;
    presale.status = PresaleStatus::Finalized;

    let total_raised = presale.total_raised;
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];

    if fee_amount > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.token_vault.to_account_info(),
                    to: ctx.accounts.platform_token_account.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            fee_amount,
        )?;
    }

    if surplus > 0 {
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
            surplus,
        )?;
    }

    if total_raised > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.quote_vault.to_account_info(),
                    to: ctx.accounts.creator_quote_account.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            total_raised,
        )?;
    }

    emit!(PresaleFinalized {
        presale_id: ctx.accounts.presale.id,
        creator: ctx.accounts.presale.creator,
        total_raised,
        tokens_sold,
        fee_amount,
        surplus_amount: surplus,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Presale {} finalized: raised {}, sold {}, fee {}",
        ctx.accounts.presale.id,
        total_raised,
        tokens_sold,
        fee_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct SettlePresaleTokens<'info> {
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

/// Wind down a sale that missed its soft cap: all deposited tokens go back
/// to the creator, contributors withdraw their quote via
/// `refund_contribution`.
pub fn refund_presale(ctx: Context<SettlePresaleTokens>) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    presale.require_status(PresaleStatus::Initialized)?;
    presale.require_ended(clock.slot)?;
    require!(!presale.soft_cap_met(), TokenpadError::SoftCapReached);

    let token_amount = ctx.accounts.token_vault.amount;
    presale.status = PresaleStatus::Refunded;

    if token_amount > 0 {
        return_tokens(&ctx, token_amount)?;
    }

    emit!(PresaleRefunded {
        presale_id: ctx.accounts.presale.id,
        creator: ctx.accounts.presale.creator,
        token_amount,
        total_raised: ctx.accounts.presale.total_raised,
        timestamp: clock.unix_timestamp,
    });

    msg!("Presale {} refunded, {} tokens returned", ctx.accounts.presale.id, token_amount);

    Ok(())
}

/// Creator escape hatch: pull all remaining tokens and cancel. Contributors
/// withdraw their quote via `refund_contribution`. Unavailable once the
/// sale has been finalized.
pub fn emergency_withdraw(ctx: Context<SettlePresaleTokens>) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    let clock = Clock::get()?;

    require!(!presale.is_terminal(), TokenpadError::AlreadyFinalized);

    let token_amount = ctx.accounts.token_vault.amount;
    presale.status = PresaleStatus::Cancelled;

    if token_amount > 0 {
        return_tokens(&ctx, token_amount)?;
    }

    emit!(PresaleCancelled {
        presale_id: ctx.accounts.presale.id,
        creator: ctx.accounts.presale.creator,
        token_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Presale {} cancelled, {} tokens withdrawn", ctx.accounts.presale.id, token_amount);

    Ok(())
}

fn return_tokens(ctx: &Context<SettlePresaleTokens>, amount: u64) -> Result<()> {
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
