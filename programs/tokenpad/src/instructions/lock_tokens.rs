use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::TokensLocked;
use crate::state::{OwnerLockStats, PlatformConfig, TokenLock};
use crate::utils::math::bps_amount;

#[derive(Accounts)]
pub struct LockTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,

    #[account(
        init,
        payer = owner,
        space = TokenLock::SIZE,
        seeds = [LOCK_SEED, &platform_config.lock_count.to_le_bytes()],
        bump,
    )]
    pub lock: Box<Account<'info, TokenLock>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = OwnerLockStats::SIZE,
        seeds = [LOCK_OWNER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub owner_stats: Box<Account<'info, OwnerLockStats>>,

    /// Custody authority for all program vaults
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        seeds = [TOKEN_VAULT, lock.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Fee destination owned by the platform wallet
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = platform_config.platform_wallet,
    )]
    pub platform_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn lock_tokens(ctx: Context<LockTokens>, amount: u64, unlock_slot: u64) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;
    let lock = &mut ctx.accounts.lock;
    let clock = Clock::get()?;

    config.require_not_paused()?;
    require!(amount > 0, TokenpadError::InvalidAmount);
    require!(unlock_slot > clock.slot, TokenpadError::InvalidUnlockHeight);

    // Fee comes off at lock time; the vault only ever holds the net amount
    let fee_amount = bps_amount(amount, config.lock_fee_bps)?;
    let net_amount = amount
        .checked_sub(fee_amount)
        .ok_or(TokenpadError::MathOverflow)?;
    require!(net_amount > 0, TokenpadError::InvalidAmount);

    let id = PlatformConfig::next_id(&mut config.lock_count)?;

    lock.id = id;
    lock.owner = ctx.accounts.owner.key();
    lock.token_mint = ctx.accounts.token_mint.key();
    lock.token_vault = ctx.accounts.token_vault.key();
    lock.remaining_amount = net_amount;
    lock.withdrawn_total = 0;
    lock.unlock_slot = unlock_slot;
    lock.bump = ctx.bumps.lock;

    let owner_stats = &mut ctx.accounts.owner_stats;
    if owner_stats.owner == Pubkey::default() {
        owner_stats.owner = ctx.accounts.owner.key();
        owner_stats.bump = ctx.bumps.owner_stats;
    }
    owner_stats.increment()?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        net_amount,
    )?;

    if fee_amount > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    to: ctx.accounts.platform_token_account.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            fee_amount,
        )?;
    }

    emit!(TokensLocked {
        lock_id: id,
        owner: lock.owner,
        token_mint: lock.token_mint,
        amount,
        fee_amount,
        net_amount,
        unlock_slot,
        timestamp: clock.unix_timestamp,
    });

    msg!("Lock {} created: {} net, {} fee", id, net_amount, fee_amount);

    Ok(())
}
