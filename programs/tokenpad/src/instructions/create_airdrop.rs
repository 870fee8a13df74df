use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::AirdropCreated;
use crate::state::{Airdrop, PlatformConfig};

#[derive(Accounts)]
pub struct CreateAirdrop<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,

    #[account(
        init,
        payer = creator,
        space = Airdrop::SIZE,
        seeds = [AIRDROP_SEED, &platform_config.airdrop_count.to_le_bytes()],
        bump,
    )]
    pub airdrop: Box<Account<'info, Airdrop>>,

    /// Custody authority for all program vaults
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    /// Vault holding the undistributed pool
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, airdrop.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Creator's token account funding the pool
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_airdrop(
    ctx: Context<CreateAirdrop>,
    total_amount: u64,
    merkle_root: [u8; 32],
    expiry_slot: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;
    let airdrop = &mut ctx.accounts.airdrop;
    let clock = Clock::get()?;

    config.require_not_paused()?;
    require!(total_amount > 0, TokenpadError::InvalidAmount);
    require!(merkle_root != [0u8; 32], TokenpadError::InvalidMerkleRoot);
    require!(expiry_slot > clock.slot, TokenpadError::InvalidExpiry);

    let id = PlatformConfig::next_id(&mut config.airdrop_count)?;

    airdrop.id = id;
    airdrop.creator = ctx.accounts.creator.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.total_amount = total_amount;
    airdrop.claimed_amount = 0;
    airdrop.merkle_root = merkle_root;
    airdrop.expiry_slot = expiry_slot;
    airdrop.closed = false;
    airdrop.bump = ctx.bumps.airdrop;

    // Pull the full pool into custody
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        total_amount,
    )?;

    emit!(AirdropCreated {
        airdrop_id: id,
        creator: airdrop.creator,
        token_mint: airdrop.token_mint,
        total_amount,
        merkle_root,
        expiry_slot,
        timestamp: clock.unix_timestamp,
    });

    msg!("Airdrop {} created with pool {}", id, total_amount);

    Ok(())
}
