use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::PresaleDeployed;
use crate::state::{
    CreatorIndexEntry, CreatorStats, PlatformConfig, PresaleRecord, PresaleState, PresaleStatus,
    PresaleTerms, PresaleVesting,
};
use crate::utils::guard::DeployLock;

#[derive(Accounts)]
pub struct DeployPresale<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,

    /// The cloned instance, salted with the deployment counter
    #[account(
        init,
        payer = creator,
        space = PresaleState::SIZE,
        seeds = [PRESALE_SEED, &platform_config.presale_count.to_le_bytes()],
        bump,
    )]
    pub presale: Box<Account<'info, PresaleState>>,

    /// Global registry entry for this deployment
    #[account(
        init,
        payer = creator,
        space = PresaleRecord::SIZE,
        seeds = [PRESALE_RECORD_SEED, &platform_config.presale_count.to_le_bytes()],
        bump,
    )]
    pub presale_record: Box<Account<'info, PresaleRecord>>,

    #[account(
        init_if_needed,
        payer = creator,
        space = CreatorStats::SIZE,
        seeds = [CREATOR_PRESALE_SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_stats: Box<Account<'info, CreatorStats>>,

    /// Per-creator enumeration entry for this deployment
    #[account(
        init,
        payer = creator,
        space = CreatorIndexEntry::SIZE,
        seeds = [
            CREATOR_PRESALE_SEED,
            creator.key().as_ref(),
            &creator_stats.presale_count.to_le_bytes(),
        ],
        bump,
    )]
    pub creator_index_entry: Box<Account<'info, CreatorIndexEntry>>,

    /// Custody authority for all program vaults
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    /// Sale token custody for this instance
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, presale.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// WSOL mint; the quote vault wraps the raised SOL
    #[account(address = anchor_spl::token::spl_token::native_mint::ID)]
    pub wsol_mint: Account<'info, Mint>,

    /// Quote custody (raised SOL wrapped as WSOL) for this instance
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, presale.key().as_ref(), wsol_mint.key().as_ref()],
        bump,
        token::mint = wsol_mint,
        token::authority = vault_authority,
    )]
    pub quote_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Phase one of clone-and-initialize: create the instance and move the sale
/// tokens into its custody. The instance is `Funded` but knows nothing of its
/// own accounting parameters until `initialize_presale`.
pub fn deploy_presale(ctx: Context<DeployPresale>, token_amount: u64) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;
    let clock = Clock::get()?;

    config.require_not_paused()?;
    let deploy_lock = DeployLock::acquire(&mut config.deploy_guard)?;

    require!(token_amount > 0, TokenpadError::InvalidAmount);

    let id = PlatformConfig::next_id(&mut config.presale_count)?;
    let fee_bps = config.presale_fee_bps;
    let creator_index = ctx.accounts.creator_stats.next_presale_index()?;

    let presale = &mut ctx.accounts.presale;
    presale.id = id;
    presale.creator = ctx.accounts.creator.key();
    presale.token_mint = ctx.accounts.token_mint.key();
    presale.token_vault = ctx.accounts.token_vault.key();
    presale.quote_vault = ctx.accounts.quote_vault.key();
    presale.status = PresaleStatus::Deployed;
    presale.paused = false;
    presale.whitelist_enabled = false;
    presale.terms = PresaleTerms {
        fee_bps,
        ..PresaleTerms::default()
    };
    presale.vesting = PresaleVesting::default();
    presale.total_raised = 0;
    presale.total_tokens = 0;
    presale.tokens_sold = 0;
    presale.max_entrants_per_slot = 0;
    presale.entrant_slot = 0;
    presale.entrant_count = 0;
    presale.contributors_count = 0;
    presale.bump = ctx.bumps.presale;
    presale.whitelist = Vec::new();

    let record = &mut ctx.accounts.presale_record;
    record.id = id;
    record.creator = ctx.accounts.creator.key();
    record.presale = presale.key();
    record.deployed_at_slot = clock.slot;
    record.creator_index = creator_index;
    record.bump = ctx.bumps.presale_record;

    let creator_stats = &mut ctx.accounts.creator_stats;
    if creator_stats.creator == Pubkey::default() {
        creator_stats.creator = ctx.accounts.creator.key();
        creator_stats.bump = ctx.bumps.creator_stats;
    }

    let index_entry = &mut ctx.accounts.creator_index_entry;
    index_entry.creator = ctx.accounts.creator.key();
    index_entry.index = creator_index;
    index_entry.global_id = id;
    index_entry.bump = ctx.bumps.creator_index_entry;

    // Fund the clone before it is told its parameters
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        token_amount,
    )?;

    let presale = &mut ctx.accounts.presale;
    presale.total_tokens = token_amount;
    presale.status = PresaleStatus::Funded;

    deploy_lock.release(&mut ctx.accounts.platform_config.deploy_guard);

    emit!(PresaleDeployed {
        presale_id: id,
        presale: ctx.accounts.presale.key(),
        creator: ctx.accounts.creator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_amount,
        deployed_at_slot: clock.slot,
        timestamp: clock.unix_timestamp,
    });

    msg!("Presale {} deployed and funded with {}", id, token_amount);

    Ok(())
}
