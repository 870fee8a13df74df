use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{
    create_metadata_accounts_v3,
    CreateMetadataAccountsV3,
    Metadata,
};
use anchor_spl::token::{self, Mint, Token, TokenAccount};
use mpl_token_metadata::types::DataV2;

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::TokenDeployed;
use crate::state::{CreatorIndexEntry, CreatorStats, PlatformConfig, TokenRecord};
use crate::utils::guard::DeployLock;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct DeployTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub total_supply: u64,
}

#[derive(Accounts)]
#[instruction(params: DeployTokenParams)]
pub struct DeployToken<'info> {
    #[account(mut)]
    pub deployer: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Box<Account<'info, PlatformConfig>>,

    /// Global registry entry, salted with the deployment counter
    #[account(
        init,
        payer = deployer,
        space = TokenRecord::SIZE,
        seeds = [TOKEN_RECORD_SEED, &platform_config.token_count.to_le_bytes()],
        bump,
    )]
    pub token_record: Box<Account<'info, TokenRecord>>,

    #[account(
        init_if_needed,
        payer = deployer,
        space = CreatorStats::SIZE,
        seeds = [CREATOR_TOKEN_SEED, deployer.key().as_ref()],
        bump,
    )]
    pub creator_stats: Box<Account<'info, CreatorStats>>,

    /// Per-creator enumeration entry for this deployment
    #[account(
        init,
        payer = deployer,
        space = CreatorIndexEntry::SIZE,
        seeds = [
            CREATOR_TOKEN_SEED,
            deployer.key().as_ref(),
            &creator_stats.token_count.to_le_bytes(),
        ],
        bump,
    )]
    pub creator_index_entry: Box<Account<'info, CreatorIndexEntry>>,

    /// The cloned template: a fresh mint whose authority is the record PDA
    #[account(
        init,
        payer = deployer,
        seeds = [TOKEN_MINT_SEED, token_record.key().as_ref()],
        bump,
        mint::decimals = params.decimals,
        mint::authority = token_record.key(),
        mint::freeze_authority = token_record.key(),
    )]
    pub token_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = deployer,
        associated_token::mint = token_mint,
        associated_token::authority = deployer,
    )]
    pub deployer_token_account: Account<'info, TokenAccount>,

    /// Token metadata account
    /// CHECK: Validated by Metaplex program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            token_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn deploy_token(ctx: Context<DeployToken>, params: DeployTokenParams) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;
    let clock = Clock::get()?;

    config.require_not_paused()?;
    let deploy_lock = DeployLock::acquire(&mut config.deploy_guard)?;

    require!(params.total_supply > 0, TokenpadError::InvalidAmount);

    let id = PlatformConfig::next_id(&mut config.token_count)?;
    let deployer_index = ctx.accounts.creator_stats.next_token_index()?;

    let record = &mut ctx.accounts.token_record;
    record.id = id;
    record.deployer = ctx.accounts.deployer.key();
    record.mint = ctx.accounts.token_mint.key();
    record.deployed_at_slot = clock.slot;
    record.deployer_index = deployer_index;
    record.bump = ctx.bumps.token_record;

    let creator_stats = &mut ctx.accounts.creator_stats;
    if creator_stats.creator == Pubkey::default() {
        creator_stats.creator = ctx.accounts.deployer.key();
        creator_stats.bump = ctx.bumps.creator_stats;
    }

    let index_entry = &mut ctx.accounts.creator_index_entry;
    index_entry.creator = ctx.accounts.deployer.key();
    index_entry.index = deployer_index;
    index_entry.global_id = id;
    index_entry.bump = ctx.bumps.creator_index_entry;

    // Phase two: the freshly cloned mint is configured through the record PDA
    let record_key = ctx.accounts.token_record.key();
    let id_bytes = id.to_le_bytes();
    let seeds = &[
        TOKEN_RECORD_SEED,
        id_bytes.as_ref(),
        &[ctx.accounts.token_record.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.deployer_token_account.to_account_info(),
                authority: ctx.accounts.token_record.to_account_info(),
            },
            signer_seeds,
        ),
        params.total_supply,
    )?;

    let metadata_accounts = CreateMetadataAccountsV3 {
        metadata: ctx.accounts.metadata.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        mint_authority: ctx.accounts.token_record.to_account_info(),
        payer: ctx.accounts.deployer.to_account_info(),
        update_authority: ctx.accounts.token_record.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        rent: ctx.accounts.rent.to_account_info(),
    };

    let data = DataV2 {
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        uri: params.uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            metadata_accounts,
            signer_seeds,
        ),
        data,
        false, // is_mutable
        true,  // update_authority_is_signer
        None,  // collection_details
    )?;

    // Fixed supply: revoke the mint authority
    token::set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::SetAuthority {
                current_authority: ctx.accounts.token_record.to_account_info(),
                account_or_mint: ctx.accounts.token_mint.to_account_info(),
            },
            signer_seeds,
        ),
        token::spl_token::instruction::AuthorityType::MintTokens,
        None,
    )?;

    deploy_lock.release(&mut ctx.accounts.platform_config.deploy_guard);

    emit!(TokenDeployed {
        token_id: id,
        deployer: ctx.accounts.deployer.key(),
        mint: ctx.accounts.token_mint.key(),
        name: params.name,
        symbol: params.symbol,
        total_supply: params.total_supply,
        deployed_at_slot: clock.slot,
        timestamp: clock.unix_timestamp,
    });

    msg!("Token {} deployed at record {}", id, record_key);

    Ok(())
}
