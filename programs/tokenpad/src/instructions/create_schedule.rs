use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::ScheduleCreated;
use crate::state::{PlatformConfig, VestingSchedule};
use crate::utils::math::require_bps;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateScheduleParams {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_slot: u64,
    pub cliff_slots: u64,
    pub vesting_slots: u64,
    pub tge_bps: u64,
    pub revocable: bool,
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
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
        space = VestingSchedule::SIZE,
        seeds = [VESTING_SEED, &platform_config.schedule_count.to_le_bytes()],
        bump,
    )]
    pub schedule: Box<Account<'info, VestingSchedule>>,

    /// Custody authority for all program vaults
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, schedule.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_schedule(ctx: Context<CreateSchedule>, params: CreateScheduleParams) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;
    let schedule = &mut ctx.accounts.schedule;
    let clock = Clock::get()?;

    config.require_not_paused()?;
    require!(params.beneficiary != Pubkey::default(), TokenpadError::InvalidAddress);
    require!(params.total_amount > 0, TokenpadError::InvalidAmount);
    // reject a zero duration here so the claim-time division can never see it
    require!(params.vesting_slots > 0, TokenpadError::ZeroVestingDuration);
    require_bps(params.tge_bps)?;

    let id = PlatformConfig::next_id(&mut config.schedule_count)?;

    schedule.id = id;
    schedule.beneficiary = params.beneficiary;
    schedule.creator = ctx.accounts.creator.key();
    schedule.token_mint = ctx.accounts.token_mint.key();
    schedule.token_vault = ctx.accounts.token_vault.key();
    schedule.total_amount = params.total_amount;
    schedule.claimed_amount = 0;
    schedule.start_slot = params.start_slot;
    schedule.cliff_slots = params.cliff_slots;
    schedule.vesting_slots = params.vesting_slots;
    schedule.tge_bps = params.tge_bps;
    schedule.revocable = params.revocable;
    schedule.revoked = false;
    schedule.bump = ctx.bumps.schedule;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        params.total_amount,
    )?;

    emit!(ScheduleCreated {
        schedule_id: id,
        creator: schedule.creator,
        beneficiary: schedule.beneficiary,
        token_mint: schedule.token_mint,
        total_amount: schedule.total_amount,
        start_slot: schedule.start_slot,
        cliff_slots: schedule.cliff_slots,
        vesting_slots: schedule.vesting_slots,
        tge_bps: schedule.tge_bps,
        revocable: schedule.revocable,
        timestamp: clock.unix_timestamp,
    });

    msg!("Schedule {} created for {}", id, schedule.beneficiary);

    Ok(())
}
