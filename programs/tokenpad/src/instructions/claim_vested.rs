use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::VestedClaimed;
use crate::state::VestingSchedule;

#[derive(Accounts)]
pub struct ClaimVested<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [VESTING_SEED, &schedule.id.to_le_bytes()],
        bump = schedule.bump,
        constraint = schedule.beneficiary == beneficiary.key() @ TokenpadError::NotBeneficiary,
    )]
    pub schedule: Box<Account<'info, VestingSchedule>>,

    /// CHECK: custody authority PDA
    #[account(address = VAULT_ID)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = schedule.token_vault @ TokenpadError::InvalidAddress,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = schedule.token_mint,
        token::authority = beneficiary,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_vested(ctx: Context<ClaimVested>) -> Result<()> {
    let schedule = &mut ctx.accounts.schedule;
    let clock = Clock::get()?;

    // Bookkeeping first, transfer second
    let amount = schedule.record_claim(clock.slot)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(VestedClaimed {
        schedule_id: schedule.id,
        beneficiary: schedule.beneficiary,
        amount,
        total_claimed: schedule.claimed_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
