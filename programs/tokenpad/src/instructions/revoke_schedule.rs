use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::ScheduleRevoked;
use crate::state::VestingSchedule;

#[derive(Accounts)]
pub struct RevokeSchedule<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [VESTING_SEED, &schedule.id.to_le_bytes()],
        bump = schedule.bump,
        constraint = schedule.creator == creator.key() @ TokenpadError::NotCreator,
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
        token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn revoke_schedule(ctx: Context<RevokeSchedule>) -> Result<()> {
    let schedule = &mut ctx.accounts.schedule;
    let clock = Clock::get()?;

    // Freezes the total at vested-so-far; the beneficiary keeps claiming
    // up to the frozen total, the rest goes back immediately
    let returned = schedule.revoke(clock.slot)?;

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

    emit!(ScheduleRevoked {
        schedule_id: schedule.id,
        creator: schedule.creator,
        vested_total: schedule.total_amount,
        returned_amount: returned,
        timestamp: clock.unix_timestamp,
    });

    msg!("Schedule {} revoked, {} returned", schedule.id, returned);

    Ok(())
}
