use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::{VAULT_BUMP, VAULT_ID};
use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::AirdropClaimed;
use crate::state::{Airdrop, ClaimRecord};
use crate::utils::merkle::{claim_leaf, require_valid_proof};

#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        mut,
        seeds = [AIRDROP_SEED, &airdrop.id.to_le_bytes()],
        bump = airdrop.bump,
    )]
    pub airdrop: Box<Account<'info, Airdrop>>,

    /// Write-once claim marker; `init` makes a second claim fail here
    #[account(
        init,
        payer = claimer,
        space = ClaimRecord::SIZE,
        seeds = [CLAIM_RECORD_SEED, airdrop.key().as_ref(), claimer.key().as_ref()],
        bump,
    )]
    pub claim_record: Box<Account<'info, ClaimRecord>>,

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
        token::authority = claimer,
    )]
    pub claimer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn claim_airdrop(ctx: Context<ClaimAirdrop>, amount: u64, proof: Vec<u8>) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let record = &mut ctx.accounts.claim_record;
    let claimer = ctx.accounts.claimer.key();
    let clock = Clock::get()?;

    let leaf = claim_leaf(&claimer, amount);
    require_valid_proof(&leaf, &proof, &airdrop.merkle_root)?;

    // All state mutation happens before the outbound transfer
    airdrop.record_claim(amount, clock.slot)?;

    record.airdrop = airdrop.key();
    record.claimer = claimer;
    record.amount = amount;
    record.claimed_at_slot = clock.slot;
    record.bump = ctx.bumps.claim_record;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.claimer_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(AirdropClaimed {
        airdrop_id: airdrop.id,
        claimer,
        amount,
        total_claimed: airdrop.claimed_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
