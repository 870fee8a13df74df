use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TokenpadError;
use crate::events::{LockExtended, LockOwnershipTransferred};
use crate::state::{OwnerLockStats, TokenLock};

#[derive(Accounts)]
pub struct ExtendLock<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOCK_SEED, &lock.id.to_le_bytes()],
        bump = lock.bump,
        constraint = lock.owner == owner.key() @ TokenpadError::NotLockOwner,
    )]
    pub lock: Box<Account<'info, TokenLock>>,
}

pub fn extend_lock(ctx: Context<ExtendLock>, new_unlock_slot: u64) -> Result<()> {
    let lock = &mut ctx.accounts.lock;
    let clock = Clock::get()?;

    let previous_unlock_slot = lock.unlock_slot;
    lock.extend(new_unlock_slot)?;

    emit!(LockExtended {
        lock_id: lock.id,
        owner: lock.owner,
        previous_unlock_slot,
        new_unlock_slot,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(new_owner: Pubkey)]
pub struct TransferLockOwnership<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOCK_SEED, &lock.id.to_le_bytes()],
        bump = lock.bump,
        constraint = lock.owner == owner.key() @ TokenpadError::NotLockOwner,
    )]
    pub lock: Box<Account<'info, TokenLock>>,

    #[account(
        mut,
        seeds = [LOCK_OWNER_SEED, owner.key().as_ref()],
        bump = owner_stats.bump,
    )]
    pub owner_stats: Box<Account<'info, OwnerLockStats>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = OwnerLockStats::SIZE,
        seeds = [LOCK_OWNER_SEED, new_owner.as_ref()],
        bump,
    )]
    pub new_owner_stats: Box<Account<'info, OwnerLockStats>>,

    pub system_program: Program<'info, System>,
}

pub fn transfer_lock_ownership(
    ctx: Context<TransferLockOwnership>,
    new_owner: Pubkey,
) -> Result<()> {
    let lock = &mut ctx.accounts.lock;
    let clock = Clock::get()?;

    require!(new_owner != Pubkey::default(), TokenpadError::InvalidAddress);
    require!(new_owner != lock.owner, TokenpadError::InvalidAddress);
    require!(lock.remaining_amount > 0, TokenpadError::LockEmpty);

    // Both owners' enumeration counters move in the same call
    ctx.accounts.owner_stats.decrement()?;

    let new_owner_stats = &mut ctx.accounts.new_owner_stats;
    if new_owner_stats.owner == Pubkey::default() {
        new_owner_stats.owner = new_owner;
        new_owner_stats.bump = ctx.bumps.new_owner_stats;
    }
    new_owner_stats.increment()?;

    let previous_owner = lock.owner;
    lock.owner = new_owner;

    emit!(LockOwnershipTransferred {
        lock_id: lock.id,
        previous_owner,
        new_owner,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
