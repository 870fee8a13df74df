#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("292BDMiVbjjDYdgFFdnmuDogB3PyWMdP1vPULqgx7S9S");

#[program]
pub mod tokenpad {
    use super::*;

    // ===== Platform =====

    /// Initialize global platform configuration
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        params: InitializeConfigParams,
    ) -> Result<()> {
        instructions::initialize_config(ctx, params)
    }

    /// Update global platform configuration (admin only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        params: UpdateConfigParams,
    ) -> Result<()> {
        instructions::update_config(ctx, params)
    }

    // ===== Airdrop =====

    /// Create a Merkle-gated airdrop campaign
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        total_amount: u64,
        merkle_root: [u8; 32],
        expiry_slot: u64,
    ) -> Result<()> {
        instructions::create_airdrop(ctx, total_amount, merkle_root, expiry_slot)
    }

    /// Claim an airdrop allocation with a Merkle proof
    pub fn claim_airdrop(
        ctx: Context<ClaimAirdrop>,
        amount: u64,
        proof: Vec<u8>,
    ) -> Result<()> {
        instructions::claim_airdrop(ctx, amount, proof)
    }

    /// Check a Merkle proof without claiming
    pub fn verify_claim(
        ctx: Context<VerifyClaim>,
        claimer: Pubkey,
        amount: u64,
        proof: Vec<u8>,
    ) -> Result<bool> {
        instructions::verify_claim(ctx, claimer, amount, proof)
    }

    /// Close a campaign early and recover the unclaimed pool (creator only)
    pub fn cancel_airdrop(ctx: Context<CloseAirdrop>) -> Result<()> {
        instructions::cancel_airdrop(ctx)
    }

    /// Recover the unclaimed pool after expiry (creator only)
    pub fn recover_expired(ctx: Context<CloseAirdrop>) -> Result<()> {
        instructions::recover_expired(ctx)
    }

    // ===== Token Lock =====

    /// Lock tokens until an unlock slot (platform fee applies)
    pub fn lock_tokens(
        ctx: Context<LockTokens>,
        amount: u64,
        unlock_slot: u64,
    ) -> Result<()> {
        instructions::lock_tokens(ctx, amount, unlock_slot)
    }

    /// Withdraw the full remaining balance after unlock
    pub fn unlock(ctx: Context<UnlockTokens>) -> Result<()> {
        instructions::unlock(ctx)
    }

    /// Withdraw part of the remaining balance after unlock
    pub fn partial_unlock(ctx: Context<UnlockTokens>, amount: u64) -> Result<()> {
        instructions::partial_unlock(ctx, amount)
    }

    /// Push the unlock slot further into the future
    pub fn extend_lock(ctx: Context<ExtendLock>, new_unlock_slot: u64) -> Result<()> {
        instructions::extend_lock(ctx, new_unlock_slot)
    }

    /// Hand a lock to a new owner
    pub fn transfer_lock_ownership(
        ctx: Context<TransferLockOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_lock_ownership(ctx, new_owner)
    }

    // ===== Vesting =====

    /// Create a vesting schedule (TGE + cliff + linear release)
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        params: CreateScheduleParams,
    ) -> Result<()> {
        instructions::create_schedule(ctx, params)
    }

    /// Claim the vested portion of a schedule
    pub fn claim_vested(ctx: Context<ClaimVested>) -> Result<()> {
        instructions::claim_vested(ctx)
    }

    /// Revoke a revocable schedule, freezing it at vested-so-far
    pub fn revoke_schedule(ctx: Context<RevokeSchedule>) -> Result<()> {
        instructions::revoke_schedule(ctx)
    }

    // ===== Token Factory =====

    /// Deploy a fixed-supply token with on-chain metadata
    pub fn deploy_token(
        ctx: Context<DeployToken>,
        params: DeployTokenParams,
    ) -> Result<()> {
        instructions::deploy_token(ctx, params)
    }

    // ===== Presale =====

    /// Deploy and fund a presale instance (phase one)
    pub fn deploy_presale(ctx: Context<DeployPresale>, token_amount: u64) -> Result<()> {
        instructions::deploy_presale(ctx, token_amount)
    }

    /// Set the sale parameters of a funded instance (phase two)
    pub fn initialize_presale(
        ctx: Context<InitializePresale>,
        params: InitializePresaleParams,
    ) -> Result<()> {
        instructions::initialize_presale(ctx, params)
    }

    /// Abort a deployment that never reached initialization
    pub fn abort_presale_deployment(ctx: Context<AbortPresaleDeployment>) -> Result<()> {
        instructions::abort_presale_deployment(ctx)
    }

    /// Configure claim vesting before the sale opens
    pub fn set_presale_vesting(
        ctx: Context<ConfigurePresale>,
        params: PresaleVestingParams,
    ) -> Result<()> {
        instructions::set_presale_vesting(ctx, params)
    }

    /// Throttle distinct new contributors per slot (0 = unlimited)
    pub fn set_anti_bot(
        ctx: Context<ConfigurePresale>,
        max_entrants_per_slot: u64,
    ) -> Result<()> {
        instructions::set_anti_bot(ctx, max_entrants_per_slot)
    }

    /// Toggle whitelist gating before the sale opens
    pub fn set_whitelist_enabled(
        ctx: Context<ConfigurePresale>,
        enabled: bool,
    ) -> Result<()> {
        instructions::set_whitelist_enabled(ctx, enabled)
    }

    /// Pause or resume contributions
    pub fn set_presale_paused(ctx: Context<ConfigurePresale>, paused: bool) -> Result<()> {
        instructions::set_presale_paused(ctx, paused)
    }

    /// Batch-add whitelist entries; returns the number actually added
    pub fn add_to_whitelist(
        ctx: Context<UpdateWhitelist>,
        addresses: Vec<Pubkey>,
    ) -> Result<u32> {
        instructions::add_to_whitelist(ctx, addresses)
    }

    /// Contribute quote (SOL) to a live sale
    pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
        instructions::contribute(ctx, amount)
    }

    /// Claim the token allocation of a successful sale
    pub fn claim_presale_tokens(ctx: Context<ClaimPresale>) -> Result<()> {
        instructions::claim_presale_tokens(ctx)
    }

    /// Settle a successful sale (creator only)
    pub fn finalize_presale(ctx: Context<FinalizePresale>) -> Result<()> {
        instructions::finalize_presale(ctx)
    }

    /// Wind down a sale that missed its soft cap (creator only)
    pub fn refund_presale(ctx: Context<SettlePresaleTokens>) -> Result<()> {
        instructions::refund_presale(ctx)
    }

    /// Cancel and pull remaining tokens before finalization (creator only)
    pub fn emergency_withdraw(ctx: Context<SettlePresaleTokens>) -> Result<()> {
        instructions::emergency_withdraw(ctx)
    }

    /// Withdraw a contribution after a failed or cancelled sale
    pub fn refund_contribution(ctx: Context<RefundContribution>) -> Result<()> {
        instructions::refund_contribution(ctx)
    }
}
