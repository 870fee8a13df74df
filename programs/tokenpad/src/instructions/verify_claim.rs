use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::Airdrop;
use crate::utils::merkle::{claim_leaf, verify_proof};

/// Read-only proof check for off-chain consumers. Returns false on malformed
/// input instead of aborting.
#[derive(Accounts)]
pub struct VerifyClaim<'info> {
    #[account(
        seeds = [AIRDROP_SEED, &airdrop.id.to_le_bytes()],
        bump = airdrop.bump,
    )]
    pub airdrop: Box<Account<'info, Airdrop>>,
}

pub fn verify_claim(
    ctx: Context<VerifyClaim>,
    claimer: Pubkey,
    amount: u64,
    proof: Vec<u8>,
) -> Result<bool> {
    let airdrop = &ctx.accounts.airdrop;
    let leaf = claim_leaf(&claimer, amount);
    Ok(verify_proof(&leaf, &proof, &airdrop.merkle_root))
}
