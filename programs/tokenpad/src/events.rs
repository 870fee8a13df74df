use anchor_lang::prelude::*;

// =============================================================================
// PLATFORM EVENTS
// =============================================================================

/// Event emitted when the platform configuration is updated
#[event]
pub struct ConfigUpdated {
    /// Admin performing the update
    pub admin: Pubkey,
    /// New platform wallet
    pub platform_wallet: Pubkey,
    /// New lock fee in basis points
    pub lock_fee_bps: u64,
    /// New presale fee in basis points
    pub presale_fee_bps: u64,
    /// Whether new deployments are paused
    pub paused: bool,
    /// Update timestamp
    pub timestamp: i64,
}

// =============================================================================
// AIRDROP EVENTS
// =============================================================================

/// Event emitted when a new airdrop campaign is created
#[event]
pub struct AirdropCreated {
    /// Sequential airdrop id
    pub airdrop_id: u64,
    /// Creator of the campaign
    pub creator: Pubkey,
    /// Token mint being distributed
    pub token_mint: Pubkey,
    /// Total pool amount
    pub total_amount: u64,
    /// Merkle root gating the claims
    pub merkle_root: [u8; 32],
    /// Slot after which the creator can recover the remainder
    pub expiry_slot: u64,
    /// Creation timestamp
    pub timestamp: i64,
}

/// Event emitted when a claimer pulls their allocation
#[event]
pub struct AirdropClaimed {
    /// Airdrop id
    pub airdrop_id: u64,
    /// Claimer address
    pub claimer: Pubkey,
    /// Amount claimed
    pub amount: u64,
    /// Pool total claimed after this claim
    pub total_claimed: u64,
    /// Claim timestamp
    pub timestamp: i64,
}

/// Event emitted when an airdrop is cancelled or its expired remainder recovered
#[event]
pub struct AirdropClosed {
    /// Airdrop id
    pub airdrop_id: u64,
    /// Creator receiving the remainder
    pub creator: Pubkey,
    /// Amount returned to the creator
    pub refunded_amount: u64,
    /// True when closed via expiry recovery rather than cancellation
    pub expired: bool,
    /// Close timestamp
    pub timestamp: i64,
}

// =============================================================================
// LIQUIDITY LOCK EVENTS
// =============================================================================

/// Event emitted when tokens are locked
#[event]
pub struct TokensLocked {
    /// Sequential lock id
    pub lock_id: u64,
    /// Lock owner
    pub owner: Pubkey,
    /// Token mint locked
    pub token_mint: Pubkey,
    /// Gross amount pulled from the owner
    pub amount: u64,
    /// Fee routed to the platform wallet at lock time
    pub fee_amount: u64,
    /// Net amount held by the lock
    pub net_amount: u64,
    /// Slot at which the lock opens
    pub unlock_slot: u64,
    /// Lock timestamp
    pub timestamp: i64,
}

/// Event emitted when locked tokens are withdrawn (full or partial)
#[event]
pub struct TokensUnlocked {
    /// Lock id
    pub lock_id: u64,
    /// Lock owner
    pub owner: Pubkey,
    /// Amount withdrawn in this call
    pub amount: u64,
    /// Remaining locked amount
    pub remaining_amount: u64,
    /// Total withdrawn so far
    pub withdrawn_total: u64,
    /// Withdrawal timestamp
    pub timestamp: i64,
}

/// Event emitted when a lock's unlock height is extended
#[event]
pub struct LockExtended {
    /// Lock id
    pub lock_id: u64,
    /// Lock owner
    pub owner: Pubkey,
    /// Previous unlock slot
    pub previous_unlock_slot: u64,
    /// New unlock slot
    pub new_unlock_slot: u64,
    /// Extension timestamp
    pub timestamp: i64,
}

/// Event emitted when lock ownership is reassigned
#[event]
pub struct LockOwnershipTransferred {
    /// Lock id
    pub lock_id: u64,
    /// Previous owner
    pub previous_owner: Pubkey,
    /// New owner
    pub new_owner: Pubkey,
    /// Transfer timestamp
    pub timestamp: i64,
}

// =============================================================================
// VESTING EVENTS
// =============================================================================

/// Event emitted when a vesting schedule is created
#[event]
pub struct ScheduleCreated {
    /// Sequential schedule id
    pub schedule_id: u64,
    /// Creator funding the schedule
    pub creator: Pubkey,
    /// Beneficiary entitled to claim
    pub beneficiary: Pubkey,
    /// Token mint vested
    pub token_mint: Pubkey,
    /// Total vested amount
    pub total_amount: u64,
    /// Vesting start slot
    pub start_slot: u64,
    /// Cliff length in slots
    pub cliff_slots: u64,
    /// Linear vesting duration in slots
    pub vesting_slots: u64,
    /// TGE unlock in basis points
    pub tge_bps: u64,
    /// Whether the creator can revoke
    pub revocable: bool,
    /// Creation timestamp
    pub timestamp: i64,
}

/// Event emitted when a beneficiary claims vested tokens
#[event]
pub struct VestedClaimed {
    /// Schedule id
    pub schedule_id: u64,
    /// Beneficiary
    pub beneficiary: Pubkey,
    /// Amount claimed in this call
    pub amount: u64,
    /// Total claimed so far
    pub total_claimed: u64,
    /// Claim timestamp
    pub timestamp: i64,
}

/// Event emitted when a schedule is revoked
#[event]
pub struct ScheduleRevoked {
    /// Schedule id
    pub schedule_id: u64,
    /// Creator performing the revocation
    pub creator: Pubkey,
    /// Total frozen at the vested-so-far amount
    pub vested_total: u64,
    /// Unvested remainder returned to the creator
    pub returned_amount: u64,
    /// Revocation timestamp
    pub timestamp: i64,
}

// =============================================================================
// FACTORY EVENTS
// =============================================================================

/// Event emitted when the token factory deploys a new mint
#[event]
pub struct TokenDeployed {
    /// Sequential token record id
    pub token_id: u64,
    /// Deployer
    pub deployer: Pubkey,
    /// New mint address
    pub mint: Pubkey,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Minted supply
    pub total_supply: u64,
    /// Deployment slot
    pub deployed_at_slot: u64,
    /// Deployment timestamp
    pub timestamp: i64,
}

/// Event emitted when the presale factory deploys and funds a new instance
#[event]
pub struct PresaleDeployed {
    /// Sequential presale id
    pub presale_id: u64,
    /// Presale instance address
    pub presale: Pubkey,
    /// Creator
    pub creator: Pubkey,
    /// Token mint sold
    pub token_mint: Pubkey,
    /// Tokens funded into the instance vault
    pub token_amount: u64,
    /// Deployment slot
    pub deployed_at_slot: u64,
    /// Deployment timestamp
    pub timestamp: i64,
}

// =============================================================================
// PRESALE EVENTS
// =============================================================================

/// Event emitted when a funded presale instance receives its parameters
#[event]
pub struct PresaleInitialized {
    /// Presale id
    pub presale_id: u64,
    /// Creator
    pub creator: Pubkey,
    /// Hard cap in quote units
    pub hard_cap: u64,
    /// Soft cap in quote units
    pub soft_cap: u64,
    /// Token units per quote unit
    pub rate: u64,
    /// Sale start slot
    pub start_slot: u64,
    /// Sale end slot
    pub end_slot: u64,
    /// Finalization fee in basis points
    pub fee_bps: u64,
    /// Initialization timestamp
    pub timestamp: i64,
}

/// Event emitted when a contribution is accepted
#[event]
pub struct ContributionReceived {
    /// Presale id
    pub presale_id: u64,
    /// Contributor
    pub contributor: Pubkey,
    /// Quote amount contributed in this call
    pub amount: u64,
    /// Contributor's cumulative contribution
    pub total_contribution: u64,
    /// Presale total raised after this contribution
    pub total_raised: u64,
    /// Whether this is the contributor's first participation
    pub is_first_contribution: bool,
    /// Contributor count after this call
    pub contributors_count: u64,
    /// Contribution timestamp
    pub timestamp: i64,
}

/// Event emitted when a contributor claims their (possibly vested) allocation
#[event]
pub struct PresaleTokensClaimed {
    /// Presale id
    pub presale_id: u64,
    /// Contributor
    pub contributor: Pubkey,
    /// Tokens claimed in this call
    pub amount: u64,
    /// Tokens claimed so far
    pub total_claimed: u64,
    /// Full allocation (contribution * rate)
    pub allocation: u64,
    /// Claim timestamp
    pub timestamp: i64,
}

/// Event emitted when a presale is finalized successfully
#[event]
pub struct PresaleFinalized {
    /// Presale id
    pub presale_id: u64,
    /// Creator
    pub creator: Pubkey,
    /// Total quote raised
    pub total_raised: u64,
    /// Tokens owed to contributors
    pub tokens_sold: u64,
    /// Platform fee taken in tokens
    pub fee_amount: u64,
    /// Token surplus returned to the creator
    pub surplus_amount: u64,
    /// Finalization timestamp
    pub timestamp: i64,
}

/// Event emitted when a failed presale returns its tokens to the creator
#[event]
pub struct PresaleRefunded {
    /// Presale id
    pub presale_id: u64,
    /// Creator
    pub creator: Pubkey,
    /// Tokens returned
    pub token_amount: u64,
    /// Total raised at refund time
    pub total_raised: u64,
    /// Refund timestamp
    pub timestamp: i64,
}

/// Event emitted on emergency withdrawal or aborted deployment
#[event]
pub struct PresaleCancelled {
    /// Presale id
    pub presale_id: u64,
    /// Creator
    pub creator: Pubkey,
    /// Tokens returned to the creator
    pub token_amount: u64,
    /// Cancellation timestamp
    pub timestamp: i64,
}

/// Event emitted when a contributor withdraws their quote after cancellation
#[event]
pub struct ContributionRefunded {
    /// Presale id
    pub presale_id: u64,
    /// Contributor
    pub contributor: Pubkey,
    /// Quote amount refunded
    pub amount: u64,
    /// Refund timestamp
    pub timestamp: i64,
}

/// Event emitted when the whitelist changes
#[event]
pub struct WhitelistUpdated {
    /// Presale id
    pub presale_id: u64,
    /// Addresses added in this call
    pub added: u32,
    /// Whitelist size after the call
    pub total: u32,
    /// Whether whitelist gating is currently enabled
    pub enabled: bool,
    /// Update timestamp
    pub timestamp: i64,
}
