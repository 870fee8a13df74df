// ===== Seeds =====
pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform_config";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const TOKEN_VAULT: &[u8] = b"token_vault";

pub const AIRDROP_SEED: &[u8] = b"airdrop";
pub const CLAIM_RECORD_SEED: &[u8] = b"claim_record";

pub const LOCK_SEED: &[u8] = b"lock";
pub const LOCK_OWNER_SEED: &[u8] = b"lock_owner";

pub const VESTING_SEED: &[u8] = b"vesting";

pub const PRESALE_SEED: &[u8] = b"presale";
pub const PRESALE_RECORD_SEED: &[u8] = b"presale_record";
pub const CONTRIBUTOR_SEED: &[u8] = b"contributor";
pub const CONTRIBUTOR_RECORD_SEED: &[u8] = b"contributor_record";

pub const TOKEN_RECORD_SEED: &[u8] = b"token_record";
pub const TOKEN_MINT_SEED: &[u8] = b"token_mint";
pub const CREATOR_TOKEN_SEED: &[u8] = b"creator_token";
pub const CREATOR_PRESALE_SEED: &[u8] = b"creator_presale";

// ===== Basis Points =====
/// 10000 bps = 100%
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Ceiling for the lock-time platform fee (5%)
pub const MAX_LOCK_FEE_BPS: u64 = 500;

/// Ceiling for the presale finalization fee (10%)
pub const MAX_PRESALE_FEE_BPS: u64 = 1_000;

// ===== Presale Limits =====
/// Hard bound on the in-state whitelist
pub const MAX_WHITELIST_LEN: usize = 200;

// ===== Merkle =====
/// Every proof node is a 32-byte hash; proofs arrive as a flat byte stream
pub const MERKLE_NODE_LEN: usize = 32;
