use anchor_lang::prelude::*;

#[error_code]
pub enum TokenpadError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: Only admin can perform this action")]
    Unauthorized,

    #[msg("Not the creator of this record")]
    NotCreator,

    #[msg("Not the owner of this lock")]
    NotLockOwner,

    #[msg("Not the beneficiary of this schedule")]
    NotBeneficiary,

    // ===== Status Errors =====
    #[msg("Invalid status for this operation")]
    InvalidStatus,

    #[msg("Platform is currently paused")]
    PlatformPaused,

    #[msg("Presale is paused")]
    PresalePaused,

    #[msg("Presale has already been initialized")]
    AlreadyInitialized,

    #[msg("Presale has not been funded yet")]
    NotFunded,

    #[msg("Presale has already been finalized")]
    AlreadyFinalized,

    #[msg("Airdrop is closed")]
    AirdropClosed,

    #[msg("Schedule has been revoked")]
    ScheduleRevoked,

    #[msg("Schedule is not revocable")]
    NotRevocable,

    #[msg("Lock has already been emptied")]
    LockEmpty,

    #[msg("Deployment already in progress")]
    DeploymentInProgress,

    // ===== Time Errors =====
    #[msg("Window has not started yet")]
    NotStarted,

    #[msg("Window has already ended")]
    AlreadyEnded,

    #[msg("Window has not ended yet")]
    NotEnded,

    #[msg("Airdrop has expired")]
    AirdropExpired,

    #[msg("Airdrop has not expired yet")]
    NotExpired,

    #[msg("Tokens are still locked")]
    StillLocked,

    #[msg("Expiry must be in the future")]
    InvalidExpiry,

    #[msg("Unlock height must be in the future")]
    InvalidUnlockHeight,

    #[msg("New unlock height must be strictly greater")]
    UnlockHeightNotExtended,

    #[msg("Start height must precede end height")]
    InvalidWindow,

    #[msg("Configuration can only change before the start")]
    ConfigurationFrozen,

    // ===== Parameter Errors =====
    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Invalid address")]
    InvalidAddress,

    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,

    #[msg("Fee basis points exceed the allowed ceiling")]
    FeeTooHigh,

    #[msg("Basis points exceed 10000")]
    BpsOutOfRange,

    #[msg("Vesting duration must be non-zero")]
    ZeroVestingDuration,

    #[msg("Soft cap must not exceed hard cap")]
    InvalidCaps,

    #[msg("Minimum buy must not exceed maximum buy")]
    InvalidBuyLimits,

    #[msg("Invalid rate")]
    InvalidRate,

    #[msg("Funded tokens do not cover the hard cap allocation plus fee")]
    InsufficientTokenFunding,

    // ===== Contribution Errors =====
    #[msg("Contribution below minimum buy")]
    BelowMinBuy,

    #[msg("Cumulative contribution above maximum buy")]
    AboveMaxBuy,

    #[msg("Contribution would exceed the hard cap")]
    HardCapExceeded,

    #[msg("Caller is not whitelisted")]
    NotWhitelisted,

    #[msg("Too many new participants this block")]
    EntrantThrottled,

    #[msg("Soft cap was not reached")]
    SoftCapNotReached,

    #[msg("Soft cap was reached; refund is not available")]
    SoftCapReached,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    // ===== Claim Errors =====
    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Already refunded")]
    AlreadyRefunded,

    #[msg("Cannot refund a position that already claimed tokens")]
    TokensAlreadyClaimed,

    #[msg("Claim amount exceeds the remaining pool")]
    InsufficientRemaining,

    #[msg("Invalid merkle proof")]
    InvalidProof,

    #[msg("Malformed merkle proof")]
    MalformedProof,
}
