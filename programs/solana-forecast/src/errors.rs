use anchor_lang::prelude::*;

#[error_code]
pub enum ForecastError {
    // Validation
    #[msg("Title must not be empty")]
    EmptyTitle,
    #[msg("Title too long (max 128)")]
    TitleTooLong,
    #[msg("Description too long (max 512)")]
    DescriptionTooLong,
    #[msg("Resolution time must be in the future")]
    PastResolutionTime,
    #[msg("Market duration outside allowed range")]
    DurationOutOfRange,
    #[msg("Bet below minimum")]
    BelowMinimum,
    #[msg("Bet above maximum")]
    AboveMaximum,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Parameter change exceeds maximum allowed drift")]
    OutOfBounds,
    #[msg("Invalid parameter value")]
    InvalidValue,
    #[msg("Component name too long (max 32)")]
    NameTooLong,
    #[msg("Component version too long (max 16)")]
    VersionTooLong,

    // State machine
    #[msg("Parameter update cooldown still active")]
    CooldownActive,
    #[msg("Market is not active")]
    MarketNotActive,
    #[msg("Market has ended")]
    MarketEnded,
    #[msg("Market is already resolved")]
    MarketResolved,
    #[msg("Market is not finalized")]
    MarketNotFinalized,
    #[msg("Market is not in the required status for this step")]
    InvalidMarketStatus,
    #[msg("Voting period has ended")]
    VotingEnded,
    #[msg("Voting period has not ended yet")]
    VotingNotEnded,
    #[msg("Votes already aggregated")]
    AlreadyAggregated,
    #[msg("Votes have not been aggregated yet")]
    NotAggregated,
    #[msg("Dispute window still active")]
    DisputeWindowActive,
    #[msg("Dispute window has expired")]
    DisputeWindowExpired,
    #[msg("Resolution already finalized")]
    AlreadyFinalized,
    #[msg("Proposal is not in the required state")]
    InvalidProposalState,

    // Authorization
    #[msg("Unauthorized")]
    Unauthorized,

    // Account wiring
    #[msg("Resolution account does not match the market")]
    ResolutionMarketMismatch,

    // Idempotency guards
    #[msg("Payout already claimed")]
    AlreadyClaimed,
    #[msg("Bond already refunded or slashed")]
    AlreadyRefunded,

    // Economic
    #[msg("Position is on the other side of this market")]
    PositionSideMismatch,
    #[msg("Escrow balance insufficient")]
    InsufficientEscrow,
    #[msg("Arithmetic overflow")]
    MathOverflow,

    // Registry
    #[msg("Component not found in registry")]
    ComponentNotFound,
    #[msg("Registry is full")]
    RegistryFull,
}
