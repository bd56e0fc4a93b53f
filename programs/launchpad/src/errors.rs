use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // ── Bid validation ──
    #[msg("Bid amount must be greater than zero")]
    ZeroBidAmount,

    // ── Phase / timing ──
    #[msg("Product is not in bidding phase")]
    NotInBiddingPhase,

    #[msg("Bidding period has ended")]
    BiddingPeriodEnded,

    #[msg("Launch date has not arrived yet")]
    LaunchDateNotReached,

    // ── Bid status ──
    #[msg("Bid has already been processed")]
    BidAlreadyProcessed,

    #[msg("Bid is not approved")]
    BidNotApproved,

    #[msg("Bid is not rejected")]
    BidNotRejected,

    // ── Authorization ──
    #[msg("Only product owner can perform this action")]
    UnauthorizedAccess,

    // ── Capacity ──
    #[msg("All IPO slots are filled")]
    AllSlotsFilled,

    #[msg("Invalid launch date")]
    InvalidLaunchDate,

    // ── Arithmetic ──
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // ── Claims ──
    #[msg("Tokens already claimed")]
    TokensAlreadyClaimed,

    #[msg("Funds already claimed")]
    FundsAlreadyClaimed,

    #[msg("Insufficient tokens in pool")]
    InsufficientTokens,

    #[msg("Bid closed, cannot accept new bids")]
    BidClosed,

    #[msg("Invalid number of slots requested, must be between 1 and 5")]
    InvalidSlotCount,

    #[msg("Insufficient funds in treasury for refund")]
    InsufficientFunds,

    // ── Metadata ──
    #[msg("Product name, description or token symbol exceeds the maximum length")]
    MetadataTooLong,
}
