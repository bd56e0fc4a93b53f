use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

pub use errors::LaunchpadError;
pub use state::*;

declare_id!("3oqHGMC4cKpkMUXbpRUUjAG9RSTSRohpUco3zPBkCEvg");

#[program]
pub mod launchpad {
    use super::*;

    // ──────────────────────────────────────────────────────
    // PROTOCOL
    // ──────────────────────────────────────────────────────

    /// Create the global config. Succeeds exactly once;
    /// the signer becomes the protocol admin.
    pub fn init_protocol(ctx: Context<InitProtocol>) -> Result<()> {
        instructions::init_protocol::handler(ctx)
    }

    // ──────────────────────────────────────────────────────
    // LAUNCH
    // ──────────────────────────────────────────────────────

    /// Maker opens a launch: escrows the deposit, creates the
    /// token mint and mints the full supply into the pool.
    pub fn launch_product(ctx: Context<LaunchProduct>, args: LaunchProductArgs) -> Result<()> {
        instructions::launch_product::handler(ctx, args)
    }

    /// Anyone moves the product from Bidding to Launched
    /// once the launch date has arrived.
    pub fn activate_launch(ctx: Context<ActivateLaunch>) -> Result<()> {
        instructions::activate_launch::handler(ctx)
    }

    /// Maker withdraws the deposit and approved bid funds.
    /// Moves the product to Completed.
    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
        instructions::withdraw_proceeds::handler(ctx)
    }

    // ──────────────────────────────────────────────────────
    // BIDDING
    // ──────────────────────────────────────────────────────

    /// User escrows `amount` lamports for 1–5 slots.
    /// Slots are only consumed on approval.
    pub fn user_bid_product(
        ctx: Context<UserBidProduct>,
        amount: u64,
        slots_requested: u32,
    ) -> Result<()> {
        instructions::user_bid_product::handler(ctx, amount, slots_requested)
    }

    /// Maker approves a pending bid and fixes its token allocation.
    pub fn approve_bid(ctx: Context<ApproveBid>) -> Result<()> {
        instructions::approve_bid::handler(ctx)
    }

    /// Maker rejects a pending bid. The refund is paid immediately.
    pub fn reject_bid(ctx: Context<RejectBid>) -> Result<()> {
        instructions::reject_bid::handler(ctx)
    }

    // ──────────────────────────────────────────────────────
    // SETTLEMENT
    // ──────────────────────────────────────────────────────

    /// Approved bidder claims their allocation after launch.
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens::handler(ctx)
    }

    /// Bidder reclaims a bid left pending after launch.
    pub fn withdraw_pending_bid(ctx: Context<WithdrawPendingBid>) -> Result<()> {
        instructions::withdraw_pending_bid::handler(ctx)
    }

    /// Bidder closes a rejected bid record and recovers its rent.
    pub fn close_bid(ctx: Context<CloseBid>) -> Result<()> {
        instructions::close_bid::handler(ctx)
    }
}
