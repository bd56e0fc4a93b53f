use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;
use crate::pda::BID_SEED;
use crate::state::enums::*;

// ──────────────────────────────────────────────────────
// User Bid — one per (product, user)
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct UserBid {
    // ── Participants ──
    pub user: Pubkey,
    pub product: Pubkey,

    // ── Amounts ──
    pub amount: u64,            // Lamports escrowed in the treasury
    pub token_amount: u64,      // Allocation, set on approval
    pub slots_requested: u32,   // 1..=MAX_SLOTS_PER_BID

    // ── State ──
    pub status: BidStatus,
    pub tokens_claimed: bool,
    pub funds_claimed: bool,    // Refund paid out
    pub created_at: i64,

    // ── PDA ──
    pub bump: u8,
}

impl UserBid {
    pub const MIN_SLOTS_PER_BID: u32 = 1;
    pub const MAX_SLOTS_PER_BID: u32 = 5;

    pub const LEN: usize = 8    // discriminator
        + 32 * 2                // user, product
        + 8                     // amount
        + 8                     // token_amount
        + 4                     // slots_requested
        + 1                     // status
        + 1                     // tokens_claimed
        + 1                     // funds_claimed
        + 8                     // created_at
        + 1;                    // bump

    pub const SEED: &'static [u8] = BID_SEED;

    pub fn is_valid_slot_count(slots: u32) -> bool {
        (Self::MIN_SLOTS_PER_BID..=Self::MAX_SLOTS_PER_BID).contains(&slots)
    }

    pub fn ensure_pending(&self) -> Result<()> {
        require!(
            self.status == BidStatus::Pending,
            LaunchpadError::BidAlreadyProcessed
        );
        Ok(())
    }

    /// Pending -> Rejected with the refund marked as paid.
    /// Returns the lamports owed back to the bidder.
    pub fn refund(&mut self, treasury_lamports: u64) -> Result<u64> {
        self.ensure_pending()?;
        require!(
            treasury_lamports >= self.amount,
            LaunchpadError::InsufficientFunds
        );

        self.status = BidStatus::Rejected;
        self.funds_claimed = true;
        Ok(self.amount)
    }

    /// Marks the allocation as claimed. Returns the token units to transfer.
    pub fn claim_tokens(&mut self, pool_balance: u64) -> Result<u64> {
        require!(
            self.status == BidStatus::Approved,
            LaunchpadError::BidNotApproved
        );
        require!(!self.tokens_claimed, LaunchpadError::TokensAlreadyClaimed);
        require!(
            pool_balance >= self.token_amount,
            LaunchpadError::InsufficientTokens
        );

        self.tokens_claimed = true;
        Ok(self.token_amount)
    }

    pub fn ensure_closable(&self) -> Result<()> {
        require!(
            self.status == BidStatus::Rejected,
            LaunchpadError::BidNotRejected
        );
        Ok(())
    }
}
