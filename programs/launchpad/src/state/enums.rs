use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Product Phase — coarse lifecycle of a launch
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProductPhase {
    Bidding,   // Collecting bids into escrow
    Launched,  // Launch date passed, approved bidders can claim
    Completed, // Maker withdrew the proceeds
}

impl Default for ProductPhase {
    fn default() -> Self {
        ProductPhase::Bidding
    }
}

// ──────────────────────────────────────────────────────
// Bid Status — Pending resolves exactly once
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BidStatus {
    Pending,  // Funds escrowed, awaiting the maker
    Approved, // Slots granted, tokens claimable after launch
    Rejected, // Refunded
}

impl Default for BidStatus {
    fn default() -> Self {
        BidStatus::Pending
    }
}
