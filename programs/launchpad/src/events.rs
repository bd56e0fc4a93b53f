use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Events — emitted for off-chain indexing
// ──────────────────────────────────────────────────────

#[event]
pub struct ProtocolInitialized {
    pub config: Pubkey,
    pub protocol_admin: Pubkey,
}

#[event]
pub struct ProductLaunched {
    pub product: Pubkey,
    pub maker: Pubkey,
    pub token_mint: Pubkey,
    pub initial_deposit: u64,
    pub ipo_slots: u32,
    pub total_token_supply: u64,
    pub launch_date: i64,
    pub bid_close_date: i64,
}

#[event]
pub struct BidPlaced {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub slots_requested: u32,
    pub placed_at: i64,
}

#[event]
pub struct BidApproved {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub user: Pubkey,
    pub slots_granted: u32,
    pub token_amount: u64,
    pub approved_bids: u32,
}

#[event]
pub struct BidRejected {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub user: Pubkey,
    pub refund_amount: u64,
}

#[event]
pub struct LaunchActivated {
    pub product: Pubkey,
    pub approved_bids: u32,
    pub activated_at: i64,
}

#[event]
pub struct TokensClaimed {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub user: Pubkey,
    pub token_amount: u64,
}

#[event]
pub struct ProceedsWithdrawn {
    pub product: Pubkey,
    pub maker: Pubkey,
    pub amount: u64,
    pub withdrawn_at: i64,
}

#[event]
pub struct BidWithdrawn {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub user: Pubkey,
    pub refund_amount: u64,
}

#[event]
pub struct BidAccountClosed {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub user: Pubkey,
}
