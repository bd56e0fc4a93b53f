use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;
use crate::pda::PRODUCT_SEED;
use crate::state::bid::UserBid;
use crate::state::enums::*;

// ──────────────────────────────────────────────────────
// Product — one launch per maker
//
// Holds the launch configuration and the slot accounting.
// Lamports live in the treasury PDA, tokens in the pool ATA;
// this record only tracks what is owed to whom.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct Product {
    // ── Owner ──
    pub maker: Pubkey,

    // ── Metadata (bounded) ──
    pub name: String,
    pub description: String,
    pub token_symbol: String,

    // ── Sale configuration ──
    pub initial_deposit: u64,      // Lamports the maker escrowed at launch
    pub ipo_slots: u32,            // Total allocation capacity
    pub approved_bids: u32,        // Slots granted so far
    pub total_token_supply: u64,   // Units minted into the pool
    pub token_mint: Pubkey,
    pub token_pool: Pubkey,        // ATA of the pool authority

    // ── Timing and state ──
    pub launch_date: i64,
    pub bid_close_date: i64,       // launch_date - BID_CLOSE_BUFFER_SECONDS
    pub phase: ProductPhase,
    pub created_at: i64,
    pub funds_claimed: bool,
    pub bump: u8,

    // ── Appended after the published layout ──
    pub total_raised: u64,         // Sum of approved bid amounts
    pub treasury_bump: u8,
    pub pool_authority_bump: u8,
}

impl Product {
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_DESCRIPTION_LEN: usize = 200;
    pub const MAX_TOKEN_SYMBOL_LEN: usize = 10;

    /// Bidding closes this many seconds before the launch date.
    pub const BID_CLOSE_BUFFER_SECONDS: i64 = 3_600;

    /// Decimals of the launch token mint.
    pub const TOKEN_DECIMALS: u8 = 9;

    pub const LEN: usize = 8                    // discriminator
        + 32                                    // maker
        + 4 + Self::MAX_NAME_LEN                // name
        + 4 + Self::MAX_DESCRIPTION_LEN         // description
        + 4 + Self::MAX_TOKEN_SYMBOL_LEN        // token_symbol
        + 8                                     // initial_deposit
        + 4                                     // ipo_slots
        + 4                                     // approved_bids
        + 8                                     // total_token_supply
        + 32 * 2                                // token_mint, token_pool
        + 8 * 2                                 // launch_date, bid_close_date
        + 1                                     // phase
        + 8                                     // created_at
        + 1                                     // funds_claimed
        + 1                                     // bump
        + 8                                     // total_raised
        + 2;                                    // treasury_bump, pool_authority_bump

    pub const SEED: &'static [u8] = PRODUCT_SEED;

    pub fn validate_metadata(name: &str, description: &str, token_symbol: &str) -> Result<()> {
        require!(
            name.len() <= Self::MAX_NAME_LEN
                && description.len() <= Self::MAX_DESCRIPTION_LEN
                && token_symbol.len() <= Self::MAX_TOKEN_SYMBOL_LEN,
            LaunchpadError::MetadataTooLong
        );
        Ok(())
    }

    /// Returns the bid close date for a launch date, rejecting launch dates
    /// that would leave no bidding window open at `now`.
    pub fn bid_close_date_for(launch_date: i64, now: i64) -> Result<i64> {
        let bid_close_date = launch_date
            .checked_sub(Self::BID_CLOSE_BUFFER_SECONDS)
            .ok_or(LaunchpadError::InvalidLaunchDate)?;
        require!(bid_close_date > now, LaunchpadError::InvalidLaunchDate);
        Ok(bid_close_date)
    }

    pub fn remaining_slots(&self) -> u32 {
        self.ipo_slots.saturating_sub(self.approved_bids)
    }

    pub fn is_launched(&self) -> bool {
        matches!(self.phase, ProductPhase::Launched | ProductPhase::Completed)
    }

    /// Launch-gated paths open once the launch date passes,
    /// whether or not anyone has called `activate_launch`.
    pub fn has_launched(&self, now: i64) -> bool {
        self.is_launched() || now >= self.launch_date
    }

    /// Approve and reject stay open until the launch date.
    fn ensure_resolvable(&self, now: i64) -> Result<()> {
        require!(
            self.phase == ProductPhase::Bidding && now < self.launch_date,
            LaunchpadError::NotInBiddingPhase
        );
        Ok(())
    }

    /// Bid preconditions, first failure wins.
    pub fn check_bid(&self, amount: u64, slots_requested: u32, now: i64) -> Result<()> {
        require!(amount > 0, LaunchpadError::ZeroBidAmount);
        require!(
            self.phase == ProductPhase::Bidding,
            LaunchpadError::NotInBiddingPhase
        );
        require!(now < self.bid_close_date, LaunchpadError::BiddingPeriodEnded);
        require!(
            UserBid::is_valid_slot_count(slots_requested),
            LaunchpadError::InvalidSlotCount
        );
        require!(self.remaining_slots() > 0, LaunchpadError::BidClosed);
        Ok(())
    }

    /// Proportional share of the supply: supply * slots / ipo_slots.
    pub fn token_allocation(&self, slots: u32) -> Result<u64> {
        require!(self.ipo_slots > 0, LaunchpadError::InvalidSlotCount);
        (self.total_token_supply as u128)
            .checked_mul(slots as u128)
            .and_then(|n| n.checked_div(self.ipo_slots as u128))
            .and_then(|n| u64::try_from(n).ok())
            .ok_or(LaunchpadError::ArithmeticOverflow.into())
    }

    /// Grants a pending bid its slots. All arithmetic is done before
    /// either record is written; returns the token allocation.
    pub fn approve(&mut self, bid: &mut UserBid, now: i64) -> Result<u64> {
        self.ensure_resolvable(now)?;
        bid.ensure_pending()?;

        let approved_bids = self
            .approved_bids
            .checked_add(bid.slots_requested)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        require!(
            approved_bids <= self.ipo_slots,
            LaunchpadError::AllSlotsFilled
        );

        let token_amount = self.token_allocation(bid.slots_requested)?;
        let total_raised = self
            .total_raised
            .checked_add(bid.amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;

        self.approved_bids = approved_bids;
        self.total_raised = total_raised;
        bid.status = BidStatus::Approved;
        bid.token_amount = token_amount;

        Ok(token_amount)
    }

    /// Moves a pending bid to Rejected. Returns the lamports to refund.
    pub fn reject(&self, bid: &mut UserBid, treasury_lamports: u64, now: i64) -> Result<u64> {
        self.ensure_resolvable(now)?;
        bid.refund(treasury_lamports)
    }

    /// Refunds a bid the maker left pending through the launch.
    pub fn release_unresolved(
        &self,
        bid: &mut UserBid,
        treasury_lamports: u64,
        now: i64,
    ) -> Result<u64> {
        require!(self.has_launched(now), LaunchpadError::LaunchDateNotReached);
        bid.refund(treasury_lamports)
    }

    /// Bidding -> Launched once the launch date has arrived. Anyone may call it.
    pub fn activate(&mut self, now: i64) -> Result<()> {
        require!(
            self.phase == ProductPhase::Bidding,
            LaunchpadError::NotInBiddingPhase
        );
        require!(now >= self.launch_date, LaunchpadError::LaunchDateNotReached);
        self.phase = ProductPhase::Launched;
        Ok(())
    }

    /// Lamports the maker may take out of the treasury: the initial deposit
    /// plus every approved bid, less the reserve that keeps the treasury
    /// rent-exempt for refunds of bids still pending.
    pub fn withdrawable_proceeds(&self, rent_reserve: u64) -> Result<u64> {
        self.initial_deposit
            .checked_add(self.total_raised)
            .and_then(|n| n.checked_sub(rent_reserve))
            .ok_or(LaunchpadError::ArithmeticOverflow.into())
    }

    /// Launched, or Bidding past the launch date, -> Completed.
    /// Returns the lamports to pay the maker.
    pub fn complete(
        &mut self,
        rent_reserve: u64,
        treasury_lamports: u64,
        now: i64,
    ) -> Result<u64> {
        require!(self.has_launched(now), LaunchpadError::LaunchDateNotReached);
        require!(
            !self.funds_claimed && self.phase != ProductPhase::Completed,
            LaunchpadError::FundsAlreadyClaimed
        );

        let proceeds = self.withdrawable_proceeds(rent_reserve)?;
        require!(
            treasury_lamports >= proceeds,
            LaunchpadError::InsufficientFunds
        );

        self.funds_claimed = true;
        self.phase = ProductPhase::Completed;
        Ok(proceeds)
    }
}
