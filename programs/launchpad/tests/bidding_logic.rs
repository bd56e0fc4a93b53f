//! Business-logic tests for the launchpad records.
//!
//! Exercises bid validation, the approve/reject resolver, launch activation
//! and the settlement paths directly on `Product` / `UserBid`.
//! Pure logic — no CPI or validator required.

use anchor_lang::error::Error;
use anchor_lang::prelude::{Pubkey, Result};
use launchpad::{BidStatus, LaunchpadError, Product, ProductPhase, UserBid};

const NOW: i64 = 1_750_000_000;
const SUPPLY: u64 = 1_000_000_000;
const DEPOSIT: u64 = 2_000_000_000;
const RENT_RESERVE: u64 = 890_880;

// =========================================================================
// HELPERS
// =========================================================================

fn make_product(ipo_slots: u32) -> Product {
    let launch_date = NOW + 2 * Product::BID_CLOSE_BUFFER_SECONDS;
    Product {
        maker: Pubkey::new_unique(),
        name: "Orbit".to_string(),
        description: "Task board for remote teams".to_string(),
        token_symbol: "ORB".to_string(),
        initial_deposit: DEPOSIT,
        ipo_slots,
        approved_bids: 0,
        total_token_supply: SUPPLY,
        token_mint: Pubkey::new_unique(),
        token_pool: Pubkey::new_unique(),
        launch_date,
        bid_close_date: launch_date - Product::BID_CLOSE_BUFFER_SECONDS,
        created_at: NOW,
        phase: ProductPhase::Bidding,
        ..Default::default()
    }
}

fn make_bid(amount: u64, slots_requested: u32) -> UserBid {
    UserBid {
        user: Pubkey::new_unique(),
        product: Pubkey::new_unique(),
        amount,
        slots_requested,
        status: BidStatus::Pending,
        created_at: NOW,
        ..Default::default()
    }
}

fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: LaunchpadError) {
    let err = result.unwrap_err();
    assert_eq!(err, Error::from(expected));
}

// =========================================================================
// BID SUBMISSION
// =========================================================================

#[test]
fn test_valid_bid_accepted() {
    let product = make_product(5);
    assert!(product.check_bid(1_000, 1, NOW).is_ok());
    assert!(product.check_bid(1_000, 5, NOW).is_ok());
}

#[test]
fn test_zero_amount_rejected_first() {
    let mut product = make_product(5);
    // Every other check would fail too; the amount check wins
    product.phase = ProductPhase::Launched;
    assert_err(
        product.check_bid(0, 9, product.bid_close_date + 1),
        LaunchpadError::ZeroBidAmount,
    );
}

#[test]
fn test_bid_outside_bidding_phase() {
    let mut product = make_product(5);
    product.phase = ProductPhase::Launched;
    assert_err(product.check_bid(1_000, 1, NOW), LaunchpadError::NotInBiddingPhase);
}

#[test]
fn test_bid_after_close_date_while_still_bidding() {
    let product = make_product(5);
    assert_eq!(product.phase, ProductPhase::Bidding);
    assert_err(
        product.check_bid(1_000, 1, product.bid_close_date),
        LaunchpadError::BiddingPeriodEnded,
    );
    assert_err(
        product.check_bid(1_000, 1, product.bid_close_date + 60),
        LaunchpadError::BiddingPeriodEnded,
    );
    assert!(product.check_bid(1_000, 1, product.bid_close_date - 1).is_ok());
}

#[test]
fn test_slot_count_bounds() {
    let product = make_product(5);
    assert_err(product.check_bid(1_000, 0, NOW), LaunchpadError::InvalidSlotCount);
    assert_err(product.check_bid(1_000, 6, NOW), LaunchpadError::InvalidSlotCount);
    assert!(UserBid::is_valid_slot_count(UserBid::MIN_SLOTS_PER_BID));
    assert!(UserBid::is_valid_slot_count(UserBid::MAX_SLOTS_PER_BID));
}

#[test]
fn test_bid_closed_when_slots_exhausted() {
    let mut product = make_product(5);
    product.approved_bids = 5;
    assert_err(product.check_bid(1_000, 1, NOW), LaunchpadError::BidClosed);
}

// =========================================================================
// APPROVE
// =========================================================================

#[test]
fn test_second_bid_overflowing_slots_fails() {
    let mut product = make_product(5);
    let mut first = make_bid(3_000, 3);
    let mut second = make_bid(3_000, 3);

    product.approve(&mut first, NOW).unwrap();
    assert_eq!(product.approved_bids, 3);
    assert_eq!(first.status, BidStatus::Approved);

    assert_err(product.approve(&mut second, NOW), LaunchpadError::AllSlotsFilled);

    // Nothing written on failure
    assert_eq!(product.approved_bids, 3);
    assert_eq!(product.total_raised, 3_000);
    assert_eq!(second.status, BidStatus::Pending);
    assert_eq!(second.token_amount, 0);
}

#[test]
fn test_approve_sets_proportional_allocation() {
    let mut product = make_product(5);
    let mut bid = make_bid(4_000, 3);

    let token_amount = product.approve(&mut bid, NOW).unwrap();

    // 1e9 * 3 / 5
    assert_eq!(token_amount, 600_000_000);
    assert_eq!(bid.token_amount, token_amount);
    assert_eq!(product.total_raised, 4_000);
}

#[test]
fn test_approve_exactly_fills_capacity() {
    let mut product = make_product(5);
    let mut first = make_bid(1, 2);
    let mut second = make_bid(1, 3);

    product.approve(&mut first, NOW).unwrap();
    product.approve(&mut second, NOW).unwrap();

    assert_eq!(product.approved_bids, product.ipo_slots);
    assert_eq!(product.remaining_slots(), 0);
    assert_eq!(first.token_amount + second.token_amount, SUPPLY);
}

#[test]
fn test_allocations_never_exceed_supply() {
    // 7 slots does not divide the supply evenly
    let mut product = make_product(7);
    let mut total = 0u64;
    for slots in [1, 2, 1, 3] {
        let mut bid = make_bid(10, slots);
        total += product.approve(&mut bid, NOW).unwrap();
    }
    assert_eq!(product.approved_bids, 7);
    assert!(total <= SUPPLY);
}

#[test]
fn test_approved_bids_never_exceed_ipo_slots() {
    let mut product = make_product(9);
    for slots in [5, 4, 1, 2, 3, 5, 1] {
        let mut bid = make_bid(10, slots);
        let _ = product.approve(&mut bid, NOW);
        assert!(product.approved_bids <= product.ipo_slots);
    }
    assert_eq!(product.approved_bids, 9);
}

#[test]
fn test_approve_already_resolved_bid() {
    let mut product = make_product(10);
    let mut bid = make_bid(1_000, 1);
    product.approve(&mut bid, NOW).unwrap();
    assert_err(product.approve(&mut bid, NOW), LaunchpadError::BidAlreadyProcessed);
    assert_eq!(product.approved_bids, 1);

    let mut rejected = make_bid(1_000, 1);
    rejected.status = BidStatus::Rejected;
    assert_err(product.approve(&mut rejected, NOW), LaunchpadError::BidAlreadyProcessed);
}

#[test]
fn test_approve_after_launch_refused() {
    let mut product = make_product(5);
    product.phase = ProductPhase::Launched;
    let mut bid = make_bid(1_000, 1);
    assert_err(product.approve(&mut bid, NOW), LaunchpadError::NotInBiddingPhase);
}

#[test]
fn test_resolution_closes_at_launch_date_without_activation() {
    let mut product = make_product(5);
    let mut bid = make_bid(1_000, 1);
    let launch_date = product.launch_date;

    // Phase still reads Bidding, but the launch date has passed
    assert_err(
        product.approve(&mut bid, launch_date),
        LaunchpadError::NotInBiddingPhase,
    );
    assert_err(
        product.reject(&mut bid, DEPOSIT, launch_date + 1),
        LaunchpadError::NotInBiddingPhase,
    );
    assert_eq!(bid.status, BidStatus::Pending);
    assert_eq!(product.approved_bids, 0);

    assert!(product.approve(&mut bid, launch_date - 1).is_ok());
}

#[test]
fn test_slot_counter_overflow() {
    let mut product = make_product(u32::MAX);
    product.approved_bids = u32::MAX - 1;
    let mut bid = make_bid(1_000, 5);
    assert_err(product.approve(&mut bid, NOW), LaunchpadError::ArithmeticOverflow);
    assert_eq!(bid.status, BidStatus::Pending);
}

#[test]
fn test_allocation_overflow_detected() {
    let mut product = make_product(1);
    product.total_token_supply = u64::MAX;
    assert_eq!(product.token_allocation(1).unwrap(), u64::MAX);
    assert_err(product.token_allocation(2), LaunchpadError::ArithmeticOverflow);
}

#[test]
fn test_raised_overflow_leaves_records_untouched() {
    let mut product = make_product(5);
    product.total_raised = u64::MAX;
    let mut bid = make_bid(1, 1);
    assert_err(product.approve(&mut bid, NOW), LaunchpadError::ArithmeticOverflow);
    assert_eq!(product.approved_bids, 0);
    assert_eq!(bid.status, BidStatus::Pending);
}

// =========================================================================
// REJECT
// =========================================================================

#[test]
fn test_reject_refunds_exact_amount() {
    let product = make_product(5);
    let mut bid = make_bid(7_500, 2);

    let refund = product.reject(&mut bid, DEPOSIT + 7_500, NOW).unwrap();

    assert_eq!(refund, 7_500);
    assert_eq!(bid.status, BidStatus::Rejected);
    assert!(bid.funds_claimed);
    assert!(!bid.tokens_claimed);
}

#[test]
fn test_reject_approved_bid_fails() {
    let mut product = make_product(5);
    let mut bid = make_bid(7_500, 2);
    product.approve(&mut bid, NOW).unwrap();

    assert_err(
        product.reject(&mut bid, DEPOSIT + 7_500, NOW),
        LaunchpadError::BidAlreadyProcessed,
    );
    assert_eq!(bid.status, BidStatus::Approved);
    assert!(!bid.funds_claimed);
}

#[test]
fn test_reject_requires_treasury_cover() {
    let product = make_product(5);
    let mut bid = make_bid(7_500, 2);
    assert_err(product.reject(&mut bid, 7_499, NOW), LaunchpadError::InsufficientFunds);
    assert_eq!(bid.status, BidStatus::Pending);
    assert!(!bid.funds_claimed);
}

#[test]
fn test_reject_twice_fails() {
    let product = make_product(5);
    let mut bid = make_bid(100, 1);
    product.reject(&mut bid, DEPOSIT, NOW).unwrap();
    assert_err(product.reject(&mut bid, DEPOSIT, NOW), LaunchpadError::BidAlreadyProcessed);
}

// =========================================================================
// LAUNCH
// =========================================================================

#[test]
fn test_launch_date_window() {
    let launch_date = NOW + 2 * Product::BID_CLOSE_BUFFER_SECONDS;
    assert_eq!(
        Product::bid_close_date_for(launch_date, NOW).unwrap(),
        NOW + Product::BID_CLOSE_BUFFER_SECONDS
    );

    // Past, present and too close to leave a bidding window
    assert_err(Product::bid_close_date_for(NOW - 1, NOW), LaunchpadError::InvalidLaunchDate);
    assert_err(Product::bid_close_date_for(NOW, NOW), LaunchpadError::InvalidLaunchDate);
    assert_err(
        Product::bid_close_date_for(NOW + Product::BID_CLOSE_BUFFER_SECONDS, NOW),
        LaunchpadError::InvalidLaunchDate,
    );
    assert_err(Product::bid_close_date_for(i64::MIN, NOW), LaunchpadError::InvalidLaunchDate);
}

#[test]
fn test_metadata_caps() {
    assert!(Product::validate_metadata("Orbit", "Task board", "ORB").is_ok());
    let long_name = "x".repeat(Product::MAX_NAME_LEN + 1);
    assert_err(
        Product::validate_metadata(&long_name, "", "ORB"),
        LaunchpadError::MetadataTooLong,
    );
    let long_symbol = "X".repeat(Product::MAX_TOKEN_SYMBOL_LEN + 1);
    assert_err(
        Product::validate_metadata("Orbit", "", &long_symbol),
        LaunchpadError::MetadataTooLong,
    );
}

#[test]
fn test_activate_waits_for_launch_date() {
    let mut product = make_product(5);
    assert_err(
        product.activate(product.launch_date - 1),
        LaunchpadError::LaunchDateNotReached,
    );
    assert_eq!(product.phase, ProductPhase::Bidding);

    product.activate(product.launch_date).unwrap();
    assert_eq!(product.phase, ProductPhase::Launched);

    assert_err(product.activate(product.launch_date), LaunchpadError::NotInBiddingPhase);
}

// =========================================================================
// SETTLEMENT
// =========================================================================

#[test]
fn test_claim_tokens_once() {
    let mut product = make_product(5);
    let mut bid = make_bid(1_000, 1);
    let allocation = product.approve(&mut bid, NOW).unwrap();

    assert_eq!(bid.claim_tokens(SUPPLY).unwrap(), allocation);
    assert!(bid.tokens_claimed);
    assert_err(bid.claim_tokens(SUPPLY), LaunchpadError::TokensAlreadyClaimed);
}

#[test]
fn test_claim_tokens_requires_approval() {
    let mut pending = make_bid(1_000, 1);
    assert_err(pending.claim_tokens(SUPPLY), LaunchpadError::BidNotApproved);

    let mut rejected = make_bid(1_000, 1);
    rejected.status = BidStatus::Rejected;
    assert_err(rejected.claim_tokens(SUPPLY), LaunchpadError::BidNotApproved);
}

#[test]
fn test_claim_tokens_pool_short() {
    let mut product = make_product(5);
    let mut bid = make_bid(1_000, 5);
    product.approve(&mut bid, NOW).unwrap();
    assert_err(bid.claim_tokens(SUPPLY - 1), LaunchpadError::InsufficientTokens);
    assert!(!bid.tokens_claimed);
}

#[test]
fn test_withdraw_proceeds_after_launch() {
    let mut product = make_product(5);
    let mut approved = make_bid(3_000, 2);
    let mut pending = make_bid(5_000, 1);
    product.approve(&mut approved, NOW).unwrap();

    assert_err(
        product.complete(RENT_RESERVE, DEPOSIT + 8_000, NOW),
        LaunchpadError::LaunchDateNotReached,
    );

    let launch_date = product.launch_date;
    product.activate(launch_date).unwrap();
    let proceeds = product
        .complete(RENT_RESERVE, DEPOSIT + 8_000, launch_date)
        .unwrap();

    assert_eq!(proceeds, DEPOSIT + 3_000 - RENT_RESERVE);
    assert!(product.funds_claimed);
    assert_eq!(product.phase, ProductPhase::Completed);

    // The pending bid is still covered by what remains
    let remaining = DEPOSIT + 8_000 - proceeds;
    assert_eq!(
        product
            .release_unresolved(&mut pending, remaining, launch_date)
            .unwrap(),
        5_000
    );
    assert!(remaining - 5_000 >= RENT_RESERVE);

    assert_err(
        product.complete(RENT_RESERVE, remaining, launch_date),
        LaunchpadError::FundsAlreadyClaimed,
    );
}

#[test]
fn test_withdraw_proceeds_without_activation() {
    let mut product = make_product(5);
    let mut approved = make_bid(3_000, 2);
    product.approve(&mut approved, NOW).unwrap();

    let later = product.launch_date + 86_400;
    let proceeds = product
        .complete(RENT_RESERVE, DEPOSIT + 3_000, later)
        .unwrap();

    assert_eq!(proceeds, DEPOSIT + 3_000 - RENT_RESERVE);
    assert_eq!(product.phase, ProductPhase::Completed);
    assert_err(
        product.complete(RENT_RESERVE, RENT_RESERVE, later),
        LaunchpadError::FundsAlreadyClaimed,
    );
}

#[test]
fn test_withdraw_proceeds_checks_treasury() {
    let mut product = make_product(5);
    let launch_date = product.launch_date;
    product.activate(launch_date).unwrap();
    assert_err(
        product.complete(RENT_RESERVE, DEPOSIT - RENT_RESERVE - 1, launch_date),
        LaunchpadError::InsufficientFunds,
    );
    assert!(!product.funds_claimed);
    assert_eq!(product.phase, ProductPhase::Launched);
}

#[test]
fn test_pending_bid_release_after_launch_only() {
    let mut product = make_product(5);
    let mut bid = make_bid(2_500, 1);
    assert_err(
        product.release_unresolved(&mut bid, DEPOSIT, product.launch_date - 1),
        LaunchpadError::LaunchDateNotReached,
    );

    let launch_date = product.launch_date;
    product.activate(launch_date).unwrap();
    assert_eq!(
        product
            .release_unresolved(&mut bid, DEPOSIT, launch_date)
            .unwrap(),
        2_500
    );
    assert_eq!(bid.status, BidStatus::Rejected);
    assert!(bid.funds_claimed);
}

#[test]
fn test_pending_bid_refunded_when_launch_never_activated() {
    // The maker walks away: the phase is never advanced past Bidding
    let mut product = make_product(5);
    let mut bid = make_bid(2_500, 2);
    let long_after = product.launch_date + 30 * 86_400;

    assert_eq!(product.phase, ProductPhase::Bidding);
    assert!(product.has_launched(long_after));

    let refund = product
        .release_unresolved(&mut bid, DEPOSIT + 2_500, long_after)
        .unwrap();

    assert_eq!(refund, 2_500);
    assert_eq!(bid.status, BidStatus::Rejected);
    assert!(bid.funds_claimed);
    assert_eq!(product.phase, ProductPhase::Bidding);
}

#[test]
fn test_claim_opens_at_launch_date_without_activation() {
    let mut product = make_product(5);
    let mut bid = make_bid(1_000, 1);
    let allocation = product.approve(&mut bid, NOW).unwrap();

    assert!(!product.has_launched(product.launch_date - 1));
    assert!(product.has_launched(product.launch_date));
    assert_eq!(product.phase, ProductPhase::Bidding);
    assert_eq!(bid.claim_tokens(SUPPLY).unwrap(), allocation);
}

#[test]
fn test_approved_bid_cannot_be_released() {
    let mut product = make_product(5);
    let mut bid = make_bid(2_500, 1);
    product.approve(&mut bid, NOW).unwrap();
    let launch_date = product.launch_date;
    product.activate(launch_date).unwrap();
    assert_err(
        product.release_unresolved(&mut bid, DEPOSIT, launch_date),
        LaunchpadError::BidAlreadyProcessed,
    );
}

#[test]
fn test_only_rejected_bids_close() {
    let product = make_product(5);
    let mut bid = make_bid(100, 1);
    assert_err(bid.ensure_closable(), LaunchpadError::BidNotRejected);

    product.reject(&mut bid, DEPOSIT, NOW).unwrap();
    assert!(bid.ensure_closable().is_ok());
}
