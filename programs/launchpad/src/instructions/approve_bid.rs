use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;
use crate::events::BidApproved;
use crate::state::bid::UserBid;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Approve Bid — maker grants a pending bid its slots
//
// The bid's lamports stay in the treasury; the maker takes
// them out with `withdraw_proceeds` after launch.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ApproveBid<'info> {
    /// The maker of the product
    #[account(mut)]
    pub product_owner: Signer<'info>,

    /// The product — signer must be its maker
    #[account(
        mut,
        seeds = [Product::SEED, product.maker.as_ref()],
        bump = product.bump,
        constraint = product.maker == product_owner.key() @ LaunchpadError::UnauthorizedAccess,
    )]
    pub product: Box<Account<'info, Product>>,

    /// The bid being approved
    #[account(
        mut,
        seeds = [UserBid::SEED, product.key().as_ref(), user_bid.user.as_ref()],
        bump = user_bid.bump,
    )]
    pub user_bid: Account<'info, UserBid>,
}

pub fn handler(ctx: Context<ApproveBid>) -> Result<()> {
    let clock = Clock::get()?;
    let product = &mut ctx.accounts.product;
    let bid = &mut ctx.accounts.user_bid;

    let token_amount = product.approve(bid, clock.unix_timestamp)?;

    msg!(
        "Bid approved: user={}, slots={}, tokens={}, approved_bids={}/{}",
        bid.user,
        bid.slots_requested,
        token_amount,
        product.approved_bids,
        product.ipo_slots,
    );

    emit!(BidApproved {
        product: product.key(),
        bid: bid.key(),
        user: bid.user,
        slots_granted: bid.slots_requested,
        token_amount,
        approved_bids: product.approved_bids,
    });

    Ok(())
}
