use anchor_lang::prelude::*;

use crate::events::BidAccountClosed;
use crate::state::bid::UserBid;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Close Bid — drop a rejected bid record
//
// Rejected bids are already refunded, so only the record's
// rent moves. Freeing the PDA lets the user bid again while
// the product is still in bidding.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct CloseBid<'info> {
    /// The bidder, receives the record's rent
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [Product::SEED, product.maker.as_ref()],
        bump = product.bump,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        mut,
        close = user,
        seeds = [UserBid::SEED, product.key().as_ref(), user.key().as_ref()],
        bump = user_bid.bump,
    )]
    pub user_bid: Account<'info, UserBid>,
}

pub fn handler(ctx: Context<CloseBid>) -> Result<()> {
    ctx.accounts.user_bid.ensure_closable()?;

    msg!(
        "Bid closed: product={}, user={}",
        ctx.accounts.product.key(),
        ctx.accounts.user.key(),
    );

    emit!(BidAccountClosed {
        product: ctx.accounts.product.key(),
        bid: ctx.accounts.user_bid.key(),
        user: ctx.accounts.user.key(),
    });

    Ok(())
}
