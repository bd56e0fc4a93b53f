use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::BidPlaced;
use crate::pda::TREASURY_SEED;
use crate::state::bid::UserBid;
use crate::state::enums::BidStatus;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// User Bid — escrow lamports against a product
//
// Slot capacity is only consumed on approval, so a pending
// bid never locks slots that may end up rejected.
//
// Re-bids: the bid PDA is created with `init`, so a user
// holding any bid on this product gets "already in use".
// After a rejection the user runs `close_bid` to free it.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UserBidProduct<'info> {
    /// The bidder
    #[account(mut)]
    pub user: Signer<'info>,

    /// The product being bid on
    #[account(
        seeds = [Product::SEED, product.maker.as_ref()],
        bump = product.bump,
    )]
    pub product: Box<Account<'info, Product>>,

    /// The bid PDA — one per (product, user)
    #[account(
        init,
        payer = user,
        space = UserBid::LEN,
        seeds = [UserBid::SEED, product.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_bid: Account<'info, UserBid>,

    /// The product's lamport escrow
    #[account(
        mut,
        seeds = [TREASURY_SEED, product.key().as_ref()],
        bump = product.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UserBidProduct>, amount: u64, slots_requested: u32) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts
        .product
        .check_bid(amount, slots_requested, clock.unix_timestamp)?;

    // ── Escrow the bid ──
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.user.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    let bid = &mut ctx.accounts.user_bid;
    bid.user = ctx.accounts.user.key();
    bid.product = ctx.accounts.product.key();
    bid.amount = amount;
    bid.token_amount = 0;
    bid.slots_requested = slots_requested;
    bid.status = BidStatus::Pending;
    bid.tokens_claimed = false;
    bid.funds_claimed = false;
    bid.created_at = clock.unix_timestamp;
    bid.bump = ctx.bumps.user_bid;

    msg!(
        "Bid placed: product={}, user={}, amount={}, slots={}",
        bid.product,
        bid.user,
        bid.amount,
        bid.slots_requested,
    );

    emit!(BidPlaced {
        product: bid.product,
        bid: bid.key(),
        user: bid.user,
        amount,
        slots_requested,
        placed_at: clock.unix_timestamp,
    });

    Ok(())
}
