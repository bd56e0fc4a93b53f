use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::LaunchpadError;
use crate::events::BidRejected;
use crate::pda::TREASURY_SEED;
use crate::state::bid::UserBid;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Reject Bid — maker declines a pending bid
//
// The refund is immediate: the bid amount goes straight from
// the treasury back to the bidder and the bid is marked paid.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RejectBid<'info> {
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

    /// The bid being rejected
    #[account(
        mut,
        seeds = [UserBid::SEED, product.key().as_ref(), user_bid.user.as_ref()],
        bump = user_bid.bump,
    )]
    pub user_bid: Account<'info, UserBid>,

    /// The product's lamport escrow
    #[account(
        mut,
        seeds = [TREASURY_SEED, product.key().as_ref()],
        bump = product.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    /// The bidder receiving the refund
    #[account(
        mut,
        constraint = user_account.key() == user_bid.user @ LaunchpadError::UnauthorizedAccess,
    )]
    pub user_account: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RejectBid>) -> Result<()> {
    let clock = Clock::get()?;
    let treasury_lamports = ctx.accounts.treasury.lamports();
    let refund_amount = ctx.accounts.product.reject(
        &mut ctx.accounts.user_bid,
        treasury_lamports,
        clock.unix_timestamp,
    )?;

    let product_key = ctx.accounts.product.key();
    let treasury_bump = ctx.accounts.product.treasury_bump;
    let seeds = &[TREASURY_SEED, product_key.as_ref(), &[treasury_bump]];
    let signer_seeds = &[&seeds[..]];

    let refund_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.treasury.to_account_info(),
            to: ctx.accounts.user_account.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(refund_ctx, refund_amount)?;

    let bid = &ctx.accounts.user_bid;

    msg!(
        "Bid rejected: user={}, refunded={}",
        bid.user,
        refund_amount,
    );

    emit!(BidRejected {
        product: product_key,
        bid: bid.key(),
        user: bid.user,
        refund_amount,
    });

    Ok(())
}
