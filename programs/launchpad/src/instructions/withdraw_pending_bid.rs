use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::BidWithdrawn;
use crate::pda::TREASURY_SEED;
use crate::state::bid::UserBid;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Withdraw Pending Bid — bidder reclaims an unresolved bid
//
// Once the launch date passes the maker can no longer approve
// or reject, so a still-pending bid is refunded to its owner
// and recorded as Rejected. No activation call is needed.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct WithdrawPendingBid<'info> {
    /// The bidder
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [Product::SEED, product.maker.as_ref()],
        bump = product.bump,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        mut,
        seeds = [UserBid::SEED, product.key().as_ref(), user.key().as_ref()],
        bump = user_bid.bump,
    )]
    pub user_bid: Account<'info, UserBid>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, product.key().as_ref()],
        bump = product.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawPendingBid>) -> Result<()> {
    let clock = Clock::get()?;
    let treasury_lamports = ctx.accounts.treasury.lamports();
    let refund_amount = ctx.accounts.product.release_unresolved(
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
            to: ctx.accounts.user.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(refund_ctx, refund_amount)?;

    msg!(
        "Pending bid withdrawn: user={}, refunded={}",
        ctx.accounts.user.key(),
        refund_amount,
    );

    emit!(BidWithdrawn {
        product: product_key,
        bid: ctx.accounts.user_bid.key(),
        user: ctx.accounts.user.key(),
        refund_amount,
    });

    Ok(())
}
