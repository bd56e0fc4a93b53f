use anchor_lang::prelude::*;

use crate::events::LaunchActivated;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Activate Launch — Bidding -> Launched
//
// Permissionless: any signer may advance a product whose
// launch date has arrived. Settlement does not wait on this
// call; it only records the transition on-chain.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ActivateLaunch<'info> {
    /// Anyone; the maker is not required
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [Product::SEED, product.maker.as_ref()],
        bump = product.bump,
    )]
    pub product: Box<Account<'info, Product>>,
}

pub fn handler(ctx: Context<ActivateLaunch>) -> Result<()> {
    let clock = Clock::get()?;
    let product = &mut ctx.accounts.product;

    product.activate(clock.unix_timestamp)?;

    msg!(
        "Launch activated: product={}, by={}, approved_bids={}/{}",
        product.key(),
        ctx.accounts.caller.key(),
        product.approved_bids,
        product.ipo_slots,
    );

    emit!(LaunchActivated {
        product: product.key(),
        approved_bids: product.approved_bids,
        activated_at: clock.unix_timestamp,
    });

    Ok(())
}
