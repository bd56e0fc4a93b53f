use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::LaunchpadError;
use crate::events::ProceedsWithdrawn;
use crate::pda::TREASURY_SEED;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Withdraw Proceeds — -> Completed, after the launch date
//
// The maker takes the initial deposit plus every approved
// bid. Lamports of bids still pending stay in the treasury,
// along with its rent-exempt reserve, so those bidders can
// always pull their refund with `withdraw_pending_bid`.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    /// The maker of the product
    #[account(mut)]
    pub product_owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Product::SEED, product.maker.as_ref()],
        bump = product.bump,
        constraint = product.maker == product_owner.key() @ LaunchpadError::UnauthorizedAccess,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, product.key().as_ref()],
        bump = product.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawProceeds>) -> Result<()> {
    let clock = Clock::get()?;
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let treasury_lamports = ctx.accounts.treasury.lamports();

    let proceeds = ctx
        .accounts
        .product
        .complete(rent_reserve, treasury_lamports, clock.unix_timestamp)?;

    let product_key = ctx.accounts.product.key();
    let treasury_bump = ctx.accounts.product.treasury_bump;
    let seeds = &[TREASURY_SEED, product_key.as_ref(), &[treasury_bump]];
    let signer_seeds = &[&seeds[..]];

    if proceeds > 0 {
        let withdraw_ctx = CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.product_owner.to_account_info(),
            },
            signer_seeds,
        );
        system_program::transfer(withdraw_ctx, proceeds)?;
    }

    msg!(
        "Proceeds withdrawn: product={}, amount={}, raised={}",
        product_key,
        proceeds,
        ctx.accounts.product.total_raised,
    );

    emit!(ProceedsWithdrawn {
        product: product_key,
        maker: ctx.accounts.product_owner.key(),
        amount: proceeds,
        withdrawn_at: clock.unix_timestamp,
    });

    Ok(())
}
