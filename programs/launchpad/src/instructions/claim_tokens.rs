use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::LaunchpadError;
use crate::events::TokensClaimed;
use crate::pda::POOL_SEED;
use crate::state::bid::UserBid;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Claim Tokens — approved bidder pulls their allocation
//
// One-shot per bid. Tokens move from the pool, signed by
// the pool authority PDA, into the bidder's ATA.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    /// The approved bidder
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
        constraint = token_mint.key() == product.token_mint,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = token_pool.key() == product.token_pool,
    )]
    pub token_pool: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA authority over the pool
    #[account(
        seeds = [POOL_SEED, product.key().as_ref()],
        bump = product.pool_authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// The bidder's token account, created on first claim
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<ClaimTokens>) -> Result<()> {
    let clock = Clock::get()?;
    require!(
        ctx.accounts.product.has_launched(clock.unix_timestamp),
        LaunchpadError::LaunchDateNotReached
    );

    let pool_balance = ctx.accounts.token_pool.amount;
    let token_amount = ctx.accounts.user_bid.claim_tokens(pool_balance)?;

    let product_key = ctx.accounts.product.key();
    let pool_authority_bump = ctx.accounts.product.pool_authority_bump;
    let seeds = &[POOL_SEED, product_key.as_ref(), &[pool_authority_bump]];
    let signer_seeds = &[&seeds[..]];

    if token_amount > 0 {
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_pool.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, token_amount)?;
    }

    msg!(
        "Tokens claimed: user={}, amount={}",
        ctx.accounts.user.key(),
        token_amount,
    );

    emit!(TokensClaimed {
        product: product_key,
        bid: ctx.accounts.user_bid.key(),
        user: ctx.accounts.user.key(),
        token_amount,
    });

    Ok(())
}
