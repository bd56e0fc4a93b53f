use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::errors::LaunchpadError;
use crate::events::ProductLaunched;
use crate::pda::{POOL_SEED, TREASURY_SEED};
use crate::state::enums::ProductPhase;
use crate::state::product::Product;

// ──────────────────────────────────────────────────────
// Launch Product — maker opens a sale
//
// Creates the product record, escrows the maker's deposit
// in the treasury PDA, creates the launch mint under the
// pool authority PDA and mints the full supply into the pool.
// A maker has a single product address, so a second launch
// fails on the `init` constraint.
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct LaunchProductArgs {
    pub name: String,
    pub description: String,
    pub token_symbol: String,
    pub initial_deposit: u64,
    pub ipo_slots: u32,
    pub initial_token_supply: u64,
    pub launch_date: i64,
}

#[derive(Accounts)]
pub struct LaunchProduct<'info> {
    /// The maker funding the launch
    #[account(mut)]
    pub maker: Signer<'info>,

    /// The product PDA — one per maker
    #[account(
        init,
        payer = maker,
        space = Product::LEN,
        seeds = [Product::SEED, maker.key().as_ref()],
        bump,
    )]
    pub product: Box<Account<'info, Product>>,

    /// Lamport escrow for the deposit and all bids
    #[account(
        mut,
        seeds = [TREASURY_SEED, product.key().as_ref()],
        bump,
    )]
    pub treasury: SystemAccount<'info>,

    /// Fresh mint for the launch token, signed by its keypair
    #[account(
        init,
        payer = maker,
        mint::decimals = Product::TOKEN_DECIMALS,
        mint::authority = pool_authority,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    /// Pool holding the unallocated supply
    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_pool: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA authority over the mint and the pool — no data, just a signer seed
    #[account(
        seeds = [POOL_SEED, product.key().as_ref()],
        bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<LaunchProduct>, args: LaunchProductArgs) -> Result<()> {
    let clock = Clock::get()?;

    // ── Validate inputs ──
    Product::validate_metadata(&args.name, &args.description, &args.token_symbol)?;
    require!(args.ipo_slots > 0, LaunchpadError::InvalidSlotCount);
    require!(
        args.initial_token_supply > 0,
        LaunchpadError::InsufficientTokens
    );
    let bid_close_date = Product::bid_close_date_for(args.launch_date, clock.unix_timestamp)?;

    // The treasury is a zero-data system account; the deposit must keep it alive
    let rent_reserve = ctx.accounts.rent.minimum_balance(0);
    require!(
        args.initial_deposit >= rent_reserve,
        LaunchpadError::InsufficientFunds
    );

    // ── Escrow the maker's deposit ──
    let deposit_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.maker.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
        },
    );
    system_program::transfer(deposit_ctx, args.initial_deposit)?;

    // ── Mint the supply into the pool ──
    let product_key = ctx.accounts.product.key();
    let pool_authority_bump = ctx.bumps.pool_authority;
    let seeds = &[POOL_SEED, product_key.as_ref(), &[pool_authority_bump]];
    let signer_seeds = &[&seeds[..]];

    let mint_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.token_pool.to_account_info(),
            authority: ctx.accounts.pool_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(mint_ctx, args.initial_token_supply)?;

    // ── Initialize product ──
    let product = &mut ctx.accounts.product;
    product.maker = ctx.accounts.maker.key();
    product.name = args.name;
    product.description = args.description;
    product.token_symbol = args.token_symbol;
    product.initial_deposit = args.initial_deposit;
    product.ipo_slots = args.ipo_slots;
    product.approved_bids = 0;
    product.total_token_supply = args.initial_token_supply;
    product.token_mint = ctx.accounts.token_mint.key();
    product.token_pool = ctx.accounts.token_pool.key();
    product.launch_date = args.launch_date;
    product.bid_close_date = bid_close_date;
    product.created_at = clock.unix_timestamp;
    product.phase = ProductPhase::Bidding;
    product.funds_claimed = false;
    product.total_raised = 0;
    product.bump = ctx.bumps.product;
    product.treasury_bump = ctx.bumps.treasury;
    product.pool_authority_bump = pool_authority_bump;

    msg!(
        "Product launched: maker={}, slots={}, supply={}, launch_date={}, bid_close_date={}",
        product.maker,
        product.ipo_slots,
        product.total_token_supply,
        product.launch_date,
        product.bid_close_date,
    );

    emit!(ProductLaunched {
        product: product.key(),
        maker: product.maker,
        token_mint: product.token_mint,
        initial_deposit: product.initial_deposit,
        ipo_slots: product.ipo_slots,
        total_token_supply: product.total_token_supply,
        launch_date: product.launch_date,
        bid_close_date: product.bid_close_date,
    });

    Ok(())
}
