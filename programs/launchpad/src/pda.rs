use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Program-derived addresses
//
// Every record the program owns lives at an address derived
// from one of these tags plus the identities it belongs to.
// The account constraints in `instructions/` and the helpers
// below share these constants, so on-chain validation and
// off-chain clients always derive the same address.
// ──────────────────────────────────────────────────────

pub const GLOBAL_CONFIG_SEED: &[u8] = b"global-config";
pub const PRODUCT_SEED: &[u8] = b"product";
pub const BID_SEED: &[u8] = b"bid";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const POOL_SEED: &[u8] = b"pool";

/// Singleton protocol config.
pub fn find_global_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED], program_id)
}

/// One product per maker.
pub fn find_product_address(program_id: &Pubkey, maker: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PRODUCT_SEED, maker.as_ref()], program_id)
}

/// One bid per (product, user) pair.
pub fn find_bid_address(program_id: &Pubkey, product: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BID_SEED, product.as_ref(), user.as_ref()], program_id)
}

/// Lamport escrow for a product's deposit and bids.
pub fn find_treasury_address(program_id: &Pubkey, product: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED, product.as_ref()], program_id)
}

/// Mint authority and owner of the product's token pool.
pub fn find_pool_authority_address(program_id: &Pubkey, product: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, product.as_ref()], program_id)
}

/// The token pool is the pool authority's associated token account.
pub fn find_token_pool_address(pool_authority: &Pubkey, token_mint: &Pubkey) -> Pubkey {
    anchor_spl::associated_token::get_associated_token_address(pool_authority, token_mint)
}
