use anchor_lang::prelude::*;

use crate::pda::GLOBAL_CONFIG_SEED;

// ──────────────────────────────────────────────────────
// Global Config — singleton PDA, initialized once
//
// There is no update instruction: the `init` constraint
// on `init_protocol` is the only writer.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct GlobalConfig {
    /// The protocol operator
    pub protocol_admin: Pubkey,

    /// PDA bump
    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = 8   // discriminator
        + 32                    // protocol_admin
        + 1;                    // bump

    pub const SEED: &'static [u8] = GLOBAL_CONFIG_SEED;
}
