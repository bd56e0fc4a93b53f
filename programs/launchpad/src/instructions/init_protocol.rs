use anchor_lang::prelude::*;

use crate::events::ProtocolInitialized;
use crate::state::config::GlobalConfig;

// ──────────────────────────────────────────────────────
// Initialize Protocol — called once by the operator
//
// The `init` constraint fails with "already in use" if the
// config PDA exists, so there is exactly one writer ever.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct InitProtocol<'info> {
    /// The global config PDA, derived from a fixed seed
    #[account(
        init,
        payer = signer,
        space = GlobalConfig::LEN,
        seeds = [GlobalConfig::SEED],
        bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Becomes the protocol admin
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitProtocol>) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.protocol_admin = ctx.accounts.signer.key();
    config.bump = ctx.bumps.global_config;

    msg!("Protocol initialized: admin={}", config.protocol_admin);

    emit!(ProtocolInitialized {
        config: config.key(),
        protocol_admin: config.protocol_admin,
    });

    Ok(())
}
