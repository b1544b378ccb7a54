use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Initialize the singleton registry; the payer becomes the deployer admin
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Deployer - permanent admin of the registry
    /// Security: Must be signer, stored in state
    #[account(mut)]
    pub deployer: Signer<'info>,

    /// Registry PDA
    /// Security: Singleton enforced by the fixed seed
    #[account(
        init,
        payer = deployer,
        space = REGISTRY_SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.deployer = ctx.accounts.deployer.key();
    registry.admins = vec![ctx.accounts.deployer.key()];
    registry.aave = Pubkey::default();
    registry.compound = Pubkey::default();
    registry.uniswap = Pubkey::default();
    registry.weth = Pubkey::default();
    registry.total_vaults = 0;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        registry: registry.key(),
        deployer: registry.deployer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
