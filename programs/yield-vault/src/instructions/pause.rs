use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Pause the vault, blocking deposit/mint/withdraw/redeem.
/// Reads and valuation stay live while paused.
#[derive(Accounts)]
pub struct PauseVault<'info> {
    /// Vault owner - only they can pause
    pub owner: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.owner.as_ref(), &vault_state.index.to_le_bytes()],
        bump = vault_state.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn pause_handler(ctx: Context<PauseVault>) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.set_paused(true)?;

    emit!(VaultPaused {
        vault: vault_state.key(),
        owner: ctx.accounts.owner.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Unpause the vault, restoring the money-moving entry points
#[derive(Accounts)]
pub struct UnpauseVault<'info> {
    /// Vault owner - only they can unpause
    pub owner: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.owner.as_ref(), &vault_state.index.to_le_bytes()],
        bump = vault_state.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn unpause_handler(ctx: Context<UnpauseVault>) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.set_paused(false)?;

    emit!(VaultUnpaused {
        vault: vault_state.key(),
        owner: ctx.accounts.owner.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
