use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Set the notional allocation of vault assets to a named protocol
#[derive(Accounts)]
pub struct SetProtocolAllocation<'info> {
    /// Vault owner - only they can allocate
    /// Security: has_one constraint validates owner from state
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Vault state PDA
    #[account(
        seeds = [VAULT_SEED, vault_state.owner.as_ref(), &vault_state.index.to_le_bytes()],
        bump = vault_state.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Allocation ledger PDA, created on the first allocation
    #[account(
        init_if_needed,
        payer = owner,
        space = ALLOCATION_LEDGER_SIZE,
        seeds = [ALLOCATION_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub allocation_ledger: Account<'info, AllocationLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetProtocolAllocation>, protocol: String, amount: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.allocation_ledger;

    // Initialize ledger if first time
    if ledger.vault == Pubkey::default() {
        ledger.vault = ctx.accounts.vault_state.key();
        ledger.bump = ctx.bumps.allocation_ledger;
        ledger.entries = Vec::new();
    }

    // CHECKS + EFFECTS: Ledger enforces name bounds and the assets ceiling
    let (old_amount, total_allocated) =
        ledger.set_allocation(&protocol, amount, ctx.accounts.vault_state.total_assets)?;

    emit!(ProtocolAllocationChanged {
        vault: ledger.vault,
        protocol,
        old_amount,
        new_amount: amount,
        total_allocated,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
