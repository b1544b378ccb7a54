use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Add an admin to the registry's admin set
#[derive(Accounts)]
pub struct AddAdmin<'info> {
    /// Acting admin
    /// Security: Membership is checked against registry state in the handler
    pub admin: Signer<'info>,

    /// Registry PDA
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn add_admin_handler(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.add_admin(&ctx.accounts.admin.key(), new_admin)?;

    emit!(AdminAdded {
        admin: new_admin,
        added_by: ctx.accounts.admin.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Remove an admin from the registry's admin set
#[derive(Accounts)]
pub struct RemoveAdmin<'info> {
    /// Acting admin
    pub admin: Signer<'info>,

    /// Registry PDA
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn remove_admin_handler(ctx: Context<RemoveAdmin>, admin_to_remove: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.remove_admin(&ctx.accounts.admin.key(), &admin_to_remove)?;

    emit!(AdminRemoved {
        admin: admin_to_remove,
        removed_by: ctx.accounts.admin.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
