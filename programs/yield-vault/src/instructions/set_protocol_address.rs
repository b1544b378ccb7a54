use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Configure one of the named protocol addresses in the registry.
/// Shared by the set_aave/set_compound/set_uniswap/set_weth entry points.
#[derive(Accounts)]
pub struct SetProtocolAddress<'info> {
    /// Acting admin
    /// Security: Membership checked against registry state
    pub admin: Signer<'info>,

    /// Registry PDA
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<SetProtocolAddress>, protocol: Protocol, address: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.set_protocol_address(&ctx.accounts.admin.key(), protocol, address)?;

    emit!(ProtocolAddressSet {
        protocol: protocol.name().to_string(),
        address,
        admin: ctx.accounts.admin.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
