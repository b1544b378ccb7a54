use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, oracle, state::*};

/// Read the oracle and report the vault's USD valuation.
/// The feed account is re-read on every call so a price update is
/// reflected immediately; nothing is cached in vault state.
#[derive(Accounts)]
pub struct VaultValuationRead<'info> {
    /// Vault state PDA
    #[account(
        seeds = [VAULT_SEED, vault_state.owner.as_ref(), &vault_state.index.to_le_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Asset mint, read for its decimal count
    #[account(address = vault_state.asset_mint)]
    pub asset_mint: Account<'info, Mint>,

    /// Oracle feed bound to this vault at creation
    /// CHECK: Address pinned to the feed recorded in vault state; the
    /// round layout is validated on deserialization
    #[account(address = vault_state.price_feed @ VaultError::InvalidPriceFeed)]
    pub price_feed: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<VaultValuationRead>) -> Result<()> {
    let vault_state = &ctx.accounts.vault_state;
    let decimals = ctx.accounts.asset_mint.decimals;

    let round = oracle::PriceRound::load(&ctx.accounts.price_feed)?;
    let asset_price_usd = round.price_usd()?;
    let total_value_usd =
        oracle::total_value_usd(vault_state.total_assets, decimals, asset_price_usd)?;
    // Share mint decimals equal the asset's by construction
    let share_price_usd = oracle::share_price_usd(
        total_value_usd,
        vault_state.total_shares,
        decimals,
        asset_price_usd,
    )?;

    emit!(VaultValuation {
        vault: vault_state.key(),
        asset_price_usd,
        total_value_usd,
        share_price_usd,
        oracle_round_id: round.round_id,
        oracle_updated_at: round.updated_at,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
