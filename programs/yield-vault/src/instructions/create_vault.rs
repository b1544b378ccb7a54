use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, state::*};

/// Create a new vault for a registered user and a feed-configured asset
#[derive(Accounts)]
pub struct CreateVault<'info> {
    /// Vault owner - must hold a registered profile
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Registry PDA - tracks the global vault counter
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Owner's profile PDA
    /// Security: seeds tie the profile to the signer, and registration is
    /// the only path that creates one; an unregistered user has no profile
    /// account, so account validation rejects the call before the handler
    #[account(
        mut,
        seeds = [USER_SEED, owner.key().as_ref()],
        bump = user_profile.bump,
    )]
    pub user_profile: Account<'info, UserProfile>,

    /// Asset token mint (the underlying token users deposit)
    pub asset_mint: Account<'info, Mint>,

    /// Feed entry for the asset; a default feed means it was never configured
    #[account(
        seeds = [PRICE_FEED_SEED, asset_mint.key().as_ref()],
        bump = price_feed_entry.bump,
        constraint = price_feed_entry.feed != Pubkey::default() @ VaultError::PriceFeedNotSet,
    )]
    pub price_feed_entry: Account<'info, PriceFeedEntry>,

    /// Vault state PDA, keyed by owner and creation index so one user can
    /// hold many vaults for the same or different assets
    #[account(
        init,
        payer = owner,
        space = VAULT_STATE_SIZE,
        seeds = [VAULT_SEED, owner.key().as_ref(), &user_profile.vault_count.to_le_bytes()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Share token mint PDA (vault shares)
    /// Security: Mint authority is the vault_authority PDA
    #[account(
        init,
        payer = owner,
        seeds = [SHARE_MINT_SEED, vault_state.key().as_ref()],
        bump,
        mint::decimals = asset_mint.decimals,
        mint::authority = vault_authority,
    )]
    pub share_mint: Account<'info, Mint>,

    /// Vault authority PDA - used as mint authority for shares
    /// CHECK: PDA used as mint authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault's token account for holding assets
    #[account(
        init,
        payer = owner,
        associated_token::mint = asset_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateVault>, name: String, symbol: String) -> Result<()> {
    // CHECKS: Display bounds
    require!(name.len() <= MAX_VAULT_NAME_LEN, VaultError::VaultNameTooLong);
    require!(
        symbol.len() <= MAX_VAULT_SYMBOL_LEN,
        VaultError::VaultSymbolTooLong
    );

    let now = Clock::get()?.unix_timestamp;
    let profile = &mut ctx.accounts.user_profile;
    let registry = &mut ctx.accounts.registry;
    let vault_state = &mut ctx.accounts.vault_state;

    // EFFECTS: Immutable construction parameters
    vault_state.owner = ctx.accounts.owner.key();
    vault_state.factory = registry.key();
    vault_state.asset_mint = ctx.accounts.asset_mint.key();
    vault_state.share_mint = ctx.accounts.share_mint.key();
    vault_state.price_feed = ctx.accounts.price_feed_entry.feed;
    vault_state.name = name;
    vault_state.symbol = symbol;
    vault_state.total_assets = 0;
    vault_state.total_shares = 0;
    vault_state.created_at = now;
    vault_state.index = profile.vault_count;
    vault_state.paused = false;
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.share_bump = ctx.bumps.share_mint;
    vault_state.authority_bump = ctx.bumps.vault_authority;

    // Provenance counters
    profile.vault_count = profile
        .vault_count
        .checked_add(1)
        .ok_or(error!(VaultError::MathOverflow))?;
    registry.total_vaults = registry
        .total_vaults
        .checked_add(1)
        .ok_or(error!(VaultError::MathOverflow))?;

    emit!(VaultCreated {
        owner: vault_state.owner,
        vault: vault_state.key(),
        asset: vault_state.asset_mint,
        share_mint: vault_state.share_mint,
        index: vault_state.index,
        timestamp: now,
    });

    Ok(())
}
