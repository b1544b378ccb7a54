use anchor_lang::prelude::*;

use crate::{constants::*, errors::VaultError};

/// Per-vault state tracking custody totals and share issuance
///
/// Security considerations:
/// - Owner and factory stored in state (not instruction args)
/// - total_assets is the single source of truth for conversion math
/// - Bumps stored for efficient PDA signing
/// - Padding reserved for future upgrades
#[account]
pub struct VaultState {
    /// User that owns this vault; only they can allocate and pause
    pub owner: Pubkey,

    /// Registry that created this vault
    pub factory: Pubkey,

    /// Mint of the underlying asset token
    pub asset_mint: Pubkey,

    /// Mint of the vault share token
    pub share_mint: Pubkey,

    /// Oracle feed account bound at creation time
    pub price_feed: Pubkey,

    /// Display name, up to 32 bytes
    pub name: String,

    /// Display symbol, up to 8 bytes
    pub symbol: String,

    /// Total assets held by the vault as tracked by its own bookkeeping
    pub total_assets: u64,

    /// Total shares issued to depositors; mirrors the share mint supply
    pub total_shares: u64,

    /// Wall-clock timestamp at creation
    pub created_at: i64,

    /// Position in the owner's vault list (creation order)
    pub index: u64,

    /// Blocks deposit/mint/withdraw/redeem while true; reads stay live
    pub paused: bool,

    /// Bump seed for vault state PDA
    pub bump: u8,

    /// Bump seed for share mint PDA
    pub share_bump: u8,

    /// Bump seed for vault authority PDA
    pub authority_bump: u8,
}

/// assets * numerator / denominator rounded down, widened to u128
fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(error!(VaultError::MathOverflow))?;
    let quotient = product
        .checked_div(denominator as u128)
        .ok_or(error!(VaultError::DivisionByZero))?;
    u64::try_from(quotient).map_err(|_| error!(VaultError::MathOverflow))
}

/// assets * numerator / denominator rounded up, widened to u128
fn mul_div_ceil(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(error!(VaultError::MathOverflow))?;
    let denominator = denominator as u128;
    if denominator == 0 {
        return Err(error!(VaultError::DivisionByZero));
    }
    let quotient = product
        .checked_add(denominator - 1)
        .ok_or(error!(VaultError::MathOverflow))?
        / denominator;
    u64::try_from(quotient).map_err(|_| error!(VaultError::MathOverflow))
}

/// Authorize spending `shares` from a holder's share account. The caller
/// must be the holder themselves, or the account's SPL delegate with a
/// sufficient delegated amount (the token program decrements it on burn).
pub fn verify_share_spender(
    account_owner: &Pubkey,
    delegate: Option<Pubkey>,
    delegated_amount: u64,
    caller: &Pubkey,
    shares: u64,
) -> Result<()> {
    if account_owner == caller {
        return Ok(());
    }
    require!(
        delegate == Some(*caller) && delegated_amount >= shares,
        VaultError::InsufficientAllowance
    );
    Ok(())
}

impl VaultState {
    /// Shares minted for a given asset amount (floor)
    ///
    /// ERC-4626 formula:
    /// - Empty vault: shares = assets (1:1 bootstrap)
    /// - Otherwise: shares = assets * total_shares / total_assets
    pub fn convert_to_shares(&self, assets: u64) -> Result<u64> {
        if self.total_shares == 0 || self.total_assets == 0 {
            return Ok(assets);
        }
        mul_div_floor(assets, self.total_shares, self.total_assets)
    }

    /// Asset value of a given share amount (floor)
    ///
    /// ERC-4626 formula: assets = shares * total_assets / total_shares,
    /// 1:1 when no shares exist
    pub fn convert_to_assets(&self, shares: u64) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(shares);
        }
        mul_div_floor(shares, self.total_assets, self.total_shares)
    }

    /// Shares minted by `deposit` (rounds down, against the depositor)
    pub fn preview_deposit(&self, assets: u64) -> Result<u64> {
        self.convert_to_shares(assets)
    }

    /// Assets required by `mint` (rounds up so the vault is never
    /// under-collateralized)
    pub fn preview_mint(&self, shares: u64) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(shares);
        }
        mul_div_ceil(shares, self.total_assets, self.total_shares)
    }

    /// Shares burned by `withdraw` (rounds up, protecting the vault)
    pub fn preview_withdraw(&self, assets: u64) -> Result<u64> {
        if self.total_shares == 0 || self.total_assets == 0 {
            return Ok(assets);
        }
        mul_div_ceil(assets, self.total_shares, self.total_assets)
    }

    /// Assets paid out by `redeem` (rounds down, against the redeemer)
    pub fn preview_redeem(&self, shares: u64) -> Result<u64> {
        self.convert_to_assets(shares)
    }

    /// No caller-specific supply cap in this design
    pub fn max_deposit(&self) -> u64 {
        UNLIMITED
    }

    pub fn max_mint(&self) -> u64 {
        UNLIMITED
    }

    /// Assets withdrawable against a holder's share balance
    pub fn max_withdraw(&self, holder_shares: u64) -> Result<u64> {
        self.convert_to_assets(holder_shares)
    }

    pub fn max_redeem(&self, holder_shares: u64) -> u64 {
        holder_shares
    }

    /// Record a deposit/mint against the custody totals.
    /// Called before any token CPI (checks-effects-interactions).
    pub fn credit(&mut self, assets: u64, shares: u64) -> Result<()> {
        self.total_assets = self
            .total_assets
            .checked_add(assets)
            .ok_or(error!(VaultError::MathOverflow))?;
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(error!(VaultError::MathOverflow))?;
        Ok(())
    }

    /// Record a withdraw/redeem against the custody totals.
    pub fn debit(&mut self, assets: u64, shares: u64) -> Result<()> {
        self.total_assets = self
            .total_assets
            .checked_sub(assets)
            .ok_or(error!(VaultError::InsufficientShares))?;
        self.total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or(error!(VaultError::InsufficientShares))?;
        Ok(())
    }

    /// Flip the pause switch. Rejects transitions into the current state.
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        require!(self.paused != paused, VaultError::EnforcedPause);
        self.paused = paused;
        Ok(())
    }
}
