// Yield Vault - multi-tenant ERC-4626-style vault platform on Solana
// Architecture: singleton Registry (users, admins, protocol config) that
// creates per-user Vaults; each vault owns its share issuance, custody
// bookkeeping, allocation ledger, and pause switch.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod oracle;
pub mod state;

use instructions::*;
use state::Protocol;

declare_id!("B91mRimDBXdXEkghzNuxNHV8vjG7RX6KiHpgddXVo6p1");

#[program]
pub mod yield_vault {
    use super::*;

    /// Initialize the singleton registry; the payer becomes the deployer
    /// admin and can never be removed from the admin set
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    /// Register a user profile (one-shot per wallet)
    ///
    /// Validation: username 1..=20 bytes, bio up to 30 bytes
    pub fn register_user(ctx: Context<RegisterUser>, username: String, bio: String) -> Result<()> {
        instructions::register_user::handler(ctx, username, bio)
    }

    /// Add an admin to the registry (admin-only)
    pub fn add_admin(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::manage_admins::add_admin_handler(ctx, new_admin)
    }

    /// Remove an admin from the registry (admin-only; the deployer is
    /// permanent)
    pub fn remove_admin(ctx: Context<RemoveAdmin>, admin_to_remove: Pubkey) -> Result<()> {
        instructions::manage_admins::remove_admin_handler(ctx, admin_to_remove)
    }

    /// Configure the price feed for an asset (admin-only, overwrite-safe)
    pub fn set_asset_price_feed(ctx: Context<SetAssetPriceFeed>, feed: Pubkey) -> Result<()> {
        instructions::set_price_feed::handler(ctx, feed)
    }

    /// Configure the Aave address (admin-only)
    pub fn set_aave_address(ctx: Context<SetProtocolAddress>, address: Pubkey) -> Result<()> {
        instructions::set_protocol_address::handler(ctx, Protocol::Aave, address)
    }

    /// Configure the Compound address (admin-only)
    pub fn set_compound_address(ctx: Context<SetProtocolAddress>, address: Pubkey) -> Result<()> {
        instructions::set_protocol_address::handler(ctx, Protocol::Compound, address)
    }

    /// Configure the Uniswap address (admin-only)
    pub fn set_uniswap_address(ctx: Context<SetProtocolAddress>, address: Pubkey) -> Result<()> {
        instructions::set_protocol_address::handler(ctx, Protocol::Uniswap, address)
    }

    /// Configure the WETH address (admin-only)
    pub fn set_weth_address(ctx: Context<SetProtocolAddress>, address: Pubkey) -> Result<()> {
        instructions::set_protocol_address::handler(ctx, Protocol::Weth, address)
    }

    /// Create a vault for the calling user and a feed-configured asset.
    /// A user may create any number of vaults; each gets the next index
    /// in their creation-ordered vault list.
    pub fn create_vault(ctx: Context<CreateVault>, name: String, symbol: String) -> Result<()> {
        instructions::create_vault::handler(ctx, name, symbol)
    }

    /// Deposit assets into a vault and receive proportional shares
    ///
    /// Security considerations:
    /// - Shares computed from pre-transfer totals with checked math
    /// - Checks-effects-interactions: totals updated before token CPIs
    /// - Blocked while paused
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Mint an exact number of shares; the asset cost rounds up so the
    /// vault is never under-collateralized
    pub fn mint_shares(ctx: Context<MintShares>, shares: u64) -> Result<()> {
        instructions::mint_shares::handler(ctx, shares)
    }

    /// Withdraw an exact amount of assets; the share cost rounds up.
    /// The caller may spend a holder's shares via an SPL delegation.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Redeem an exact number of shares; the asset payout rounds down
    pub fn redeem(ctx: Context<Redeem>, shares: u64) -> Result<()> {
        instructions::redeem::handler(ctx, shares)
    }

    /// Set the notional allocation of vault assets to a named protocol
    /// (vault-owner-only; total allocations never exceed vault assets)
    pub fn set_protocol_allocation(
        ctx: Context<SetProtocolAllocation>,
        protocol: String,
        amount: u64,
    ) -> Result<()> {
        instructions::set_allocation::handler(ctx, protocol, amount)
    }

    /// Pause the vault (owner-only); blocks the four money movements
    /// while leaving every read operable
    pub fn pause_vault(ctx: Context<PauseVault>) -> Result<()> {
        instructions::pause::pause_handler(ctx)
    }

    /// Unpause the vault (owner-only)
    pub fn unpause_vault(ctx: Context<UnpauseVault>) -> Result<()> {
        instructions::pause::unpause_handler(ctx)
    }

    /// Read the oracle and emit the vault's USD valuation; the feed is
    /// re-read on every call so price updates surface immediately
    pub fn vault_valuation(ctx: Context<VaultValuationRead>) -> Result<()> {
        instructions::vault_valuation::handler(ctx)
    }
}
