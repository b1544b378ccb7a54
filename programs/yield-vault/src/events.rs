use anchor_lang::prelude::*;

/// Event emitted when the registry is initialized
#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub deployer: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a user registers a profile
#[event]
pub struct UserRegistered {
    pub user: Pubkey,
    pub username: String,
    pub timestamp: i64,
}

/// Event emitted when an admin is added to the registry
#[event]
pub struct AdminAdded {
    pub admin: Pubkey,
    pub added_by: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when an admin is removed from the registry
#[event]
pub struct AdminRemoved {
    pub admin: Pubkey,
    pub removed_by: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a named protocol address is configured
#[event]
pub struct ProtocolAddressSet {
    pub protocol: String,
    pub address: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when an asset's price feed is configured or replaced
#[event]
pub struct PriceFeedSet {
    pub asset: Pubkey,
    pub feed: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a new vault is created through the registry
#[event]
pub struct VaultCreated {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub asset: Pubkey,
    pub share_mint: Pubkey,
    pub index: u64,
    pub timestamp: i64,
}

/// Event emitted when assets enter the vault (deposit and mint paths)
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub assets: u64,
    pub shares: u64,
    pub total_assets: u64,
    pub total_shares: u64,
    pub timestamp: i64,
}

/// Event emitted when assets leave the vault (withdraw and redeem paths)
#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub owner: Pubkey,
    pub assets: u64,
    pub shares: u64,
    pub total_assets: u64,
    pub total_shares: u64,
    pub timestamp: i64,
}

/// Event emitted when a protocol allocation is changed
#[event]
pub struct ProtocolAllocationChanged {
    pub vault: Pubkey,
    pub protocol: String,
    pub old_amount: u64,
    pub new_amount: u64,
    pub total_allocated: u64,
    pub timestamp: i64,
}

/// Event emitted when a vault is paused
#[event]
pub struct VaultPaused {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a vault is unpaused
#[event]
pub struct VaultUnpaused {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

/// Event emitted on every oracle valuation read
#[event]
pub struct VaultValuation {
    pub vault: Pubkey,
    pub asset_price_usd: u128,
    pub total_value_usd: u128,
    pub share_price_usd: u128,
    pub oracle_round_id: u64,
    pub oracle_updated_at: i64,
    pub timestamp: i64,
}
