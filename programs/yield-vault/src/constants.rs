// Constants for the Yield Vault program

/// Seed for the singleton registry PDA
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for user profile PDAs
pub const USER_SEED: &[u8] = b"user";

/// Seed for per-asset price feed entry PDAs
pub const PRICE_FEED_SEED: &[u8] = b"price_feed";

/// Seed for vault state PDAs
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for share mint PDAs
pub const SHARE_MINT_SEED: &[u8] = b"shares";

/// Seed for vault authority PDAs
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Seed for per-vault allocation ledger PDAs
pub const ALLOCATION_SEED: &[u8] = b"allocations";

/// Maximum number of administrators, deployer included
pub const MAX_ADMINS: usize = 16;

/// Maximum username length in bytes
pub const MAX_USERNAME_LEN: usize = 20;

/// Maximum bio length in bytes
pub const MAX_BIO_LEN: usize = 30;

/// Maximum vault display name length in bytes
pub const MAX_VAULT_NAME_LEN: usize = 32;

/// Maximum vault display symbol length in bytes
pub const MAX_VAULT_SYMBOL_LEN: usize = 8;

/// Maximum protocol name length in bytes
pub const MAX_PROTOCOL_NAME_LEN: usize = 32;

/// Maximum number of non-zero allocation entries per vault
pub const MAX_ALLOCATIONS: usize = 10;

/// USD valuations are reported as 18-decimal fixed point
pub const USD_DECIMALS: u32 = 18;

/// Sentinel for max_deposit / max_mint (no supply cap in this design)
pub const UNLIMITED: u64 = u64::MAX;

/// Space for Registry account (8 discriminator + 32 deployer + 4 + 16*32 admins +
/// 4*32 protocol addresses + 8 total_vaults + 1 bump + 64 padding)
pub const REGISTRY_SIZE: usize = 8 + 32 + 4 + (MAX_ADMINS * 32) + (4 * 32) + 8 + 1 + 64;

/// Space for UserProfile account (8 discriminator + 32 authority + 4 + 20 username +
/// 4 + 30 bio + 8 registered_at + 8 vault_count + 1 bump + 32 padding)
pub const USER_PROFILE_SIZE: usize =
    8 + 32 + 4 + MAX_USERNAME_LEN + 4 + MAX_BIO_LEN + 8 + 8 + 1 + 32;

/// Space for PriceFeedEntry account (8 discriminator + 32 asset + 32 feed + 1 bump)
pub const PRICE_FEED_ENTRY_SIZE: usize = 8 + 32 + 32 + 1;

/// Space for VaultState account (8 discriminator + 5*32 pubkeys + 4 + 32 name +
/// 4 + 8 symbol + 8 total_assets + 8 total_shares + 8 created_at + 8 index +
/// 1 paused + 3 bumps + 64 padding)
pub const VAULT_STATE_SIZE: usize =
    8 + (5 * 32) + 4 + MAX_VAULT_NAME_LEN + 4 + MAX_VAULT_SYMBOL_LEN + 8 + 8 + 8 + 8 + 1 + 3 + 64;

/// Space for AllocationLedger account (8 discriminator + 32 vault + 4 vec len +
/// 10 * (4 + 32 name + 8 amount) + 1 bump + 32 padding)
pub const ALLOCATION_LEDGER_SIZE: usize =
    8 + 32 + 4 + MAX_ALLOCATIONS * (4 + MAX_PROTOCOL_NAME_LEN + 8) + 1 + 32;
