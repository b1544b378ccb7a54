use anchor_lang::prelude::*;

/// Custom error codes for the Yield Vault program
///
/// Security: Descriptive error messages without information leakage
#[error_code]
pub enum VaultError {
    // --- Registration ---
    #[msg("Username cannot be empty")]
    EmptyUsername,

    #[msg("Username too long - maximum 20 characters")]
    UsernameTooLong,

    #[msg("Bio too long - maximum 30 characters")]
    BioTooLong,

    #[msg("User is already registered")]
    AlreadyRegistered,

    #[msg("User is not registered")]
    NotRegistered,

    // --- Admin management ---
    #[msg("Caller is not an admin")]
    NotAdmin,

    #[msg("Admin already exists")]
    AdminAlreadyExists,

    #[msg("Admin does not exist")]
    AdminDoesNotExist,

    #[msg("Cannot remove the deployer admin")]
    CannotRemoveDeployer,

    #[msg("Admin set is full - maximum admins reached")]
    AdminSetFull,

    // --- Configuration ---
    #[msg("Address cannot be the zero address")]
    ZeroAddress,

    #[msg("No price feed configured for this asset")]
    PriceFeedNotSet,

    #[msg("Vault name too long - maximum 32 characters")]
    VaultNameTooLong,

    #[msg("Vault symbol too long - maximum 8 characters")]
    VaultSymbolTooLong,

    // --- Vault operations ---
    #[msg("Deposit amount must be greater than zero")]
    ZeroDepositAmount,

    #[msg("Mint amount must be greater than zero")]
    ZeroMintAmount,

    #[msg("Withdraw amount must be greater than zero")]
    ZeroWithdrawAmount,

    #[msg("Redeem amount must be greater than zero")]
    ZeroRedeemAmount,

    #[msg("Insufficient shares for withdrawal")]
    InsufficientShares,

    #[msg("Caller allowance is insufficient to spend owner shares")]
    InsufficientAllowance,

    #[msg("Unauthorized - only the vault owner can perform this action")]
    Unauthorized,

    #[msg("Vault is already in the requested pause state")]
    EnforcedPause,

    // --- Allocation ledger ---
    #[msg("Protocol name cannot be empty")]
    InvalidProtocolName,

    #[msg("Protocol name too long - maximum 32 characters")]
    ProtocolNameTooLong,

    #[msg("Total allocation would exceed vault assets")]
    AllocationExceedsBalance,

    #[msg("Allocation table is full - maximum protocols reached")]
    AllocationTableFull,

    // --- Math and oracle ---
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,

    #[msg("Cannot divide by zero - vault has no shares")]
    DivisionByZero,

    #[msg("Invalid token mint - does not match vault asset")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Price feed account could not be read")]
    InvalidPriceFeed,

    #[msg("Oracle reported a non-positive price")]
    InvalidOraclePrice,
}
