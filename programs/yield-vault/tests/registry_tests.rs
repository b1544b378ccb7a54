/// Registry logic tests: user registration bounds, admin set lifecycle,
/// protocol address configuration, and PDA derivation.
///
/// These exercise the state types directly, the same way the vault math
/// tests do; account-level constraints (signer checks, PDA seeds,
/// init_if_needed) are enforced by Anchor at the instruction boundary.
use anchor_lang::prelude::*;
use yield_vault::{
    constants::*,
    state::{Protocol, Registry, UserProfile},
};

fn mock_registry(deployer: Pubkey) -> Registry {
    Registry {
        deployer,
        admins: vec![deployer],
        aave: Pubkey::default(),
        compound: Pubkey::default(),
        uniswap: Pubkey::default(),
        weth: Pubkey::default(),
        total_vaults: 0,
        bump: 255,
    }
}

// =============================================================================
// Registration bounds
// =============================================================================

#[test]
fn test_registration_bounds() {
    assert!(UserProfile::validate("alice", "likes yield").is_ok());
    assert!(UserProfile::validate("", "bio").is_err());
    assert!(UserProfile::validate(&"a".repeat(20), &"b".repeat(30)).is_ok());
    assert!(UserProfile::validate(&"a".repeat(21), "").is_err());
    assert!(UserProfile::validate("bob", &"b".repeat(31)).is_err());
}

fn blank_profile() -> UserProfile {
    UserProfile {
        authority: Pubkey::default(),
        username: String::new(),
        bio: String::new(),
        registered_at: 0,
        vault_count: 0,
        bump: 255,
    }
}

#[test]
fn test_registration_is_one_shot() {
    let mut profile = blank_profile();
    let wallet = Pubkey::new_unique();

    profile
        .register(wallet, "alice".to_string(), "yield farmer".to_string(), 1_700_000_000)
        .unwrap();
    assert_eq!(profile.authority, wallet);
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.registered_at, 1_700_000_000);

    // The same identity registering again always fails, whatever the
    // new field values are
    let result = profile.register(wallet, "alice-v2".to_string(), String::new(), 1_700_000_100);
    assert!(result.is_err());

    // And the original profile is untouched
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.bio, "yield farmer");
    assert_eq!(profile.registered_at, 1_700_000_000);
}

#[test]
fn test_register_rejects_invalid_fields_before_write() {
    let mut profile = blank_profile();
    let wallet = Pubkey::new_unique();

    assert!(profile
        .register(wallet, String::new(), String::new(), 0)
        .is_err());
    // A failed registration leaves the profile blank and registrable
    assert_eq!(profile.authority, Pubkey::default());
    profile
        .register(wallet, "bob".to_string(), String::new(), 0)
        .unwrap();
}

#[test]
fn test_same_name_different_identities_allowed() {
    // Two wallets may register the same display name; uniqueness is on
    // the identity (PDA per wallet), not the name
    let mut first = blank_profile();
    let mut second = blank_profile();
    first
        .register(Pubkey::new_unique(), "satoshi".to_string(), String::new(), 0)
        .unwrap();
    second
        .register(Pubkey::new_unique(), "satoshi".to_string(), String::new(), 0)
        .unwrap();
}

// =============================================================================
// Admin set lifecycle
// =============================================================================

#[test]
fn test_admin_lifecycle() {
    let deployer = Pubkey::new_unique();
    let mut registry = mock_registry(deployer);
    let ops = Pubkey::new_unique();
    let security = Pubkey::new_unique();

    registry.add_admin(&deployer, ops).unwrap();
    registry.add_admin(&ops, security).unwrap();
    assert_eq!(registry.admin_count(), 3);

    registry.remove_admin(&security, &ops).unwrap();
    assert_eq!(registry.admin_count(), 2);
    assert!(!registry.is_admin(&ops));
    assert!(registry.is_admin(&deployer));
    assert!(registry.is_admin(&security));
}

#[test]
fn test_admin_set_capacity() {
    let deployer = Pubkey::new_unique();
    let mut registry = mock_registry(deployer);

    for _ in 0..MAX_ADMINS - 1 {
        registry.add_admin(&deployer, Pubkey::new_unique()).unwrap();
    }
    assert_eq!(registry.admin_count(), MAX_ADMINS);
    assert!(registry.add_admin(&deployer, Pubkey::new_unique()).is_err());
}

#[test]
fn test_removed_admin_loses_privileges() {
    let deployer = Pubkey::new_unique();
    let mut registry = mock_registry(deployer);
    let ops = Pubkey::new_unique();

    registry.add_admin(&deployer, ops).unwrap();
    registry.remove_admin(&deployer, &ops).unwrap();

    // A removed admin can no longer act
    assert!(registry.add_admin(&ops, Pubkey::new_unique()).is_err());
    assert!(registry
        .set_protocol_address(&ops, Protocol::Aave, Pubkey::new_unique())
        .is_err());
}

// =============================================================================
// Protocol address configuration
// =============================================================================

#[test]
fn test_protocol_addresses_default_unset() {
    let registry = mock_registry(Pubkey::new_unique());
    for p in [
        Protocol::Aave,
        Protocol::Compound,
        Protocol::Uniswap,
        Protocol::Weth,
    ] {
        assert_eq!(registry.protocol_address(p), Pubkey::default());
    }
}

#[test]
fn test_protocol_address_configuration() {
    let deployer = Pubkey::new_unique();
    let mut registry = mock_registry(deployer);

    let aave = Pubkey::new_unique();
    let compound = Pubkey::new_unique();
    registry
        .set_protocol_address(&deployer, Protocol::Aave, aave)
        .unwrap();
    registry
        .set_protocol_address(&deployer, Protocol::Compound, compound)
        .unwrap();

    assert_eq!(registry.protocol_address(Protocol::Aave), aave);
    assert_eq!(registry.protocol_address(Protocol::Compound), compound);
    // Unconfigured entries stay at the default
    assert_eq!(registry.protocol_address(Protocol::Uniswap), Pubkey::default());
}

#[test]
fn test_non_admin_cannot_configure() {
    let deployer = Pubkey::new_unique();
    let mut registry = mock_registry(deployer);
    let stranger = Pubkey::new_unique();

    assert!(registry
        .set_protocol_address(&stranger, Protocol::Weth, Pubkey::new_unique())
        .is_err());
}

// =============================================================================
// PDA derivation
// =============================================================================

#[test]
fn test_pda_derivation() {
    let program_id = yield_vault::id();
    let user = Pubkey::new_unique();

    let (registry, registry_bump) =
        Pubkey::find_program_address(&[REGISTRY_SEED], &program_id);
    let (profile, _) =
        Pubkey::find_program_address(&[USER_SEED, user.as_ref()], &program_id);
    let (vault_0, _) = Pubkey::find_program_address(
        &[VAULT_SEED, user.as_ref(), &0u64.to_le_bytes()],
        &program_id,
    );
    let (vault_1, _) = Pubkey::find_program_address(
        &[VAULT_SEED, user.as_ref(), &1u64.to_le_bytes()],
        &program_id,
    );

    assert!(registry_bump <= 255);
    assert_ne!(registry, profile);
    // Each vault index derives a distinct address, so the per-user vault
    // list is enumerable in creation order
    assert_ne!(vault_0, vault_1);
}

#[test]
fn test_vault_child_pdas_unique_per_vault() {
    let program_id = yield_vault::id();
    let vault_a = Pubkey::new_unique();
    let vault_b = Pubkey::new_unique();

    let (shares_a, _) =
        Pubkey::find_program_address(&[SHARE_MINT_SEED, vault_a.as_ref()], &program_id);
    let (shares_b, _) =
        Pubkey::find_program_address(&[SHARE_MINT_SEED, vault_b.as_ref()], &program_id);
    let (authority_a, _) =
        Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, vault_a.as_ref()], &program_id);
    let (ledger_a, _) =
        Pubkey::find_program_address(&[ALLOCATION_SEED, vault_a.as_ref()], &program_id);

    assert_ne!(shares_a, shares_b);
    assert_ne!(shares_a, authority_a);
    assert_ne!(shares_a, ledger_a);
    assert_ne!(authority_a, ledger_a);
}
