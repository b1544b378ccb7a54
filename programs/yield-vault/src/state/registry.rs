use anchor_lang::prelude::*;

use crate::{constants::*, errors::VaultError};

/// Named external protocols whose addresses the registry tracks
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Aave,
    Compound,
    Uniswap,
    Weth,
}

impl Protocol {
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Aave => "Aave",
            Protocol::Compound => "Compound",
            Protocol::Uniswap => "Uniswap",
            Protocol::Weth => "WETH",
        }
    }
}

/// Singleton registry: admin set, protocol addresses, and vault provenance
///
/// Security considerations:
/// - The deployer admin is set once at initialization and can never be removed
/// - All configuration writes are gated on admin membership
/// - Vault counter only ever increments (provenance is append-only)
#[account]
pub struct Registry {
    /// Admin established at initialization; permanent member of the admin set
    pub deployer: Pubkey,

    /// Ordered admin set, deployer included; no duplicates
    pub admins: Vec<Pubkey>,

    /// Configured Aave address (default pubkey until first set)
    pub aave: Pubkey,

    /// Configured Compound address
    pub compound: Pubkey,

    /// Configured Uniswap address
    pub uniswap: Pubkey,

    /// Configured WETH address
    pub weth: Pubkey,

    /// Total number of vaults created across all users
    pub total_vaults: u64,

    /// Bump seed for the registry PDA
    pub bump: u8,
}

impl Registry {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.iter().any(|a| a == key)
    }

    pub fn admin_count(&self) -> usize {
        self.admins.len()
    }

    /// Add a new admin. The actor must already be an admin.
    pub fn add_admin(&mut self, actor: &Pubkey, new_admin: Pubkey) -> Result<()> {
        require!(self.is_admin(actor), VaultError::NotAdmin);
        require!(!self.is_admin(&new_admin), VaultError::AdminAlreadyExists);
        require!(self.admins.len() < MAX_ADMINS, VaultError::AdminSetFull);
        self.admins.push(new_admin);
        Ok(())
    }

    /// Remove an admin, preserving insertion order. The deployer is permanent.
    pub fn remove_admin(&mut self, actor: &Pubkey, admin: &Pubkey) -> Result<()> {
        require!(self.is_admin(actor), VaultError::NotAdmin);
        require!(*admin != self.deployer, VaultError::CannotRemoveDeployer);
        let pos = self
            .admins
            .iter()
            .position(|a| a == admin)
            .ok_or(error!(VaultError::AdminDoesNotExist))?;
        self.admins.remove(pos);
        Ok(())
    }

    pub fn protocol_address(&self, protocol: Protocol) -> Pubkey {
        match protocol {
            Protocol::Aave => self.aave,
            Protocol::Compound => self.compound,
            Protocol::Uniswap => self.uniswap,
            Protocol::Weth => self.weth,
        }
    }

    /// Store a protocol address. Overwriting an existing entry is allowed.
    pub fn set_protocol_address(
        &mut self,
        actor: &Pubkey,
        protocol: Protocol,
        address: Pubkey,
    ) -> Result<()> {
        require!(self.is_admin(actor), VaultError::NotAdmin);
        require!(address != Pubkey::default(), VaultError::ZeroAddress);
        match protocol {
            Protocol::Aave => self.aave = address,
            Protocol::Compound => self.compound = address,
            Protocol::Uniswap => self.uniswap = address,
            Protocol::Weth => self.weth = address,
        }
        Ok(())
    }
}

/// Per-asset price feed entry, keyed by asset mint via PDA seeds
#[account]
pub struct PriceFeedEntry {
    /// Asset mint this entry belongs to
    pub asset: Pubkey,

    /// Oracle feed account for the asset (default pubkey means unset)
    pub feed: Pubkey,

    /// Bump seed for the entry PDA
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_registry(deployer: Pubkey) -> Registry {
        Registry {
            deployer,
            admins: vec![deployer],
            aave: Pubkey::default(),
            compound: Pubkey::default(),
            uniswap: Pubkey::default(),
            weth: Pubkey::default(),
            total_vaults: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_deployer_is_admin() {
        let deployer = Pubkey::new_unique();
        let registry = mock_registry(deployer);
        assert!(registry.is_admin(&deployer));
        assert_eq!(registry.admin_count(), 1);
    }

    #[test]
    fn test_add_admin() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let other = Pubkey::new_unique();

        registry.add_admin(&deployer, other).unwrap();
        assert!(registry.is_admin(&other));
        assert_eq!(registry.admin_count(), 2);
    }

    #[test]
    fn test_add_admin_rejects_duplicate() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let other = Pubkey::new_unique();

        registry.add_admin(&deployer, other).unwrap();
        assert!(registry.add_admin(&deployer, other).is_err());
    }

    #[test]
    fn test_add_admin_rejects_non_admin_actor() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let stranger = Pubkey::new_unique();

        assert!(registry.add_admin(&stranger, Pubkey::new_unique()).is_err());
    }

    #[test]
    fn test_remove_admin() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let other = Pubkey::new_unique();

        registry.add_admin(&deployer, other).unwrap();
        registry.remove_admin(&deployer, &other).unwrap();
        assert!(!registry.is_admin(&other));
        assert_eq!(registry.admin_count(), 1);
    }

    #[test]
    fn test_remove_admin_rejects_absent() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);

        assert!(registry.remove_admin(&deployer, &Pubkey::new_unique()).is_err());
    }

    #[test]
    fn test_cannot_remove_deployer() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let other = Pubkey::new_unique();
        registry.add_admin(&deployer, other).unwrap();

        // Even another admin cannot remove the deployer
        assert!(registry.remove_admin(&other, &deployer).is_err());
        assert!(registry.is_admin(&deployer));
    }

    #[test]
    fn test_removal_preserves_order() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();
        registry.add_admin(&deployer, a).unwrap();
        registry.add_admin(&deployer, b).unwrap();
        registry.add_admin(&deployer, c).unwrap();

        registry.remove_admin(&deployer, &b).unwrap();
        assert_eq!(registry.admins, vec![deployer, a, c]);
    }

    #[test]
    fn test_set_protocol_address() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);
        let aave = Pubkey::new_unique();

        assert_eq!(registry.protocol_address(Protocol::Aave), Pubkey::default());
        registry.set_protocol_address(&deployer, Protocol::Aave, aave).unwrap();
        assert_eq!(registry.protocol_address(Protocol::Aave), aave);

        // Overwrite is allowed
        let aave_v2 = Pubkey::new_unique();
        registry.set_protocol_address(&deployer, Protocol::Aave, aave_v2).unwrap();
        assert_eq!(registry.protocol_address(Protocol::Aave), aave_v2);
    }

    #[test]
    fn test_set_protocol_address_rejects_zero() {
        let deployer = Pubkey::new_unique();
        let mut registry = mock_registry(deployer);

        let result = registry.set_protocol_address(&deployer, Protocol::Weth, Pubkey::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_protocol_names() {
        assert_eq!(Protocol::Aave.name(), "Aave");
        assert_eq!(Protocol::Compound.name(), "Compound");
        assert_eq!(Protocol::Uniswap.name(), "Uniswap");
        assert_eq!(Protocol::Weth.name(), "WETH");
    }
}
