use anchor_lang::prelude::*;

use crate::{constants::*, errors::VaultError};

/// Per-user profile created at registration. One per wallet, registration
/// is one-shot: username and bio are immutable afterwards.
#[account]
pub struct UserProfile {
    /// Wallet this profile belongs to
    pub authority: Pubkey,

    /// Display name, 1..=20 bytes
    pub username: String,

    /// Free-form bio, up to 30 bytes (may be empty)
    pub bio: String,

    /// Wall-clock timestamp at registration
    pub registered_at: i64,

    /// Number of vaults this user has created; also the next vault index
    pub vault_count: u64,

    /// Bump seed for the profile PDA
    pub bump: u8,
}

impl UserProfile {
    /// Enforce the registration bounds before a profile is written
    pub fn validate(username: &str, bio: &str) -> Result<()> {
        require!(!username.is_empty(), VaultError::EmptyUsername);
        require!(username.len() <= MAX_USERNAME_LEN, VaultError::UsernameTooLong);
        require!(bio.len() <= MAX_BIO_LEN, VaultError::BioTooLong);
        Ok(())
    }

    /// One-shot registration write. Fails once an authority is recorded,
    /// so the same identity can never register twice.
    pub fn register(
        &mut self,
        authority: Pubkey,
        username: String,
        bio: String,
        now: i64,
    ) -> Result<()> {
        Self::validate(&username, &bio)?;
        require!(
            self.authority == Pubkey::default(),
            VaultError::AlreadyRegistered
        );
        self.authority = authority;
        self.username = username;
        self.bio = bio;
        self.registered_at = now;
        self.vault_count = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        UserProfile::validate("alice", "yield farmer").unwrap();
        UserProfile::validate("a", "").unwrap();
        UserProfile::validate(&"x".repeat(20), &"y".repeat(30)).unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_username() {
        assert!(UserProfile::validate("", "bio").is_err());
    }

    #[test]
    fn test_validate_rejects_long_username() {
        assert!(UserProfile::validate(&"x".repeat(21), "").is_err());
    }

    #[test]
    fn test_validate_rejects_long_bio() {
        assert!(UserProfile::validate("alice", &"y".repeat(31)).is_err());
    }
}
