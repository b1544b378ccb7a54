use anchor_lang::prelude::*;

use crate::{constants::*, errors::VaultError};

/// Notional allocation of vault assets to a named external protocol
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct ProtocolAllocation {
    /// Human-readable protocol name (e.g. "Aave", "Compound")
    pub name: String,

    /// Amount of vault assets notionally assigned to this protocol
    pub amount: u64,
}

/// Per-vault allocation ledger. Holds only non-zero entries, in insertion
/// order; zeroing an allocation swap-removes it from the table.
///
/// Invariant: the sum of all entries never exceeds the vault's total_assets.
#[account]
pub struct AllocationLedger {
    /// Vault this ledger belongs to
    pub vault: Pubkey,

    /// Non-zero allocations in insertion order
    pub entries: Vec<ProtocolAllocation>,

    /// Bump seed for the ledger PDA
    pub bump: u8,
}

impl AllocationLedger {
    /// Current allocation for a protocol; zero when never set
    pub fn allocation_of(&self, name: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.amount)
            .unwrap_or(0)
    }

    /// Checked sum of all entries
    pub fn total_allocated(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, e| {
            acc.checked_add(e.amount)
                .ok_or(error!(VaultError::MathOverflow))
        })
    }

    /// Set a protocol allocation, enforcing the total_assets ceiling.
    /// Returns (old_amount, new_total) for event emission.
    pub fn set_allocation(
        &mut self,
        name: &str,
        amount: u64,
        total_assets: u64,
    ) -> Result<(u64, u64)> {
        require!(!name.is_empty(), VaultError::InvalidProtocolName);
        require!(
            name.len() <= MAX_PROTOCOL_NAME_LEN,
            VaultError::ProtocolNameTooLong
        );

        let old_amount = self.allocation_of(name);
        let new_total = self
            .total_allocated()?
            .checked_sub(old_amount)
            .ok_or(error!(VaultError::MathOverflow))?
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;
        require!(new_total <= total_assets, VaultError::AllocationExceedsBalance);

        let pos = self.entries.iter().position(|e| e.name == name);
        match (pos, amount) {
            (Some(i), 0) => {
                self.entries.swap_remove(i);
            }
            (Some(i), _) => {
                self.entries[i].amount = amount;
            }
            (None, 0) => {
                // Zeroing a never-set protocol is a no-op
            }
            (None, _) => {
                require!(
                    self.entries.len() < MAX_ALLOCATIONS,
                    VaultError::AllocationTableFull
                );
                self.entries.push(ProtocolAllocation {
                    name: name.to_string(),
                    amount,
                });
            }
        }

        Ok((old_amount, new_total))
    }

    /// Parallel name/amount listing of the non-zero entries
    pub fn all_allocations(&self) -> (Vec<String>, Vec<u64>) {
        let names = self.entries.iter().map(|e| e.name.clone()).collect();
        let amounts = self.entries.iter().map(|e| e.amount).collect();
        (names, amounts)
    }
}
