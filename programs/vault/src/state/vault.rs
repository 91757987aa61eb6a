use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::VAULT_SEED;

/// Canonical vault address for a given owner.
///
/// The vault itself is a plain system-owned account with no data: its balance is
/// the account's lamports and its owner is whoever can reproduce the address from
/// `[VAULT_SEED, owner]`. Nothing is persisted; handlers re-derive on every call
/// and compare against the client-supplied account before touching funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddress {
    pub key: Pubkey,
    pub bump: u8,
}

impl VaultAddress {
    /// Derives the vault PDA for `owner` with the canonical bump (searched from
    /// 255 downward, first off-curve hit wins). Errors if the whole bump range
    /// is exhausted instead of picking a non-canonical address.
    pub fn derive(owner: &Pubkey) -> Result<Self> {
        let (key, bump) = Pubkey::try_find_program_address(&[VAULT_SEED, owner.as_ref()], &crate::ID)
            .ok_or(VaultError::DerivationExhausted)?;
        Ok(Self { key, bump })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let owner = Pubkey::new_unique();
        let a = VaultAddress::derive(&owner).unwrap();
        let b = VaultAddress::derive(&owner).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn derive_matches_canonical_bump() {
        let owner = Pubkey::new_unique();
        let derived = VaultAddress::derive(&owner).unwrap();
        let (expected, bump) =
            Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], &crate::ID);
        assert_eq!(derived.key, expected);
        assert_eq!(derived.bump, bump);
    }

    #[test]
    fn distinct_owners_get_distinct_vaults() {
        let a = VaultAddress::derive(&Pubkey::new_unique()).unwrap();
        let b = VaultAddress::derive(&Pubkey::new_unique()).unwrap();
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn vault_is_not_the_owner_key() {
        let owner = Pubkey::new_unique();
        let derived = VaultAddress::derive(&owner).unwrap();
        assert_ne!(derived.key, owner);
    }
}
