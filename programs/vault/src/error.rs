use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Supplied vault account does not match the derived vault address")]
    AddressMismatch,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Signer cannot cover the deposit")]
    InsufficientFunds,
    #[msg("First deposit is below the rent-exempt minimum")]
    BelowMinimumFunding,
    #[msg("Vault does not exist or holds no funds")]
    EmptyOrMissingVault,
    #[msg("No valid bump seed for this signer")]
    DerivationExhausted,
}
