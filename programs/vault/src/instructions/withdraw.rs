use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::VaultError;
use crate::events::WithdrawEvent;
use crate::state::VaultAddress;
use crate::VAULT_SEED;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The signer's vault PDA, validated in the handler.
    #[account(mut)]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Withdrawal is always total: the full balance moves back to the signer and
/// the drained account is reclaimed by the runtime at the end of the
/// transaction, rent deposit included.
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let owner = ctx.accounts.signer.key();
    let derived = VaultAddress::derive(&owner)?;
    require_keys_eq!(
        ctx.accounts.vault.key(),
        derived.key,
        VaultError::AddressMismatch
    );

    let balance = ctx.accounts.vault.lamports();
    require!(balance > 0, VaultError::EmptyOrMissingVault);

    // The vault has no private key; the program signs for it by presenting the
    // derivation seeds.
    let seeds = &[VAULT_SEED, owner.as_ref(), &[derived.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.signer.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(cpi_ctx, balance)?;

    emit!(WithdrawEvent {
        owner,
        vault: derived.key,
        amount: balance,
    });
    Ok(())
}
