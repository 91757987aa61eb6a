use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::VaultError;
use crate::events::DepositEvent;
use crate::state::VaultAddress;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The signer's vault PDA. Validated against the re-derived address in the
    /// handler rather than through a seeds constraint, so a forged address is
    /// rejected with the program's own error code.
    #[account(mut)]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.signer.key();
    let derived = VaultAddress::derive(&owner)?;
    require_keys_eq!(
        ctx.accounts.vault.key(),
        derived.key,
        VaultError::AddressMismatch
    );

    require!(amount > 0, VaultError::InvalidAmount);

    // A zero-lamport vault does not exist yet. The transfer below creates it
    // implicitly, so the first deposit must clear the rent-exempt minimum or
    // the runtime would reclaim the account.
    if ctx.accounts.vault.lamports() == 0 {
        require_gte!(
            amount,
            Rent::get()?.minimum_balance(0),
            VaultError::BelowMinimumFunding
        );
    }

    require_gte!(
        ctx.accounts.signer.lamports(),
        amount,
        VaultError::InsufficientFunds
    );

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.signer.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    emit!(DepositEvent {
        owner,
        vault: derived.key,
        amount,
    });
    Ok(())
}
