use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
}

#[event]
pub struct WithdrawEvent {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
}
