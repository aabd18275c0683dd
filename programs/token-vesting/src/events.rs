use anchor_lang::prelude::*;

use crate::schedule::VestingStatus;

/// Event emitted when a depositor locks tokens into a vault
#[event]
pub struct VaultLocked {
    pub vault_info: Pubkey,
    pub depositor: Pubkey,
    pub receiver: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub timestamp: i64,
}

/// Event emitted when a receiver unlocks vested tokens from a vault
#[event]
pub struct VaultUnlocked {
    pub vault_info: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub amount_unlocked: u64,
    pub timestamp: i64,
}

#[event]
pub struct CompanyVestingCreated {
    pub company: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    pub company_name: String,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryFunded {
    pub company: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
    pub timestamp: i64,
}

/// Event emitted when a company grants a vesting schedule to an employee
#[event]
pub struct EmployeeVestingCreated {
    pub company: Pubkey,
    pub employee_account: Pubkey,
    pub beneficiary: Pubkey,
    pub total_allocation: u64,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub period_seconds: i64,
    pub timestamp: i64,
}

/// Event emitted on every successful employee claim
#[event]
pub struct TokensClaimed {
    pub company: Pubkey,
    pub employee_account: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
    pub status: VestingStatus,
    pub timestamp: i64,
}
