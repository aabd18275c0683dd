// Token Vesting - time-locked token release on Solana
// Two flows share one claim engine: single-receiver vaults and company
// treasuries paying out per-employee grants.

use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod schedule;
pub mod state;

use instructions::*;

declare_id!("6FuQ5pZHttiDZCnMXbjR1SGtM7UGRp33jrEGXJtgxg4d");

#[program]
pub mod token_vesting {
    use super::*;

    /// Lock `amount` tokens for `receiver`, unlocking linearly from
    /// `start_time` to `end_time`
    ///
    /// Security considerations:
    /// - One vault per (depositor, mint); reuse fails with AlreadyExists
    /// - Validates depositor token account (mint, owner)
    /// - Funds move into a custody account only the vault PDA can sign for
    pub fn lock(
        ctx: Context<Lock>,
        receiver: Pubkey,
        amount: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::lock::handler(ctx, receiver, amount, start_time, end_time)
    }

    /// Release everything vested so far to the vault receiver
    ///
    /// Security considerations:
    /// - Receiver must sign and match the vault record
    /// - Claimable recomputed from the cumulative unlocked amount
    pub fn unlock(ctx: Context<Unlock>) -> Result<()> {
        instructions::unlock::handler(ctx)
    }

    /// Create the vesting registry and treasury for `company_name`
    ///
    /// Names must be 1 to 32 bytes; anything else fails with InvalidCompanyName
    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        instructions::create_vesting_account::handler(ctx, company_name)
    }

    /// Deposit tokens into a company treasury
    pub fn fund_treasury(
        ctx: Context<FundTreasury>,
        company_name: String,
        amount: u64,
    ) -> Result<()> {
        instructions::fund_treasury::handler(ctx, company_name, amount)
    }

    /// Grant a vesting schedule to `beneficiary`, released every
    /// `EMPLOYEE_PERIOD_SECONDS` after `cliff_time`
    ///
    /// Security considerations:
    /// - Registry owner only
    /// - Treasury must cover every outstanding grant including this one
    pub fn create_employee_account(
        ctx: Context<CreateEmployeeAccount>,
        start_time: i64,
        end_time: i64,
        total_allocation: u64,
        cliff_time: i64,
    ) -> Result<()> {
        instructions::create_employee_account::handler(
            ctx,
            start_time,
            end_time,
            total_allocation,
            cliff_time,
        )
    }

    /// Claim the beneficiary's newly vested tokens
    ///
    /// Security considerations:
    /// - Beneficiary must sign and match the grant
    /// - Treasury balance checked before the PDA-signed transfer
    /// - Withdrawn totals updated before the transfer (CEI)
    pub fn claim_token(ctx: Context<ClaimToken>, company_name: String) -> Result<()> {
        instructions::claim_token::handler(ctx, company_name)
    }
}
