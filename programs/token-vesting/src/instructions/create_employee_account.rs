use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, events::*, state::*};

/// Grant a vesting schedule to an employee of a company registry
#[derive(Accounts)]
pub struct CreateEmployeeAccount<'info> {
    /// Registry owner - the only key allowed to grant, checked by
    /// `CompanyVestingAccount::authorize_owner`
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Beneficiary only contributes its key to the grant address
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        has_one = treasury_token_account,
    )]
    pub company_vesting_account: Account<'info, CompanyVestingAccount>,

    /// Read for the funding check only
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + EmployeeVestingAccount::INIT_SPACE,
        seeds = [
            EMPLOYEE_SEED,
            beneficiary.key().as_ref(),
            company_vesting_account.key().as_ref(),
        ],
        bump
    )]
    pub employee_account: Account<'info, EmployeeVestingAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateEmployeeAccount>,
    start_time: i64,
    end_time: i64,
    total_allocation: u64,
    cliff_time: i64,
) -> Result<()> {
    // CHECKS + EFFECTS
    let owner = ctx.accounts.owner.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    let treasury_balance = ctx.accounts.treasury_token_account.amount;
    let company_key = ctx.accounts.company_vesting_account.key();

    let company = &mut ctx.accounts.company_vesting_account;
    company.authorize_owner(&owner)?;

    let employee = &mut ctx.accounts.employee_account;
    employee.init(
        beneficiary,
        company_key,
        start_time,
        end_time,
        total_allocation,
        cliff_time,
    )?;
    employee.bump = ctx.bumps.employee_account;
    company.allocate(total_allocation, treasury_balance)?;

    msg!(
        "Granted {} tokens to {} ({} outstanding)",
        total_allocation,
        beneficiary,
        company.outstanding()?
    );

    emit!(EmployeeVestingCreated {
        company: company_key,
        employee_account: employee.key(),
        beneficiary,
        total_allocation,
        start_time,
        cliff_time,
        end_time,
        period_seconds: employee.period_seconds,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
