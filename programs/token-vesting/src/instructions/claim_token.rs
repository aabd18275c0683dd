use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, custody, errors::*, events::*, schedule::VestingLedger, state::*};

/// Claim an employee's newly vested tokens from the company treasury
#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct ClaimToken<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    /// Security: seeds come from stored fields so a foreign signer reaches
    /// `EmployeeVestingAccount::authorize` and fails as Unauthorized
    #[account(
        mut,
        seeds = [
            EMPLOYEE_SEED,
            employee_account.beneficiary.as_ref(),
            employee_account.company.as_ref(),
        ],
        bump = employee_account.bump,
    )]
    pub employee_account: Account<'info, EmployeeVestingAccount>,

    #[account(
        mut,
        seeds = [COMPANY_SEED, company_seed(&company_name)],
        bump = company_vesting_account.bump,
        has_one = mint @ VestingError::InvalidMint,
        has_one = treasury_token_account,
    )]
    pub company_vesting_account: Account<'info, CompanyVestingAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimToken>, _company_name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // CHECKS + EFFECTS
    let beneficiary = ctx.accounts.beneficiary.key();
    let company_key = ctx.accounts.company_vesting_account.key();
    let treasury_balance = ctx.accounts.treasury_token_account.amount;

    let company = &mut ctx.accounts.company_vesting_account;
    check_version(company.version)?;
    let employee = &mut ctx.accounts.employee_account;
    employee.authorize(&beneficiary, &company_key)?;
    let amount = employee.claim_from_treasury(company, now, treasury_balance)?;

    // INTERACTIONS
    let treasury_bump = [company.treasury_bump];
    let seeds: &[&[u8]] = &[
        TREASURY_SEED,
        company_seed(&company.company_name),
        &treasury_bump,
    ];
    custody::release(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.treasury_token_account,
        &ctx.accounts.beneficiary_token_account,
        ctx.accounts.treasury_token_account.to_account_info(),
        &[seeds],
        amount,
    )?;

    let employee = &ctx.accounts.employee_account;
    msg!(
        "Claimed {} tokens ({}/{})",
        amount,
        employee.total_withdrawn,
        employee.total_allocation
    );

    emit!(TokensClaimed {
        company: company_key,
        employee_account: employee.key(),
        beneficiary,
        amount,
        total_withdrawn: employee.total_withdrawn,
        status: employee.status(),
        timestamp: now,
    });

    Ok(())
}
