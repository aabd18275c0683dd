use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, custody, errors::*, events::*, state::*};

/// Deposit tokens into a company treasury
///
/// Any signer may fund. Direct transfers into the treasury address are
/// equally valid; this instruction only adds the mint/owner checks and an event.
#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct FundTreasury<'info> {
    pub funder: Signer<'info>,

    #[account(
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
        mut,
        constraint = funder_token_account.mint == mint.key() @ VestingError::InvalidMint,
        constraint = funder_token_account.owner == funder.key() @ VestingError::InvalidOwner,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundTreasury>, _company_name: String, amount: u64) -> Result<()> {
    check_version(ctx.accounts.company_vesting_account.version)?;
    require!(amount > 0, VestingError::InvalidAmount);

    custody::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.funder_token_account,
        &ctx.accounts.treasury_token_account,
        ctx.accounts.funder.to_account_info(),
        amount,
    )?;

    ctx.accounts.treasury_token_account.reload()?;

    emit!(TreasuryFunded {
        company: ctx.accounts.company_vesting_account.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        treasury_balance: ctx.accounts.treasury_token_account.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
