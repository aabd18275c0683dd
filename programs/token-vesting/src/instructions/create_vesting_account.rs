use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, events::*, state::*};

/// Create a company vesting registry and its treasury
///
/// Re-running this for an existing name with the same mint fails with
/// AlreadyExists. With a different mint it fails earlier, in the treasury's
/// `token::mint` check (Anchor's ConstraintTokenMint), because the existing
/// treasury is validated before the handler runs. Either way nothing changes.
#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    /// Employer - becomes the registry owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Company registry PDA, unique per company name
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + CompanyVestingAccount::INIT_SPACE,
        seeds = [COMPANY_SEED, company_seed(&company_name)],
        bump
    )]
    pub company_vesting_account: Account<'info, CompanyVestingAccount>,

    pub mint: Account<'info, Mint>,

    /// Treasury token account, its own authority
    /// Security: only this program can sign for the PDA
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [TREASURY_SEED, company_seed(&company_name)],
        bump,
        token::mint = mint,
        token::authority = treasury_token_account,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateVestingAccount>, company_name: String) -> Result<()> {
    // CHECKS + EFFECTS
    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.mint.key();
    let treasury_token_account = ctx.accounts.treasury_token_account.key();
    let company = &mut ctx.accounts.company_vesting_account;
    company.init(
        owner,
        mint,
        treasury_token_account,
        company_name.clone(),
        ctx.bumps.company_vesting_account,
        ctx.bumps.treasury_token_account,
    )?;

    msg!("Vesting registry created for {}", company_name);

    emit!(CompanyVestingCreated {
        company: company.key(),
        owner,
        mint,
        treasury_token_account,
        company_name,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
