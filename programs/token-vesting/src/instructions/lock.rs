use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, custody, errors::*, events::*, state::*};

/// Lock tokens into a vault that unlocks linearly to `receiver`
#[derive(Accounts)]
pub struct Lock<'info> {
    /// Depositor funding the vault
    #[account(mut)]
    pub depositor: Signer<'info>,

    pub mint: Account<'info, Mint>,

    /// Vault record PDA, one per (depositor, mint)
    /// Security: init_if_needed so a reused address surfaces AlreadyExists
    /// from `VaultInfo::init`
    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + VaultInfo::INIT_SPACE,
        seeds = [VAULT_INFO_SEED, depositor.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub vault_info: Account<'info, VaultInfo>,

    /// Custody token account owned by the vault record PDA
    #[account(
        init_if_needed,
        payer = depositor,
        seeds = [VAULT_CUSTODY_SEED, vault_info.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault_info,
    )]
    pub vault_custody: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = depositor_token_account.mint == mint.key() @ VestingError::InvalidMint,
        constraint = depositor_token_account.owner == depositor.key() @ VestingError::InvalidOwner,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Lock>,
    receiver: Pubkey,
    amount: u64,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    // CHECKS + EFFECTS
    let depositor = ctx.accounts.depositor.key();
    let mint = ctx.accounts.mint.key();
    let vault_info = &mut ctx.accounts.vault_info;
    vault_info.init(depositor, mint, receiver, amount, start_time, end_time)?;
    vault_info.bump = ctx.bumps.vault_info;
    vault_info.custody_bump = ctx.bumps.vault_custody;

    // INTERACTIONS
    custody::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.depositor_token_account,
        &ctx.accounts.vault_custody,
        ctx.accounts.depositor.to_account_info(),
        amount,
    )?;

    msg!(
        "Locked {} tokens for {} ({} -> {})",
        amount,
        receiver,
        start_time,
        end_time
    );

    emit!(VaultLocked {
        vault_info: ctx.accounts.vault_info.key(),
        depositor,
        receiver,
        mint,
        amount,
        start_time,
        end_time,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
