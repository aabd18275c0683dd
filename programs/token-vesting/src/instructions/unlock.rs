use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, custody, errors::*, events::*, state::*};

/// Release the vested portion of a vault to its receiver
#[derive(Accounts)]
pub struct Unlock<'info> {
    /// Receiver recorded in the vault; pays for their token account if needed
    #[account(mut)]
    pub receiver: Signer<'info>,

    /// Security: seeds come from stored fields so a foreign signer reaches
    /// `VaultInfo::authorize` and fails as Unauthorized
    #[account(
        mut,
        seeds = [VAULT_INFO_SEED, vault_info.depositor.as_ref(), vault_info.mint.as_ref()],
        bump = vault_info.bump,
    )]
    pub vault_info: Account<'info, VaultInfo>,

    #[account(address = vault_info.mint @ VestingError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_CUSTODY_SEED, vault_info.key().as_ref()],
        bump = vault_info.custody_bump,
    )]
    pub vault_custody: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = receiver,
        associated_token::mint = mint,
        associated_token::authority = receiver,
    )]
    pub receiver_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Unlock>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // CHECKS + EFFECTS
    let custody_balance = ctx.accounts.vault_custody.amount;
    let vault_info = &mut ctx.accounts.vault_info;
    vault_info.authorize(&ctx.accounts.receiver.key())?;
    let amount = vault_info.unlock(now, custody_balance)?;

    // INTERACTIONS
    let vault_info = &ctx.accounts.vault_info;
    let seeds = vault_info.signer_seeds();
    custody::release(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.vault_custody,
        &ctx.accounts.receiver_token_account,
        vault_info.to_account_info(),
        &[&seeds[..]],
        amount,
    )?;

    msg!(
        "Unlocked {} tokens ({}/{})",
        amount,
        vault_info.amount_unlocked,
        vault_info.amount
    );

    emit!(VaultUnlocked {
        vault_info: vault_info.key(),
        receiver: vault_info.receiver,
        amount,
        amount_unlocked: vault_info.amount_unlocked,
        timestamp: now,
    });

    Ok(())
}
