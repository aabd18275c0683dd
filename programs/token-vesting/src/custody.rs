//! Token movement into and out of program custody.
//!
//! Deposits are signed by the user; releases are signed by the PDA that owns
//! the custody account. Both use `transfer_checked` so the mint and decimals
//! are verified by the token program.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

/// Move `amount` from a user-owned token account into custody
pub fn deposit<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let transfer_ctx = CpiContext::new(
        token_program.to_account_info(),
        TransferChecked {
            from: from.to_account_info(),
            mint: mint.to_account_info(),
            to: to.to_account_info(),
            authority,
        },
    );
    token::transfer_checked(transfer_ctx, amount, mint.decimals)
}

/// Move `amount` out of custody, signed by the program-derived authority
pub fn release<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        TransferChecked {
            from: from.to_account_info(),
            mint: mint.to_account_info(),
            to: to.to_account_info(),
            authority,
        },
        signer_seeds,
    );
    token::transfer_checked(transfer_ctx, amount, mint.decimals)
}
