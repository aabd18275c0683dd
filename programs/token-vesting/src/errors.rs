use anchor_lang::prelude::*;

/// Custom error codes for the Token Vesting program
///
/// Every failure aborts the whole instruction; nothing is partially written.
#[error_code]
pub enum VestingError {
    #[msg("Account already initialized at this address")]
    AlreadyExists,

    #[msg("Nothing to claim - no newly vested tokens")]
    NothingToClaim,

    #[msg("Unauthorized - signer does not match the required authority")]
    Unauthorized,

    #[msg("Treasury balance does not cover the requested amount")]
    InsufficientTreasuryFunds,

    #[msg("Vault custody balance does not cover the requested amount")]
    InsufficientVaultFunds,

    #[msg("Invalid schedule - check times, period and allocation")]
    InvalidSchedule,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Receiver cannot be the default public key")]
    InvalidReceiver,

    #[msg("Company name must be between 1 and 32 bytes")]
    InvalidCompanyName,

    #[msg("Invalid token mint - does not match the vesting mint")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Claim would exceed the total entitlement")]
    ClaimExceedsEntitlement,

    #[msg("Unsupported account version")]
    UnsupportedAccountVersion,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
