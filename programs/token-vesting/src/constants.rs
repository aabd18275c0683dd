// Constants for the Token Vesting program

/// Seed for the per-(depositor, mint) vault record PDA
pub const VAULT_INFO_SEED: &[u8] = b"vault_info";

/// Seed for the vault custody token account PDA (keyed by the vault record)
pub const VAULT_CUSTODY_SEED: &[u8] = b"vault_custody";

/// Seed for the per-company vesting configuration PDA
pub const COMPANY_SEED: &[u8] = b"company";

/// Seed for the company treasury token account PDA
pub const TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed for the per-(beneficiary, company) employee vesting PDA
pub const EMPLOYEE_SEED: &[u8] = b"employee_vesting";

/// Layout version written into every account this program creates
pub const ACCOUNT_VERSION: u8 = 1;

/// Company names double as a PDA seed, so they share the seed length limit
pub const MAX_COMPANY_NAME_LEN: usize = 32;

pub const SECONDS_PER_WEEK: i64 = 604_800;

/// Release step for employee grants: one second, i.e. continuous vesting
pub const EMPLOYEE_PERIOD_SECONDS: i64 = 1;

/// Seed bytes for a company name
///
/// Capped at the seed length limit so address derivation never aborts on an
/// oversized name; `CompanyVestingAccount::init` then rejects it with
/// `InvalidCompanyName`. Valid names are used whole, so they never share a seed.
pub fn company_seed(company_name: &str) -> &[u8] {
    let bytes = company_name.as_bytes();
    &bytes[..bytes.len().min(MAX_COMPANY_NAME_LEN)]
}
