use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VestingError;
use crate::schedule::{VestingLedger, VestingSchedule};

/// Locked funds for a single receiver, one per (depositor, mint)
///
/// Never closed: a fully unlocked vault stays on chain as an audit record.
#[account]
#[derive(InitSpace)]
pub struct VaultInfo {
    /// Layout version, zero until `lock` initializes the account
    pub version: u8,

    /// Account that locked the funds
    pub depositor: Pubkey,

    pub mint: Pubkey,

    /// Only this key may unlock
    pub receiver: Pubkey,

    /// Total locked at creation, immutable afterwards
    pub amount: u64,

    /// Cumulative amount released to the receiver
    pub amount_unlocked: u64,

    /// Whole weeks in the schedule, informational
    pub total_weeks: u64,

    pub start_time: i64,
    pub end_time: i64,

    pub bump: u8,
    pub custody_bump: u8,
}

/// Reject account data written by a different layout version
pub fn check_version(version: u8) -> Result<()> {
    require!(
        version == ACCOUNT_VERSION,
        VestingError::UnsupportedAccountVersion
    );
    Ok(())
}

impl VaultInfo {
    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    /// Record a new lock; bumps are filled in by the caller
    ///
    /// Fails with AlreadyExists on an account that was already locked, so an
    /// existing vault is never overwritten.
    pub fn init(
        &mut self,
        depositor: Pubkey,
        mint: Pubkey,
        receiver: Pubkey,
        amount: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        require!(!self.is_initialized(), VestingError::AlreadyExists);
        require!(amount > 0, VestingError::InvalidSchedule);
        require!(receiver != Pubkey::default(), VestingError::InvalidReceiver);
        let schedule = VestingSchedule::linear(start_time, end_time)?;

        self.version = ACCOUNT_VERSION;
        self.depositor = depositor;
        self.mint = mint;
        self.receiver = receiver;
        self.amount = amount;
        self.amount_unlocked = 0;
        self.total_weeks = (schedule.duration() / SECONDS_PER_WEEK) as u64;
        self.start_time = start_time;
        self.end_time = end_time;
        Ok(())
    }

    /// Only the recorded receiver may unlock
    pub fn authorize(&self, signer: &Pubkey) -> Result<()> {
        check_version(self.version)?;
        require_keys_eq!(self.receiver, *signer, VestingError::Unauthorized);
        Ok(())
    }

    /// Settle an unlock at `now` against the custody balance
    ///
    /// Returns the amount to transfer. The withdrawn total is updated before
    /// the caller moves tokens; on error nothing changes.
    pub fn unlock(&mut self, now: i64, custody_balance: u64) -> Result<u64> {
        let amount = self.claim(now)?;
        require!(
            custody_balance >= amount,
            VestingError::InsufficientVaultFunds
        );
        self.record_claim(amount)?;
        Ok(amount)
    }

    /// Seeds for signing custody releases as this vault's PDA
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            VAULT_INFO_SEED,
            self.depositor.as_ref(),
            self.mint.as_ref(),
            core::slice::from_ref(&self.bump),
        ]
    }
}

impl VestingLedger for VaultInfo {
    fn schedule(&self) -> Result<VestingSchedule> {
        VestingSchedule::linear(self.start_time, self.end_time)
    }

    fn entitlement(&self) -> u64 {
        self.amount
    }

    fn withdrawn(&self) -> u64 {
        self.amount_unlocked
    }

    fn set_withdrawn(&mut self, withdrawn: u64) {
        self.amount_unlocked = withdrawn;
    }
}

/// Per-company vesting configuration, addressed by company name
///
/// The treasury token account is its own authority (a PDA), so only this
/// program can move funds out of it.
#[account]
#[derive(InitSpace)]
pub struct CompanyVestingAccount {
    pub version: u8,

    /// Employer that created the registry; authorizes employee grants
    pub owner: Pubkey,

    pub mint: Pubkey,

    pub treasury_token_account: Pubkey,

    #[max_len(32)]
    pub company_name: String,

    /// Sum of every employee allocation granted
    pub total_allocated: u64,

    /// Sum of every employee claim paid out
    pub total_claimed: u64,

    pub bump: u8,
    pub treasury_bump: u8,
}

impl CompanyVestingAccount {
    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    /// Record a new company registry
    pub fn init(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        treasury_token_account: Pubkey,
        company_name: String,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), VestingError::AlreadyExists);
        require!(
            !company_name.is_empty() && company_name.len() <= MAX_COMPANY_NAME_LEN,
            VestingError::InvalidCompanyName
        );

        self.version = ACCOUNT_VERSION;
        self.owner = owner;
        self.mint = mint;
        self.treasury_token_account = treasury_token_account;
        self.company_name = company_name;
        self.total_allocated = 0;
        self.total_claimed = 0;
        self.bump = bump;
        self.treasury_bump = treasury_bump;
        Ok(())
    }

    /// Only the registry owner may grant
    pub fn authorize_owner(&self, signer: &Pubkey) -> Result<()> {
        check_version(self.version)?;
        require_keys_eq!(self.owner, *signer, VestingError::Unauthorized);
        Ok(())
    }

    /// Allocated but not yet claimed
    pub fn outstanding(&self) -> Result<u64> {
        self.total_allocated
            .checked_sub(self.total_claimed)
            .ok_or(error!(VestingError::MathOverflow))
    }

    /// Register a new grant, requiring the treasury to cover all outstanding
    /// entitlements including this one
    pub fn allocate(&mut self, allocation: u64, treasury_balance: u64) -> Result<()> {
        let outstanding = self
            .outstanding()?
            .checked_add(allocation)
            .ok_or(VestingError::MathOverflow)?;
        require!(
            treasury_balance >= outstanding,
            VestingError::InsufficientTreasuryFunds
        );

        self.total_allocated = self
            .total_allocated
            .checked_add(allocation)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(
            self.total_claimed <= self.total_allocated,
            VestingError::ClaimExceedsEntitlement
        );
        Ok(())
    }
}

/// One beneficiary's grant under a company, addressed by (beneficiary, company)
#[account]
#[derive(InitSpace)]
pub struct EmployeeVestingAccount {
    pub version: u8,
    pub beneficiary: Pubkey,

    /// CompanyVestingAccount this grant draws from
    pub company: Pubkey,

    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub period_seconds: i64,

    pub total_allocation: u64,
    pub total_withdrawn: u64,

    pub bump: u8,
}

impl EmployeeVestingAccount {
    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    /// Record a new grant under `company`; the bump is filled in by the caller
    ///
    /// Grants vest in `EMPLOYEE_PERIOD_SECONDS` steps. The company's funding
    /// check is separate, see `CompanyVestingAccount::allocate`.
    pub fn init(
        &mut self,
        beneficiary: Pubkey,
        company: Pubkey,
        start_time: i64,
        end_time: i64,
        total_allocation: u64,
        cliff_time: i64,
    ) -> Result<()> {
        require!(!self.is_initialized(), VestingError::AlreadyExists);
        require!(total_allocation > 0, VestingError::InvalidSchedule);
        VestingSchedule::new(start_time, cliff_time, end_time, EMPLOYEE_PERIOD_SECONDS)?;

        self.version = ACCOUNT_VERSION;
        self.beneficiary = beneficiary;
        self.company = company;
        self.start_time = start_time;
        self.cliff_time = cliff_time;
        self.end_time = end_time;
        self.period_seconds = EMPLOYEE_PERIOD_SECONDS;
        self.total_allocation = total_allocation;
        self.total_withdrawn = 0;
        Ok(())
    }

    /// Only the beneficiary may claim, and only against its own company
    pub fn authorize(&self, signer: &Pubkey, company: &Pubkey) -> Result<()> {
        check_version(self.version)?;
        require_keys_eq!(self.beneficiary, *signer, VestingError::Unauthorized);
        require_keys_eq!(self.company, *company, VestingError::Unauthorized);
        Ok(())
    }

    /// Settle a claim at `now` against the company treasury
    ///
    /// Both the grant and the company totals are updated before the caller
    /// moves tokens; on error neither changes.
    pub fn claim_from_treasury(
        &mut self,
        company: &mut CompanyVestingAccount,
        now: i64,
        treasury_balance: u64,
    ) -> Result<u64> {
        let amount = self.claim(now)?;
        require!(
            treasury_balance >= amount,
            VestingError::InsufficientTreasuryFunds
        );
        company.record_claim(amount)?;
        self.record_claim(amount)?;
        Ok(amount)
    }
}

impl VestingLedger for EmployeeVestingAccount {
    fn schedule(&self) -> Result<VestingSchedule> {
        VestingSchedule::new(
            self.start_time,
            self.cliff_time,
            self.end_time,
            self.period_seconds,
        )
    }

    fn entitlement(&self) -> u64 {
        self.total_allocation
    }

    fn withdrawn(&self) -> u64 {
        self.total_withdrawn
    }

    fn set_withdrawn(&mut self, withdrawn: u64) {
        self.total_withdrawn = withdrawn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::VestingStatus;

    fn mock_vault(amount: u64, amount_unlocked: u64, start_time: i64, end_time: i64) -> VaultInfo {
        VaultInfo {
            version: ACCOUNT_VERSION,
            depositor: Pubkey::default(),
            mint: Pubkey::default(),
            receiver: Pubkey::default(),
            amount,
            amount_unlocked,
            total_weeks: 0,
            start_time,
            end_time,
            bump: 0,
            custody_bump: 0,
        }
    }

    fn mock_employee(
        total_allocation: u64,
        cliff_time: i64,
        end_time: i64,
    ) -> EmployeeVestingAccount {
        EmployeeVestingAccount {
            version: ACCOUNT_VERSION,
            beneficiary: Pubkey::default(),
            company: Pubkey::default(),
            start_time: 0,
            cliff_time,
            end_time,
            period_seconds: 1,
            total_allocation,
            total_withdrawn: 0,
            bump: 0,
        }
    }

    fn mock_company(total_allocated: u64, total_claimed: u64) -> CompanyVestingAccount {
        CompanyVestingAccount {
            version: ACCOUNT_VERSION,
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            treasury_token_account: Pubkey::default(),
            company_name: "acme".to_string(),
            total_allocated,
            total_claimed,
            bump: 0,
            treasury_bump: 0,
        }
    }

    #[test]
    fn test_vault_claim_halfway() {
        let vault = mock_vault(1_000, 0, 0, 100);
        assert_eq!(vault.claim(50).unwrap(), 500);
    }

    #[test]
    fn test_vault_claim_after_partial_unlock() {
        let vault = mock_vault(1_000, 500, 0, 100);
        assert_eq!(vault.claim(75).unwrap(), 250);
    }

    #[test]
    fn test_record_claim_rejects_over_entitlement() {
        let mut vault = mock_vault(1_000, 900, 0, 100);
        assert!(vault.record_claim(101).is_err());
        assert_eq!(vault.amount_unlocked, 900);
        vault.record_claim(100).unwrap();
        assert!(vault.is_fully_claimed());
    }

    #[test]
    fn test_employee_status_transitions() {
        let mut employee = mock_employee(100, 0, 100);
        assert_eq!(employee.status(), VestingStatus::Created);

        employee.record_claim(40).unwrap();
        assert_eq!(employee.status(), VestingStatus::Vesting);

        employee.record_claim(60).unwrap();
        assert_eq!(employee.status(), VestingStatus::FullyClaimed);
    }

    #[test]
    fn test_employee_nothing_before_cliff() {
        let employee = mock_employee(100, 30, 100);
        assert!(employee.claim(29).is_err());
        assert_eq!(employee.claim(30).unwrap(), 30);
    }

    #[test]
    fn test_company_allocate_requires_funding() {
        let mut company = mock_company(600, 100);
        // 500 outstanding + 400 new needs 900
        assert!(company.allocate(400, 899).is_err());
        assert_eq!(company.total_allocated, 600);

        company.allocate(400, 900).unwrap();
        assert_eq!(company.total_allocated, 1_000);
        assert_eq!(company.outstanding().unwrap(), 900);
    }

    fn assert_error<T>(result: Result<T>, expected: VestingError) {
        let expected: anchor_lang::error::Error = expected.into();
        match result {
            Ok(_) => panic!("expected {:?}", expected),
            Err(err) => assert_eq!(err, expected),
        }
    }

    #[test]
    fn test_vault_init_rejects_existing_vault() {
        let mut vault = mock_vault(1_000, 0, 0, 100);
        let receiver = Pubkey::new_unique();
        assert_error(
            vault.init(Pubkey::new_unique(), Pubkey::new_unique(), receiver, 5, 0, 10),
            VestingError::AlreadyExists,
        );
        assert_eq!(vault.amount, 1_000);
    }

    #[test]
    fn test_vault_init_validates_lock() {
        let receiver = Pubkey::new_unique();
        let mut vault = VaultInfo {
            version: 0,
            ..mock_vault(0, 0, 0, 0)
        };

        assert_error(
            vault.init(Pubkey::new_unique(), Pubkey::new_unique(), receiver, 0, 0, 100),
            VestingError::InvalidSchedule,
        );
        assert_error(
            vault.init(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::default(), 1, 0, 100),
            VestingError::InvalidReceiver,
        );
        assert_error(
            vault.init(Pubkey::new_unique(), Pubkey::new_unique(), receiver, 1, 100, 100),
            VestingError::InvalidSchedule,
        );
        assert!(!vault.is_initialized());

        let end_time = 2 * SECONDS_PER_WEEK;
        vault
            .init(Pubkey::new_unique(), Pubkey::new_unique(), receiver, 1_000, 0, end_time)
            .unwrap();
        assert_eq!(vault.version, ACCOUNT_VERSION);
        assert_eq!(vault.total_weeks, 2);
        assert_eq!(vault.amount_unlocked, 0);
    }

    #[test]
    fn test_vault_authorize_checks_receiver_and_version() {
        let receiver = Pubkey::new_unique();
        let mut vault = VaultInfo {
            receiver,
            ..mock_vault(1_000, 0, 0, 100)
        };

        vault.authorize(&receiver).unwrap();
        assert_error(vault.authorize(&Pubkey::new_unique()), VestingError::Unauthorized);

        vault.version = ACCOUNT_VERSION + 1;
        assert_error(vault.authorize(&receiver), VestingError::UnsupportedAccountVersion);
    }

    #[test]
    fn test_company_init_validates_name() {
        let mut company = CompanyVestingAccount {
            version: 0,
            ..mock_company(0, 0)
        };
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let treasury = Pubkey::new_unique();

        assert_error(
            company.init(owner, mint, treasury, String::new(), 1, 2),
            VestingError::InvalidCompanyName,
        );
        assert_error(
            company.init(owner, mint, treasury, "a".repeat(MAX_COMPANY_NAME_LEN + 1), 1, 2),
            VestingError::InvalidCompanyName,
        );

        company
            .init(owner, mint, treasury, "a".repeat(MAX_COMPANY_NAME_LEN), 1, 2)
            .unwrap();
        assert_eq!(company.owner, owner);
        assert_eq!(company.treasury_bump, 2);

        // Same address again, even with a different mint
        assert_error(
            company.init(owner, Pubkey::new_unique(), treasury, "acme".to_string(), 1, 2),
            VestingError::AlreadyExists,
        );
        assert_eq!(company.mint, mint);
    }

    #[test]
    fn test_company_authorize_owner() {
        let owner = Pubkey::new_unique();
        let mut company = CompanyVestingAccount {
            owner,
            ..mock_company(0, 0)
        };

        company.authorize_owner(&owner).unwrap();
        assert_error(
            company.authorize_owner(&Pubkey::new_unique()),
            VestingError::Unauthorized,
        );

        company.version = 0;
        assert_error(
            company.authorize_owner(&owner),
            VestingError::UnsupportedAccountVersion,
        );
    }

    #[test]
    fn test_employee_init_uses_fixed_period() {
        let mut employee = EmployeeVestingAccount {
            version: 0,
            ..mock_employee(0, 0, 0)
        };
        let beneficiary = Pubkey::new_unique();
        let company = Pubkey::new_unique();

        assert_error(
            employee.init(beneficiary, company, 0, 100, 0, 0),
            VestingError::InvalidSchedule,
        );
        assert_error(
            employee.init(beneficiary, company, 0, 100, 100, 101),
            VestingError::InvalidSchedule,
        );

        employee.init(beneficiary, company, 0, 100, 100, 0).unwrap();
        assert_eq!(employee.period_seconds, EMPLOYEE_PERIOD_SECONDS);
        assert_eq!(employee.claimable(37).unwrap(), 37);

        assert_error(
            employee.init(beneficiary, company, 0, 100, 100, 0),
            VestingError::AlreadyExists,
        );
    }

    #[test]
    fn test_employee_authorize_checks_beneficiary_and_company() {
        let beneficiary = Pubkey::new_unique();
        let company = Pubkey::new_unique();
        let mut employee = EmployeeVestingAccount {
            beneficiary,
            company,
            ..mock_employee(100, 0, 100)
        };

        employee.authorize(&beneficiary, &company).unwrap();
        assert_error(
            employee.authorize(&Pubkey::new_unique(), &company),
            VestingError::Unauthorized,
        );
        assert_error(
            employee.authorize(&beneficiary, &Pubkey::new_unique()),
            VestingError::Unauthorized,
        );

        employee.version = ACCOUNT_VERSION + 1;
        assert_error(
            employee.authorize(&beneficiary, &company),
            VestingError::UnsupportedAccountVersion,
        );
    }

    #[test]
    fn test_company_claims_bounded_by_allocations() {
        let mut company = mock_company(100, 90);
        company.record_claim(10).unwrap();
        assert!(company.record_claim(1).is_err());
    }
}
