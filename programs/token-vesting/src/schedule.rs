//! Claim engine shared by vaults and employee grants.
//!
//! A schedule is linear between `start_time` and `end_time`, released in whole
//! periods of `period_seconds`, with nothing claimable before `cliff_time`.
//! The claimable amount is always recomputed from the cumulative withdrawn
//! total, so advancing clock readings can never count the same interval twice.

use anchor_lang::prelude::*;

use crate::errors::VestingError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub period_seconds: i64,
}

impl VestingSchedule {
    /// Validate and build a schedule
    ///
    /// Requires `0 <= start < end`, `start <= cliff <= end`, and a period that
    /// divides the vesting duration exactly.
    pub fn new(
        start_time: i64,
        cliff_time: i64,
        end_time: i64,
        period_seconds: i64,
    ) -> Result<Self> {
        require!(start_time >= 0, VestingError::InvalidSchedule);
        require!(start_time < end_time, VestingError::InvalidSchedule);
        require!(
            start_time <= cliff_time && cliff_time <= end_time,
            VestingError::InvalidSchedule
        );
        require!(period_seconds > 0, VestingError::InvalidSchedule);

        let duration = end_time
            .checked_sub(start_time)
            .ok_or(VestingError::MathOverflow)?;
        require!(duration % period_seconds == 0, VestingError::InvalidSchedule);

        Ok(Self {
            start_time,
            cliff_time,
            end_time,
            period_seconds,
        })
    }

    /// Continuous linear unlock: no cliff, one-second steps
    pub fn linear(start_time: i64, end_time: i64) -> Result<Self> {
        Self::new(start_time, start_time, end_time, 1)
    }

    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    pub fn total_periods(&self) -> u64 {
        (self.duration() / self.period_seconds) as u64
    }

    /// Whole periods elapsed at `now`, capped at the schedule length
    pub fn periods_elapsed(&self, now: i64) -> u64 {
        if now <= self.start_time {
            return 0;
        }
        let elapsed = now.saturating_sub(self.start_time) / self.period_seconds;
        (elapsed as u64).min(self.total_periods())
    }

    /// Amount of `total` vested at `now`
    ///
    /// vested = total * periods_elapsed / total_periods, in u128 so the
    /// product cannot overflow. Integer division rounds down; the remainder is
    /// released by the `now >= end_time` branch.
    pub fn vested_amount(&self, total: u64, now: i64) -> Result<u64> {
        if now < self.cliff_time {
            return Ok(0);
        }
        if now >= self.end_time {
            return Ok(total);
        }

        let vested = (total as u128)
            .checked_mul(self.periods_elapsed(now) as u128)
            .ok_or(error!(VestingError::MathOverflow))?
            .checked_div(self.total_periods() as u128)
            .ok_or(error!(VestingError::MathOverflow))?;

        let vested = u64::try_from(vested).map_err(|_| error!(VestingError::MathOverflow))?;
        Ok(vested.min(total))
    }

    /// Vested minus already withdrawn, clamped at zero
    pub fn claimable(&self, total: u64, withdrawn: u64, now: i64) -> Result<u64> {
        Ok(self.vested_amount(total, now)?.saturating_sub(withdrawn))
    }
}

/// Lifecycle of a vesting entitlement, derived from the withdrawn total
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingStatus {
    Created,
    Vesting,
    FullyClaimed,
}

/// Claim accounting over a schedule
///
/// Implemented by every account that releases tokens on a schedule so that
/// vault unlocks and employee claims share one formula.
pub trait VestingLedger {
    fn schedule(&self) -> Result<VestingSchedule>;

    /// Total amount that will eventually be released
    fn entitlement(&self) -> u64;

    /// Cumulative amount already released
    fn withdrawn(&self) -> u64;

    fn set_withdrawn(&mut self, withdrawn: u64);

    fn claimable(&self, now: i64) -> Result<u64> {
        self.schedule()?.claimable(self.entitlement(), self.withdrawn(), now)
    }

    /// Claimable amount at `now`, failing when there is nothing new
    fn claim(&self, now: i64) -> Result<u64> {
        let amount = self.claimable(now)?;
        require!(amount > 0, VestingError::NothingToClaim);
        Ok(amount)
    }

    fn record_claim(&mut self, amount: u64) -> Result<()> {
        let withdrawn = self
            .withdrawn()
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(
            withdrawn <= self.entitlement(),
            VestingError::ClaimExceedsEntitlement
        );
        self.set_withdrawn(withdrawn);
        Ok(())
    }

    fn is_fully_claimed(&self) -> bool {
        self.withdrawn() == self.entitlement()
    }

    fn status(&self) -> VestingStatus {
        if self.withdrawn() == 0 {
            VestingStatus::Created
        } else if self.is_fully_claimed() {
            VestingStatus::FullyClaimed
        } else {
            VestingStatus::Vesting
        }
    }
}
