//! Withdrawal (decumulation) simulation.
//!
//! The mirror image of accumulation: a balance compounds monthly while a
//! fixed amount is withdrawn. Supports solving for any one of duration,
//! withdrawal amount, or starting balance given the other two.

use serde::Serialize;

use crate::convert::RateConversion;
use crate::error::{AnnuityError, AnnuityResult};
use crate::simulation::DEFAULT_MAX_MONTHS;
use crate::value::RATE_EPSILON;

/// How long a balance sustains a monthly withdrawal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SustainOutcome {
    /// Whole years the balance lasts.
    pub years: u32,
    /// Months on top of `years`.
    pub months: u32,
    /// Whole years the balance would last uninvested.
    pub no_invest_years: u32,
    /// Months on top of `no_invest_years` for the uninvested baseline.
    pub no_invest_months: u32,
}

/// A decumulation plan at a fixed expected return.
///
/// # Example
///
/// ```rust
/// use accrue_annuity::withdrawal::WithdrawalPlan;
///
/// let plan = WithdrawalPlan::new(0.10);
///
/// // How long does 100,000 sustain 1,000/month at 10% a year?
/// let outcome = plan.sustain_duration(100_000.0, 1_000.0).unwrap();
/// assert!(outcome.years > 8); // noticeably longer than the 8y4m uninvested
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithdrawalPlan {
    monthly_rate: f64,
}

impl WithdrawalPlan {
    /// Creates a plan from an annual rate, converted geometrically.
    #[must_use]
    pub fn new(annual_rate: f64) -> Self {
        Self {
            monthly_rate: RateConversion::Geometric.monthly_rate(annual_rate),
        }
    }

    /// Creates a plan directly from a monthly rate.
    #[must_use]
    pub fn from_monthly_rate(monthly_rate: f64) -> Self {
        Self { monthly_rate }
    }

    /// Returns the monthly rate in effect.
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Simulates how long `initial_balance` sustains `monthly_withdrawal`.
    ///
    /// Each month the balance compounds once and the withdrawal is taken.
    /// When the return outruns the withdrawal the balance never depletes;
    /// the [`DEFAULT_MAX_MONTHS`] cap reports that as
    /// [`AnnuityError::Unterminated`] instead of looping forever.
    pub fn sustain_duration(
        &self,
        initial_balance: f64,
        monthly_withdrawal: f64,
    ) -> AnnuityResult<SustainOutcome> {
        if initial_balance <= 0.0 {
            return Err(AnnuityError::invalid_argument(
                "initial_balance",
                "must be positive",
            ));
        }
        if monthly_withdrawal <= 0.0 {
            return Err(AnnuityError::invalid_argument(
                "monthly_withdrawal",
                "must be positive",
            ));
        }

        let mut balance = initial_balance;
        let mut months = 0u32;

        while balance - monthly_withdrawal > 0.0 {
            if months >= DEFAULT_MAX_MONTHS {
                return Err(AnnuityError::Unterminated {
                    months: DEFAULT_MAX_MONTHS,
                });
            }
            balance = balance * (1.0 + self.monthly_rate) - monthly_withdrawal;
            months += 1;
        }

        let no_invest = (initial_balance / monthly_withdrawal) as u32;

        Ok(SustainOutcome {
            years: months / 12,
            months: months % 12,
            no_invest_years: no_invest / 12,
            no_invest_months: no_invest % 12,
        })
    }

    /// Constant monthly withdrawal that exactly exhausts `initial_balance`
    /// over `years`.
    ///
    /// Closed form `PV * r / (1 - (1+r)^-n)`, with the near-zero rate guard
    /// collapsing to the linear split `PV / n`.
    pub fn sustainable_withdrawal(&self, initial_balance: f64, years: f64) -> AnnuityResult<f64> {
        if initial_balance <= 0.0 {
            return Err(AnnuityError::invalid_argument(
                "initial_balance",
                "must be positive",
            ));
        }
        let months = months_from_years(years)?;

        let n = f64::from(months);
        if self.monthly_rate.abs() < RATE_EPSILON {
            return Ok(initial_balance / n);
        }

        let discount = (1.0 + self.monthly_rate).powi(-(months as i32));
        Ok(initial_balance * self.monthly_rate / (1.0 - discount))
    }

    /// Starting balance needed to sustain `monthly_withdrawal` for `years`.
    ///
    /// Closed form `w * (1 - (1+r)^-n) / r`, with the near-zero rate guard
    /// collapsing to `w * n`.
    pub fn required_initial_balance(
        &self,
        monthly_withdrawal: f64,
        years: f64,
    ) -> AnnuityResult<f64> {
        if monthly_withdrawal <= 0.0 {
            return Err(AnnuityError::invalid_argument(
                "monthly_withdrawal",
                "must be positive",
            ));
        }
        let months = months_from_years(years)?;

        let n = f64::from(months);
        if self.monthly_rate.abs() < RATE_EPSILON {
            return Ok(monthly_withdrawal * n);
        }

        let discount = (1.0 + self.monthly_rate).powi(-(months as i32));
        Ok(monthly_withdrawal * (1.0 - discount) / self.monthly_rate)
    }
}

fn months_from_years(years: f64) -> AnnuityResult<u32> {
    if years <= 0.0 {
        return Err(AnnuityError::invalid_argument("years", "must be positive"));
    }
    let months = (years * 12.0) as u32;
    if months == 0 {
        return Err(AnnuityError::invalid_argument(
            "years",
            "must cover at least one month",
        ));
    }
    Ok(months)
}
