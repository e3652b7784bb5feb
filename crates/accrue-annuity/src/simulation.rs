//! Forward accumulation simulation and months-to-target search.

use serde::Serialize;

use crate::error::{AnnuityError, AnnuityResult};

/// Default cap on open-ended monthly loops: 1,000 years.
///
/// The months-to-target search never terminates when growth plus
/// contributions cannot reach the target; the cap turns that into an
/// explicit [`AnnuityError::Unterminated`].
pub const DEFAULT_MAX_MONTHS: u32 = 12_000;

/// One month of an accumulation simulation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthlyRow {
    /// Month index (0 is the starting position).
    pub month: u32,
    /// Contribution in effect for this month.
    pub contribution: f64,
    /// Cumulative principal paid in, including the starting balance.
    pub principal: f64,
    /// Account balance.
    pub balance: f64,
    /// Investment growth to date (`balance - principal`).
    pub growth: f64,
}

/// Outcome of an accumulation simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// Balance at the end of the horizon.
    pub final_balance: f64,
    /// Total principal paid in, including the starting balance.
    pub total_principal: f64,
    /// Total investment growth (`final_balance - total_principal`).
    pub total_return: f64,
    /// Month-by-month breakdown, starting at month 0.
    pub months: Vec<MonthlyRow>,
}

/// A monthly accumulation plan with an optional annual contribution step-up.
///
/// The first contribution is paid in up front; each subsequent month the
/// balance compounds once and the (possibly stepped-up) contribution is
/// added. At each anniversary (`(i + 1) % 12 == 0`) the contribution grows
/// by `increment`, but only while `0 < year <= increment_period_years` -
/// contributions never step up during year zero.
///
/// # Example
///
/// ```rust
/// use accrue_annuity::simulation::AccumulationPlan;
///
/// let outcome = AccumulationPlan::new(0.005, 1_000.0, 10, 0.0)
///     .with_step_up(100.0, 5)
///     .run()
///     .unwrap();
///
/// assert!(outcome.final_balance > outcome.total_principal);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccumulationPlan {
    /// Rate applied once per month.
    pub monthly_rate: f64,
    /// Base monthly contribution.
    pub monthly_contribution: f64,
    /// Horizon in whole years.
    pub horizon_years: u32,
    /// Starting balance.
    pub initial_balance: f64,
    /// Annual increase applied to the contribution.
    pub increment: f64,
    /// Number of years the increment keeps being applied.
    pub increment_period_years: u32,
}

impl AccumulationPlan {
    /// Creates a plan with no contribution step-up.
    #[must_use]
    pub fn new(
        monthly_rate: f64,
        monthly_contribution: f64,
        horizon_years: u32,
        initial_balance: f64,
    ) -> Self {
        Self {
            monthly_rate,
            monthly_contribution,
            horizon_years,
            initial_balance,
            increment: 0.0,
            increment_period_years: 0,
        }
    }

    /// Adds an annual contribution step-up for the first `years` years
    /// after year zero.
    #[must_use]
    pub fn with_step_up(mut self, increment: f64, years: u32) -> Self {
        self.increment = increment;
        self.increment_period_years = years;
        self
    }

    /// Runs the simulation month by month.
    pub fn run(&self) -> AnnuityResult<SimulationOutcome> {
        if self.horizon_years == 0 {
            return Err(AnnuityError::invalid_argument(
                "horizon_years",
                "must be positive",
            ));
        }
        if self.monthly_contribution < 0.0 {
            return Err(AnnuityError::invalid_argument(
                "monthly_contribution",
                "cannot be negative",
            ));
        }
        if self.initial_balance < 0.0 {
            return Err(AnnuityError::invalid_argument(
                "initial_balance",
                "cannot be negative",
            ));
        }

        let months = self.horizon_years * 12;
        let mut contribution = self.monthly_contribution;

        // The first contribution is paid in before the loop and compounds
        // through the first month.
        let mut balance = self.initial_balance + contribution;
        let mut principal = balance;

        let mut rows = Vec::with_capacity(months as usize + 1);
        rows.push(MonthlyRow {
            month: 0,
            contribution,
            principal,
            balance,
            growth: 0.0,
        });

        for i in 0..months {
            balance *= 1.0 + self.monthly_rate;

            if (i + 1) % 12 == 0 {
                let year = (i + 1) / 12;
                if self.increment != 0.0 && year <= self.increment_period_years {
                    contribution += self.increment;
                }
            }

            balance += contribution;
            principal += contribution;
            rows.push(MonthlyRow {
                month: i + 1,
                contribution,
                principal,
                balance,
                growth: balance - principal,
            });
        }

        Ok(SimulationOutcome {
            final_balance: balance,
            total_principal: principal,
            total_return: balance - principal,
            months: rows,
        })
    }
}

/// Months until the balance first reaches `target_value`, as fractional
/// years (`months / 12`).
///
/// Compounds then contributes each month. With non-positive effective
/// growth and insufficient contributions the loop would never finish; the
/// explicit `max_months` cap (see [`DEFAULT_MAX_MONTHS`]) turns that into
/// [`AnnuityError::Unterminated`].
pub fn periods_to_target(
    target_value: f64,
    monthly_rate: f64,
    monthly_contribution: f64,
    initial_balance: f64,
    max_months: u32,
) -> AnnuityResult<f64> {
    if target_value <= 0.0 {
        return Err(AnnuityError::invalid_argument(
            "target_value",
            "must be positive",
        ));
    }

    let mut balance = initial_balance;
    let mut months = 0u32;

    while balance < target_value {
        if months >= max_months {
            return Err(AnnuityError::Unterminated { months: max_months });
        }
        balance = balance * (1.0 + monthly_rate) + monthly_contribution;
        months += 1;
    }

    Ok(f64::from(months) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_plan_accumulates_contributions() {
        // Zero rate: the balance is just the paid-in principal.
        let outcome = AccumulationPlan::new(0.0, 100.0, 2, 50.0).run().unwrap();

        // Initial balance + up-front contribution + 24 monthly contributions.
        assert_relative_eq!(outcome.final_balance, 50.0 + 100.0 * 25.0);
        assert_relative_eq!(outcome.total_return, 0.0);
        assert_eq!(outcome.months.len(), 25);
    }

    #[test]
    fn test_no_step_up_in_year_zero() {
        // Big increment, one-year horizon: months 0..11 all pay the base
        // contribution; only the final, anniversary-month contribution of
        // the run is stepped.
        let outcome = AccumulationPlan::new(0.0, 100.0, 1, 0.0)
            .with_step_up(1_000.0, 10)
            .run()
            .unwrap();

        for row in &outcome.months[..12] {
            assert_relative_eq!(row.contribution, 100.0);
        }
        assert_relative_eq!(outcome.months[12].contribution, 1_100.0);
    }

    #[test]
    fn test_step_up_stops_after_increment_period() {
        let outcome = AccumulationPlan::new(0.0, 100.0, 5, 0.0)
            .with_step_up(50.0, 2)
            .run()
            .unwrap();

        // Steps at months 12 and 24, then flat.
        assert_relative_eq!(outcome.months[11].contribution, 100.0);
        assert_relative_eq!(outcome.months[12].contribution, 150.0);
        assert_relative_eq!(outcome.months[24].contribution, 200.0);
        assert_relative_eq!(outcome.months[36].contribution, 200.0);
        assert_relative_eq!(outcome.months[60].contribution, 200.0);
    }

    #[test]
    fn test_growth_tracks_balance_minus_principal() {
        let outcome = AccumulationPlan::new(0.01, 200.0, 3, 1_000.0).run().unwrap();

        let last = outcome.months.last().unwrap();
        assert_relative_eq!(
            last.growth,
            last.balance - last.principal,
            epsilon = 1e-9
        );
        assert!(outcome.total_return > 0.0);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let result = AccumulationPlan::new(0.01, 100.0, 0, 0.0).run();

        assert!(matches!(
            result,
            Err(AnnuityError::InvalidArgument { argument: "horizon_years", .. })
        ));
    }

    #[test]
    fn test_periods_to_target_counts_months() {
        // 1,000/month at zero growth reaches 12,000 in exactly a year.
        let years = periods_to_target(12_000.0, 0.0, 1_000.0, 0.0, DEFAULT_MAX_MONTHS).unwrap();

        assert_relative_eq!(years, 1.0);
    }

    #[test]
    fn test_periods_to_target_already_reached() {
        let years = periods_to_target(1_000.0, 0.01, 100.0, 5_000.0, DEFAULT_MAX_MONTHS).unwrap();

        assert_relative_eq!(years, 0.0);
    }

    #[test]
    fn test_periods_to_target_unreachable() {
        // Shrinking balance and no contributions never reach the target.
        let result = periods_to_target(10_000.0, -0.01, 0.0, 1_000.0, 120);

        assert!(matches!(
            result,
            Err(AnnuityError::Unterminated { months: 120 })
        ));
    }

    #[test]
    fn test_fractional_years() {
        let years = periods_to_target(1_800.0, 0.0, 100.0, 0.0, DEFAULT_MAX_MONTHS).unwrap();

        assert_relative_eq!(years, 1.5);
    }
}
