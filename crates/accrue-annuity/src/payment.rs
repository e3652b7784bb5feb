//! Closed-form required-payment solving.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnnuityError, AnnuityResult};
use crate::value::RATE_EPSILON;

/// What a backward solve is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveTarget {
    /// Solve for the constant monthly contribution (tag `"num"`).
    #[serde(rename = "num")]
    Amount,
    /// Solve for the required rate of return (tag `"rate"`). Declared but
    /// not implemented; requesting it is an explicit failure.
    Rate,
}

impl fmt::Display for SolveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount => write!(f, "num"),
            Self::Rate => write!(f, "rate"),
        }
    }
}

impl FromStr for SolveTarget {
    type Err = AnnuityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "num" => Ok(Self::Amount),
            "rate" => Ok(Self::Rate),
            other => Err(AnnuityError::invalid_argument(
                "target",
                format!("unknown solve target `{other}`"),
            )),
        }
    }
}

/// Constant monthly contribution needed to reach `target_value`.
///
/// Derived algebraically from the annuity value formula:
///
/// ```text
/// PMT = (FV - PV * (1+r)^n) / (((1+r)^n - 1) / r)
/// ```
///
/// with the usual near-zero guard collapsing to `(FV - PV) / n`. Only
/// [`SolveTarget::Amount`] is implemented; [`SolveTarget::Rate`] reports
/// [`AnnuityError::UnsupportedMode`] rather than guessing a formula.
///
/// # Example
///
/// ```rust
/// use accrue_annuity::payment::{required_payment, SolveTarget};
/// use accrue_annuity::value::future_value;
///
/// let pmt = required_payment(100_000.0, 0.005, 120, 0.0, SolveTarget::Amount).unwrap();
///
/// // Contributing that amount reaches the target.
/// let fv = future_value(0.005, 0.0, pmt, 120);
/// assert!((fv - 100_000.0).abs() < 1e-6);
/// ```
pub fn required_payment(
    target_value: f64,
    monthly_rate: f64,
    months: u32,
    initial_balance: f64,
    target: SolveTarget,
) -> AnnuityResult<f64> {
    match target {
        SolveTarget::Rate => Err(AnnuityError::UnsupportedMode {
            mode: target.to_string(),
        }),
        SolveTarget::Amount => {
            if months == 0 {
                return Err(AnnuityError::invalid_argument("months", "must be positive"));
            }

            let n = f64::from(months);
            if monthly_rate.abs() < RATE_EPSILON {
                return Ok((target_value - initial_balance) / n);
            }

            let growth = (1.0 + monthly_rate).powi(months as i32);
            Ok((target_value - initial_balance * growth) / ((growth - 1.0) / monthly_rate))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::future_value;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverts_future_value() {
        let rate = 0.004;
        let pv = 5_000.0;
        let pmt = 250.0;
        let n = 180;

        let target = future_value(rate, pv, pmt, n);
        let solved = required_payment(target, rate, n, pv, SolveTarget::Amount).unwrap();

        assert_relative_eq!(solved, pmt, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_rate_is_linear_split() {
        let pmt = required_payment(12_000.0, 0.0, 120, 0.0, SolveTarget::Amount).unwrap();
        assert_relative_eq!(pmt, 100.0);
    }

    #[test]
    fn test_target_already_covered_by_balance() {
        // A balance that outgrows the target needs a negative contribution.
        let pmt = required_payment(1_000.0, 0.01, 12, 2_000.0, SolveTarget::Amount).unwrap();
        assert!(pmt < 0.0);
    }

    #[test]
    fn test_rate_mode_is_unsupported() {
        let result = required_payment(1_000.0, 0.01, 12, 0.0, SolveTarget::Rate);

        assert!(matches!(result, Err(AnnuityError::UnsupportedMode { .. })));
    }

    #[test]
    fn test_zero_months_rejected() {
        let result = required_payment(1_000.0, 0.01, 0, 0.0, SolveTarget::Amount);

        assert!(matches!(
            result,
            Err(AnnuityError::InvalidArgument { argument: "months", .. })
        ));
    }

    #[test]
    fn test_target_tags_parse() {
        assert_eq!("num".parse::<SolveTarget>().unwrap(), SolveTarget::Amount);
        assert_eq!("rate".parse::<SolveTarget>().unwrap(), SolveTarget::Rate);
        assert!("horizon".parse::<SolveTarget>().is_err());
    }
}
