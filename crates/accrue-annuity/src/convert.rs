//! Rate-unit conversion between annual and monthly compounding periods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnnuityError;

/// Number of compounding periods per year.
pub const PERIODS_PER_YEAR: u32 = 12;

/// Method for translating an annual rate into a monthly rate.
///
/// # Example
///
/// ```rust
/// use accrue_annuity::convert::RateConversion;
///
/// // Geometric: the monthly rate that compounds to the annual rate
/// let geometric = RateConversion::Geometric.monthly_rate(0.10);
/// assert!((geometric - 0.007974).abs() < 1e-6);
///
/// // Arithmetic: a flat twelfth
/// let arithmetic = RateConversion::Arithmetic.monthly_rate(0.10);
/// assert!((arithmetic - 0.10 / 12.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateConversion {
    /// `(1 + annual)^(1/12) - 1`: exact under monthly compounding.
    Geometric,
    /// `annual / 12`: simple division, overstates the compounded rate.
    Arithmetic,
}

impl RateConversion {
    /// Converts an annual rate to a monthly rate under this method.
    #[must_use]
    pub fn monthly_rate(&self, annual_rate: f64) -> f64 {
        match self {
            Self::Geometric => (1.0 + annual_rate).powf(1.0 / f64::from(PERIODS_PER_YEAR)) - 1.0,
            Self::Arithmetic => annual_rate / f64::from(PERIODS_PER_YEAR),
        }
    }
}

impl fmt::Display for RateConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometric => write!(f, "geometric"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

impl FromStr for RateConversion {
    type Err = AnnuityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "geometric" => Ok(Self::Geometric),
            "arithmetic" => Ok(Self::Arithmetic),
            other => Err(AnnuityError::invalid_argument(
                "method",
                format!("unknown rate conversion method `{other}`"),
            )),
        }
    }
}

/// Annualizes a monthly rate: `(1 + monthly)^12 - 1`.
///
/// Inverse of [`RateConversion::Geometric`]'s conversion.
#[must_use]
pub fn annualize(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powi(PERIODS_PER_YEAR as i32) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometric_round_trips_with_annualize() {
        let annual = 0.10;
        let monthly = RateConversion::Geometric.monthly_rate(annual);
        assert_relative_eq!(annualize(monthly), annual, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic_is_a_flat_twelfth() {
        assert_relative_eq!(
            RateConversion::Arithmetic.monthly_rate(0.06),
            0.005,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_geometric_below_arithmetic_for_positive_rates() {
        let annual = 0.12;
        assert!(
            RateConversion::Geometric.monthly_rate(annual)
                < RateConversion::Arithmetic.monthly_rate(annual)
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "geometric".parse::<RateConversion>().unwrap(),
            RateConversion::Geometric
        );
        assert_eq!(
            "arithmetic".parse::<RateConversion>().unwrap(),
            RateConversion::Arithmetic
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_method() {
        let err = "harmonic".parse::<RateConversion>().unwrap_err();
        assert!(err.to_string().contains("harmonic"));
    }

    #[test]
    fn test_zero_rate_converts_to_zero() {
        assert_relative_eq!(RateConversion::Geometric.monthly_rate(0.0), 0.0);
        assert_relative_eq!(RateConversion::Arithmetic.monthly_rate(0.0), 0.0);
    }
}
