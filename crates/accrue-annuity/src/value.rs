//! Closed-form annuity value function.

/// Threshold below which a periodic rate is treated as zero.
///
/// The closed form divides by the rate; inside this neighbourhood the
/// division degenerates and the simple-interest limit is used instead.
/// Every formula in this crate with a rate-sized denominator applies the
/// same guard.
pub const RATE_EPSILON: f64 = 1e-10;

/// Ending balance of an annuity compounded `periods` times at `rate`.
///
/// A contribution is made every period and the starting balance compounds
/// alongside:
///
/// ```text
/// FV = PV * (1+r)^n + PMT * ((1+r)^n - 1) / r
/// ```
///
/// For `|rate| < RATE_EPSILON` the limit `PV + PMT * n` is returned; without
/// that branch the formula divides by near-zero and hands `NaN`/`inf` to any
/// solver probing around the origin. `periods == 0` yields `initial_balance`
/// on both branches.
///
/// Strictly increasing in `rate` whenever `contribution > 0` and
/// `periods >= 2` (or `initial_balance > 0` with `periods >= 1`) - the
/// precondition the bracketing rate search relies on.
///
/// # Example
///
/// ```rust
/// use accrue_annuity::value::future_value;
///
/// // 12 monthly contributions of 100 at 1% per month
/// let fv = future_value(0.01, 0.0, 100.0, 12);
/// assert!((fv - 1268.25).abs() < 0.01);
/// ```
#[must_use]
pub fn future_value(rate: f64, initial_balance: f64, contribution: f64, periods: u32) -> f64 {
    if rate.abs() < RATE_EPSILON {
        return initial_balance + contribution * f64::from(periods);
    }

    let growth = (1.0 + rate).powi(periods as i32);
    initial_balance * growth + contribution * (growth - 1.0) / rate
}
