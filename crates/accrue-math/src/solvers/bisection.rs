//! Bisection search over a monotone objective.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root search for a monotonically increasing objective.
///
/// Repeatedly halves `[lo, hi]`, steering by the sign of `f(mid)`. The
/// acceptance test is one-sided: `mid` is accepted as soon as
/// `0 <= f(mid) < tolerance`, i.e. when the objective sits at or just above
/// zero. Undershoots of the same magnitude are not accepted; they move the
/// lower edge instead.
///
/// Requires: `f` is increasing on `[lo, hi]`. This precondition is NOT
/// verified; with a non-monotone objective the result is unspecified.
///
/// # Outcomes
///
/// * `Ok` with `converged: true` - the acceptance test was met.
/// * `Ok` with `converged: false` - the interval collapsed below `tolerance`
///   before any midpoint was accepted. `root` is the final midpoint; the
///   caller decides whether the residual is good enough.
/// * `Err(MathError::ConvergenceFailed)` - the iteration cap ran out while
///   the interval was still wider than `tolerance`.
///
/// # Arguments
///
/// * `f` - Increasing objective whose zero crossing is sought
/// * `lo` - Lower edge of the search bracket
/// * `hi` - Upper edge of the search bracket
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{bisection, SolverConfig};
///
/// // Find the cube root of 2
/// let f = |x: f64| x * x * x - 2.0;
///
/// let result = bisection(&f, 0.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 2.0_f64.cbrt()).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, lo: f64, hi: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if !(lo < hi) {
        return Err(MathError::invalid_input(format!(
            "empty search bracket [{lo}, {hi}]"
        )));
    }
    if config.tolerance <= 0.0 {
        return Err(MathError::invalid_input("tolerance must be positive"));
    }

    let mut lo = lo;
    let mut hi = hi;

    for iteration in 0..config.max_iterations {
        if hi - lo <= config.tolerance {
            // Width collapsed without meeting the acceptance test. Hand the
            // final midpoint back, flagged, rather than pretending it passed.
            let mid = (lo + hi) / 2.0;
            let residual = f(mid);
            debug!(
                "bisection interval collapsed at {mid} after {iteration} iterations \
                 (residual {residual:.2e})"
            );
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual,
                converged: false,
            });
        }

        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        // One-sided acceptance: at or just above zero.
        if (0.0..config.tolerance).contains(&f_mid) {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
                converged: true,
            });
        }

        if f_mid < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let mid = (lo + hi) / 2.0;
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}
