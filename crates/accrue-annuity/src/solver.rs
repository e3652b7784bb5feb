//! Periodic rate solvers for a savings target.
//!
//! Two competing strategies over the same objective
//! `f(r) = future_value(r, ..) - target`:
//!
//! - [`RateSolver::solve_bracketing`]: bisection over a fixed rate bracket,
//!   relying on the objective being increasing there. Returns the
//!   **annualized** rate.
//! - [`RateSolver::solve_local`]: derivative-free secant iteration seeded
//!   near zero. Returns the **raw per-period** rate.
//!
//! The unit asymmetry between the two is deliberate and documented on each
//! method; callers comparing the outputs must match units first (see the
//! `rate_bench` harness).
//!
//! # Example
//!
//! ```rust
//! use accrue_annuity::convert::RateConversion;
//! use accrue_annuity::solver::RateSolver;
//!
//! let solver = RateSolver::new();
//!
//! // What monthly rate turns 2,000/month into 5,000,000 over 20 years?
//! let bracketed = solver.solve_bracketing(5_000_000.0, 0.0, 2_000.0, 240).unwrap();
//! let local = solver.solve_local(5_000_000.0, 0.0, 2_000.0, 240).unwrap();
//!
//! // Same root, different units: de-annualize before comparing.
//! let periodic = RateConversion::Geometric.monthly_rate(bracketed.rate);
//! assert!((periodic - local.rate).abs() < 1e-4);
//! ```

use log::debug;
use serde::Serialize;

use accrue_math::solvers::{bisection, secant, SolverConfig};

use crate::convert::annualize;
use crate::error::{AnnuityError, AnnuityResult};
use crate::value::future_value;

/// Default search bracket for the periodic rate: above -99% and at most
/// 1000% per period. A design bound on the search space, not a physical law.
pub const DEFAULT_BRACKET: (f64, f64) = (-0.99, 10.0);

/// Default seed for the local solver: 1% per period.
pub const DEFAULT_LOCAL_SEED: f64 = 0.01;

/// Offset used to form the second secant point from the seed.
const SEED_OFFSET: f64 = 1e-3;

/// Relative residual bound for accepting a local solve, scaled by the
/// target. The secant kernel can stop on a stalled step far from any root;
/// a result whose discrepancy is not tiny relative to the target is a
/// failed solve, not an answer.
const VALUE_TOLERANCE: f64 = 1e-6;

/// Result of a rate solve.
///
/// `rate` is annualized for [`RateSolver::solve_bracketing`] and per-period
/// for [`RateSolver::solve_local`]. `converged` is always `true` for the
/// local solver (failures are errors); for the bracketing solver it is
/// `false` when the bracket collapsed before the acceptance test was met,
/// in which case `rate` is the bracket-width-accurate final estimate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateSolution {
    /// The solved rate. Units depend on the solver; see above.
    pub rate: f64,
    /// Whether the acceptance test was met.
    pub converged: bool,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual in balance units (value minus target).
    pub residual: f64,
}

/// Solver for the periodic rate implied by a savings target.
///
/// Carries the numeric configuration (tolerance, iteration cap), the search
/// bracket for the bracketing strategy, and the seed for the local strategy.
///
/// Defaults: tolerance `1e-10`, 100 iterations, bracket `[-0.99, 10.0]`,
/// seed `0.01`.
#[derive(Debug, Clone)]
pub struct RateSolver {
    /// Numeric configuration shared by both strategies.
    config: SolverConfig,
    /// Search bracket for the bracketing strategy.
    bracket: (f64, f64),
    /// Initial guess for the local strategy.
    seed: f64,
}

impl Default for RateSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSolver {
    /// Creates a rate solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            bracket: DEFAULT_BRACKET,
            seed: DEFAULT_LOCAL_SEED,
        }
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the search bracket for the bracketing strategy.
    #[must_use]
    pub fn with_bracket(mut self, lo: f64, hi: f64) -> Self {
        self.bracket = (lo, hi);
        self
    }

    /// Sets the seed for the local strategy.
    #[must_use]
    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the numeric configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the periodic rate by bisection over the bracket, returning
    /// the **annualized** rate `(1 + r)^12 - 1`.
    ///
    /// Assumes the value function is increasing in rate over the bracket -
    /// true for positive contributions over at least two periods (or any
    /// positive starting balance). The precondition is not verified; with a
    /// non-monotone objective the result is unspecified.
    ///
    /// Acceptance is one-sided: a midpoint whose value sits at or less than
    /// `tolerance` above the target is taken as the root. If the bracket
    /// instead collapses to `tolerance` width first, the final midpoint is
    /// returned with `converged = false` and the caller decides whether its
    /// residual is acceptable. Exhausting the iteration cap is an error.
    pub fn solve_bracketing(
        &self,
        target_value: f64,
        initial_balance: f64,
        contribution: f64,
        periods: u32,
    ) -> AnnuityResult<RateSolution> {
        validate_periods(periods)?;

        let objective = |r: f64| future_value(r, initial_balance, contribution, periods) - target_value;
        let (lo, hi) = self.bracket;
        let result = bisection(&objective, lo, hi, &self.config)?;

        if !result.converged {
            debug!(
                "bracketing solve for target {target_value} exited by interval width \
                 (residual {:.2e})",
                result.residual
            );
        }

        Ok(RateSolution {
            rate: annualize(result.root),
            converged: result.converged,
            iterations: result.iterations,
            residual: result.residual,
        })
    }

    /// Solves for the periodic rate with the secant method, returning the
    /// **raw per-period** rate - deliberately not annualized, unlike
    /// [`Self::solve_bracketing`].
    ///
    /// Seeded at the configured guess; a local method started from a fixed
    /// seed may land on a different root than the bracketing search, or fail
    /// to converge, when the objective is not monotone. Non-convergence
    /// (iteration cap, singular slope estimate, non-finite iterate) is
    /// reported as an error, never returned as a plausible-looking rate.
    pub fn solve_local(
        &self,
        target_value: f64,
        initial_balance: f64,
        contribution: f64,
        periods: u32,
    ) -> AnnuityResult<RateSolution> {
        validate_periods(periods)?;

        let objective = |r: f64| future_value(r, initial_balance, contribution, periods) - target_value;
        let result = secant(&objective, self.seed, self.seed + SEED_OFFSET, &self.config)?;

        // The kernel accepts a stalled step as converged; reject it here if
        // the discrepancy is not tiny relative to the target.
        if result.residual.abs() > VALUE_TOLERANCE * target_value.abs().max(1.0) {
            return Err(
                accrue_math::MathError::convergence_failed(result.iterations, result.residual)
                    .into(),
            );
        }

        Ok(RateSolution {
            rate: result.root,
            converged: result.converged,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

fn validate_periods(periods: u32) -> AnnuityResult<()> {
    if periods == 0 {
        return Err(AnnuityError::invalid_argument(
            "periods",
            "must be positive",
        ));
    }
    Ok(())
}
