//! Root-finding algorithms.
//!
//! This module provides the two numerical solvers used for annuity rate
//! searches:
//!
//! - [`bisection`]: bracketing search over a monotone objective
//! - [`secant`]: derivative-free local method using finite differences
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Bounded by bracket | Monotone objective on a bracket |
//! | Secant | Fast (superlinear) | May diverge | Initial guess near the root |
//!
//! The bisection search never escapes its bracket but converges one bit per
//! step; the secant method converges at order ~1.618 near a root but carries
//! no global guarantee, which is why the two are run against each other by
//! the comparison harness.
//!
//! # Example
//!
//! ```rust
//! use accrue_math::solvers::{bisection, secant, SolverConfig};
//!
//! // Find the root of a monotone objective two ways
//! let f = |x: f64| x * x * x - 2.0;
//! let config = SolverConfig::default();
//!
//! let bracketed = bisection(&f, 0.0, 2.0, &config).unwrap();
//! let local = secant(&f, 1.0, 1.1, &config).unwrap();
//!
//! assert!((bracketed.root - local.root).abs() < 1e-8);
//! ```

mod bisection;
mod secant;

pub use bisection::bisection;
pub use secant::secant;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
///
/// `converged` distinguishes a root that met the acceptance test from a
/// best-effort estimate produced when the search interval collapsed first.
/// Callers that need strict acceptance must check the flag; callers happy
/// with a bracket-width guarantee can use `root` either way.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root (or final estimate) found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at `root`).
    pub residual: f64,
    /// Whether the acceptance test was met.
    pub converged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_builder() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::default();
        assert!((config.tolerance - DEFAULT_TOLERANCE).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
