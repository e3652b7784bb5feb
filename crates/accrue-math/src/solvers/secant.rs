//! Secant root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// A derivative-free local method: each step replaces the derivative of
/// Newton's iteration with a finite-difference slope through the last two
/// iterates (the one-dimensional Broyden update). Converges superlinearly
/// (order ~1.618) near a root, but carries no global guarantee - started
/// outside the right basin it can wander or diverge, which is surfaced as
/// an error rather than a plausible-looking number.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from `x0`)
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or:
///
/// * `Err(MathError::DivisionByZero)` - the slope estimate vanished
///   (singular one-dimensional Jacobian)
/// * `Err(MathError::Overflow)` - an iterate or function value became
///   non-finite
/// * `Err(MathError::ConvergenceFailed)` - the iteration budget ran out
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(&f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);

    for iteration in 0..config.max_iterations {
        if !f_curr.is_finite() {
            return Err(MathError::Overflow {
                operation: "secant objective evaluation",
            });
        }

        if f_curr.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
                converged: true,
            });
        }

        // A vanishing denominator means the secant line is flat: the local
        // slope estimate is singular and no update direction exists.
        let denom = f_curr - f_prev;
        if denom.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: denom });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        if !x_next.is_finite() {
            return Err(MathError::Overflow {
                operation: "secant update",
            });
        }

        // Step-size convergence: the update stalled inside the tolerance.
        if (x_next - x_curr).abs() < config.tolerance {
            let f_next = f(x_next);
            return Ok(SolverResult {
                root: x_next,
                iterations: iteration + 1,
                residual: f_next,
                converged: true,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f_curr.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(&f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| x * x * x - 27.0;

        let result = secant(&f, 2.0, 4.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_close_initial_guesses() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(&f, 1.4, 1.42, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_convergence_speed() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(&f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        // Superlinear: well under the bisection budget for the same target.
        assert!(result.iterations < 15);
    }

    #[test]
    fn test_flat_secant_line() {
        // Constant objective: the slope estimate is singular immediately.
        let f = |_x: f64| 1.0;

        let result = secant(&f, 0.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_iteration_cap_exhausted() {
        // An impossible tolerance forces the budget to run out.
        let f = |x: f64| x * x - 2.0;

        let config = SolverConfig::new(1e-300, 3);
        let result = secant(&f, 1.0, 2.0, &config);

        match result.unwrap_err() {
            MathError::ConvergenceFailed { iterations, .. } => {
                assert_eq!(iterations, 3);
            }
            other => panic!("expected ConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_objective() {
        let f = |_x: f64| f64::INFINITY;

        let result = secant(&f, 0.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::Overflow { .. })));
    }
}
