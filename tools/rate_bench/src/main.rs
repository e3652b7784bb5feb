//! Rate solver comparison bench.
//!
//! Drives the bracketing and local rate solvers over a fixed scenario list,
//! times each call, and reports the results side by side. The bracketing
//! output is annualized and the local output is per-period, so the
//! agreement check de-annualizes the former before comparing; a mismatch
//! after unit reconciliation is flagged as a defect in the report.
//!
//! Pass `--json` for machine-readable output.

use std::env;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use accrue_annuity::convert::RateConversion;
use accrue_annuity::error::AnnuityError;
use accrue_annuity::solver::RateSolver;
use accrue_math::MathError;

/// Tolerance for the unit-reconciled agreement check.
const AGREEMENT_TOLERANCE: f64 = 1e-4;

/// (name, target, initial, monthly, periods)
const SCENARIOS: [(&str, f64, f64, f64, u32); 5] = [
    ("starter_1y", 1_000.0, 0.0, 10.0, 12),
    ("retirement_20y", 5_000_000.0, 0.0, 2_000.0, 240),
    ("house_10y", 150_000.0, 20_000.0, 800.0, 120),
    ("college_15y", 200_000.0, 5_000.0, 600.0, 180),
    ("modest_30y", 750_000.0, 10_000.0, 450.0, 360),
];

#[derive(Serialize)]
struct ScenarioReport {
    name: &'static str,
    target_value: f64,
    initial_balance: f64,
    monthly_contribution: f64,
    periods: u32,
    bracketing: SolveReport,
    local: SolveReport,
    /// De-annualized bracketing rate vs raw local rate, when both solved.
    agreement: Option<bool>,
}

#[derive(Serialize)]
struct SolveReport {
    /// Annualized rate for the bracketing solver, per-period for the local.
    rate: Option<f64>,
    converged: Option<bool>,
    iterations: Option<u32>,
    micros: u64,
    error: Option<String>,
}

fn describe_failure(err: &AnnuityError) -> String {
    match err {
        AnnuityError::Solver(MathError::ConvergenceFailed { iterations, .. }) => {
            format!("did not converge within {iterations} iterations")
        }
        AnnuityError::Solver(MathError::DivisionByZero { .. }) => {
            "singular slope estimate".to_string()
        }
        other => other.to_string(),
    }
}

fn main() -> Result<()> {
    let json_output = env::args().any(|arg| arg == "--json");
    let solver = RateSolver::new();

    let mut reports = Vec::with_capacity(SCENARIOS.len());

    for (name, target, initial, monthly, periods) in SCENARIOS {
        let start = Instant::now();
        let bracketing = solver.solve_bracketing(target, initial, monthly, periods);
        let bracketing_micros = start.elapsed().as_micros() as u64;

        let start = Instant::now();
        let local = solver.solve_local(target, initial, monthly, periods);
        let local_micros = start.elapsed().as_micros() as u64;

        let agreement = match (&bracketing, &local) {
            (Ok(b), Ok(l)) => {
                let periodic = RateConversion::Geometric.monthly_rate(b.rate);
                Some((periodic - l.rate).abs() < AGREEMENT_TOLERANCE)
            }
            _ => None,
        };

        reports.push(ScenarioReport {
            name,
            target_value: target,
            initial_balance: initial,
            monthly_contribution: monthly,
            periods,
            bracketing: SolveReport {
                rate: bracketing.as_ref().ok().map(|s| s.rate),
                converged: bracketing.as_ref().ok().map(|s| s.converged),
                iterations: bracketing.as_ref().ok().map(|s| s.iterations),
                micros: bracketing_micros,
                error: bracketing.as_ref().err().map(describe_failure),
            },
            local: SolveReport {
                rate: local.as_ref().ok().map(|s| s.rate),
                converged: local.as_ref().ok().map(|s| s.converged),
                iterations: local.as_ref().ok().map(|s| s.iterations),
                micros: local_micros,
                error: local.as_ref().err().map(describe_failure),
            },
            agreement,
        });
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Rate solver comparison ({} scenarios)", reports.len());
    println!("========================================");

    for report in &reports {
        println!(
            "\n{}: target ${:.2}, initial ${:.2}, ${:.2}/month, {} periods",
            report.name,
            report.target_value,
            report.initial_balance,
            report.monthly_contribution,
            report.periods
        );

        match (&report.bracketing.rate, &report.bracketing.error) {
            (Some(rate), _) => {
                let periodic = RateConversion::Geometric.monthly_rate(*rate);
                println!(
                    "  bracketing: annual {:.6} (periodic {:.6}) in {} us{}",
                    rate,
                    periodic,
                    report.bracketing.micros,
                    if report.bracketing.converged == Some(false) {
                        " [width exit]"
                    } else {
                        ""
                    }
                );
            }
            (None, Some(err)) => {
                println!("  bracketing: FAILED ({err}) in {} us", report.bracketing.micros);
            }
            (None, None) => unreachable!("solve produced neither rate nor error"),
        }

        match (&report.local.rate, &report.local.error) {
            (Some(rate), _) => {
                println!(
                    "  local:      periodic {:.6} in {} us",
                    rate, report.local.micros
                );
            }
            (None, Some(err)) => {
                println!("  local:      FAILED ({err}) in {} us", report.local.micros);
            }
            (None, None) => unreachable!("solve produced neither rate nor error"),
        }

        match report.agreement {
            Some(true) => println!("  agreement:  OK (within {AGREEMENT_TOLERANCE:e})"),
            Some(false) => println!("  agreement:  MISMATCH - defect"),
            None => println!("  agreement:  n/a"),
        }
    }

    Ok(())
}
