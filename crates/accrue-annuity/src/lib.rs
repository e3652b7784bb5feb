//! # Accrue Annuity
//!
//! Annuity accumulation analytics and periodic rate solving.
//!
//! This crate provides:
//!
//! - **Value function**: closed-form ending balance of a periodic-compounding
//!   annuity, with explicit near-zero rate handling
//! - **Rate solvers**: a bracketing search and a derivative-free local
//!   method for the periodic rate implied by a savings target
//! - **Conversion**: annual/monthly rate translation (geometric, arithmetic)
//! - **Simulation**: forward accumulation with annual contribution step-up,
//!   months-to-target, and withdrawal/decumulation plans
//! - **Payment solving**: closed-form required monthly contribution
//!
//! ## Design Philosophy
//!
//! - **Pure scalar functions**: every solve is stateless over `f64` inputs
//! - **Explicit failure**: non-convergence, unsupported modes, and capped
//!   loops are reported, never papered over with a plausible number
//! - **Configurable numerics**: tolerances, brackets, and seeds are
//!   parameters with documented defaults, not buried literals

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod convert;
pub mod error;
pub mod payment;
pub mod simulation;
pub mod solver;
pub mod value;
pub mod withdrawal;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::convert::{annualize, RateConversion};
    pub use crate::error::{AnnuityError, AnnuityResult};
    pub use crate::payment::{required_payment, SolveTarget};
    pub use crate::simulation::{
        periods_to_target, AccumulationPlan, SimulationOutcome, DEFAULT_MAX_MONTHS,
    };
    pub use crate::solver::{RateSolution, RateSolver, DEFAULT_BRACKET, DEFAULT_LOCAL_SEED};
    pub use crate::value::{future_value, RATE_EPSILON};
    pub use crate::withdrawal::{SustainOutcome, WithdrawalPlan};
}

pub use error::{AnnuityError, AnnuityResult};
pub use solver::{RateSolution, RateSolver};
pub use value::future_value;
