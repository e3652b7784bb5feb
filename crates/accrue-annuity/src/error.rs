//! Error types for annuity operations.

use thiserror::Error;

/// A specialized Result type for annuity operations.
pub type AnnuityResult<T> = Result<T, AnnuityError>;

/// Errors that can occur during annuity calculations.
#[derive(Error, Debug, Clone)]
pub enum AnnuityError {
    /// An argument failed validation. Names the offending argument.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// The argument that failed validation.
        argument: &'static str,
        /// Description of what's invalid.
        reason: String,
    },

    /// A solve-target mode that is declared but not implemented.
    #[error("solve target `{mode}` is not supported yet")]
    UnsupportedMode {
        /// The requested mode.
        mode: String,
    },

    /// An open-ended simulation loop hit its month cap without finishing.
    #[error("simulation did not terminate within {months} months")]
    Unterminated {
        /// The cap that was exhausted.
        months: u32,
    },

    /// Root-finding failure from the numeric kernel.
    #[error("rate solve failed: {0}")]
    Solver(#[from] accrue_math::MathError),
}

impl AnnuityError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
