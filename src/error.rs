//! Error taxonomy for the calculation engine
//!
//! Every failure is deterministic in the inputs: retrying without changing
//! the request reproduces the same error, so nothing here is retried.

use thiserror::Error;

/// Failures surfaced by the engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A request field is non-finite or violates its sign constraint.
    #[error("invalid `{field}` = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The chosen outgoing angle lies outside the reachable arc.
    #[error("`{field}` = {value} is outside the reachable range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A derived quantity came out non-finite. Unreachable for inputs that
    /// pass validation.
    #[error("computation produced a non-finite {what}")]
    Computation { what: &'static str },
}

impl EngineError {
    /// Stable machine-readable discriminant for transport layers.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { .. } => "invalid_input",
            EngineError::OutOfRange { .. } => "out_of_range",
            EngineError::Computation { .. } => "computation",
        }
    }
}
