//! Per-row evaluation errors.

use super::error_code::{self, GrocerErrorCode};

/// Errors raised while evaluating one input row.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Aggregated output membership is zero everywhere — the centroid is
    /// undefined. Recoverable: the caller treats the row's score as
    /// missing and continues with other rows.
    #[error("No rule fired: aggregated output membership is zero everywhere")]
    NoRuleFired,

    /// A rule referenced a set the membership model does not define.
    /// Cannot occur once the rule base validated against the model;
    /// reaching this at evaluation time is a programming defect.
    #[error("Unknown set {variable}.{set} during evaluation")]
    UnknownSet { variable: String, set: String },
}

impl GrocerErrorCode for EvalError {
    fn error_code(&self) -> &'static str {
        error_code::EVAL_ERROR
    }
}
