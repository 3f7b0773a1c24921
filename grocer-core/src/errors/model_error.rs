//! Fuzzy model construction errors.
//!
//! All of these are startup-time failures: a process must not evaluate
//! rows against a malformed membership model or rule base.

use super::error_code::{self, GrocerErrorCode};

/// Errors raised while constructing the membership model or rule base.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Triangular vertices must be non-decreasing, got ({a}, {b}, {c})")]
    NonMonotonicVertices { a: f64, b: f64, c: f64 },

    #[error("Triangular vertices must be finite, got ({a}, {b}, {c})")]
    NonFiniteVertices { a: f64, b: f64, c: f64 },

    #[error("Variable {variable} has an empty universe [{min}, {max}]")]
    EmptyUniverse { variable: String, min: f64, max: f64 },

    #[error("Variable {variable} has an invalid grid step {step}")]
    InvalidStep { variable: String, step: f64 },

    #[error("Variable {variable} defines set {set} more than once")]
    DuplicateSet { variable: String, set: String },

    #[error("Rule {rule} references unknown set {variable}.{set}")]
    UnknownSetReference {
        rule: String,
        variable: String,
        set: String,
    },

    #[error("Rule base is empty")]
    EmptyRuleBase,
}

impl GrocerErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
