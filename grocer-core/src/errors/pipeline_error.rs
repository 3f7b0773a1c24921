//! Top-level pipeline errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::GrocerErrorCode;
use super::{ConfigError, DatasetError, EvalError, ModelError};

/// Errors that can abort a recommendation run.
///
/// Per-row `NoRuleFired` conditions are recovered inside the pipeline
/// (the row's score is missing); only fatal conditions surface here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl GrocerErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Dataset(e) => e.error_code(),
            Self::Eval(e) => e.error_code(),
        }
    }
}
