//! Error handling for Grocer.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod dataset_error;
pub mod error_code;
pub mod eval_error;
pub mod model_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use error_code::GrocerErrorCode;
pub use eval_error::EvalError;
pub use model_error::ModelError;
pub use pipeline_error::PipelineError;
