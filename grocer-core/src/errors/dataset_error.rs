//! Dataset loading and validation errors.

use super::error_code::{self, GrocerErrorCode};

/// Errors raised while loading or validating the store/product dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to parse dataset: {message}")]
    ParseError { message: String },

    #[error("Dataset is empty")]
    Empty,

    #[error("Record {index} ({product} @ {store}): {field} = {value} is out of range {range}")]
    OutOfRange {
        index: usize,
        product: String,
        store: String,
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("Record {index} ({product} @ {store}): {field} is not finite")]
    NonFinite {
        index: usize,
        product: String,
        store: String,
        field: &'static str,
    },

    #[error("Store {store} has conflicting coordinates across records")]
    ConflictingCoordinates { store: String },
}

impl GrocerErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
