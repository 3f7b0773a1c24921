//! Importance weights — the user's stated importance per signal.
//!
//! Weights are integers in 1..=10. A weight scales its raw signal by
//! `w / 10` before fuzzification: weight 10 passes the raw value through
//! unchanged, weight 1 compresses it to one tenth. Because the
//! "favorable" fuzzy sets (low price, near distance) anchor at 0, a low
//! weight biases that signal toward its favorable region rather than
//! ignoring it. That is the intended reading of "importance".

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Smallest accepted importance weight.
pub const MIN_WEIGHT: u8 = 1;
/// Largest accepted importance weight; scales by exactly 1.0.
pub const MAX_WEIGHT: u8 = 10;
/// Default importance when the user states no preference.
pub const DEFAULT_WEIGHT: u8 = 5;

/// Per-signal importance weights, shared across all rows of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportanceWeights {
    pub price: u8,
    pub freshness: u8,
    pub distance: u8,
    pub availability: u8,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            price: DEFAULT_WEIGHT,
            freshness: DEFAULT_WEIGHT,
            distance: DEFAULT_WEIGHT,
            availability: DEFAULT_WEIGHT,
        }
    }
}

impl ImportanceWeights {
    /// Create validated weights. Each weight must lie in 1..=10.
    pub fn new(
        price: u8,
        freshness: u8,
        distance: u8,
        availability: u8,
    ) -> Result<Self, ConfigError> {
        validate_weight("preferences.price", price)?;
        validate_weight("preferences.freshness", freshness)?;
        validate_weight("preferences.distance", distance)?;
        validate_weight("preferences.availability", availability)?;
        Ok(Self {
            price,
            freshness,
            distance,
            availability,
        })
    }

    /// The multiplicative factor a weight applies to its raw signal.
    pub fn scale_factor(weight: u8) -> f64 {
        f64::from(weight) / f64::from(MAX_WEIGHT)
    }

    pub fn price_factor(&self) -> f64 {
        Self::scale_factor(self.price)
    }

    pub fn freshness_factor(&self) -> f64 {
        Self::scale_factor(self.freshness)
    }

    pub fn distance_factor(&self) -> f64 {
        Self::scale_factor(self.distance)
    }

    pub fn availability_factor(&self) -> f64 {
        Self::scale_factor(self.availability)
    }
}

fn validate_weight(field: &str, weight: u8) -> Result<(), ConfigError> {
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be between {} and {}, got {}", MIN_WEIGHT, MAX_WEIGHT, weight),
        });
    }
    Ok(())
}
