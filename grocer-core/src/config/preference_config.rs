//! User preference configuration — per-signal importance weights.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::weights::{ImportanceWeights, DEFAULT_WEIGHT};

/// Importance weights section. Each weight is an integer in 1..=10.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Price importance. Default: 5.
    pub price: Option<u8>,
    /// Freshness importance. Default: 5.
    pub freshness: Option<u8>,
    /// Distance importance. Default: 5.
    pub distance: Option<u8>,
    /// Availability importance. Default: 5.
    pub availability: Option<u8>,
}

impl PreferenceConfig {
    pub fn effective_price(&self) -> u8 {
        self.price.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn effective_freshness(&self) -> u8 {
        self.freshness.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn effective_distance(&self) -> u8 {
        self.distance.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn effective_availability(&self) -> u8 {
        self.availability.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Resolve into validated `ImportanceWeights`.
    pub fn to_weights(&self) -> Result<ImportanceWeights, ConfigError> {
        ImportanceWeights::new(
            self.effective_price(),
            self.effective_freshness(),
            self.effective_distance(),
            self.effective_availability(),
        )
    }
}
