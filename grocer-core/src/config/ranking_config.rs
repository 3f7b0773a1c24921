//! Ranking configuration.

use serde::{Deserialize, Serialize};

/// Raw store distances are divided by this cap before normalization.
pub const DEFAULT_DISTANCE_CAP_KM: f64 = 150.0;
/// Default size of the per-product top list.
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for ranking output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankingConfig {
    /// How many stores to list per product. Default: 5.
    pub top_n: Option<usize>,
    /// Distance cap in km for normalizing store distance onto [0, 10].
    /// Default: 150.
    pub distance_cap_km: Option<f64>,
}

impl RankingConfig {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn effective_distance_cap_km(&self) -> f64 {
        self.distance_cap_km.unwrap_or(DEFAULT_DISTANCE_CAP_KM)
    }
}
