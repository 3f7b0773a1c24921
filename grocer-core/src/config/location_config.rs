//! User location configuration.

use serde::{Deserialize, Serialize};

/// Default latitude: Bern, Switzerland.
pub const DEFAULT_LATITUDE: f64 = 46.9480;
/// Default longitude: Bern, Switzerland.
pub const DEFAULT_LONGITUDE: f64 = 7.4474;

/// The shopper's location, used to derive store distances.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocationConfig {
    /// Latitude in degrees, [-90, 90]. Default: Bern.
    pub latitude: Option<f64>,
    /// Longitude in degrees, [-180, 180]. Default: Bern.
    pub longitude: Option<f64>,
}

impl LocationConfig {
    pub fn effective_latitude(&self) -> f64 {
        self.latitude.unwrap_or(DEFAULT_LATITUDE)
    }

    pub fn effective_longitude(&self) -> f64 {
        self.longitude.unwrap_or(DEFAULT_LONGITUDE)
    }
}
