//! Top-level Grocer configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LocationConfig, PreferenceConfig, RankingConfig};
use crate::errors::ConfigError;
use crate::weights::{MAX_WEIGHT, MIN_WEIGHT};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GROCER_*`)
/// 3. Project config (`grocer.toml` in the working root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GrocerConfig {
    pub preferences: PreferenceConfig,
    pub location: LocationConfig,
    pub ranking: RankingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub top_n: Option<usize>,
    pub distance_cap_km: Option<f64>,
}

impl GrocerConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest file layer): project config
        let project_config_path = root.join("grocer.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GrocerConfig) -> Result<(), ConfigError> {
        for (field, weight) in [
            ("preferences.price", config.preferences.price),
            ("preferences.freshness", config.preferences.freshness),
            ("preferences.distance", config.preferences.distance),
            ("preferences.availability", config.preferences.availability),
        ] {
            if let Some(w) = weight {
                if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&w) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("must be between {} and {}", MIN_WEIGHT, MAX_WEIGHT),
                    });
                }
            }
        }
        if let Some(lat) = config.location.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ConfigError::ValidationFailed {
                    field: "location.latitude".to_string(),
                    message: "must be between -90 and 90".to_string(),
                });
            }
        }
        if let Some(lon) = config.location.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ConfigError::ValidationFailed {
                    field: "location.longitude".to_string(),
                    message: "must be between -180 and 180".to_string(),
                });
            }
        }
        if let Some(cap) = config.ranking.distance_cap_km {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "ranking.distance_cap_km".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(n) = config.ranking.top_n {
            if n == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "ranking.top_n".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GrocerConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: GrocerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut GrocerConfig, other: &GrocerConfig) {
        // Preferences
        if other.preferences.price.is_some() {
            base.preferences.price = other.preferences.price;
        }
        if other.preferences.freshness.is_some() {
            base.preferences.freshness = other.preferences.freshness;
        }
        if other.preferences.distance.is_some() {
            base.preferences.distance = other.preferences.distance;
        }
        if other.preferences.availability.is_some() {
            base.preferences.availability = other.preferences.availability;
        }

        // Location
        if other.location.latitude.is_some() {
            base.location.latitude = other.location.latitude;
        }
        if other.location.longitude.is_some() {
            base.location.longitude = other.location.longitude;
        }

        // Ranking
        if other.ranking.top_n.is_some() {
            base.ranking.top_n = other.ranking.top_n;
        }
        if other.ranking.distance_cap_km.is_some() {
            base.ranking.distance_cap_km = other.ranking.distance_cap_km;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GROCER_PREF_PRICE`, `GROCER_LOCATION_LAT`, etc.
    fn apply_env_overrides(config: &mut GrocerConfig) {
        if let Ok(val) = std::env::var("GROCER_PREF_PRICE") {
            if let Ok(v) = val.parse::<u8>() {
                config.preferences.price = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_PREF_FRESHNESS") {
            if let Ok(v) = val.parse::<u8>() {
                config.preferences.freshness = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_PREF_DISTANCE") {
            if let Ok(v) = val.parse::<u8>() {
                config.preferences.distance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_PREF_AVAILABILITY") {
            if let Ok(v) = val.parse::<u8>() {
                config.preferences.availability = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_LOCATION_LAT") {
            if let Ok(v) = val.parse::<f64>() {
                config.location.latitude = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_LOCATION_LON") {
            if let Ok(v) = val.parse::<f64>() {
                config.location.longitude = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.ranking.top_n = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GROCER_DISTANCE_CAP_KM") {
            if let Ok(v) = val.parse::<f64>() {
                config.ranking.distance_cap_km = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GrocerConfig, cli: &CliOverrides) {
        if let Some(v) = cli.latitude {
            config.location.latitude = Some(v);
        }
        if let Some(v) = cli.longitude {
            config.location.longitude = Some(v);
        }
        if let Some(v) = cli.top_n {
            config.ranking.top_n = Some(v);
        }
        if let Some(v) = cli.distance_cap_km {
            config.ranking.distance_cap_km = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
