//! Configuration system for Grocer.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod grocer_config;
pub mod location_config;
pub mod preference_config;
pub mod ranking_config;

pub use grocer_config::{CliOverrides, GrocerConfig};
pub use location_config::LocationConfig;
pub use preference_config::PreferenceConfig;
pub use ranking_config::RankingConfig;
