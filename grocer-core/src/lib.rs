//! # grocer-core
//!
//! Core types, errors, configuration, and importance weights for the
//! Grocer store recommendation engine. Contains no inference logic —
//! everything here is shared, immutable-after-construction plumbing
//! consumed by `grocer-engine`.

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;
pub mod weights;
