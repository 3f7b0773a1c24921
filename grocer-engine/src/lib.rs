//! # grocer-engine
//!
//! Mamdani-style fuzzy inference for ranking retail stores. Four crisp
//! signals per (product, store) pair — freshness, distance, price,
//! availability — are fuzzified against a fixed membership model, run
//! through a fixed six-rule base, aggregated, and defuzzified into one
//! crisp recommendation score on [0, 25].
//!
//! The membership model and rule base are built once and shared
//! read-only; each row evaluation is a pure function with no state
//! carried between rows.

pub mod dataset;
pub mod geo;
pub mod inference;
pub mod membership;
pub mod ranking;

pub use dataset::{Dataset, StoreRecord};
pub use geo::GeoPoint;
pub use inference::{InferenceEngine, RawSignals, ScaledSignals};
pub use membership::{MembershipModel, Signal};
pub use ranking::{RecommendationPipeline, RecommendationResult, ScoredRow};
