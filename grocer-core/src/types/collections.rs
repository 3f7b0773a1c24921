//! Deterministic hash collections.
//!
//! `FxHashMap`/`FxHashSet` have no per-process random state, so iteration
//! order is stable for a given insertion sequence. Ranking code relies on
//! this for reproducible output.

pub use rustc_hash::{FxHashMap, FxHashSet};
