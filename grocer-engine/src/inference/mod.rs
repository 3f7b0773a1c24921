//! Mamdani inference — rule base and evaluation over the membership model.

pub mod antecedent;
pub mod engine;
pub mod rules;

pub use antecedent::{Antecedent, FuzzifiedInputs};
pub use engine::{InferenceEngine, RawSignals, ScaledSignals};
pub use rules::{Rule, RuleBase};
