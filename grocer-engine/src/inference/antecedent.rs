//! Rule antecedents — AND/OR expression trees over membership terms.

use grocer_core::errors::EvalError;
use grocer_core::types::collections::FxHashMap;

use crate::membership::Signal;

/// A rule antecedent: a boolean combination of (signal, set) membership
/// terms. AND takes the minimum of its children, OR the maximum (Gödel
/// semantics).
#[derive(Debug, Clone)]
pub enum Antecedent {
    /// Leaf: the fuzzified degree of one signal in one named set.
    Is(Signal, &'static str),
    And(Box<Antecedent>, Box<Antecedent>),
    Or(Box<Antecedent>, Box<Antecedent>),
}

impl Antecedent {
    /// `signal IS set` leaf term.
    pub fn is(signal: Signal, set: &'static str) -> Self {
        Self::Is(signal, set)
    }

    pub fn and(self, other: Antecedent) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Antecedent) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Firing strength of this antecedent against fuzzified inputs.
    pub fn strength(&self, inputs: &FuzzifiedInputs) -> Result<f64, EvalError> {
        match self {
            Self::Is(signal, set) => inputs.degree(*signal, set),
            Self::And(left, right) => {
                Ok(left.strength(inputs)?.min(right.strength(inputs)?))
            }
            Self::Or(left, right) => {
                Ok(left.strength(inputs)?.max(right.strength(inputs)?))
            }
        }
    }

    /// Visit every (signal, set) leaf of this tree.
    pub fn for_each_term(&self, visit: &mut impl FnMut(Signal, &'static str)) {
        match self {
            Self::Is(signal, set) => visit(*signal, set),
            Self::And(left, right) | Self::Or(left, right) => {
                left.for_each_term(visit);
                right.for_each_term(visit);
            }
        }
    }
}

/// Fuzzified degrees for one row: every (signal, set) pair mapped to its
/// membership degree. Built fresh per row, discarded afterwards.
#[derive(Debug, Default)]
pub struct FuzzifiedInputs {
    degrees: FxHashMap<(Signal, &'static str), f64>,
}

impl FuzzifiedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, signal: Signal, set: &'static str, degree: f64) {
        self.degrees.insert((signal, set), degree);
    }

    /// Degree of `signal` in `set`. A missing pair means a rule
    /// referenced a set that was never fuzzified — a defect the rule
    /// base validation is supposed to rule out.
    pub fn degree(&self, signal: Signal, set: &'static str) -> Result<f64, EvalError> {
        self.degrees
            .get(&(signal, set))
            .copied()
            .ok_or_else(|| EvalError::UnknownSet {
                variable: signal.name().to_string(),
                set: set.to_string(),
            })
    }
}
