//! The fixed store-recommendation rule base.

use grocer_core::errors::ModelError;

use crate::membership::{MembershipModel, Signal};

use super::antecedent::Antecedent;

/// One fuzzy rule: antecedent over the input signals, consequent set of
/// the recommendation output.
#[derive(Debug, Clone)]
pub struct Rule {
    pub label: &'static str,
    pub antecedent: Antecedent,
    pub consequent: &'static str,
}

impl Rule {
    pub fn new(label: &'static str, antecedent: Antecedent, consequent: &'static str) -> Self {
        Self {
            label,
            antecedent,
            consequent,
        }
    }
}

/// The immutable rule base. Loaded once, shared read-only across all
/// evaluations.
#[derive(Debug, Clone)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// The six fixed recommendation rules, in their canonical order.
    /// Order does not affect the result — aggregation is max/min and
    /// commutative.
    ///
    /// The last rule is a deliberate tautology over the freshness
    /// partition: its strength is the max of the three freshness
    /// degrees, which is positive everywhere on the universe, so the
    /// aggregated output is never empty and the centroid always exists.
    /// Do not replace it with an unconditional rule — its strength is
    /// derived from the actual fuzzified degrees and is not constant 1.
    pub fn standard() -> Self {
        use Antecedent as A;
        Self {
            rules: vec![
                Rule::new(
                    "available_and_fresh",
                    A::is(Signal::Availability, "high").and(A::is(Signal::Freshness, "high")),
                    "high",
                ),
                Rule::new("expensive", A::is(Signal::Price, "high"), "low"),
                Rule::new("far_away", A::is(Signal::Distance, "far"), "low"),
                Rule::new(
                    "cheap_and_near",
                    A::is(Signal::Price, "low").and(A::is(Signal::Distance, "near")),
                    "high",
                ),
                Rule::new("average_freshness", A::is(Signal::Freshness, "medium"), "medium"),
                Rule::new(
                    "freshness_fallback",
                    A::is(Signal::Freshness, "low")
                        .or(A::is(Signal::Freshness, "medium"))
                        .or(A::is(Signal::Freshness, "high")),
                    "medium",
                ),
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate the rule base against a membership model: it must be
    /// non-empty, every antecedent term must reference a defined input
    /// set, and every consequent must reference a defined output set.
    pub fn validate(&self, model: &MembershipModel) -> Result<(), ModelError> {
        if self.rules.is_empty() {
            return Err(ModelError::EmptyRuleBase);
        }
        for rule in &self.rules {
            let mut unknown = None;
            rule.antecedent.for_each_term(&mut |signal, set| {
                if unknown.is_none() && model.input(signal).set(set).is_none() {
                    unknown = Some((signal.name(), set));
                }
            });
            if let Some((variable, set)) = unknown {
                return Err(ModelError::UnknownSetReference {
                    rule: rule.label.to_string(),
                    variable: variable.to_string(),
                    set: set.to_string(),
                });
            }
            if model.output().set(rule.consequent).is_none() {
                return Err(ModelError::UnknownSetReference {
                    rule: rule.label.to_string(),
                    variable: model.output().name().to_string(),
                    set: rule.consequent.to_string(),
                });
            }
        }
        Ok(())
    }
}
