//! The inference engine: fuzzification, rule firing, aggregation, and
//! centroid defuzzification.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use grocer_core::errors::{EvalError, ModelError};
use grocer_core::weights::ImportanceWeights;

use crate::membership::{MembershipModel, Signal};

use super::antecedent::FuzzifiedInputs;
use super::rules::RuleBase;

/// Raw per-row measurements, before importance weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSignals {
    pub freshness: f64,
    pub distance: f64,
    pub price: f64,
    pub availability: f64,
}

/// Crisp inputs after importance weighting, ready for fuzzification.
/// The engine clamps each value to its variable's universe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledSignals {
    pub freshness: f64,
    pub distance: f64,
    pub price: f64,
    pub availability: f64,
}

impl ScaledSignals {
    /// Apply importance weights: each raw value is multiplied by
    /// `weight / 10`. Weight 10 passes the raw value through unchanged;
    /// weight 1 compresses it to one tenth, pushing the signal toward
    /// the low end of its axis.
    pub fn from_raw(raw: &RawSignals, weights: &ImportanceWeights) -> Self {
        Self {
            freshness: raw.freshness * weights.freshness_factor(),
            distance: raw.distance * weights.distance_factor(),
            price: raw.price * weights.price_factor(),
            availability: raw.availability * weights.availability_factor(),
        }
    }

    fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Freshness => self.freshness,
            Signal::Distance => self.distance,
            Signal::Price => self.price,
            Signal::Availability => self.availability,
        }
    }
}

/// Mamdani inference over the fixed membership model and rule base.
///
/// Constructed once (construction validates the rule base against the
/// model), then shared read-only: `evaluate` is a pure function of its
/// inputs, carries no state between rows, and is safe to call from
/// parallel row iterators.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    model: MembershipModel,
    rules: RuleBase,
}

impl InferenceEngine {
    /// Build an engine from a model and rule base, validating the pair.
    pub fn new(model: MembershipModel, rules: RuleBase) -> Result<Self, ModelError> {
        rules.validate(&model)?;
        Ok(Self { model, rules })
    }

    /// The standard store-recommendation engine.
    pub fn standard() -> Result<Self, ModelError> {
        Self::new(MembershipModel::standard()?, RuleBase::standard())
    }

    pub fn model(&self) -> &MembershipModel {
        &self.model
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Evaluate one row: clamp, fuzzify, fire rules, aggregate, and
    /// defuzzify to a crisp score on the output universe.
    ///
    /// Returns `EvalError::NoRuleFired` when the aggregated output
    /// membership is zero everywhere (cannot happen with the standard
    /// rule base thanks to the freshness fallback rule).
    pub fn evaluate(&self, inputs: &ScaledSignals) -> Result<f64, EvalError> {
        let fuzzified = self.fuzzify(inputs);
        let strengths = self.firing_strengths(&fuzzified)?;
        self.defuzzify(&strengths)
    }

    /// Fuzzification: degree of each input in every set of its variable.
    fn fuzzify(&self, inputs: &ScaledSignals) -> FuzzifiedInputs {
        let mut fuzzified = FuzzifiedInputs::new();
        for signal in Signal::ALL {
            let variable = self.model.input(signal);
            for (set, degree) in variable.degrees(inputs.get(signal)) {
                fuzzified.insert(signal, set, degree);
            }
        }
        fuzzified
    }

    /// Firing strength of every rule, in rule-base order.
    fn firing_strengths(
        &self,
        fuzzified: &FuzzifiedInputs,
    ) -> Result<SmallVec<[f64; 8]>, EvalError> {
        let mut strengths = SmallVec::new();
        for rule in self.rules.rules() {
            let strength = rule.antecedent.strength(fuzzified)?;
            trace!(rule = rule.label, strength, "rule fired");
            strengths.push(strength);
        }
        Ok(strengths)
    }

    /// Min-implication, max-aggregation over the output grid, then
    /// discrete centroid: `Σ(point · degree) / Σ(degree)`.
    fn defuzzify(&self, strengths: &[f64]) -> Result<f64, EvalError> {
        let output = self.model.output();
        let consequents: Result<SmallVec<[_; 8]>, EvalError> = self
            .rules
            .rules()
            .iter()
            .zip(strengths)
            .map(|(rule, &strength)| {
                output
                    .set(rule.consequent)
                    .map(|set| (set.mf, strength))
                    .ok_or_else(|| EvalError::UnknownSet {
                        variable: output.name().to_string(),
                        set: rule.consequent.to_string(),
                    })
            })
            .collect();
        let consequents = consequents?;

        let mut weighted_sum = 0.0;
        let mut total_mass = 0.0;
        for point in output.grid() {
            let aggregated = consequents
                .iter()
                .fold(0.0_f64, |acc, (mf, strength)| {
                    acc.max(strength.min(mf.degree(point)))
                });
            weighted_sum += point * aggregated;
            total_mass += aggregated;
        }

        if total_mass <= 0.0 {
            return Err(EvalError::NoRuleFired);
        }
        Ok(weighted_sum / total_mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> InferenceEngine {
        InferenceEngine::standard().unwrap()
    }

    #[test]
    fn test_all_favorable_skews_high() {
        let score = engine()
            .evaluate(&ScaledSignals {
                freshness: 10.0,
                distance: 0.0,
                price: 0.0,
                availability: 1.0,
            })
            .unwrap();
        assert!(score > 15.0, "expected high skew, got {}", score);
        assert!(score <= 25.0);
    }

    #[test]
    fn test_expensive_and_far_skews_low() {
        let score = engine()
            .evaluate(&ScaledSignals {
                freshness: 5.0,
                distance: 10.0,
                price: 10.0,
                availability: 0.5,
            })
            .unwrap();
        assert!(score < 10.0, "expected low skew, got {}", score);
        assert!(score >= 0.0);
    }

    #[test]
    fn test_score_within_output_universe() {
        let engine = engine();
        for freshness in [0.0, 2.5, 5.0, 7.5, 10.0] {
            for distance in [0.0, 5.0, 10.0] {
                for price in [0.0, 5.0, 10.0] {
                    for availability in [0.0, 0.5, 1.0] {
                        let score = engine
                            .evaluate(&ScaledSignals {
                                freshness,
                                distance,
                                price,
                                availability,
                            })
                            .unwrap();
                        assert!((0.0..=25.0).contains(&score));
                    }
                }
            }
        }
    }

    #[test]
    fn test_determinism() {
        let engine = engine();
        let inputs = ScaledSignals {
            freshness: 6.3,
            distance: 2.8,
            price: 4.1,
            availability: 0.7,
        };
        let first = engine.evaluate(&inputs).unwrap();
        for _ in 0..10 {
            assert_eq!(engine.evaluate(&inputs).unwrap(), first);
        }
    }

    #[test]
    fn test_out_of_universe_inputs_clamped() {
        let engine = engine();
        let clamped = engine
            .evaluate(&ScaledSignals {
                freshness: 15.0,
                distance: -3.0,
                price: -1.0,
                availability: 2.0,
            })
            .unwrap();
        let exact = engine
            .evaluate(&ScaledSignals {
                freshness: 10.0,
                distance: 0.0,
                price: 0.0,
                availability: 1.0,
            })
            .unwrap();
        assert_eq!(clamped, exact);
    }

    #[test]
    fn test_weight_ten_is_identity() {
        let raw = RawSignals {
            freshness: 7.0,
            distance: 3.0,
            price: 4.0,
            availability: 0.8,
        };
        let weights = ImportanceWeights::new(10, 10, 10, 10).unwrap();
        let scaled = ScaledSignals::from_raw(&raw, &weights);
        assert_eq!(scaled.freshness, 7.0);
        assert_eq!(scaled.distance, 3.0);
        assert_eq!(scaled.price, 4.0);
        assert_eq!(scaled.availability, 0.8);
    }

    #[test]
    fn test_weight_one_scales_to_tenth() {
        let raw = RawSignals {
            freshness: 7.0,
            distance: 3.0,
            price: 4.0,
            availability: 0.8,
        };
        let weights = ImportanceWeights::new(1, 1, 1, 1).unwrap();
        let scaled = ScaledSignals::from_raw(&raw, &weights);
        assert!((scaled.freshness - 0.7).abs() < 1e-12);
        assert!((scaled.distance - 0.3).abs() < 1e-12);
        assert!((scaled.price - 0.4).abs() < 1e-12);
        assert!((scaled.availability - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_rule_always_fires() {
        // The freshness partition covers the whole universe, so the
        // fallback rule's strength is positive everywhere and the
        // centroid is always defined.
        let engine = engine();
        let mut freshness = 0.0;
        while freshness <= 10.0 {
            let result = engine.evaluate(&ScaledSignals {
                freshness,
                distance: 5.0,
                price: 5.0,
                availability: 0.0,
            });
            assert!(result.is_ok(), "no rule fired at freshness {}", freshness);
            freshness += 0.25;
        }
    }

    #[test]
    fn test_fallback_strength_bound() {
        // Strength of the fallback OR is the max of the three freshness
        // degrees. Its minimum over the universe is 1/6, reached at the
        // partition crossovers x = 10/3 and x = 20/3 — not constant 1.
        let engine = engine();
        let fallback = &engine.rules().rules()[5];
        let mut min_strength = f64::INFINITY;
        let mut x = 0.0;
        while x <= 10.0 {
            let fuzzified = engine.fuzzify(&ScaledSignals {
                freshness: x,
                distance: 0.0,
                price: 0.0,
                availability: 0.0,
            });
            let strength = fallback.antecedent.strength(&fuzzified).unwrap();
            assert!(strength > 0.0, "fallback dead at freshness {}", x);
            min_strength = min_strength.min(strength);
            x += 0.01;
        }
        assert!(min_strength >= 1.0 / 6.0 - 1e-9);
        assert!(min_strength < 0.5);
    }

    #[test]
    fn test_price_monotonicity() {
        // Raising price (rule "expensive" → low) must never raise the
        // score, all else fixed.
        let engine = engine();
        let mut previous = f64::INFINITY;
        let mut price = 0.0;
        while price <= 10.0 {
            let score = engine
                .evaluate(&ScaledSignals {
                    freshness: 5.0,
                    distance: 5.0,
                    price,
                    availability: 0.5,
                })
                .unwrap();
            assert!(
                score <= previous + 1e-9,
                "score rose from {} to {} at price {}",
                previous,
                score,
                price
            );
            previous = score;
            price += 0.5;
        }
    }

    #[test]
    fn test_distance_monotonicity() {
        let engine = engine();
        let mut previous = f64::INFINITY;
        let mut distance = 0.0;
        while distance <= 10.0 {
            let score = engine
                .evaluate(&ScaledSignals {
                    freshness: 8.0,
                    distance,
                    price: 2.0,
                    availability: 0.9,
                })
                .unwrap();
            assert!(
                score <= previous + 1e-9,
                "score rose from {} to {} at distance {}",
                previous,
                score,
                distance
            );
            previous = score;
            distance += 0.5;
        }
    }
}
