//! Fuzzy variables — a named universe of discourse with triangular sets.

use smallvec::SmallVec;

use grocer_core::errors::ModelError;

use super::triangle::TriangularMf;

/// A named fuzzy set belonging to one variable.
#[derive(Debug, Clone, Copy)]
pub struct FuzzySet {
    pub name: &'static str,
    pub mf: TriangularMf,
}

/// A fuzzy variable: a closed universe `[min, max]` with a finite grid
/// step and an ordered list of named triangular sets.
///
/// Variables are constructed once, validated, and shared read-only.
#[derive(Debug, Clone)]
pub struct FuzzyVariable {
    name: &'static str,
    min: f64,
    max: f64,
    step: f64,
    sets: Vec<FuzzySet>,
}

impl FuzzyVariable {
    /// Create a validated variable. The universe must be a proper
    /// interval, the step positive, and set names unique.
    pub fn new(
        name: &'static str,
        min: f64,
        max: f64,
        step: f64,
        sets: Vec<(&'static str, TriangularMf)>,
    ) -> Result<Self, ModelError> {
        if !(min.is_finite() && max.is_finite()) || min >= max {
            return Err(ModelError::EmptyUniverse {
                variable: name.to_string(),
                min,
                max,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ModelError::InvalidStep {
                variable: name.to_string(),
                step,
            });
        }
        let mut seen: SmallVec<[&str; 4]> = SmallVec::new();
        for &(set_name, _) in &sets {
            if seen.contains(&set_name) {
                return Err(ModelError::DuplicateSet {
                    variable: name.to_string(),
                    set: set_name.to_string(),
                });
            }
            seen.push(set_name);
        }
        let sets = sets
            .into_iter()
            .map(|(set_name, mf)| FuzzySet { name: set_name, mf })
            .collect();
        Ok(Self {
            name,
            min,
            max,
            step,
            sets,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Universe bounds as `(min, max)`.
    pub fn universe(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Clamp a crisp value into the universe. Out-of-universe inputs are
    /// silently clamped, never rejected; NaN maps to the universe minimum.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.min;
        }
        x.clamp(self.min, self.max)
    }

    /// Look up a set by name.
    pub fn set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.iter().find(|s| s.name == name)
    }

    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    /// Membership degree of `x` in the named set, clamping `x` first.
    pub fn membership(&self, set_name: &str, x: f64) -> Result<f64, ModelError> {
        let set = self
            .set(set_name)
            .ok_or_else(|| ModelError::UnknownSetReference {
                rule: "<direct>".to_string(),
                variable: self.name.to_string(),
                set: set_name.to_string(),
            })?;
        Ok(set.mf.degree(self.clamp(x)))
    }

    /// Degrees of `x` in every set, in declaration order.
    pub fn degrees(&self, x: f64) -> SmallVec<[(&'static str, f64); 4]> {
        let clamped = self.clamp(x);
        self.sets
            .iter()
            .map(|s| (s.name, s.mf.degree(clamped)))
            .collect()
    }

    /// Iterate the discretized universe: `min, min + step, …, max`.
    pub fn grid(&self) -> impl Iterator<Item = f64> + '_ {
        let points = ((self.max - self.min) / self.step).round() as usize + 1;
        (0..points).map(move |i| (self.min + i as f64 * self.step).min(self.max))
    }
}
