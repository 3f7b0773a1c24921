//! The fixed membership model for store recommendation.
//!
//! Five variables: four input signals plus the recommendation output.
//! This is domain configuration, not an extensible framework — the
//! shapes below are the model.

use std::fmt;

use serde::{Deserialize, Serialize};

use grocer_core::errors::ModelError;

use super::triangle::TriangularMf;
use super::variable::FuzzyVariable;

/// The four crisp input signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Freshness,
    Distance,
    Price,
    Availability,
}

impl Signal {
    pub const ALL: [Signal; 4] = [
        Signal::Freshness,
        Signal::Distance,
        Signal::Price,
        Signal::Availability,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Freshness => "store_freshness",
            Self::Distance => "store_distance",
            Self::Price => "product_price",
            Self::Availability => "availability_score",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The immutable membership model: universes and triangular sets for
/// every variable. Built once at startup, shared by reference.
#[derive(Debug, Clone)]
pub struct MembershipModel {
    freshness: FuzzyVariable,
    distance: FuzzyVariable,
    price: FuzzyVariable,
    availability: FuzzyVariable,
    recommendation: FuzzyVariable,
}

impl MembershipModel {
    /// The fixed store-recommendation model.
    ///
    /// Freshness, distance, and price share the [0, 10] universe with a
    /// low/medium/high (near/medium/far) partition; availability lives
    /// on [0, 1]; the recommendation output on [0, 25].
    pub fn standard() -> Result<Self, ModelError> {
        let freshness = FuzzyVariable::new(
            Signal::Freshness.name(),
            0.0,
            10.0,
            1.0,
            vec![
                ("low", TriangularMf::new(0.0, 0.0, 4.0)?),
                ("medium", TriangularMf::new(3.0, 5.0, 7.0)?),
                ("high", TriangularMf::new(6.0, 10.0, 10.0)?),
            ],
        )?;
        let distance = FuzzyVariable::new(
            Signal::Distance.name(),
            0.0,
            10.0,
            1.0,
            vec![
                ("near", TriangularMf::new(0.0, 0.0, 4.0)?),
                ("medium", TriangularMf::new(3.0, 5.0, 7.0)?),
                ("far", TriangularMf::new(6.0, 10.0, 10.0)?),
            ],
        )?;
        let price = FuzzyVariable::new(
            Signal::Price.name(),
            0.0,
            10.0,
            1.0,
            vec![
                ("low", TriangularMf::new(0.0, 0.0, 4.0)?),
                ("medium", TriangularMf::new(3.0, 5.0, 7.0)?),
                ("high", TriangularMf::new(6.0, 10.0, 10.0)?),
            ],
        )?;
        let availability = FuzzyVariable::new(
            Signal::Availability.name(),
            0.0,
            1.0,
            0.1,
            vec![
                ("low", TriangularMf::new(0.0, 0.0, 0.4)?),
                ("medium", TriangularMf::new(0.3, 0.5, 0.7)?),
                ("high", TriangularMf::new(0.6, 1.0, 1.0)?),
            ],
        )?;
        let recommendation = FuzzyVariable::new(
            "recommendation",
            0.0,
            25.0,
            1.0,
            vec![
                ("low", TriangularMf::new(0.0, 0.0, 10.0)?),
                ("medium", TriangularMf::new(8.0, 13.0, 18.0)?),
                ("high", TriangularMf::new(16.0, 25.0, 25.0)?),
            ],
        )?;
        Ok(Self {
            freshness,
            distance,
            price,
            availability,
            recommendation,
        })
    }

    /// The input variable for a signal.
    pub fn input(&self, signal: Signal) -> &FuzzyVariable {
        match signal {
            Signal::Freshness => &self.freshness,
            Signal::Distance => &self.distance,
            Signal::Price => &self.price,
            Signal::Availability => &self.availability,
        }
    }

    /// The recommendation output variable.
    pub fn output(&self) -> &FuzzyVariable {
        &self.recommendation
    }

    /// Membership degree of `x` in `signal`'s named set.
    pub fn membership(&self, signal: Signal, set: &str, x: f64) -> Result<f64, ModelError> {
        self.input(signal).membership(set, x)
    }
}
