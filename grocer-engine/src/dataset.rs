//! Store/product dataset rows and validation.

use serde::{Deserialize, Serialize};

use grocer_core::errors::DatasetError;
use grocer_core::types::collections::FxHashMap;

use crate::geo::GeoPoint;

/// One (product, store) observation with raw crisp measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub product: String,
    pub store: String,
    pub store_latitude: f64,
    pub store_longitude: f64,
    /// Freshness score in [0, 10].
    pub store_freshness: f64,
    /// Price score in [0, 10].
    pub product_price: f64,
    /// Availability share in [0, 1].
    pub availability_score: f64,
}

/// A validated batch of records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<StoreRecord>,
}

impl Dataset {
    /// Validate and wrap a batch of records.
    pub fn new(records: Vec<StoreRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }
        let dataset = Self { records };
        // Surface coordinate conflicts at load time instead of letting
        // one arbitrary record win during distance computation.
        dataset.store_coordinates()?;
        Ok(dataset)
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<StoreRecord> =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
                message: e.to_string(),
            })?;
        Self::new(records)
    }

    pub fn records(&self) -> &[StoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct products, sorted.
    pub fn products(&self) -> Vec<String> {
        let mut products: Vec<String> = self
            .records
            .iter()
            .map(|r| r.product.clone())
            .collect();
        products.sort();
        products.dedup();
        products
    }

    /// Coordinates per store. Every record of one store must agree.
    pub fn store_coordinates(&self) -> Result<FxHashMap<String, GeoPoint>, DatasetError> {
        let mut coords: FxHashMap<String, GeoPoint> = FxHashMap::default();
        for record in &self.records {
            let point = GeoPoint::new(record.store_latitude, record.store_longitude);
            match coords.get(&record.store) {
                Some(existing) if *existing != point => {
                    return Err(DatasetError::ConflictingCoordinates {
                        store: record.store.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    coords.insert(record.store.clone(), point);
                }
            }
        }
        Ok(coords)
    }
}

fn validate_record(index: usize, record: &StoreRecord) -> Result<(), DatasetError> {
    let context = |field: &'static str| DatasetError::NonFinite {
        index,
        product: record.product.clone(),
        store: record.store.clone(),
        field,
    };
    if !record.store_latitude.is_finite() {
        return Err(context("store_latitude"));
    }
    if !record.store_longitude.is_finite() {
        return Err(context("store_longitude"));
    }
    if !record.store_freshness.is_finite() {
        return Err(context("store_freshness"));
    }
    if !record.product_price.is_finite() {
        return Err(context("product_price"));
    }
    if !record.availability_score.is_finite() {
        return Err(context("availability_score"));
    }

    let out_of_range = |field: &'static str, value: f64, range: &'static str| {
        DatasetError::OutOfRange {
            index,
            product: record.product.clone(),
            store: record.store.clone(),
            field,
            value,
            range,
        }
    };
    if !(0.0..=10.0).contains(&record.store_freshness) {
        return Err(out_of_range(
            "store_freshness",
            record.store_freshness,
            "[0, 10]",
        ));
    }
    if !(0.0..=10.0).contains(&record.product_price) {
        return Err(out_of_range(
            "product_price",
            record.product_price,
            "[0, 10]",
        ));
    }
    if !(0.0..=1.0).contains(&record.availability_score) {
        return Err(out_of_range(
            "availability_score",
            record.availability_score,
            "[0, 1]",
        ));
    }
    Ok(())
}
