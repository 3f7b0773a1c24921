//! Batch scoring and ranking of stores.
//!
//! Rows are independent pure evaluations, so the batch is a parallel
//! map. A row whose evaluation signals NoRuleFired keeps a missing
//! score and sorts last; it never aborts the batch.

use std::cmp::Ordering;
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use grocer_core::config::GrocerConfig;
use grocer_core::errors::{EvalError, PipelineError};
use grocer_core::types::collections::FxHashMap;
use grocer_core::weights::ImportanceWeights;

use crate::dataset::{Dataset, StoreRecord};
use crate::geo::{self, GeoPoint};
use crate::inference::{InferenceEngine, RawSignals, ScaledSignals};

/// One scored (product, store) row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRow {
    pub record: StoreRecord,
    /// Great-circle distance from the shopper in km.
    pub distance_km: f64,
    /// Distance normalized onto the [0, 10] universe.
    pub store_distance: f64,
    /// Recommendation score on [0, 25], rounded to 2 decimal places.
    /// Missing when no rule fired for this row.
    pub score: Option<f64>,
}

/// Top stores for one product, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRanking {
    pub product: String,
    pub top: Vec<ScoredRow>,
}

/// A store's mean score across products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRanking {
    pub store: String,
    pub mean_score: f64,
    /// Rows that contributed to the mean (missing scores excluded).
    pub products_scored: usize,
}

/// Summary of one scoring run.
#[derive(Debug, Clone)]
pub struct ScoringDiagnostics {
    pub total_rows: usize,
    pub scored_rows: usize,
    pub missing_scores: usize,
    pub products: usize,
    pub stores: usize,
}

impl fmt::Display for ScoringDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScoringDiagnostics {{ rows={}, scored={}, missing={}, products={}, stores={} }}",
            self.total_rows, self.scored_rows, self.missing_scores, self.products, self.stores,
        )
    }
}

/// Result of a full recommendation run.
#[derive(Debug)]
pub struct RecommendationResult {
    /// Every scored row, in dataset order.
    pub rows: Vec<ScoredRow>,
    /// Top-N stores per product, products sorted.
    pub per_product: Vec<ProductRanking>,
    /// Stores ranked by mean score across products.
    pub overall: Vec<StoreRanking>,
    pub diagnostics: ScoringDiagnostics,
}

/// The end-to-end recommendation pipeline: distance derivation,
/// importance weighting, fuzzy evaluation, and ranking.
pub struct RecommendationPipeline {
    engine: InferenceEngine,
    weights: ImportanceWeights,
    shopper: GeoPoint,
    distance_cap_km: f64,
    top_n: usize,
}

impl RecommendationPipeline {
    /// Build a pipeline from resolved configuration.
    pub fn from_config(config: &GrocerConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            engine: InferenceEngine::standard()?,
            weights: config.preferences.to_weights()?,
            shopper: GeoPoint::new(
                config.location.effective_latitude(),
                config.location.effective_longitude(),
            ),
            distance_cap_km: config.ranking.effective_distance_cap_km(),
            top_n: config.ranking.effective_top_n(),
        })
    }

    /// Build a pipeline from explicit parts.
    pub fn new(
        engine: InferenceEngine,
        weights: ImportanceWeights,
        shopper: GeoPoint,
        distance_cap_km: f64,
        top_n: usize,
    ) -> Self {
        Self {
            engine,
            weights,
            shopper,
            distance_cap_km,
            top_n,
        }
    }

    /// Score every row of the dataset and produce rankings.
    pub fn run(&self, dataset: &Dataset) -> Result<RecommendationResult, PipelineError> {
        let coords = dataset.store_coordinates()?;
        let rows = self.score_records(dataset.records(), &coords)?;

        let products = dataset.products();
        let per_product = products
            .iter()
            .map(|product| ProductRanking {
                product: product.clone(),
                top: top_stores_for_product(&rows, product, self.top_n),
            })
            .collect();
        let overall = overall_store_ranking(&rows);

        let scored_rows = rows.iter().filter(|r| r.score.is_some()).count();
        let diagnostics = ScoringDiagnostics {
            total_rows: rows.len(),
            scored_rows,
            missing_scores: rows.len() - scored_rows,
            products: products.len(),
            stores: overall.len(),
        };
        info!(%diagnostics, "scoring run complete");

        Ok(RecommendationResult {
            rows,
            per_product,
            overall,
            diagnostics,
        })
    }

    /// Evaluate all records in parallel. Each row is a pure function of
    /// its own inputs; order of evaluation cannot affect any result.
    fn score_records(
        &self,
        records: &[StoreRecord],
        coords: &FxHashMap<String, GeoPoint>,
    ) -> Result<Vec<ScoredRow>, PipelineError> {
        let rows = records
            .par_iter()
            .map(|record| self.score_record(record, coords))
            .collect::<Result<Vec<_>, EvalError>>()?;
        Ok(rows)
    }

    fn score_record(
        &self,
        record: &StoreRecord,
        coords: &FxHashMap<String, GeoPoint>,
    ) -> Result<ScoredRow, EvalError> {
        let store_point = coords
            .get(&record.store)
            .copied()
            .unwrap_or_else(|| GeoPoint::new(record.store_latitude, record.store_longitude));
        let distance_km = geo::haversine_km(self.shopper, store_point);
        let store_distance = geo::normalized_distance(distance_km, self.distance_cap_km);

        let raw = RawSignals {
            freshness: record.store_freshness,
            distance: store_distance,
            price: record.product_price,
            availability: record.availability_score,
        };
        let scaled = ScaledSignals::from_raw(&raw, &self.weights);

        let score = match self.engine.evaluate(&scaled) {
            Ok(score) => Some(round2(score)),
            Err(EvalError::NoRuleFired) => {
                debug!(
                    product = %record.product,
                    store = %record.store,
                    "no rule fired, score missing"
                );
                None
            }
            Err(err) => return Err(err),
        };

        Ok(ScoredRow {
            record: record.clone(),
            distance_km,
            store_distance,
            score,
        })
    }
}

/// Round to 2 decimal places for presentation.
fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Descending by score; missing scores sort last; stable for ties.
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The best `n` stores for one product, descending by score.
pub fn top_stores_for_product(rows: &[ScoredRow], product: &str, n: usize) -> Vec<ScoredRow> {
    let mut matching: Vec<ScoredRow> = rows
        .iter()
        .filter(|r| r.record.product == product)
        .cloned()
        .collect();
    matching.sort_by(|a, b| compare_scores(a.score, b.score));
    matching.truncate(n);
    matching
}

/// Mean score per store across all products, descending. Rows with
/// missing scores are excluded from the mean; a store with no scored
/// rows at all is omitted.
pub fn overall_store_ranking(rows: &[ScoredRow]) -> Vec<StoreRanking> {
    let mut totals: FxHashMap<&str, (f64, usize)> = FxHashMap::default();
    for row in rows {
        if let Some(score) = row.score {
            let entry = totals.entry(row.record.store.as_str()).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }

    let mut ranking: Vec<StoreRanking> = totals
        .into_iter()
        .map(|(store, (sum, count))| StoreRanking {
            store: store.to_string(),
            mean_score: sum / count as f64,
            products_scored: count,
        })
        .collect();
    // Tie-break on the store name so the ordering is fully determined.
    ranking.sort_by(|a, b| {
        compare_scores(Some(a.mean_score), Some(b.mean_score))
            .then_with(|| a.store.cmp(&b.store))
    });
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product: &str, store: &str, score: Option<f64>) -> ScoredRow {
        ScoredRow {
            record: StoreRecord {
                product: product.to_string(),
                store: store.to_string(),
                store_latitude: 0.0,
                store_longitude: 0.0,
                store_freshness: 5.0,
                product_price: 5.0,
                availability_score: 0.5,
            },
            distance_km: 0.0,
            store_distance: 0.0,
            score,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(17.6789), 17.68);
        assert_eq!(round2(13.0), 13.0);
        assert_eq!(round2(9.996), 10.0);
    }

    #[test]
    fn test_top_sorted_descending() {
        let rows = vec![
            row("milk", "a", Some(10.0)),
            row("milk", "b", Some(18.0)),
            row("milk", "c", Some(14.0)),
        ];
        let top = top_stores_for_product(&rows, "milk", 5);
        let stores: Vec<&str> = top.iter().map(|r| r.record.store.as_str()).collect();
        assert_eq!(stores, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_truncates_to_n() {
        let rows = vec![
            row("milk", "a", Some(10.0)),
            row("milk", "b", Some(18.0)),
            row("milk", "c", Some(14.0)),
        ];
        assert_eq!(top_stores_for_product(&rows, "milk", 2).len(), 2);
    }

    #[test]
    fn test_missing_scores_sort_last() {
        let rows = vec![
            row("milk", "a", None),
            row("milk", "b", Some(3.0)),
            row("milk", "c", Some(1.0)),
        ];
        let top = top_stores_for_product(&rows, "milk", 5);
        let stores: Vec<&str> = top.iter().map(|r| r.record.store.as_str()).collect();
        assert_eq!(stores, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_filters_by_product() {
        let rows = vec![
            row("milk", "a", Some(10.0)),
            row("bread", "b", Some(18.0)),
        ];
        let top = top_stores_for_product(&rows, "milk", 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].record.store, "a");
    }

    #[test]
    fn test_overall_ranking_means() {
        let rows = vec![
            row("milk", "a", Some(10.0)),
            row("bread", "a", Some(20.0)),
            row("milk", "b", Some(18.0)),
        ];
        let ranking = overall_store_ranking(&rows);
        assert_eq!(ranking[0].store, "b");
        assert_eq!(ranking[0].mean_score, 18.0);
        assert_eq!(ranking[1].store, "a");
        assert_eq!(ranking[1].mean_score, 15.0);
        assert_eq!(ranking[1].products_scored, 2);
    }

    #[test]
    fn test_overall_ranking_excludes_missing() {
        let rows = vec![
            row("milk", "a", Some(10.0)),
            row("bread", "a", None),
            row("milk", "b", None),
        ];
        let ranking = overall_store_ranking(&rows);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].store, "a");
        assert_eq!(ranking[0].mean_score, 10.0);
        assert_eq!(ranking[0].products_scored, 1);
    }

    #[test]
    fn test_overall_ranking_tie_breaks_by_store() {
        let rows = vec![
            row("milk", "b", Some(10.0)),
            row("milk", "a", Some(10.0)),
        ];
        let ranking = overall_store_ranking(&rows);
        assert_eq!(ranking[0].store, "a");
        assert_eq!(ranking[1].store, "b");
    }
}
