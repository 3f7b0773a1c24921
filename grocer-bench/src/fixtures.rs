//! Deterministic dataset fixtures for benchmarks.
//! Same seed → same records across runs.

use grocer_engine::dataset::{Dataset, StoreRecord};

/// Fixture size presets.
#[derive(Debug, Clone, Copy)]
pub enum FixtureSize {
    /// ~10 rows — unit test scale
    Micro,
    /// ~100 rows — small town
    Small,
    /// ~1K rows — regional chain
    Medium,
    /// ~10K rows — national dataset
    Large,
}

impl FixtureSize {
    pub fn row_count(&self) -> usize {
        match self {
            Self::Micro => 10,
            Self::Small => 100,
            Self::Medium => 1_000,
            Self::Large => 10_000,
        }
    }
}

const PRODUCTS: &[&str] = &[
    "milk", "bread", "eggs", "cheese", "apples", "tomatoes", "rice", "coffee",
];

/// Generate a deterministic dataset of the given size.
///
/// Stores are scattered within roughly a degree of Bern; signal values
/// cover their full universes.
pub fn generate_dataset(size: FixtureSize, seed: u64) -> Dataset {
    let rows = size.row_count();
    let mut rng = SimpleRng::new(seed);
    let store_count = (rows / PRODUCTS.len()).max(1);

    let mut records = Vec::with_capacity(rows);
    for i in 0..rows {
        let store_idx = i % store_count;
        let product = PRODUCTS[(i / store_count) % PRODUCTS.len()];
        // Store coordinates are a pure function of the store index so
        // every row of one store agrees.
        let mut store_rng = SimpleRng::new(seed ^ (store_idx as u64 + 1));
        let latitude = 46.5 + store_rng.next_f64();
        let longitude = 7.0 + store_rng.next_f64();

        records.push(StoreRecord {
            product: product.to_string(),
            store: format!("store_{}", store_idx),
            store_latitude: latitude,
            store_longitude: longitude,
            store_freshness: rng.next_f64() * 10.0,
            product_price: rng.next_f64() * 10.0,
            availability_score: rng.next_f64(),
        });
    }

    Dataset::new(records).expect("generated fixture is always valid")
}

/// Simple deterministic PRNG (xorshift64) for reproducible fixtures.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
