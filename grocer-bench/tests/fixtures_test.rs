//! Tests for fixture generation: determinism and validity.

use grocer_bench::fixtures::{generate_dataset, FixtureSize, SimpleRng};

#[test]
fn fixture_micro_has_10_rows() {
    let dataset = generate_dataset(FixtureSize::Micro, 42);
    assert_eq!(dataset.len(), 10);
}

#[test]
fn fixture_small_has_100_rows() {
    let dataset = generate_dataset(FixtureSize::Small, 1);
    assert_eq!(dataset.len(), 100);
}

#[test]
fn fixture_deterministic_same_seed() {
    let a = generate_dataset(FixtureSize::Small, 42);
    let b = generate_dataset(FixtureSize::Small, 42);
    assert_eq!(a.records(), b.records());
}

#[test]
fn fixture_different_seeds_differ() {
    let a = generate_dataset(FixtureSize::Small, 42);
    let b = generate_dataset(FixtureSize::Small, 99);
    assert_ne!(a.records(), b.records());
}

#[test]
fn fixture_signals_within_universes() {
    let dataset = generate_dataset(FixtureSize::Medium, 7);
    for record in dataset.records() {
        assert!((0.0..=10.0).contains(&record.store_freshness));
        assert!((0.0..=10.0).contains(&record.product_price));
        assert!((0.0..=1.0).contains(&record.availability_score));
    }
}

#[test]
fn fixture_store_coordinates_consistent() {
    // Dataset::new would reject conflicting coordinates; reaching here
    // means every row of one store agrees.
    let dataset = generate_dataset(FixtureSize::Medium, 3);
    let coords = dataset.store_coordinates().unwrap();
    assert!(!coords.is_empty());
}

#[test]
fn rng_sequence_stable() {
    let mut rng = SimpleRng::new(42);
    let first: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    let mut rng = SimpleRng::new(42);
    let second: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    assert_eq!(first, second);
}
