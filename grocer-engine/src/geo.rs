//! Great-circle distance between the shopper and stores.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine great-circle distance in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Normalize a raw distance onto the [0, 10] store-distance universe:
/// `km / cap · 10`, clamped. Anything at or beyond the cap is "maximally
/// far".
pub fn normalized_distance(km: f64, cap_km: f64) -> f64 {
    if !km.is_finite() || km < 0.0 {
        return 0.0;
    }
    (km / cap_km * 10.0).clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERN: GeoPoint = GeoPoint {
        latitude: 46.9480,
        longitude: 7.4474,
    };
    const ZURICH: GeoPoint = GeoPoint {
        latitude: 47.3769,
        longitude: 8.5417,
    };

    #[test]
    fn test_zero_distance_to_self() {
        assert!(haversine_km(BERN, BERN).abs() < 1e-9);
    }

    #[test]
    fn test_bern_to_zurich() {
        // Great-circle distance Bern–Zurich is roughly 95 km.
        let km = haversine_km(BERN, ZURICH);
        assert!((90.0..100.0).contains(&km), "got {}", km);
    }

    #[test]
    fn test_symmetry() {
        let ab = haversine_km(BERN, ZURICH);
        let ba = haversine_km(ZURICH, BERN);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_normalization_within_cap() {
        assert!((normalized_distance(75.0, 150.0) - 5.0).abs() < 1e-12);
        assert_eq!(normalized_distance(0.0, 150.0), 0.0);
    }

    #[test]
    fn test_normalization_clamps_at_cap() {
        assert_eq!(normalized_distance(150.0, 150.0), 10.0);
        assert_eq!(normalized_distance(900.0, 150.0), 10.0);
    }

    #[test]
    fn test_negative_and_nan_distances_normalize_to_zero() {
        assert_eq!(normalized_distance(-5.0, 150.0), 0.0);
        assert_eq!(normalized_distance(f64::NAN, 150.0), 0.0);
    }
}
