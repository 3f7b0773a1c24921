//! Triangular membership functions.

use serde::{Deserialize, Serialize};

use grocer_core::errors::ModelError;

/// A triangular membership function defined by vertices `a ≤ b ≤ c`.
///
/// Degree is 0 outside `[a, c]`, rises linearly from 0 to 1 over
/// `[a, b]`, and falls linearly from 1 to 0 over `[b, c]`. Degenerate
/// vertices (`a = b` or `b = c`) give right/left shoulder shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularMf {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularMf {
    /// Create a triangular function, validating the vertex invariant.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ModelError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(ModelError::NonFiniteVertices { a, b, c });
        }
        if !(a <= b && b <= c) {
            return Err(ModelError::NonMonotonicVertices { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    pub fn vertices(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Membership degree at `x`, always in [0, 1].
    pub fn degree(&self, x: f64) -> f64 {
        if !x.is_finite() || x <= self.a || x >= self.c {
            // The peak of a degenerate shoulder sits on the boundary
            // itself, so check it before ruling the point outside.
            if x == self.b {
                return 1.0;
            }
            return 0.0;
        }
        let degree = if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else if x > self.b {
            (self.c - x) / (self.c - self.b)
        } else {
            1.0
        };
        degree.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_is_one() {
        let mf = TriangularMf::new(0.0, 5.0, 10.0).unwrap();
        assert_eq!(mf.degree(5.0), 1.0);
    }

    #[test]
    fn test_zero_at_and_beyond_feet() {
        let mf = TriangularMf::new(3.0, 5.0, 7.0).unwrap();
        assert_eq!(mf.degree(3.0), 0.0);
        assert_eq!(mf.degree(7.0), 0.0);
        assert_eq!(mf.degree(-1.0), 0.0);
        assert_eq!(mf.degree(100.0), 0.0);
    }

    #[test]
    fn test_linear_rise_and_fall() {
        let mf = TriangularMf::new(0.0, 4.0, 8.0).unwrap();
        assert!((mf.degree(1.0) - 0.25).abs() < 1e-12);
        assert!((mf.degree(2.0) - 0.5).abs() < 1e-12);
        assert!((mf.degree(6.0) - 0.5).abs() < 1e-12);
        assert!((mf.degree(7.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_left_shoulder_degenerate() {
        // a = b: peak sits on the left foot.
        let mf = TriangularMf::new(0.0, 0.0, 4.0).unwrap();
        assert_eq!(mf.degree(0.0), 1.0);
        assert!((mf.degree(2.0) - 0.5).abs() < 1e-12);
        assert_eq!(mf.degree(4.0), 0.0);
    }

    #[test]
    fn test_right_shoulder_degenerate() {
        // b = c: peak sits on the right foot.
        let mf = TriangularMf::new(6.0, 10.0, 10.0).unwrap();
        assert_eq!(mf.degree(10.0), 1.0);
        assert!((mf.degree(8.0) - 0.5).abs() < 1e-12);
        assert_eq!(mf.degree(6.0), 0.0);
    }

    #[test]
    fn test_non_monotonic_vertices_rejected() {
        assert!(TriangularMf::new(5.0, 3.0, 7.0).is_err());
        assert!(TriangularMf::new(0.0, 8.0, 4.0).is_err());
    }

    #[test]
    fn test_non_finite_vertices_rejected() {
        assert!(TriangularMf::new(f64::NAN, 1.0, 2.0).is_err());
        assert!(TriangularMf::new(0.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_nan_input_degree_zero() {
        let mf = TriangularMf::new(0.0, 5.0, 10.0).unwrap();
        assert_eq!(mf.degree(f64::NAN), 0.0);
    }

    #[test]
    fn test_degree_always_in_unit_interval() {
        let mf = TriangularMf::new(0.3, 0.5, 0.7).unwrap();
        let mut x = -1.0;
        while x <= 2.0 {
            let d = mf.degree(x);
            assert!((0.0..=1.0).contains(&d), "degree({}) = {}", x, d);
            x += 0.01;
        }
    }
}
