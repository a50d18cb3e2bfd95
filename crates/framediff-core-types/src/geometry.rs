//! Geometric primitives for element reference lines

use serde::{Deserialize, Serialize};

/// A point in 3D model space
///
/// Coordinates compare exactly: two points are equal iff all three components
/// are bit-for-bit equal floats. No tolerance is applied, so near-equal
/// coordinates produced by re-serialization rounding count as different
/// values. Callers that need a tolerance must quantize coordinates before
/// building a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The global origin
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point from its three coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True when all three coordinates are finite
    ///
    /// NaN and infinite coordinates have no JSON representation and are
    /// rejected at the diff boundary.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(a, b);

        // A near-equal coordinate is a different point
        let c = Point3::new(1.0 + 1e-12, 2.0, 3.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_origin() {
        assert_eq!(Point3::ORIGIN, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point3::new(1.0, -2.0, 3.0).is_finite());
        assert!(!Point3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, f64::INFINITY, 0.0).is_finite());
        assert!(!Point3::new(0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_serde_round_trip_preserves_value() {
        let p = Point3::new(-1.5, 0.25, 12000.125);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
