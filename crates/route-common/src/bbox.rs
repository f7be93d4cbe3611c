//! Geographic bounding box for chart extents.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from ordered bounds.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Create a bounding box spanning two corner coordinates, in any order.
    pub fn from_corners(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        Self {
            min_lon: lon1.min(lon2),
            min_lat: lat1.min(lat2),
            max_lon: lon1.max(lon2),
            max_lat: lat1.max(lat2),
        }
    }

    /// Longitudinal span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitudinal span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a coordinate is contained within this bbox.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Grow the box by `degrees` on every side, clamping latitude to ±90.
    pub fn padded(&self, degrees: f64) -> Self {
        Self {
            min_lon: self.min_lon - degrees,
            min_lat: (self.min_lat - degrees).max(-90.0),
            max_lon: self.max_lon + degrees,
            max_lat: (self.max_lat + degrees).min(90.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_orders_bounds() {
        let bbox = BoundingBox::from_corners(48.0, -5.0, 38.0, -74.0);
        assert_eq!(bbox.min_lon, -74.0);
        assert_eq!(bbox.max_lon, -5.0);
        assert_eq!(bbox.min_lat, 38.0);
        assert_eq!(bbox.max_lat, 48.0);
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox::new(-10.0, 40.0, 10.0, 60.0);
        assert!(bbox.contains(50.0, 0.0));
        assert!(!bbox.contains(30.0, 0.0));
        assert!(!bbox.contains(50.0, 20.0));
    }

    #[test]
    fn test_padded_clamps_latitude() {
        let bbox = BoundingBox::new(0.0, 85.0, 10.0, 89.0).padded(5.0);
        assert_eq!(bbox.max_lat, 90.0);
        assert_eq!(bbox.min_lat, 80.0);
        assert_eq!(bbox.min_lon, -5.0);
    }
}
