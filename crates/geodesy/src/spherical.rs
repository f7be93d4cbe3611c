//! Inverse and direct geodesic solves on a mean-radius sphere.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A coordinate pair in degrees.
///
/// Latitude is expected in [-90, 90]; longitude may be any real value and is
/// normalized to [-180, 180] by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Result of an inverse solve.
#[derive(Debug, Clone, Copy)]
pub struct Inverse {
    /// Great-circle distance in meters.
    pub distance_m: f64,
    /// Initial bearing in degrees clockwise from north, in [0, 360).
    pub bearing_deg: f64,
}

/// Inverse solve: great-circle distance (haversine) and initial bearing
/// between two points.
pub fn inverse(from: LatLon, to: LatLon) -> Inverse {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    // Initial bearing from north, normalized to [0, 360)
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let mut bearing_deg = y.atan2(x).to_degrees();
    if bearing_deg < 0.0 {
        bearing_deg += 360.0;
    }

    Inverse {
        distance_m: EARTH_RADIUS_M * c,
        bearing_deg,
    }
}

/// Direct solve: destination point given a start, an initial bearing in
/// degrees, and a distance in meters.
pub fn direct(from: LatLon, bearing_deg: f64, distance_m: f64) -> LatLon {
    let lat1 = from.lat.to_radians();
    let lon1 = from.lon.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_m / EARTH_RADIUS_M;

    let lat2 =
        (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    LatLon {
        lat: lat2.to_degrees(),
        lon: normalize_lon(lon2.to_degrees()),
    }
}

/// Wrap a longitude into [-180, 180].
pub fn normalize_lon(lon: f64) -> f64 {
    let mut lon = (lon + 180.0) % 360.0;
    if lon < 0.0 {
        lon += 360.0;
    }
    lon - 180.0
}
