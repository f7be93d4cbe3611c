//! Great-circle route discretization.

use crate::spherical::{direct, inverse, LatLon};

/// Discretize the great circle between two points into `n_points` segments.
///
/// The initial inverse solve fixes the step length at `distance / n_points`.
/// Each iteration steps forward by that length along the current bearing
/// toward the fixed destination, then re-solves the bearing from the new
/// position. Re-aiming every step keeps the polyline on the great circle
/// without a closed-form interpolation formula.
///
/// Returns `n_points + 1` coordinates, the first being the origin and the
/// last converging to the destination. When origin equals destination the
/// step length is zero and every point coincides with the origin.
pub fn gcr_points(origin: LatLon, dest: LatLon, n_points: usize) -> Vec<LatLon> {
    let mut points = Vec::with_capacity(n_points + 1);
    points.push(origin);
    if n_points == 0 {
        return points;
    }

    let first = inverse(origin, dest);
    let step_m = first.distance_m / n_points as f64;

    let mut here = origin;
    let mut bearing_deg = first.bearing_deg;
    for _ in 0..n_points {
        here = direct(here, bearing_deg, step_m);
        points.push(here);
        bearing_deg = inverse(here, dest).bearing_deg;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count() {
        let path = gcr_points(LatLon::new(38.0, -74.0), LatLon::new(48.0, -5.0), 10);
        assert_eq!(path.len(), 11);
        assert_eq!(path[0], LatLon::new(38.0, -74.0));
    }

    #[test]
    fn test_endpoint_converges() {
        let dest = LatLon::new(48.0, -5.0);
        let path = gcr_points(LatLon::new(38.0, -74.0), dest, 10);
        let last = path[10];
        assert!((last.lat - dest.lat).abs() < 1e-3);
        assert!((last.lon - dest.lon).abs() < 1e-3);
    }

    #[test]
    fn test_equator_due_east_single_segment() {
        let path = gcr_points(LatLon::new(0.0, 0.0), LatLon::new(0.0, 10.0), 1);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], LatLon::new(0.0, 0.0));
        assert!(path[1].lat.abs() < 1e-6);
        assert!((path[1].lon - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_route_stays_put() {
        let p = LatLon::new(54.5, 11.2);
        let path = gcr_points(p, p, 5);
        assert_eq!(path.len(), 6);
        for point in path {
            assert!((point.lat - p.lat).abs() < 1e-9);
            assert!((point.lon - p.lon).abs() < 1e-9);
        }
    }

    #[test]
    fn test_midpoint_on_equator() {
        let path = gcr_points(LatLon::new(0.0, 0.0), LatLon::new(0.0, 10.0), 2);
        assert!((path[1].lon - 5.0).abs() < 1e-6);
        assert!(path[1].lat.abs() < 1e-6);
    }

    #[test]
    fn test_zero_segments_returns_origin_only() {
        let path = gcr_points(LatLon::new(1.0, 2.0), LatLon::new(3.0, 4.0), 0);
        assert_eq!(path, vec![LatLon::new(1.0, 2.0)]);
    }
}
