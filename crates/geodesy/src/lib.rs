//! Spherical geodesy for route charts.
//!
//! Provides the inverse solve (two points -> distance and initial bearing),
//! the direct solve (point, bearing, distance -> destination), and a
//! great-circle discretizer built on top of both.

pub mod gcr;
pub mod spherical;

pub use gcr::gcr_points;
pub use spherical::{direct, inverse, Inverse, LatLon, EARTH_RADIUS_M};
