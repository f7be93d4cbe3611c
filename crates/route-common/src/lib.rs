//! Common types shared across the route chart workspace.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod route;
pub mod time;
pub mod wind;

pub use bbox::BoundingBox;
pub use error::{ChartError, ChartResult};
pub use grid::Grid2;
pub use route::RouteParams;
pub use time::{bucket_3h, ValidTime};
pub use wind::{WindField, WindFieldSet};
