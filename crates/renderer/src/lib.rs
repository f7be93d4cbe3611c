//! Chart compositing for maritime route planning.
//!
//! Layers are added imperatively onto a shared `MapFigure`:
//! - Base map (ocean fill, land/coastline from GeoJSON, graticule)
//! - Wind barbs
//! - Great-circle paths
//! - Isochrone route overlays with legend
//!
//! The figure stays owned by the caller between calls; rendering is
//! synchronous and a failed layer call leaves the figure partially built for
//! the caller to discard.

pub mod barbs;
pub mod basemap;
pub mod figure;
pub mod legend;
pub mod palette;
pub mod png;
pub mod route;
pub mod text;

pub use barbs::{plot_barbs, BarbPreprocess, BarbStyle};
pub use basemap::{Basemap, BasemapStyle};
pub use figure::{ChartOptions, MapFigure, Panel};
pub use legend::plot_legend;
pub use palette::{route_colour, Colour, ROUTE_PALETTE};
pub use route::{plot_gcr, plot_route};
