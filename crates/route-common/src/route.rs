//! Route summaries produced by the routing engine.

use serde::{Deserialize, Serialize};

/// An externally computed route alternative (isochrone).
///
/// Immutable from the chart's perspective: the routing engine owns the
/// numbers, this crate only carries them to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteParams {
    /// Strategy label, e.g. "min_fuel" or "gcr".
    pub route_type: String,
    /// Latitude at each route step, degrees.
    pub lats_per_step: Vec<f64>,
    /// Longitude at each route step, degrees.
    pub lons_per_step: Vec<f64>,
    /// Total fuel consumption in tonnes.
    pub fuel: f64,
    /// Total passage time in hours.
    pub time: i64,
}

impl RouteParams {
    pub fn new(
        route_type: impl Into<String>,
        lats_per_step: Vec<f64>,
        lons_per_step: Vec<f64>,
        fuel: f64,
        time: i64,
    ) -> Self {
        Self {
            route_type: route_type.into(),
            lats_per_step,
            lons_per_step,
            fuel,
            time,
        }
    }

    /// Number of route steps.
    pub fn len(&self) -> usize {
        self.lats_per_step.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats_per_step.is_empty()
    }

    /// Legend entry text: route type with fuel (2 decimals) and time totals.
    pub fn legend_label(&self) -> String {
        format!(
            "{} (fuel: {:.2}t, time: {}h)",
            self.route_type, self.fuel, self.time
        )
    }
}
