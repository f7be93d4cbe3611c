//! Great-circle and isochrone route overlays.

use geodesy::{gcr_points, LatLon};
use route_common::{ChartError, ChartResult, RouteParams};
use tiny_skia::{Paint, PathBuilder, Stroke, Transform};
use tracing::debug;

use crate::figure::{MapFigure, Panel, GCR_SEGMENTS};
use crate::legend::LegendEntry;
use crate::palette::Colour;

/// Fixed colour for standalone great-circle overlays.
pub const GCR_COLOUR: Colour = Colour::rgb(0, 128, 0);

/// Overlay the great-circle path between two points onto a figure panel.
///
/// The path is discretized into 10 segments and drawn in the fixed green
/// GCR colour.
pub fn plot_gcr(
    fig: &mut MapFigure,
    panel: usize,
    origin: LatLon,
    dest: LatLon,
) -> ChartResult<()> {
    let path = gcr_points(origin, dest, GCR_SEGMENTS);
    draw_path(fig, panel, &path, GCR_COLOUR, 1.5)
}

/// Overlay one route alternative in the supplied colour and register its
/// legend entry (route type with fuel and time totals).
pub fn plot_route(
    fig: &mut MapFigure,
    panel: usize,
    route: &RouteParams,
    colour: Colour,
) -> ChartResult<()> {
    if route.lats_per_step.len() != route.lons_per_step.len() {
        return Err(ChartError::ShapeMismatch(format!(
            "route '{}' has {} latitudes but {} longitudes",
            route.route_type,
            route.lats_per_step.len(),
            route.lons_per_step.len()
        )));
    }

    let points: Vec<LatLon> = route
        .lats_per_step
        .iter()
        .zip(&route.lons_per_step)
        .map(|(&lat, &lon)| LatLon::new(lat, lon))
        .collect();

    draw_path(fig, panel, &points, colour, 1.5)?;
    fig.push_legend(LegendEntry {
        label: route.legend_label(),
        colour,
    });

    debug!(route_type = %route.route_type, steps = points.len(), "plotted route");
    Ok(())
}

/// Stroke a geographic polyline onto a figure panel.
pub(crate) fn draw_path(
    fig: &mut MapFigure,
    panel: usize,
    points: &[LatLon],
    colour: Colour,
    width: f32,
) -> ChartResult<()> {
    let panel = fig.panel_mut(panel)?;
    draw_polyline(panel, points, colour, width);
    Ok(())
}

fn draw_polyline(panel: &mut Panel, points: &[LatLon], colour: Colour, width: f32) {
    if points.len() < 2 {
        return;
    }

    let mut builder = PathBuilder::new();
    let (x, y) = panel.project(points[0].lat, points[0].lon);
    builder.move_to(x, y);
    for point in &points[1..] {
        let (x, y) = panel.project(point.lat, point.lon);
        builder.line_to(x, y);
    }

    if let Some(path) = builder.finish() {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(colour.to_skia());
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        panel
            .pixmap_mut()
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
