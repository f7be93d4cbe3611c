//! Wind barb overlay.
//!
//! Barbs are drawn procedurally with tiny-skia: a staff pointing into the
//! wind, with 50 kt pennants, 10 kt full barbs and 5 kt half barbs hung off
//! the upper end. Calm cells (< 2.5 kt) render as a small circle.

use std::f64::consts::PI;

use route_common::{ChartResult, Grid2, WindField};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::figure::MapFigure;
use crate::palette::Colour;

/// Conversion from m/s to knots.
const MS_TO_KNOTS: f64 = 1.943_844_5;

/// Wind below this speed (knots) is drawn as a calm circle.
const CALM_KNOTS: f64 = 2.5;

/// Per-source preprocessing applied to the wind grids before placement.
///
/// Explicit configuration keyed by data source, instead of burying the
/// cleanup constants in the plotting code.
#[derive(Debug, Clone)]
pub struct BarbPreprocess {
    /// Row removed from all four grids when the source carries a duplicated
    /// scanline.
    pub drop_row: Option<usize>,
    /// Block-averaging factors (rows, cols) applied after the row drop.
    pub rebin: (usize, usize),
}

impl BarbPreprocess {
    /// CMEMS grids carry a duplicated second row and are dense enough to
    /// need 5x11 block averaging before plotting.
    pub fn cmems() -> Self {
        Self {
            drop_row: Some(1),
            rebin: (5, 11),
        }
    }

    /// NCEP grids are plotted as delivered.
    pub fn ncep() -> Self {
        Self::none()
    }

    /// No preprocessing.
    pub fn none() -> Self {
        Self {
            drop_row: None,
            rebin: (1, 1),
        }
    }

    fn apply(&self, grid: &Grid2) -> ChartResult<Grid2> {
        let grid = match self.drop_row {
            Some(index) => grid.drop_row(index)?,
            None => grid.clone(),
        };
        grid.rebin(self.rebin.0, self.rebin.1)
    }
}

/// Visual styling for barbs.
#[derive(Debug, Clone)]
pub struct BarbStyle {
    /// Staff length in pixels.
    pub length: f32,
    pub line_width: f32,
    pub colour: Colour,
}

impl Default for BarbStyle {
    fn default() -> Self {
        Self {
            length: 28.0,
            line_width: 1.0,
            colour: Colour::rgb(20, 20, 20),
        }
    }
}

/// Convert U and V wind components (m/s) to speed (m/s) and direction
/// (radians FROM which the wind blows, mathematical convention: 0 = East,
/// π/2 = North), normalized to [0, 2π).
pub fn uv_to_speed_direction(u: f64, v: f64) -> (f64, f64) {
    let speed = (u * u + v * v).sqrt();

    let mut direction = (-v).atan2(-u);
    if direction < 0.0 {
        direction += 2.0 * PI;
    }

    (speed, direction)
}

/// Overlay wind barbs from a field onto one figure panel.
///
/// The four grids are preprocessed together (optional row drop, then block
/// averaging); dimension mismatches surface as errors before anything is
/// drawn. Cells with NaN components or coordinates outside the panel extent
/// are skipped.
pub fn plot_barbs(
    fig: &mut MapFigure,
    panel: usize,
    wind: &WindField,
    preprocess: &BarbPreprocess,
    style: &BarbStyle,
) -> ChartResult<()> {
    let u = preprocess.apply(&wind.u)?;
    let v = preprocess.apply(&wind.v)?;
    let lats = preprocess.apply(&wind.lats)?;
    let lons = preprocess.apply(&wind.lons)?;

    let panel = fig.panel_mut(panel)?;
    let (rows, cols) = u.shape();
    let mut drawn = 0usize;

    for r in 0..rows {
        for c in 0..cols {
            let (Some(uu), Some(vv)) = (u.get(r, c), v.get(r, c)) else {
                continue;
            };
            if uu.is_nan() || vv.is_nan() {
                continue;
            }
            let (Some(lat), Some(lon)) = (lats.get(r, c), lons.get(r, c)) else {
                continue;
            };
            if !panel.extent.contains(lat, lon) {
                continue;
            }

            let (x, y) = panel.project(lat, lon);
            let (speed_ms, direction_rad) = uv_to_speed_direction(uu, vv);
            draw_barb(panel.pixmap_mut(), x, y, speed_ms, direction_rad, style);
            drawn += 1;
        }
    }

    debug!(rows, cols, drawn, "plotted wind barbs");
    Ok(())
}

/// Draw one barb glyph centered at (x, y).
fn draw_barb(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    speed_ms: f64,
    direction_rad: f64,
    style: &BarbStyle,
) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color(style.colour.to_skia());
    let stroke = Stroke {
        width: style.line_width,
        ..Stroke::default()
    };

    let knots = speed_ms * MS_TO_KNOTS;
    if knots < CALM_KNOTS {
        if let Some(circle) = PathBuilder::from_circle(x, y, style.length * 0.12) {
            pixmap.stroke_path(&circle, &paint, &stroke, Transform::identity(), None);
        }
        return;
    }

    // Round to the nearest 5 kt and split into pennants / full / half barbs
    let mut remaining = ((knots / 5.0).round() as u32) * 5;
    let pennants = remaining / 50;
    remaining %= 50;
    let fulls = remaining / 10;
    remaining %= 10;
    let halves = remaining / 5;

    // Glyph in local coordinates pointing north (wind from the north), then
    // rotated into place. The staff runs from the cell (0,0) upwind.
    let len = style.length;
    let flag_len = len * 0.4;
    let spacing = len * 0.15;

    // Direction is math convention; an upward glyph corresponds to π/2
    let angle_deg = ((direction_rad - PI / 2.0) * 180.0 / PI) as f32;
    let transform = Transform::from_rotate_at(angle_deg, x, y);

    let mut builder = PathBuilder::new();
    builder.move_to(x, y);
    builder.line_to(x, y - len);

    // Hang flags off the top of the staff, moving back down toward the cell;
    // full and half barbs start below any pennants
    let mut along = pennants as f32 * flag_len * 0.7;
    if pennants > 0 {
        along += spacing;
    }
    for _ in 0..fulls {
        let base = y - len + along;
        builder.move_to(x, base);
        builder.line_to(x + flag_len, base - flag_len * 0.6);
        along += spacing;
    }
    // A lone half barb sits one spacing in from the tip
    if pennants == 0 && fulls == 0 {
        along += spacing;
    }
    for _ in 0..halves {
        let base = y - len + along;
        builder.move_to(x, base);
        builder.line_to(x + flag_len * 0.5, base - flag_len * 0.3);
        along += spacing;
    }

    if let Some(path) = builder.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    // Pennants are filled triangles at the very tip
    if pennants > 0 {
        let mut pb = PathBuilder::new();
        let mut tip = y - len;
        for _ in 0..pennants {
            pb.move_to(x, tip);
            pb.line_to(x + flag_len, tip + flag_len * 0.35);
            pb.line_to(x, tip + flag_len * 0.7);
            pb.close();
            tip += flag_len * 0.7;
        }
        if let Some(path) = pb.finish() {
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }
}
