//! Base map layer: ocean fill, land polygons, coastline, graticule.
//!
//! Land geometry comes from a GeoJSON FeatureCollection (e.g. Natural Earth
//! land at 1:110m); the layer degrades to ocean + graticule when no geometry
//! is configured.

use route_common::{ChartError, ChartResult};
use rusttype::Font;
use serde_json::Value;
use tiny_skia::{FillRule, Paint, PathBuilder, Stroke, Transform};
use tracing::debug;

use crate::figure::Panel;
use crate::palette::Colour;
use crate::text;

/// Styling for the base layer.
#[derive(Debug, Clone)]
pub struct BasemapStyle {
    pub ocean: Colour,
    pub land: Colour,
    pub coastline: Colour,
    pub coastline_width: f32,
    pub gridline: Colour,
    /// Graticule spacing in degrees.
    pub gridline_step_deg: f64,
    /// Draw longitude/latitude labels along the panel edges (needs a font).
    pub draw_labels: bool,
    pub label_size: f32,
}

impl Default for BasemapStyle {
    fn default() -> Self {
        Self {
            ocean: Colour::rgb(151, 183, 224),
            land: Colour::rgb(240, 237, 213),
            coastline: Colour::rgb(60, 60, 60),
            coastline_width: 1.0,
            gridline: Colour::rgba(90, 90, 90, 140),
            gridline_step_deg: 10.0,
            draw_labels: true,
            label_size: 12.0,
        }
    }
}

/// A ring of (lon, lat) vertices. Outer rings and holes are drawn together
/// with an even-odd fill.
type Ring = Vec<(f64, f64)>;

/// Land geometry for the base layer.
#[derive(Debug, Clone, Default)]
pub struct Basemap {
    rings: Vec<Ring>,
}

impl Basemap {
    /// A basemap with no land geometry (ocean and graticule only).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse land polygons from a GeoJSON string.
    ///
    /// Accepts a FeatureCollection, a single Feature, or a bare
    /// Polygon/MultiPolygon geometry. Geometry types other than polygons are
    /// skipped.
    pub fn from_geojson_str(s: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(s)?;
        let mut rings = Vec::new();

        match value.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => {
                let features = value
                    .get("features")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        ChartError::InvalidGeoJson("FeatureCollection without features".into())
                    })?;
                for feature in features {
                    if let Some(geometry) = feature.get("geometry") {
                        collect_polygon_rings(geometry, &mut rings)?;
                    }
                }
            }
            Some("Feature") => {
                let geometry = feature_geometry(&value)?;
                collect_polygon_rings(geometry, &mut rings)?;
            }
            Some(_) => collect_polygon_rings(&value, &mut rings)?,
            None => {
                return Err(ChartError::InvalidGeoJson(
                    "missing 'type' member".into(),
                ))
            }
        }

        debug!(rings = rings.len(), "loaded basemap geometry");
        Ok(Self { rings })
    }

    /// Load land polygons from a GeoJSON file.
    pub fn from_geojson_file(path: impl AsRef<std::path::Path>) -> ChartResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&content)
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

fn feature_geometry(feature: &Value) -> ChartResult<&Value> {
    feature
        .get("geometry")
        .ok_or_else(|| ChartError::InvalidGeoJson("Feature without geometry".into()))
}

fn collect_polygon_rings(geometry: &Value, out: &mut Vec<Ring>) -> ChartResult<()> {
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => {
            let coords = geometry
                .get("coordinates")
                .and_then(Value::as_array)
                .ok_or_else(|| ChartError::InvalidGeoJson("Polygon without coordinates".into()))?;
            for ring in coords {
                out.push(parse_ring(ring)?);
            }
        }
        Some("MultiPolygon") => {
            let polygons = geometry
                .get("coordinates")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ChartError::InvalidGeoJson("MultiPolygon without coordinates".into())
                })?;
            for polygon in polygons {
                let rings = polygon.as_array().ok_or_else(|| {
                    ChartError::InvalidGeoJson("MultiPolygon member is not an array".into())
                })?;
                for ring in rings {
                    out.push(parse_ring(ring)?);
                }
            }
        }
        Some(other) => {
            debug!(geometry_type = other, "skipping non-polygon geometry");
        }
        None => {
            return Err(ChartError::InvalidGeoJson(
                "geometry missing 'type' member".into(),
            ))
        }
    }
    Ok(())
}

fn parse_ring(ring: &Value) -> ChartResult<Ring> {
    let positions = ring
        .as_array()
        .ok_or_else(|| ChartError::InvalidGeoJson("ring is not an array".into()))?;

    let mut out = Vec::with_capacity(positions.len());
    for position in positions {
        let pair = position
            .as_array()
            .ok_or_else(|| ChartError::InvalidGeoJson("position is not an array".into()))?;
        let lon = pair
            .first()
            .and_then(Value::as_f64)
            .ok_or_else(|| ChartError::InvalidGeoJson("position missing longitude".into()))?;
        let lat = pair
            .get(1)
            .and_then(Value::as_f64)
            .ok_or_else(|| ChartError::InvalidGeoJson("position missing latitude".into()))?;
        out.push((lon, lat));
    }
    Ok(out)
}

/// Paint the full base layer onto a panel: ocean, land + coastline, graticule.
pub(crate) fn draw(
    panel: &mut Panel,
    basemap: Option<&Basemap>,
    style: &BasemapStyle,
    font: Option<&Font>,
) {
    panel.pixmap_mut().fill(style.ocean.to_skia());

    if let Some(basemap) = basemap {
        if let Some(path) = land_path(panel, basemap) {
            let mut paint = Paint::default();
            paint.anti_alias = true;

            paint.set_color(style.land.to_skia());
            panel.pixmap_mut().fill_path(
                &path,
                &paint,
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );

            paint.set_color(style.coastline.to_skia());
            let stroke = Stroke {
                width: style.coastline_width,
                ..Stroke::default()
            };
            panel
                .pixmap_mut()
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    draw_graticule(panel, style, font);
}

/// Build one path holding every land ring; even-odd fill keeps lakes open.
fn land_path(panel: &Panel, basemap: &Basemap) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for ring in &basemap.rings {
        let mut points = ring.iter();
        let Some(&(lon, lat)) = points.next() else {
            continue;
        };
        let (x, y) = panel.project(lat, lon);
        builder.move_to(x, y);
        for &(lon, lat) in points {
            let (x, y) = panel.project(lat, lon);
            builder.line_to(x, y);
        }
        builder.close();
    }
    builder.finish()
}

fn draw_graticule(panel: &mut Panel, style: &BasemapStyle, font: Option<&Font>) {
    let step = style.gridline_step_deg;
    if step <= 0.0 {
        return;
    }

    let extent = panel.extent;
    let width = panel.width() as f32;
    let height = panel.height() as f32;

    let mut builder = PathBuilder::new();
    let mut labels: Vec<(String, f32, f32)> = Vec::new();

    // Meridians, aligned to multiples of the step
    let mut lon = (extent.min_lon / step).ceil() * step;
    while lon <= extent.max_lon {
        let (x, _) = panel.project(extent.max_lat, lon);
        builder.move_to(x, 0.0);
        builder.line_to(x, height);
        labels.push((format_lon(lon), x + 3.0, height - style.label_size - 3.0));
        lon += step;
    }

    // Parallels
    let mut lat = (extent.min_lat / step).ceil() * step;
    while lat <= extent.max_lat {
        let (_, y) = panel.project(lat, extent.min_lon);
        builder.move_to(0.0, y);
        builder.line_to(width, y);
        labels.push((format_lat(lat), 3.0, y + 2.0));
        lat += step;
    }

    if let Some(path) = builder.finish() {
        let mut paint = Paint::default();
        paint.anti_alias = false;
        paint.set_color(style.gridline.to_skia());
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        panel
            .pixmap_mut()
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    if style.draw_labels {
        if let Some(font) = font {
            for (label, x, y) in labels {
                text::draw_text(
                    panel.pixmap_mut(),
                    font,
                    &label,
                    x as i32,
                    y as i32,
                    style.label_size,
                    style.coastline,
                );
            }
        }
    }
}

fn format_lon(lon: f64) -> String {
    if lon < 0.0 {
        format!("{}W", -lon)
    } else {
        format!("{}E", lon)
    }
}

fn format_lat(lat: f64) -> String {
    if lat < 0.0 {
        format!("{}S", -lat)
    } else {
        format!("{}N", lat)
    }
}
