//! The mutable figure object layers are composed onto.
//!
//! A `MapFigure` owns one or more stacked panels, each a raster pixmap with a
//! geographic extent under an equirectangular mapping. The caller creates the
//! figure, passes it to the layer functions, and finally exports it.

use geodesy::{gcr_points, LatLon};
use route_common::{BoundingBox, ChartError, ChartResult, WindFieldSet};
use rusttype::Font;
use tiny_skia::Pixmap;
use tracing::{debug, warn};

use crate::barbs::{self, BarbPreprocess, BarbStyle};
use crate::basemap::{self, Basemap, BasemapStyle};
use crate::legend::LegendEntry;
use crate::palette::Colour;
use crate::png;
use crate::route;

/// Pixel size of a single-panel chart.
pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 420;

/// Pixel size of one forecast-sheet panel.
pub const SHEET_WIDTH: u32 = 1600;
pub const SHEET_HEIGHT: u32 = 800;

/// Segment count for discretized great-circle overlays.
pub(crate) const GCR_SEGMENTS: usize = 10;

/// Colour of the route overlay drawn on forecast sheets.
const SHEET_ROUTE_COLOUR: Colour = Colour::rgb(220, 0, 0);

/// Shared options for figure construction.
#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    /// Land/coastline geometry; ocean-only base layer when absent.
    pub basemap: Option<Basemap>,
    pub style: BasemapStyle,
    /// TrueType font bytes used for graticule labels and the legend.
    pub font_data: Option<Vec<u8>>,
}

/// One map panel: a pixmap plus the geographic extent it displays.
pub struct Panel {
    pixmap: Pixmap,
    pub extent: BoundingBox,
}

impl Panel {
    pub(crate) fn new(width: u32, height: u32, extent: BoundingBox) -> ChartResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            ChartError::RenderError(format!("cannot allocate {}x{} panel", width, height))
        })?;
        Ok(Self { pixmap, extent })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Project a geographic coordinate to panel pixel space (plate carrée:
    /// linear in both axes, north at the top).
    pub(crate) fn project(&self, lat: f64, lon: f64) -> (f32, f32) {
        let lon_span = self.extent.width().max(1e-9);
        let lat_span = self.extent.height().max(1e-9);
        let x = (lon - self.extent.min_lon) / lon_span * self.width() as f64;
        let y = (self.extent.max_lat - lat) / lat_span * self.height() as f64;
        (x as f32, y as f32)
    }
}

/// A figure under construction: panels, pending legend entries, font.
pub struct MapFigure {
    pub dpi: u32,
    pub(crate) panels: Vec<Panel>,
    pub(crate) legend: Vec<LegendEntry>,
    pub(crate) font_data: Option<Vec<u8>>,
}

impl MapFigure {
    /// Create a single-panel chart with the base layer attached.
    pub fn new_chart(extent: BoundingBox, dpi: u32, options: &ChartOptions) -> ChartResult<Self> {
        let mut panel = Panel::new(CHART_WIDTH, CHART_HEIGHT, extent)?;
        let font = load_font(options.font_data.as_deref());
        basemap::draw(&mut panel, options.basemap.as_ref(), &options.style, font.as_ref());

        debug!(width = CHART_WIDTH, height = CHART_HEIGHT, "created chart");
        Ok(Self {
            dpi,
            panels: vec![panel],
            legend: Vec::new(),
            font_data: options.font_data.clone(),
        })
    }

    /// Create a forecast sheet: `n_maps` stacked panels spanning the two
    /// route endpoints, panel `i` annotated with the wind field for forecast
    /// hour `i` (bucketed to 3 hours).
    ///
    /// The great-circle route overlay goes on the first panel only; the
    /// remaining panels carry the wind evolution.
    pub fn new_forecast_sheet(
        origin: LatLon,
        dest: LatLon,
        dpi: u32,
        winds: &WindFieldSet,
        n_maps: usize,
        options: &ChartOptions,
    ) -> ChartResult<Self> {
        let extent = BoundingBox::from_corners(origin.lat, origin.lon, dest.lat, dest.lon);
        let font = load_font(options.font_data.as_deref());

        let mut panels = Vec::with_capacity(n_maps);
        for _ in 0..n_maps {
            let mut panel = Panel::new(SHEET_WIDTH, SHEET_HEIGHT, extent)?;
            basemap::draw(&mut panel, options.basemap.as_ref(), &options.style, font.as_ref());
            panels.push(panel);
        }

        let mut fig = Self {
            dpi,
            panels,
            legend: Vec::new(),
            font_data: options.font_data.clone(),
        };

        let style = BarbStyle::default();
        for i in 0..n_maps {
            match winds.at_hour(i as u32) {
                Some(field) => {
                    barbs::plot_barbs(&mut fig, i, field, &BarbPreprocess::none(), &style)?;
                }
                None => warn!(panel = i, "no wind field available, panel left bare"),
            }
        }

        if n_maps > 0 {
            let path = gcr_points(origin, dest, GCR_SEGMENTS);
            route::draw_path(&mut fig, 0, &path, SHEET_ROUTE_COLOUR, 2.0)?;
        }

        Ok(fig)
    }

    /// Replace the figure font after construction.
    pub fn set_font(&mut self, data: Vec<u8>) {
        self.font_data = Some(data);
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panel(&self, index: usize) -> ChartResult<&Panel> {
        self.panels.get(index).ok_or(ChartError::PanelOutOfRange {
            index,
            count: self.panels.len(),
        })
    }

    pub(crate) fn panel_mut(&mut self, index: usize) -> ChartResult<&mut Panel> {
        let count = self.panels.len();
        self.panels
            .get_mut(index)
            .ok_or(ChartError::PanelOutOfRange { index, count })
    }

    pub(crate) fn push_legend(&mut self, entry: LegendEntry) {
        self.legend.push(entry);
    }

    /// Pending legend entries, in insertion order.
    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Flatten all panels into one vertically stacked RGBA buffer.
    ///
    /// Returns `(pixels, width, height)` with straight (non-premultiplied)
    /// alpha.
    pub fn to_rgba(&self) -> (Vec<u8>, usize, usize) {
        let width = self.panels.first().map(|p| p.width() as usize).unwrap_or(0);
        let height: usize = self.panels.iter().map(|p| p.height() as usize).sum();

        let mut pixels = Vec::with_capacity(width * height * 4);
        for panel in &self.panels {
            for px in panel.pixmap.pixels() {
                let c = px.demultiply();
                pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
            }
        }
        (pixels, width, height)
    }

    /// Encode the stacked panels as a PNG.
    pub fn to_png(&self) -> ChartResult<Vec<u8>> {
        let (pixels, width, height) = self.to_rgba();
        if width == 0 || height == 0 {
            return Err(ChartError::RenderError("figure has no panels".into()));
        }
        png::create_png_auto(&pixels, width, height)
    }
}

pub(crate) fn load_font(data: Option<&[u8]>) -> Option<Font<'static>> {
    let data = data?;
    match Font::try_from_vec(data.to_vec()) {
        Some(font) => Some(font),
        None => {
            warn!("font data could not be parsed, labels disabled");
            None
        }
    }
}
