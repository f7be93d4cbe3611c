//! Legend rendering for labeled route overlays.

use route_common::ChartResult;
use tiny_skia::{Paint, PathBuilder, Rect, Stroke, Transform};
use tracing::warn;

use crate::figure::{load_font, MapFigure};
use crate::palette::Colour;
use crate::text;

const PADDING: f32 = 8.0;
const ENTRY_HEIGHT: f32 = 18.0;
const SWATCH_WIDTH: f32 = 22.0;
const FONT_SIZE: f32 = 13.0;

/// One pending legend entry, registered by `plot_route`.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub colour: Colour,
}

/// Render the accumulated legend onto a figure panel.
///
/// Entries are drawn top-to-bottom in a box anchored at the panel's
/// top-right corner: colour swatch line, then label text. Without a figure
/// font only the swatches are drawn. A figure with no entries is left
/// untouched.
pub fn plot_legend(fig: &mut MapFigure, panel: usize) -> ChartResult<()> {
    if fig.legend.is_empty() {
        return Ok(());
    }

    // Split the borrows: the font is read while the panel is mutated.
    let MapFigure {
        panels,
        legend,
        font_data,
        ..
    } = fig;
    let count = panels.len();
    let panel = panels
        .get_mut(panel)
        .ok_or(route_common::ChartError::PanelOutOfRange { index: panel, count })?;

    let font = load_font(font_data.as_deref());
    if font.is_none() {
        warn!("no figure font set, legend drawn without labels");
    }

    let text_width = font
        .as_ref()
        .map(|f| {
            legend
                .iter()
                .map(|e| text::measure_text(f, &e.label, FONT_SIZE))
                .fold(0.0f32, f32::max)
        })
        .unwrap_or(0.0);

    let box_width = PADDING * 3.0 + SWATCH_WIDTH + text_width;
    let box_height = PADDING * 2.0 + ENTRY_HEIGHT * legend.len() as f32;
    let x0 = panel.width() as f32 - box_width - PADDING;
    let y0 = PADDING;

    // Background box with a thin border
    if let Some(rect) = Rect::from_xywh(x0, y0, box_width, box_height) {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(tiny_skia::Color::from_rgba8(255, 255, 255, 230));
        panel.pixmap_mut().fill_rect(rect, &paint, Transform::identity(), None);

        let mut border = PathBuilder::new();
        border.push_rect(rect);
        if let Some(path) = border.finish() {
            paint.set_color(tiny_skia::Color::from_rgba8(120, 120, 120, 255));
            let stroke = Stroke {
                width: 1.0,
                ..Stroke::default()
            };
            panel
                .pixmap_mut()
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    for (i, entry) in legend.iter().enumerate() {
        let line_y = y0 + PADDING + ENTRY_HEIGHT * i as f32 + ENTRY_HEIGHT / 2.0;

        let mut builder = PathBuilder::new();
        builder.move_to(x0 + PADDING, line_y);
        builder.line_to(x0 + PADDING + SWATCH_WIDTH, line_y);
        if let Some(path) = builder.finish() {
            let mut paint = Paint::default();
            paint.anti_alias = true;
            paint.set_color(entry.colour.to_skia());
            let stroke = Stroke {
                width: 2.0,
                ..Stroke::default()
            };
            panel
                .pixmap_mut()
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        if let Some(font) = font.as_ref() {
            text::draw_text(
                panel.pixmap_mut(),
                font,
                &entry.label,
                (x0 + PADDING * 2.0 + SWATCH_WIDTH) as i32,
                (line_y - FONT_SIZE / 2.0) as i32,
                FONT_SIZE,
                Colour::rgb(20, 20, 20),
            );
        }
    }

    Ok(())
}
