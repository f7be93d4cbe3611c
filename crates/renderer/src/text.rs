//! Text drawing onto panel pixmaps.
//!
//! Labels are rasterized into a small transparent `RgbaImage` with
//! imageproc/rusttype, then alpha-composited onto the target pixmap.

use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};
use tiny_skia::Pixmap;

use crate::palette::Colour;

/// Pixel width of `text` at the given scale.
pub(crate) fn measure_text(font: &Font, text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Draw `text` onto the pixmap with its top-left corner at (x, y).
pub(crate) fn draw_text(
    pixmap: &mut Pixmap,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
    size: f32,
    colour: Colour,
) {
    let width = measure_text(font, text, size).ceil() as u32 + 2;
    let height = size.ceil() as u32 + 2;
    if width == 0 || height == 0 {
        return;
    }

    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    draw_text_mut(
        &mut img,
        colour.to_rgba_pixel(),
        0,
        0,
        Scale::uniform(size),
        font,
        text,
    );

    composite_image(pixmap, &img, x, y);
}

/// Source-over composite an RGBA image onto the pixmap at (x, y).
///
/// The pixmap stores premultiplied pixels; blending happens on demultiplied
/// values and the result is re-premultiplied on store.
pub(crate) fn composite_image(pixmap: &mut Pixmap, img: &RgbaImage, x: i32, y: i32) {
    let canvas_width = pixmap.width() as i32;
    let canvas_height = pixmap.height() as i32;
    let pixels = pixmap.pixels_mut();

    for (px, py, pixel) in img.enumerate_pixels() {
        let [src_r, src_g, src_b, src_a] = pixel.0;
        if src_a == 0 {
            continue;
        }

        let cx = x + px as i32;
        let cy = y + py as i32;
        if cx < 0 || cy < 0 || cx >= canvas_width || cy >= canvas_height {
            continue;
        }

        let idx = (cy * canvas_width + cx) as usize;
        let dst = pixels[idx].demultiply();

        let src_a_f = src_a as f32 / 255.0;
        let dst_a_f = dst.alpha() as f32 / 255.0;
        let out_a = src_a_f + dst_a_f * (1.0 - src_a_f);
        if out_a <= 0.0 {
            continue;
        }

        let blend = |s: u8, d: u8| -> u8 {
            ((s as f32 * src_a_f + d as f32 * dst_a_f * (1.0 - src_a_f)) / out_a) as u8
        };

        let out = tiny_skia::ColorU8::from_rgba(
            blend(src_r, dst.red()),
            blend(src_g, dst.green()),
            blend(src_b, dst.blue()),
            (out_a * 255.0) as u8,
        );
        pixels[idx] = out.premultiply();
    }
}
