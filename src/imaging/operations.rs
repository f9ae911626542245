//! High-level drawing operations on a page canvas.
//!
//! These functions combine calculations with pixel work: they take a cell or
//! a caption layout, compute what goes where, and paint it.

use super::calculations::{Rect, TileCell, calculate_fit_dimensions, image_placement};
use super::caption::CaptionLayout;
use super::font::{CaptionFont, TextMeasure};
use crate::config::PageGeometry;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect as PixelRect;

/// A blank page canvas painted with the background color.
pub fn new_canvas(geometry: &PageGeometry) -> RgbaImage {
    RgbaImage::from_pixel(
        geometry.page_width,
        geometry.page_height,
        geometry.palette.background,
    )
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let r = PixelRect::at(rect.x as i32, rect.y as i32).of_size(rect.width, rect.height);
    draw_filled_rect_mut(canvas, r, color);
}

/// Draw one tile: border, fill, then the source fitted and centered in the
/// image box. Returns where the image landed.
pub fn draw_tile(
    canvas: &mut RgbaImage,
    source: &DynamicImage,
    cell: &TileCell,
    geometry: &PageGeometry,
) -> Rect {
    fill_rect(canvas, cell.outer, geometry.palette.border);
    fill_rect(canvas, cell.inner, geometry.palette.fill);

    let (w, h) = calculate_fit_dimensions(
        (source.width(), source.height()),
        (cell.image_box.width, cell.image_box.height),
    );
    let scaled = source.resize_exact(w, h, FilterType::Lanczos3).to_rgba8();
    let placed = image_placement(cell, (w, h));
    imageops::overlay(canvas, &scaled, placed.x as i64, placed.y as i64);

    placed
}

/// Draw every line of a caption layout at its own size and baseline.
pub fn draw_caption(
    canvas: &mut RgbaImage,
    layout: &CaptionLayout,
    font: &CaptionFont,
    color: Rgba<u8>,
) {
    let scale = font.scale(layout.font_size);
    let ascent = font.ascent(layout.font_size);
    for line in &layout.lines {
        if line.text.is_empty() {
            continue;
        }
        // draw_text_mut positions the top of the line box, not the baseline
        let top = (line.baseline - ascent).round() as i32;
        draw_text_mut(
            canvas,
            color,
            line.x.round() as i32,
            top,
            scale,
            font.font(),
            &line.text,
        );
    }
}
