//! Shared test utilities for the tileboard test suite.
//!
//! Fixture writers produce small real image files on disk, entry builders
//! skip the filesystem entirely for tests that run against
//! [`MockBackend`](crate::imaging::backend::tests::MockBackend), and the
//! pixel assertions inspect a finished canvas.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let entries = entries_named(&["a", "b", "c"]);
//! let page = compose_page(&MockBackend::new(), &entries, 0, &geometry, &font).unwrap();
//!
//! assert_pixel_near(&page.canvas, 100, 100, MOCK_PIXEL, 1);
//! assert!(region_is_background(&page.canvas, cell.outer, &geometry));
//! ```

use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::collect::ImageEntry;
use crate::config::PageGeometry;
use crate::imaging::Rect;

// =========================================================================
// Fixture files
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

/// Write a gradient PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// Write a gradient JPEG of the given size. JPEG has no alpha channel.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    image::DynamicImage::ImageRgba8(gradient(width, height))
        .to_rgb8()
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

// =========================================================================
// Entries
// =========================================================================

/// Entries for `<name>.png` under a fake root, captioned `name`.
pub fn entries_named(names: &[&str]) -> Vec<ImageEntry> {
    names
        .iter()
        .map(|name| ImageEntry::from_path(PathBuf::from(format!("/fixtures/{name}.png"))))
        .collect()
}

/// Captions in collection order.
pub fn captions(entries: &[ImageEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.caption.as_str()).collect()
}

// =========================================================================
// Pixel assertions
// =========================================================================

/// Assert every channel of the pixel at `(x, y)` is within `tolerance` of
/// `expected`.
pub fn assert_pixel_near(canvas: &RgbaImage, x: u32, y: u32, expected: Rgba<u8>, tolerance: u8) {
    let actual = *canvas.get_pixel(x, y);
    let close = actual
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, e)| a.abs_diff(*e) <= tolerance);
    assert!(
        close,
        "pixel ({x},{y}) is {actual:?}, expected {expected:?} ±{tolerance}"
    );
}

/// Number of pixels inside `rect` matching `pred`. Parts of `rect` past the
/// canvas edge are ignored.
pub fn count_pixels_in(canvas: &RgbaImage, rect: Rect, pred: impl Fn(Rgba<u8>) -> bool) -> usize {
    let right = rect.right().min(canvas.width());
    let bottom = rect.bottom().min(canvas.height());
    let mut count = 0;
    for y in rect.y..bottom {
        for x in rect.x..right {
            if pred(*canvas.get_pixel(x, y)) {
                count += 1;
            }
        }
    }
    count
}

/// True when every pixel of `rect` is the page background.
pub fn region_is_background(canvas: &RgbaImage, rect: Rect, geometry: &PageGeometry) -> bool {
    let background = geometry.palette.background;
    count_pixels_in(canvas, rect, |p| p != background) == 0
}
