//! Tile and caption imaging in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (PNG, JPEG, GIF) |
//! | **Fit + blit** | `resize_exact` (Lanczos3) + `imageops::overlay` |
//! | **Frames** | `imageproc::drawing::draw_filled_rect_mut` |
//! | **Captions** | `ab_glyph` metrics + `imageproc::drawing::draw_text_mut` |
//! | **Encode** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for cell, fit and page math (unit testable)
//! - **Caption**: Pure caption layout over a [`TextMeasure`]
//! - **Font**: The bundled caption font and its metrics
//! - **Backend**: [`SheetBackend`] trait + [`RustBackend`]
//! - **Operations**: Drawing functions combining calculations with pixels

pub mod backend;
pub mod calculations;
pub mod caption;
pub mod font;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, SheetBackend};
pub use calculations::{Rect, TileCell};
pub use caption::{CaptionLayout, CaptionLine, layout_caption};
pub use font::{CaptionFont, FontError, TextMeasure};
pub use rust_backend::RustBackend;
