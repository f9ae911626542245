//! # Tileboard
//!
//! Lays out a directory of images as printable contact-sheet pages. Every
//! image becomes a framed tile with its file name as the caption, tiles fill
//! a fixed grid row by row, and each full grid is written out as one
//! `board-<n>.png`.
//!
//! # Architecture: Two Stages
//!
//! ```text
//! 1. Collect   input/   →  Vec<ImageEntry>    (filesystem → ordered entries)
//! 2. Render    entries  →  output/board-N.png (layout, drawing, encoding)
//! ```
//!
//! Collection never decodes pixels, and rendering never walks the
//! filesystem. Geometry is fixed up front in [`config::PageGeometry`] and
//! every position on a page is derived from it by pure functions in
//! [`imaging::calculations`], so layout can be tested without drawing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collect`] | Walks the input tree, keeps supported images, derives captions |
//! | [`config`] | Page geometry, caption font size, palette and their validation |
//! | [`imaging`] | Cell math, caption layout, the bundled font, drawing, decode/encode backend |
//! | [`compose`] | Paints one page: tiles first, then captions |
//! | [`render`] | Splits entries into pages, composes and writes them in parallel |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Fixed Letter Page at 72 DPI
//!
//! A page is 612×792 pixels, the US Letter size in points, so one pixel is
//! one point when printed. Captions are specified in points and converted
//! with the configured DPI, which keeps text size stable if the page is ever
//! rendered at a higher resolution.
//!
//! ## Bundled Font
//!
//! Captions use DejaVu Sans compiled into the binary. Output does not depend
//! on which fonts the machine happens to have installed.
//!
//! ## Lossless Output
//!
//! Pages are PNG. Captions are thin anti-aliased text that lossy codecs smear,
//! and a contact sheet is meant to be inspected.

pub mod collect;
pub mod compose;
pub mod config;
pub mod imaging;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
