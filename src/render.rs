//! Page rendering and writing.
//!
//! Takes the collected entries, composes every page and writes each one as
//! `board-<page>.png` into the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! output/
//! ├── board-0.png      # entries 0..tiles_per_page
//! ├── board-1.png
//! └── board-2.png      # final page, possibly partial
//! ```
//!
//! ## Parallel Processing
//!
//! Pages are independent (own canvas, own slice of entries), so they are
//! composed and written in parallel using [rayon](https://docs.rs/rayon).
//! File names carry the page index, so the set of files on disk is the same
//! whatever order the pages finish in.
//!
//! ## Failure Policy
//!
//! Any decode, encode or I/O error aborts the run and is returned to the
//! caller. There is no skip-and-continue and no rollback: pages finished
//! before the failure stay on disk.

use crate::collect::ImageEntry;
use crate::compose::{ComposedPage, PlacedTile, compose_page};
use crate::config::{ConfigError, PageGeometry};
use crate::imaging::calculations::page_count;
use crate::imaging::{BackendError, CaptionFont, RustBackend, SheetBackend};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Backend(#[from] BackendError),
    #[error("Invalid geometry: {0}")]
    Config(#[from] ConfigError),
}

/// Progress report sent once a page has been written.
#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub page: usize,
    pub path: PathBuf,
    pub tiles: Vec<TileReport>,
}

/// One placed tile as seen in a [`PageReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct TileReport {
    pub index: usize,
    pub caption: String,
    pub caption_lines: usize,
    pub wrapped: bool,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: Vec<PathBuf>,
    pub tiles: usize,
    pub wrapped_captions: usize,
}

/// File name of page `page`.
pub fn page_file_name(page: usize) -> String {
    format!("board-{page}.png")
}

/// Render all pages with the production backend.
pub fn render(
    entries: &[ImageEntry],
    output_dir: &Path,
    geometry: &PageGeometry,
    font: &CaptionFont,
    progress: Option<Sender<PageReport>>,
) -> Result<RenderSummary, RenderError> {
    let backend = RustBackend::new();
    render_with_backend(&backend, entries, output_dir, geometry, font, progress)
}

/// Render all pages using a specific backend (allows testing with mock).
pub fn render_with_backend(
    backend: &impl SheetBackend,
    entries: &[ImageEntry],
    output_dir: &Path,
    geometry: &PageGeometry,
    font: &CaptionFont,
    progress: Option<Sender<PageReport>>,
) -> Result<RenderSummary, RenderError> {
    geometry.validate()?;
    std::fs::create_dir_all(output_dir)?;

    let pages = page_count(entries.len(), geometry.tiles_per_page());

    let written: Vec<WrittenPage> = (0..pages)
        .into_par_iter()
        .map_with(progress, |progress, page| {
            let composed = compose_page(backend, entries, page, geometry, font)?;
            let path = output_dir.join(page_file_name(page));
            backend.encode(&composed.canvas, &path)?;
            // The canvas is on disk now; only the tile records travel on
            let written = WrittenPage::from_composed(path, composed);

            if let Some(tx) = progress {
                tx.send(written.report()).ok();
            }

            Ok::<_, RenderError>(written)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = RenderSummary::default();
    for page in written {
        summary.tiles += page.tiles.len();
        summary.wrapped_captions += page.tiles.iter().filter(|t| t.wrapped).count();
        summary.pages.push(page.path);
    }
    Ok(summary)
}

/// A page after encoding, without its pixels.
struct WrittenPage {
    page: usize,
    path: PathBuf,
    tiles: Vec<PlacedTile>,
}

impl WrittenPage {
    fn from_composed(path: PathBuf, composed: ComposedPage) -> Self {
        Self {
            page: composed.index,
            path,
            tiles: composed.tiles,
        }
    }

    fn report(&self) -> PageReport {
        PageReport {
            page: self.page,
            path: self.path.clone(),
            tiles: self
                .tiles
                .iter()
                .map(|t| TileReport {
                    index: t.index,
                    caption: t.caption.clone(),
                    caption_lines: t.caption_lines,
                    wrapped: t.wrapped,
                })
                .collect(),
        }
    }
}
