//! Page composition: turn a slice of the entry list into one finished canvas.
//!
//! Entries are split into pages of `tiles_per_page`; page `p` holds global
//! indices `p * rows * columns ..`, filled row-major. The last page may be
//! partial, and cells past the final entry are left untouched (no frame).
//!
//! A page is painted in two passes: first every tile (frame + image), then
//! every caption. Captions that run past their band therefore sit on top of
//! the tile below instead of being hidden under it.

use crate::collect::ImageEntry;
use crate::config::PageGeometry;
use crate::imaging::calculations::{TileCell, page_slots};
use crate::imaging::operations::{draw_caption, draw_tile, new_canvas};
use crate::imaging::{BackendError, CaptionFont, Rect, SheetBackend, layout_caption};
use image::RgbaImage;

/// What ended up in one populated cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    /// Position of the entry in the collected list.
    pub index: usize,
    pub row: u32,
    pub column: u32,
    pub caption: String,
    /// Where the scaled image was drawn.
    pub image: Rect,
    pub caption_lines: usize,
    pub wrapped: bool,
}

/// A fully painted page, ready to be written.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub index: usize,
    pub canvas: RgbaImage,
    pub tiles: Vec<PlacedTile>,
}

/// Compose page `page` from `entries`.
///
/// Decoding any source on the page fails the whole page.
pub fn compose_page(
    backend: &impl SheetBackend,
    entries: &[ImageEntry],
    page: usize,
    geometry: &PageGeometry,
    font: &CaptionFont,
) -> Result<ComposedPage, BackendError> {
    let mut canvas = new_canvas(geometry);
    let slots = page_slots(geometry, page, entries.len());

    let mut placed = Vec::with_capacity(slots.len());
    for slot in &slots {
        let entry = &entries[slot.index];
        let cell = TileCell::at(geometry, slot.row, slot.column);
        let source = backend.decode(&entry.path)?;
        let image = draw_tile(&mut canvas, &source, &cell, geometry);
        placed.push((slot, cell, image));
    }

    let mut tiles = Vec::with_capacity(placed.len());
    for (slot, cell, image) in placed {
        let entry = &entries[slot.index];
        let layout = layout_caption(&entry.caption, cell.caption_origin, geometry, font);
        draw_caption(&mut canvas, &layout, font, geometry.palette.text);
        tiles.push(PlacedTile {
            index: slot.index,
            row: slot.row,
            column: slot.column,
            caption: entry.caption.clone(),
            image,
            caption_lines: layout.lines.len(),
            wrapped: layout.wrapped,
        });
    }

    Ok(ComposedPage {
        index: page,
        canvas,
        tiles,
    })
}
