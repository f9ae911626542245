//! Pure calculation functions for page and tile geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::config::PageGeometry;

/// An axis-aligned rectangle in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The same rectangle shrunk by `by` on every side.
    pub fn inset(&self, by: u32) -> Rect {
        Rect {
            x: self.x + by,
            y: self.y + by,
            width: self.width.saturating_sub(2 * by),
            height: self.height.saturating_sub(2 * by),
        }
    }
}

/// The rectangles making up one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCell {
    pub row: u32,
    pub column: u32,
    /// Full cell, painted in the border color.
    pub outer: Rect,
    /// Cell inset by the border, painted in the fill color.
    pub inner: Rect,
    /// Area the scaled image is fitted and centered in.
    pub image_box: Rect,
    /// Top-left of the caption band, shifted right by the caption inset.
    pub caption_origin: (u32, u32),
}

impl TileCell {
    /// Compute the cell at `(row, column)` on a page.
    pub fn at(geometry: &PageGeometry, row: u32, column: u32) -> Self {
        let (grid_x, grid_y) = geometry.grid_origin();
        let outer = Rect {
            x: grid_x + column * (geometry.tile_size + geometry.column_gap),
            y: grid_y + row * (geometry.tile_size + geometry.row_gap),
            width: geometry.tile_size,
            height: geometry.tile_size,
        };
        let inner = outer.inset(geometry.border);
        let (box_w, box_h) = geometry.image_box();
        let image_box = Rect {
            x: inner.x,
            y: inner.y,
            width: box_w,
            height: box_h,
        };

        Self {
            row,
            column,
            outer,
            inner,
            image_box,
            caption_origin: (inner.x + geometry.caption_inset, image_box.bottom()),
        }
    }
}

/// Calculate dimensions that fit inside a target box (resize, no crop).
///
/// Preserves the source aspect ratio. One dimension matches the target, the
/// other is at most the target. Small sources are scaled up. The result is
/// never zero in either dimension.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Bounding box dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Fit dimensions
pub fn calculate_fit_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    if src_w == 0 || src_h == 0 {
        return (tgt_w.max(1), tgt_h.max(1));
    }

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: width matches, height shrinks
        let w = tgt_w;
        let h = (w as f64 / src_aspect).round() as u32;
        (w, h.clamp(1, tgt_h))
    } else {
        // Source is taller (or same aspect): height matches, width shrinks
        let h = tgt_h;
        let w = (h as f64 * src_aspect).round() as u32;
        (w.clamp(1, tgt_w), h)
    }
}

/// Offset that centers `size` within `available`, rounding toward the origin.
pub fn centering_offset(available: u32, size: u32) -> u32 {
    available.saturating_sub(size) / 2
}

/// Where a fitted image of `size` lands inside a cell's image box.
pub fn image_placement(cell: &TileCell, size: (u32, u32)) -> Rect {
    Rect {
        x: cell.image_box.x + centering_offset(cell.image_box.width, size.0),
        y: cell.image_box.y + centering_offset(cell.image_box.height, size.1),
        width: size.0,
        height: size.1,
    }
}

/// Number of pages needed for `count` entries: `ceil(count / tiles_per_page)`.
pub fn page_count(count: usize, tiles_per_page: usize) -> usize {
    if tiles_per_page == 0 {
        return 0;
    }
    count.div_ceil(tiles_per_page)
}

/// A populated cell: which grid slot and which entry (global index) fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSlot {
    pub row: u32,
    pub column: u32,
    pub index: usize,
}

/// Populated cells of page `page`, row-major, stopping at the first global
/// index past `count`. Cells after that stop are left empty.
pub fn page_slots(geometry: &PageGeometry, page: usize, count: usize) -> Vec<CellSlot> {
    let (rows, columns) = (geometry.rows(), geometry.columns());
    let first = page * geometry.tiles_per_page();
    let mut slots = Vec::new();

    'rows: for r in 0..rows {
        for c in 0..columns {
            let index = first + (r * columns + c) as usize;
            if index >= count {
                break 'rows;
            }
            slots.push(CellSlot {
                row: r,
                column: c,
                index,
            });
        }
    }

    slots
}
