//! Page geometry: the fixed layout constants every stage shares.
//!
//! A single [`PageGeometry`] value is built at startup (normally
//! [`PageGeometry::default()`]), validated once, and passed by reference to the
//! collector, compositor, caption layout and writer. Nothing mutates it after
//! construction.
//!
//! ## Default Layout
//!
//! ```text
//! page                612 x 792
//! tile                256 (2 columns x 3 rows = 6 tiles per page)
//! gaps                8 between columns, 8 between rows
//! border              4
//! caption band        40 (baseline 16 below the band top, text inset 6)
//! font                12pt at 72 dpi, wrapped captions at 12 / 1.5 = 8pt
//! wrap ceiling        32 characters per wrapped line
//! ```
//!
//! ## Derived Values
//!
//! - `columns = floor(page_width / tile_size)`
//! - `rows = floor(page_height / tile_size)`
//! - `tiles_per_page = columns * rows`
//!
//! The grid block (cells plus gaps) is centered on the page. [`PageGeometry::validate`]
//! rejects geometries whose grid would not fit once gaps are added.

use image::Rgba;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Geometry validation error: {0}")]
    Validation(String),
}

/// Colors used when painting a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Untouched page background (empty cells keep this color).
    pub background: Rgba<u8>,
    /// Outer frame of every populated cell.
    pub border: Rgba<u8>,
    /// Cell interior behind the image and caption.
    pub fill: Rgba<u8>,
    /// Caption text.
    pub text: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba([255, 255, 255, 255]),
            border: Rgba([0x20, 0x20, 0x20, 255]),
            fill: Rgba([0xf0, 0xf0, 0xf0, 255]),
            text: Rgba([0, 0, 0, 255]),
        }
    }
}

/// Immutable page layout configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_width: u32,
    pub page_height: u32,
    /// Edge length of a square cell.
    pub tile_size: u32,
    pub column_gap: u32,
    pub row_gap: u32,
    /// Frame thickness drawn inside each cell.
    pub border: u32,
    /// Height reserved at the bottom of the inner cell for the caption.
    pub caption_height: u32,
    /// Distance from the caption band top to the first baseline.
    pub caption_padding: u32,
    /// Horizontal distance from the inner cell edge to the caption start.
    pub caption_inset: u32,
    /// Base caption size in points.
    pub font_size: f32,
    pub dpi: f32,
    /// Wrapped captions are drawn at `font_size / wrap_ratio`.
    pub wrap_ratio: f32,
    /// Maximum characters per wrapped caption line.
    pub wrap_chars: usize,
    pub palette: Palette,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 612,
            page_height: 792,
            tile_size: 256,
            column_gap: 8,
            row_gap: 8,
            border: 4,
            caption_height: 40,
            caption_padding: 16,
            caption_inset: 6,
            font_size: 12.0,
            dpi: 72.0,
            wrap_ratio: 1.5,
            wrap_chars: 32,
            palette: Palette::default(),
        }
    }
}

impl PageGeometry {
    /// Validate that the geometry describes a drawable, non-overlapping grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let frame = self
            .border
            .saturating_mul(2)
            .saturating_add(self.caption_height);
        if self.tile_size <= frame {
            return Err(ConfigError::Validation(format!(
                "tile_size {} leaves no room for an image inside border {} and caption {}",
                self.tile_size, self.border, self.caption_height
            )));
        }
        if self.tile_size <= self.border.saturating_add(self.caption_inset).saturating_mul(2) {
            return Err(ConfigError::Validation(
                "caption_inset leaves no horizontal room for captions".into(),
            ));
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(ConfigError::Validation(format!(
                "page {}x{} cannot hold a single {} tile",
                self.page_width, self.page_height, self.tile_size
            )));
        }
        if self.grid_width() > self.page_width || self.grid_height() > self.page_height {
            return Err(ConfigError::Validation(format!(
                "grid {}x{} with gaps exceeds page {}x{}",
                self.grid_width(),
                self.grid_height(),
                self.page_width,
                self.page_height
            )));
        }
        if self.font_size <= 0.0 || self.dpi <= 0.0 {
            return Err(ConfigError::Validation(
                "font_size and dpi must be positive".into(),
            ));
        }
        if self.wrap_ratio <= 1.0 {
            return Err(ConfigError::Validation(
                "wrap_ratio must be greater than 1".into(),
            ));
        }
        if self.wrap_chars == 0 {
            return Err(ConfigError::Validation(
                "wrap_chars must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn columns(&self) -> u32 {
        self.page_width / self.tile_size
    }

    pub fn rows(&self) -> u32 {
        self.page_height / self.tile_size
    }

    pub fn tiles_per_page(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Width of the cell block including column gaps.
    pub fn grid_width(&self) -> u32 {
        let cols = self.columns();
        let gaps = cols.saturating_sub(1).saturating_mul(self.column_gap);
        (cols * self.tile_size).saturating_add(gaps)
    }

    /// Height of the cell block including row gaps.
    pub fn grid_height(&self) -> u32 {
        let rows = self.rows();
        let gaps = rows.saturating_sub(1).saturating_mul(self.row_gap);
        (rows * self.tile_size).saturating_add(gaps)
    }

    /// Top-left corner of the centered cell block.
    pub fn grid_origin(&self) -> (u32, u32) {
        (
            self.page_width.saturating_sub(self.grid_width()) / 2,
            self.page_height.saturating_sub(self.grid_height()) / 2,
        )
    }

    /// Box the scaled image must fit into: `(tile - 2*border, tile - 2*border - caption)`.
    pub fn image_box(&self) -> (u32, u32) {
        let inner = self.tile_size - 2 * self.border;
        (inner, inner - self.caption_height)
    }

    /// Widest caption (in pixels) that is still drawn on a single line.
    pub fn caption_max_width(&self) -> f32 {
        (self.tile_size - 2 * self.border - 2 * self.caption_inset) as f32
    }

    /// Point size used for wrapped captions.
    pub fn reduced_font_size(&self) -> f32 {
        self.font_size / self.wrap_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_valid() {
        PageGeometry::default().validate().unwrap();
    }

    #[test]
    fn default_grid_is_two_by_three() {
        let g = PageGeometry::default();
        assert_eq!(g.columns(), 2);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.tiles_per_page(), 6);
    }

    #[test]
    fn default_grid_is_centered() {
        let g = PageGeometry::default();
        // 2*256 + 8 = 520 wide, 3*256 + 2*8 = 784 tall
        assert_eq!(g.grid_width(), 520);
        assert_eq!(g.grid_height(), 784);
        assert_eq!(g.grid_origin(), (46, 4));
    }

    #[test]
    fn default_image_box() {
        assert_eq!(PageGeometry::default().image_box(), (248, 208));
    }

    #[test]
    fn default_caption_threshold_and_reduced_size() {
        let g = PageGeometry::default();
        assert_eq!(g.caption_max_width(), 236.0);
        assert_eq!(g.reduced_font_size(), 8.0);
    }

    #[test]
    fn validate_rejects_tile_without_image_room() {
        let g = PageGeometry {
            border: 120,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn validate_rejects_huge_border_without_overflow() {
        for border in [u32::MAX, u32::MAX / 2 + 1] {
            let g = PageGeometry {
                border,
                ..PageGeometry::default()
            };
            assert!(matches!(g.validate(), Err(ConfigError::Validation(_))));
        }
        let g = PageGeometry {
            caption_height: u32::MAX,
            caption_inset: u32::MAX,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
        let g = PageGeometry {
            column_gap: u32::MAX,
            row_gap: u32::MAX,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn validate_rejects_page_smaller_than_tile() {
        let g = PageGeometry {
            page_width: 200,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn validate_rejects_gaps_overflowing_page() {
        let g = PageGeometry {
            column_gap: 200,
            ..PageGeometry::default()
        };
        let err = g.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds page"));
    }

    #[test]
    fn validate_rejects_wrap_ratio_at_most_one() {
        let g = PageGeometry {
            wrap_ratio: 1.0,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_wrap_chars() {
        let g = PageGeometry {
            wrap_chars: 0,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_font_size() {
        let g = PageGeometry {
            font_size: 0.0,
            ..PageGeometry::default()
        };
        assert!(g.validate().is_err());
    }
}
