//! Bundled caption font and text measurement.
//!
//! Captions are rendered with DejaVu Sans, compiled into the binary so the
//! tool has no runtime font lookup. Sizes are given in points and converted
//! to pixels at the geometry's DPI; every call takes its size explicitly, so
//! there is no "current size" to save and restore.

use ab_glyph::{Font, FontRef, GlyphId, InvalidFont, PxScale, ScaleFont};
use thiserror::Error;

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Invalid caption font: {0}")]
    Invalid(#[from] InvalidFont),
}

/// Horizontal and vertical text metrics at an explicit point size.
///
/// Caption layout only needs these three numbers, which keeps it testable
/// with a fixed-width fake.
pub trait TextMeasure {
    /// Rendered advance width of `text`, in pixels.
    fn advance(&self, text: &str, size_pt: f32) -> f32;

    /// Baseline-to-baseline distance, in pixels.
    fn line_height(&self, size_pt: f32) -> f32;

    /// Distance from the top of a line box to its baseline, in pixels.
    fn ascent(&self, size_pt: f32) -> f32;
}

/// The bundled caption font plus the DPI its point sizes are rendered at.
#[derive(Clone)]
pub struct CaptionFont {
    font: FontRef<'static>,
    dpi: f32,
}

impl CaptionFont {
    /// Parse the bundled font.
    pub fn load(dpi: f32) -> Result<Self, FontError> {
        Self::from_bytes(DEJAVU_SANS, dpi)
    }

    pub fn from_bytes(data: &'static [u8], dpi: f32) -> Result<Self, FontError> {
        Ok(Self {
            font: FontRef::try_from_slice(data)?,
            dpi,
        })
    }

    pub fn font(&self) -> &FontRef<'static> {
        &self.font
    }

    /// Pixel scale for a point size: the em square is `size_pt * dpi / 72` pixels.
    pub fn scale(&self, size_pt: f32) -> PxScale {
        let em_px = size_pt * self.dpi / 72.0;
        self.font
            .pt_to_px_scale(em_px)
            .unwrap_or_else(|| PxScale::from(em_px))
    }
}

impl TextMeasure for CaptionFont {
    fn advance(&self, text: &str, size_pt: f32) -> f32 {
        let scaled = self.font.as_scaled(self.scale(size_pt));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    fn line_height(&self, size_pt: f32) -> f32 {
        let scaled = self.font.as_scaled(self.scale(size_pt));
        scaled.height() + scaled.line_gap()
    }

    fn ascent(&self, size_pt: f32) -> f32 {
        self.font.as_scaled(self.scale(size_pt)).ascent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_font_loads() {
        assert!(CaptionFont::load(72.0).is_ok());
    }

    #[test]
    fn garbage_font_is_rejected() {
        static NOT_A_FONT: &[u8] = b"this is not a font";
        let result = CaptionFont::from_bytes(NOT_A_FONT, 72.0);
        assert!(matches!(result, Err(FontError::Invalid(_))));
    }

    #[test]
    fn empty_text_has_no_advance() {
        let font = CaptionFont::load(72.0).unwrap();
        assert_eq!(font.advance("", 12.0), 0.0);
    }

    #[test]
    fn advance_grows_with_text_and_size() {
        let font = CaptionFont::load(72.0).unwrap();
        let short = font.advance("dawn", 12.0);
        let long = font.advance("dawn over the harbour", 12.0);
        assert!(short > 0.0);
        assert!(long > short);
        assert!(font.advance("dawn", 8.0) < short);
    }

    #[test]
    fn advance_scales_with_dpi() {
        let at_72 = CaptionFont::load(72.0).unwrap().advance("caption", 12.0);
        let at_144 = CaptionFont::load(144.0).unwrap().advance("caption", 12.0);
        assert!((at_144 - 2.0 * at_72).abs() < 0.5);
    }

    #[test]
    fn line_height_exceeds_ascent() {
        let font = CaptionFont::load(72.0).unwrap();
        assert!(font.line_height(8.0) > font.ascent(8.0));
        assert!(font.line_height(12.0) > font.line_height(8.0));
    }
}
