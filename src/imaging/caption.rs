//! Caption layout: decide between a single line and a wrapped caption, and
//! place every line at a baseline.
//!
//! ## Decision Rule
//!
//! 1. Measure the caption's advance at the base font size.
//! 2. If it is within [`PageGeometry::caption_max_width`], draw one line at
//!    the standard baseline (`origin.y + caption_padding`).
//! 3. Otherwise switch to the reduced size (`font_size / wrap_ratio`), split
//!    on whitespace and pack words greedily into lines of at most
//!    `wrap_chars` characters. Each further line sits one reduced line height
//!    below the previous one.
//!
//! The wrap *trigger* is width-based but the *packing* is character-count
//! based. A single word longer than the ceiling gets a line to itself and is
//! never broken. There is no line limit: long captions run past the caption
//! band.
//!
//! Layout is pure: it returns positions and sizes and never draws. Drawing
//! lives in [`operations::draw_caption`](super::operations::draw_caption).

use super::font::TextMeasure;
use crate::config::PageGeometry;

/// One positioned caption line. `baseline` is the y of the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
}

/// Fully positioned caption for one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    /// Point size every line is drawn at.
    pub font_size: f32,
    pub wrapped: bool,
    pub lines: Vec<CaptionLine>,
}

/// Lay out `text` for a tile whose caption band starts at `origin`.
pub fn layout_caption(
    text: &str,
    origin: (u32, u32),
    geometry: &PageGeometry,
    measure: &impl TextMeasure,
) -> CaptionLayout {
    let x = origin.0 as f32;
    let first_baseline = (origin.1 + geometry.caption_padding) as f32;

    if measure.advance(text, geometry.font_size) <= geometry.caption_max_width() {
        return CaptionLayout {
            font_size: geometry.font_size,
            wrapped: false,
            lines: vec![CaptionLine {
                text: text.to_string(),
                x,
                baseline: first_baseline,
            }],
        };
    }

    let font_size = geometry.reduced_font_size();
    let line_height = measure.line_height(font_size);
    let lines = wrap_words(text, geometry.wrap_chars)
        .into_iter()
        .enumerate()
        .map(|(i, text)| CaptionLine {
            text,
            x,
            baseline: first_baseline + i as f32 * line_height,
        })
        .collect();

    CaptionLayout {
        font_size,
        wrapped: true,
        lines,
    }
}

/// Greedily pack whitespace-separated words into lines of at most
/// `max_chars` characters (counting the single space between words).
///
/// A word that alone exceeds `max_chars` occupies its own line.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }

    lines
}
