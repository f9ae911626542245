//! CLI output formatting.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Collect
//!
//! ```text
//! Images
//! 001 dawn
//!     Source: trips/dawn.jpg
//! 002 harbour at night
//!     Source: harbour at night.png
//! ```
//!
//! ## Render
//!
//! ```text
//! Page 0
//!     001 dawn
//!     002 harbour at night (wrapped, 2 lines)
//!     → board-0.png (2 tiles)
//!
//! Wrote 1 page, 2 tiles (1 wrapped caption)
//! ```

use crate::collect::ImageEntry;
use crate::render::{PageReport, RenderSummary};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralize `word` for `n` by appending `s`.
fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Path relative to `root` when possible, for compact `Source:` lines.
fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Format the collected image list in tile order.
pub fn format_collect_output(entries: &[ImageEntry], root: &Path) -> Vec<String> {
    let mut lines = vec!["Images".to_string()];
    if entries.is_empty() {
        lines.push("    (no images found)".to_string());
        return lines;
    }
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.caption));
        lines.push(format!("    Source: {}", relative_display(&entry.path, root)));
    }
    lines
}

pub fn print_collect_output(entries: &[ImageEntry], root: &Path) {
    for line in format_collect_output(entries, root) {
        println!("{}", line);
    }
}

/// Format one written page: header, one line per tile, then the file.
pub fn format_page_report(report: &PageReport) -> Vec<String> {
    let mut lines = vec![format!("Page {}", report.page)];
    for tile in &report.tiles {
        let detail = if tile.wrapped {
            format!(" (wrapped, {})", plural(tile.caption_lines, "line"))
        } else {
            String::new()
        };
        lines.push(format!(
            "    {} {}{}",
            format_index(tile.index + 1),
            tile.caption,
            detail
        ));
    }
    let name = report
        .path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string());
    lines.push(format!(
        "    \u{2192} {} ({})",
        name,
        plural(report.tiles.len(), "tile")
    ));
    lines
}

/// Format the closing summary line.
pub fn format_render_summary(summary: &RenderSummary) -> Vec<String> {
    let mut line = format!(
        "Wrote {}, {}",
        plural(summary.pages.len(), "page"),
        plural(summary.tiles, "tile")
    );
    if summary.wrapped_captions > 0 {
        line.push_str(&format!(
            " ({})",
            plural(summary.wrapped_captions, "wrapped caption")
        ));
    }
    vec![line]
}

pub fn print_render_summary(summary: &RenderSummary) {
    for line in format_render_summary(summary) {
        println!("{}", line);
    }
}
