//! Image discovery.
//!
//! Walks the input directory recursively and returns every file whose
//! extension is one of the supported image types, in traversal order. That
//! order is the order tiles appear on the pages.
//!
//! ## Rules
//!
//! - Extensions are matched case-sensitively: `a.png` is collected, `a.PNG` is not.
//! - Directories are descended into, never collected.
//! - Siblings are visited sorted by file name, so repeated runs over the same
//!   tree give the same page layout.
//! - Any traversal error (permissions, vanished entries) aborts collection.
//!
//! Each entry carries its caption: the file name with its extension removed.
//!
//! ```text
//! photos/
//! ├── b.jpg           → 2nd tile, caption "b"
//! ├── a.png           → 1st tile, caption "a"
//! ├── notes.txt       (ignored)
//! └── trip/
//!     └── beach day.gif → 3rd tile, caption "beach day"
//! ```

use crate::imaging::rust_backend::SUPPORTED_EXTENSIONS;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Input is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A source image and the caption drawn under its tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub caption: String,
}

impl ImageEntry {
    pub fn from_path(path: PathBuf) -> Self {
        let caption = caption_for(&path);
        Self { path, caption }
    }
}

/// Caption text for a file: its name without the final extension.
pub fn caption_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Whether the file's extension is one of the supported image types.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e))
}

/// Collect all supported images under `root`, recursively.
pub fn collect(root: &Path) -> Result<Vec<ImageEntry>, CollectError> {
    if !root.is_dir() {
        return Err(CollectError::NotADirectory(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.into_path();
        if is_supported_image(&path) {
            entries.push(ImageEntry::from_path(path));
        }
    }

    Ok(entries)
}
