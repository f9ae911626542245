//! Image I/O backend trait and shared types.
//!
//! The [`SheetBackend`] trait covers the two operations that touch the
//! filesystem: decoding a source image and encoding a finished page. Layout
//! and drawing never go through the backend, so the compositor can be tested
//! against a mock that serves synthetic images and records what was written.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use image::{DynamicImage, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("Failed to encode {path}: {message}")]
    Encode { path: String, message: String },
}

/// Trait for image I/O backends.
pub trait SheetBackend: Sync {
    /// Read and decode a source image.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode a finished page canvas losslessly and write it to `path`.
    fn encode(&self, canvas: &RgbaImage, path: &Path) -> Result<(), BackendError>;
}
