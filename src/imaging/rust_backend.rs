//! Pure Rust I/O backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF) | `image::ImageReader` (format sniffed from content, extension as fallback) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (lossless) |

use super::backend::{BackendError, SheetBackend};
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageReader, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Extensions collected as source images. Matched case-sensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Backend using the `image` crate's built-in decoders and PNG encoder.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn encode(&self, canvas: &RgbaImage, path: &Path) -> Result<(), BackendError> {
        let file = std::fs::File::create(path).map_err(BackendError::Io)?;
        let mut writer = BufWriter::new(file);
        canvas
            .write_with_encoder(PngEncoder::new(&mut writer))
            .map_err(|e| BackendError::Encode {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        // A page can sit entirely in the buffer; its write error only shows here
        writer.flush().map_err(BackendError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{write_jpeg, write_png};
    use image::Rgba;

    #[test]
    fn decode_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        write_png(&path, 40, 30);

        let img = RustBackend::new().decode(&path).unwrap();
        assert_eq!((img.width(), img.height()), (40, 30));
    }

    #[test]
    fn decode_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        write_jpeg(&path, 64, 48);

        let img = RustBackend::new().decode(&path).unwrap();
        assert_eq!((img.width(), img.height()), (64, 48));
    }

    #[test]
    fn decode_sniffs_format_from_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-a-png.jpg");
        write_png(&path, 12, 9);

        let img = RustBackend::new().decode(&path).unwrap();
        assert_eq!((img.width(), img.height()), (12, 9));
    }

    #[test]
    fn decode_nonexistent_file_errors() {
        let result = RustBackend::new().decode(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn decode_garbage_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = RustBackend::new().decode(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn encode_then_decode_is_lossless() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("board-0.png");
        let canvas = RgbaImage::from_fn(61, 79, |x, y| {
            Rgba([(x * 4) as u8, (y * 3) as u8, ((x + y) % 256) as u8, 255])
        });

        let backend = RustBackend::new();
        backend.encode(&canvas, &path).unwrap();
        let decoded = backend.decode(&path).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), canvas.dimensions());
        assert_eq!(decoded.as_raw(), canvas.as_raw());
    }

    #[test]
    fn encode_into_missing_directory_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("board-0.png");

        let result = RustBackend::new().encode(&RgbaImage::new(2, 2), &path);
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn encode_reports_write_failure() {
        let result = RustBackend::new().encode(&RgbaImage::new(4, 4), Path::new("/dev/full"));
        assert!(matches!(result, Err(BackendError::Io(_))), "{result:?}");
    }
}
