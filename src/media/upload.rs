/// Photo preparation for listing uploads
/// Picked files are decoded, bounded in size and re-encoded as JPEG
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::Result;

/// Longest edge kept for uploaded photos
pub const MAX_EDGE: u32 = 1600;

pub const JPEG_QUALITY: u8 = 85;

/// An encoded photo ready for object storage
#[derive(Clone)]
pub struct PreparedImage {
    /// Unique object name, e.g. "3f2c...e1.jpg"
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PreparedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedImage")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Read a picked photo from disk and encode it for upload
pub async fn prepare(path: PathBuf) -> Result<PreparedImage> {
    let raw = tokio::fs::read(&path).await?;

    let bytes = tokio::task::spawn_blocking(move || encode(&raw)).await??;

    tracing::debug!(
        source = %path.display(),
        size_kb = bytes.len() / 1024,
        "prepared photo for upload"
    );

    Ok(PreparedImage {
        file_name: format!("{}.jpg", Uuid::new_v4()),
        content_type: "image/jpeg",
        bytes,
    })
}

/// Decode any supported format, bound it to `MAX_EDGE` and write JPEG
pub fn encode(raw: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(raw)?;

    let img = if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        img.resize(MAX_EDGE, MAX_EDGE, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut out = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_with_alpha(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(width, height, Rgba([10u8, 200, 90, 128]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_oversized_photo_is_bounded() {
        let jpeg = encode(&png_with_alpha(3200, 1000)).unwrap();
        let decoded = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1600, 500));
    }

    #[test]
    fn test_small_photo_keeps_size() {
        let jpeg = encode(&png_with_alpha(300, 200)).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 200));
    }

    #[tokio::test]
    async fn test_prepare_names_objects_uniquely() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pup.png");
        std::fs::write(&path, png_with_alpha(40, 40)).unwrap();

        let a = prepare(path.clone()).await.unwrap();
        let b = prepare(path).await.unwrap();
        assert_ne!(a.file_name, b.file_name);
        assert!(a.file_name.ends_with(".jpg"));
        assert_eq!(a.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        assert!(prepare(PathBuf::from("/definitely/not/here.png")).await.is_err());
    }
}
