use image::imageops::FilterType;
use std::path::PathBuf;
use url::Url;

use crate::error::{Error, Result};

/// Long edge of generated thumbnails in pixels
pub const THUMBNAIL_SIZE: u32 = 480;

/// Decoded RGBA pixels ready to hand to the renderer
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Fetch the image behind `uri` and shrink it to a thumbnail.
///
/// `uri` may be an http(s) URL, a `file://` URL or a plain path.
pub async fn load(http: &reqwest::Client, uri: &str) -> Result<Thumbnail> {
    let bytes = read_source(http, uri).await?;

    // Decoding is CPU-bound; keep it off the async workers
    tokio::task::spawn_blocking(move || decode(&bytes, THUMBNAIL_SIZE)).await?
}

/// Decode image bytes and fit them inside a `size` x `size` box
pub fn decode(bytes: &[u8], size: u32) -> Result<Thumbnail> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

async fn read_source(http: &reqwest::Client, uri: &str) -> Result<Vec<u8>> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let response = http.get(uri).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_response_body(status.as_u16(), &body));
        }
        return Ok(response.bytes().await?.to_vec());
    }

    let path = local_path(uri)?;
    Ok(tokio::fs::read(path).await?)
}

/// Resolve a `file://` URL or bare path to a filesystem path
pub fn local_path(uri: &str) -> Result<PathBuf> {
    if uri.starts_with("file://") {
        let url = Url::parse(uri).map_err(|e| Error::Config(format!("bad image uri {uri}: {e}")))?;
        return url
            .to_file_path()
            .map_err(|_| Error::Config(format!("not a local file uri: {uri}")));
    }
    Ok(PathBuf::from(uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(width, height, Rgb([200u8, 120, 40]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_large_image_is_fitted() {
        let thumb = decode(&png(1200, 600), THUMBNAIL_SIZE).unwrap();
        assert_eq!((thumb.width, thumb.height), (480, 240));
        assert_eq!(thumb.rgba.len(), (480 * 240 * 4) as usize);
    }

    #[test]
    fn test_small_image_is_kept() {
        let thumb = decode(&png(64, 32), THUMBNAIL_SIZE).unwrap();
        assert_eq!((thumb.width, thumb.height), (64, 32));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(matches!(decode(b"not an image", 64), Err(Error::Image(_))));
    }

    #[test]
    fn test_local_paths() {
        assert_eq!(local_path("/tmp/a.jpg").unwrap(), PathBuf::from("/tmp/a.jpg"));
        #[cfg(unix)]
        assert_eq!(
            local_path("file:///tmp/b%20c.jpg").unwrap(),
            PathBuf::from("/tmp/b c.jpg")
        );
    }
}
