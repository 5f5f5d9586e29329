//! Product image normalization.
//!
//! Uploads arrive as arbitrary encoded images and leave as small JPEG data
//! URIs that fit comfortably inside a store row. Both dimensions are capped;
//! aspect ratio is preserved; images already within bounds are still
//! re-encoded so every stored image shares the same format and quality.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use thiserror::Error;
use tracing::instrument;

/// Longest allowed edge, in pixels.
const MAX_DIMENSION: u32 = 800;

/// JPEG quality for the re-encode.
const JPEG_QUALITY: u8 = 70;

/// Errors that can occur while normalizing an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The input bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// The resized image could not be re-encoded.
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    /// The background task running the pixel work was cancelled.
    #[error("image task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Normalize one image off the async runtime's worker threads.
///
/// # Errors
///
/// Returns [`ImageError::Decode`] for bytes that are not an image.
#[instrument(skip(bytes), fields(input_len = bytes.len()))]
pub async fn normalize(bytes: Vec<u8>) -> Result<String, ImageError> {
    tokio::task::spawn_blocking(move || normalize_blocking(&bytes)).await?
}

/// Normalize a batch, preserving input order.
///
/// Each file is handled independently: one undecodable upload yields an
/// `Err` in its slot without aborting its siblings, so the caller can keep
/// the good images and surface only the failing ones.
pub async fn normalize_batch(images: Vec<Vec<u8>>) -> Vec<Result<String, ImageError>> {
    futures::future::join_all(images.into_iter().map(normalize)).await
}

/// Synchronous core: decode, scale to fit, re-encode as a JPEG data URI.
fn normalize_blocking(bytes: &[u8]) -> Result<String, ImageError> {
    let decoded = image::load_from_memory(bytes).map_err(ImageError::Decode)?;

    let (width, height) = (decoded.width(), decoded.height());
    let scaled = if width > MAX_DIMENSION || height > MAX_DIMENSION {
        decoded.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle)
    } else {
        decoded
    };

    // Flatten to RGB; JPEG has no alpha channel.
    let rgb = scaled.to_rgb8();
    let mut jpeg = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY))
        .map_err(ImageError::Encode)?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([120, 30, 200]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn decode_data_uri(uri: &str) -> image::DynamicImage {
        let b64 = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        image::load_from_memory(&BASE64.decode(b64).unwrap()).unwrap()
    }

    #[test]
    fn test_oversized_image_scales_to_fit() {
        let uri = normalize_blocking(&png_bytes(2000, 1000)).unwrap();
        let out = decode_data_uri(&uri);
        assert_eq!((out.width(), out.height()), (800, 400));
    }

    #[test]
    fn test_tall_image_caps_height() {
        let uri = normalize_blocking(&png_bytes(500, 1600)).unwrap();
        let out = decode_data_uri(&uri);
        assert_eq!((out.width(), out.height()), (250, 800));
    }

    #[test]
    fn test_small_image_keeps_dimensions() {
        let uri = normalize_blocking(&png_bytes(400, 300)).unwrap();
        let out = decode_data_uri(&uri);
        assert_eq!((out.width(), out.height()), (400, 300));
    }

    #[test]
    fn test_garbage_input_is_a_decode_error() {
        let err = normalize_blocking(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_isolates_failures() {
        let results = normalize_batch(vec![
            png_bytes(1600, 800),
            b"broken upload".to_vec(),
            png_bytes(100, 100),
        ])
        .await;
        assert_eq!(results.len(), 3);

        let first = decode_data_uri(results[0].as_ref().unwrap());
        assert_eq!((first.width(), first.height()), (800, 400));

        assert!(matches!(results[1], Err(ImageError::Decode(_))));

        let third = decode_data_uri(results[2].as_ref().unwrap());
        assert_eq!((third.width(), third.height()), (100, 100));
    }
}
