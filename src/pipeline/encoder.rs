//! Re-encodes a decoded pixel buffer as JPEG at a given quality.

use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::core::{CompressedImage, Quality, SourceImage};
use crate::utils::error::EncodeError;

/// Encodes `image` as JPEG at `quality`.
///
/// The output raster has identical dimensions to the source: quality
/// changes compression, not resolution. JPEG has no alpha channel, so the
/// RGBA buffer is flattened to RGB before encoding. The reported byte size
/// is the true length of the binary payload.
pub fn encode(image: &SourceImage, quality: Quality) -> Result<CompressedImage, EncodeError> {
    if image.width == 0 || image.height == 0 || image.pixels.is_empty() {
        return Err(EncodeError::EmptySource {
            width: image.width,
            height: image.height,
        });
    }

    let rgba: image::RgbaImage =
        image::ImageBuffer::from_raw(image.width, image.height, image.pixels.clone())
            .ok_or_else(|| EncodeError::backend("pixel buffer does not match dimensions"))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut encoded, quality.get());
    encoder
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::backend(e.to_string()))?;

    let byte_size = encoded.len() as u64;
    debug!(
        "Encoded {}x{} at quality {}: {} bytes",
        image.width,
        image.height,
        quality.get(),
        byte_size
    );

    Ok(CompressedImage {
        encoded_bytes: encoded,
        byte_size,
        width: image.width,
        height: image.height,
        quality,
    })
}
