//! Decodes raw file bytes into a [`SourceImage`].

use tracing::debug;

use crate::core::{SourceId, SourceImage};
use crate::utils::error::DecodeError;
use crate::utils::formats::SourceFormat;

/// Decodes `bytes` as a raster image.
///
/// The reported `byte_size` is always the length of the original blob, not
/// of any intermediate representation. No dimension or size limits are
/// enforced beyond a successful decode. Pure: on failure the caller's state
/// is untouched because nothing here is shared.
pub fn load(bytes: Vec<u8>) -> Result<SourceImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let detected = image::guess_format(&bytes).map_err(|_| DecodeError::UnknownFormat)?;
    let format = SourceFormat::from_detected(detected).ok_or(DecodeError::UnknownFormat)?;

    let decoded = image::load_from_memory_with_format(&bytes, detected)
        .map_err(|e| DecodeError::corrupt(e.to_string()))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    debug!(
        "Decoded {} source: {}x{} from {} bytes",
        format.mime_type(),
        width,
        height,
        bytes.len()
    );

    Ok(SourceImage {
        id: SourceId::next(),
        byte_size: bytes.len() as u64,
        raw_bytes: bytes,
        format,
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
