use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::utils::error::DecodeError;

/// File name used for the downloadable output.
pub const DOWNLOAD_FILE_NAME: &str = "compressed-image.jpg";

/// Raster formats accepted as compression sources.
///
/// The output side is always JPEG; this only constrains what the loader
/// will decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    JPEG,
    PNG,
    WebP,
    GIF,
    BMP,
    TIFF,
}

impl SourceFormat {
    /// Get the MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::JPEG => "image/jpeg",
            Self::PNG => "image/png",
            Self::WebP => "image/webp",
            Self::GIF => "image/gif",
            Self::BMP => "image/bmp",
            Self::TIFF => "image/tiff",
        }
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
            Self::GIF => &["gif"],
            Self::BMP => &["bmp"],
            Self::TIFF => &["tif", "tiff"],
        }
    }

    /// Map from the decoder's detected format, if it is one we accept.
    pub fn from_detected(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::JPEG),
            image::ImageFormat::Png => Some(Self::PNG),
            image::ImageFormat::WebP => Some(Self::WebP),
            image::ImageFormat::Gif => Some(Self::GIF),
            image::ImageFormat::Bmp => Some(Self::BMP),
            image::ImageFormat::Tiff => Some(Self::TIFF),
            _ => None,
        }
    }
}

impl FromStr for SourceFormat {
    type Err = DecodeError;

    fn from_str(mime: &str) -> Result<Self, Self::Err> {
        match mime.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(Self::JPEG),
            "image/png" => Ok(Self::PNG),
            "image/webp" => Ok(Self::WebP),
            "image/gif" => Ok(Self::GIF),
            "image/bmp" => Ok(Self::BMP),
            "image/tiff" => Ok(Self::TIFF),
            _ => Err(DecodeError::UnknownFormat),
        }
    }
}

/// Formats a byte count as a human-readable magnitude.
///
/// Base 1024, two decimal places: `1536` → `"1.50 KB"`. Matches what the
/// size telemetry shows next to the original and compressed images.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{:.2} {}", value, UNITS[exponent as usize])
}
