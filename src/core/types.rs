//! Core types for the compression pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

use crate::utils::error::EncodeError;
use crate::utils::formats::SourceFormat;

/// Process-unique identity of a loaded source image.
///
/// Every successful load gets a fresh id; pending compression results are
/// committed only when their id still matches the session's current source,
/// so a stale completion can never overwrite state for a newer image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceId(u64);

impl SourceId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Validated JPEG quality level.
///
/// Range is [1, 100]; out-of-range values are rejected at construction
/// rather than clamped, so a caller contract violation is always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Initial slider value in the original UI.
    pub const DEFAULT: Self = Self(80);

    pub fn new(value: u8) -> Result<Self, EncodeError> {
        if (1..=100).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EncodeError::InvalidQuality(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Quality {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

/// A decoded source image plus the original file bytes.
///
/// Immutable once created; replaced wholesale when a new file is loaded.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Identity used for stale-result detection
    pub id: SourceId,
    /// The original file bytes as received
    pub raw_bytes: Vec<u8>,
    /// Length of `raw_bytes`; this is the size shown as "original"
    pub byte_size: u64,
    /// Detected input format
    pub format: SourceFormat,
    /// Decoded width in pixels
    pub width: u32,
    /// Decoded height in pixels
    pub height: u32,
    /// Decoded RGBA8 pixel data, row-major
    pub pixels: Vec<u8>,
}

/// A JPEG re-encoding of a [`SourceImage`].
///
/// Derived deterministically from a (source, quality) pair; recomputed on
/// every encode request, never mutated in place.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// The JPEG payload
    pub encoded_bytes: Vec<u8>,
    /// True binary length of `encoded_bytes`
    pub byte_size: u64,
    /// Output width; always equals the source width
    pub width: u32,
    /// Output height; always equals the source height
    pub height: u32,
    /// Quality the payload was encoded at
    pub quality: Quality,
}

/// Size telemetry for a completed compression, as surfaced to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    /// Original file size in bytes
    pub original_size: u64,
    /// Compressed payload size in bytes
    pub compressed_size: u64,
    /// Image dimensions (identical for source and output)
    pub width: u32,
    pub height: u32,
    /// Quality the result was encoded at
    pub quality: u8,
    /// Bytes saved (negative if the file grew)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Relative shrinkage as a percentage; negative values are surfaced
    #[serde(rename = "reductionPercent")]
    pub reduction_percent: f64,
}
