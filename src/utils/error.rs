//! Error types for the image compressor.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Errors produced while decoding a source file into a pixel buffer.
#[derive(Error, Debug, Serialize)]
pub enum DecodeError {
    /// Input blob was empty
    #[error("Input is empty")]
    EmptyInput,
    /// Bytes did not match any accepted raster image format
    #[error("Unrecognised image format")]
    UnknownFormat,
    /// Format was recognised but the data could not be decoded
    #[error("Decode failed: {0}")]
    Corrupt(String),
}

/// Errors produced while re-encoding a pixel buffer as JPEG.
#[derive(Error, Debug, Serialize)]
pub enum EncodeError {
    /// Quality outside the accepted [1, 100] range
    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),
    /// Source buffer has a zero dimension or no pixel data
    #[error("Source has no pixels ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
    /// The JPEG backend rejected the encode
    #[error("JPEG encode failed: {0}")]
    Backend(String),
}

/// Main error type for the compressor.
///
/// All errors in the pipeline are converted to this type before being
/// returned to the caller.
#[derive(Error, Debug, Serialize)]
pub enum CompressorError {
    /// Source file could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Re-encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// No source image is loaded for the requested operation
    #[error("No source image loaded")]
    NoSource,

    /// File IO error (download path)
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for compressor operations.
pub type CompressorResult<T> = Result<T, CompressorError>;

// Helper methods for error creation
impl DecodeError {
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }
}

impl EncodeError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

// Convert std::io::Error to CompressorError
impl From<io::Error> for CompressorError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
