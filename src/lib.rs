//! Client-side image compression core.
//!
//! One pipeline, three pure stages: [`pipeline::load`] decodes file bytes
//! into a pixel buffer, [`pipeline::encode`] re-encodes it as JPEG at a
//! chosen [`Quality`], and [`pipeline::estimate_reduction`] reports the size
//! reduction. [`CompressionSession`] holds the caller's state across those
//! stages and discards stale results deterministically.

// Module declarations in dependency order
pub mod core;
pub mod pipeline;
pub mod utils;

#[cfg(test)]
mod testutil;

// Public exports for external consumers
pub use crate::core::{
    CompressedImage, CompressionResult, CompressionSession, CompressionTicket, Quality,
    SessionState, SourceId, SourceImage,
};
pub use crate::pipeline::{Compressor, estimate_reduction};
pub use crate::utils::{
    CompressorError, CompressorResult, DecodeError, EncodeError, SourceFormat, format_bytes,
    write_download, DOWNLOAD_FILE_NAME,
};
