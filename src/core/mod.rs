//! Core types and session state.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`CompressionSession`]: caller-owned state for one compression workflow
//! - [`SourceImage`] / [`CompressedImage`]: the pipeline's in/out payloads
//! - [`Quality`]: validated JPEG quality parameter
//! - [`CompressionResult`]: size telemetry for a completed compression

mod session;
mod types;

pub use session::{CompressionSession, CompressionTicket, SessionState};
pub use types::{CompressedImage, CompressionResult, Quality, SourceId, SourceImage};
