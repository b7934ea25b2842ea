//! Async driver for the compression pipeline.
//!
//! Decode and encode are CPU-bound, so each runs inside a
//! `tokio::task::spawn_blocking` call and the caller's event loop is never
//! blocked. Staleness is handled by the session at commit time, not here:
//! this driver always returns the ticket alongside the result so the caller
//! routes every completion through [`CompressionSession::commit`].
//!
//! [`CompressionSession::commit`]: crate::core::CompressionSession::commit

use tracing::warn;

use crate::core::{CompressedImage, CompressionTicket, SourceImage};
use crate::pipeline::{encoder, loader};
use crate::utils::error::{CompressorError, CompressorResult, DecodeError, EncodeError};

/// Runs pipeline stages off the async runtime's worker threads.
#[derive(Debug, Default, Clone)]
pub struct Compressor;

impl Compressor {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `bytes` on a blocking thread.
    pub async fn load(&self, bytes: Vec<u8>) -> CompressorResult<SourceImage> {
        let result = tokio::task::spawn_blocking(move || loader::load(bytes))
            .await
            .map_err(|e| {
                warn!("Decode task panicked: {e}");
                CompressorError::Decode(DecodeError::corrupt(format!("decode task failed: {e}")))
            })?;
        Ok(result?)
    }

    /// Encodes the ticket's source on a blocking thread.
    ///
    /// The ticket is handed back with the result so the caller can commit
    /// through the session's stale-result check.
    pub async fn execute(
        &self,
        ticket: CompressionTicket,
    ) -> (CompressionTicket, CompressorResult<CompressedImage>) {
        let source = ticket.source().clone();
        let quality = ticket.quality();

        let joined = tokio::task::spawn_blocking(move || encoder::encode(&source, quality)).await;

        let result = match joined {
            Ok(Ok(compressed)) => Ok(compressed),
            Ok(Err(e)) => {
                warn!("Encode failed for {:?}: {e}", ticket.source_id());
                Err(CompressorError::Encode(e))
            }
            Err(e) => {
                warn!("Encode task panicked: {e}");
                Err(CompressorError::Encode(EncodeError::backend(format!(
                    "encode task failed: {e}"
                ))))
            }
        };

        (ticket, result)
    }
}
