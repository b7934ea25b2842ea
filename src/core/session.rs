//! Session state for a single compression workflow.
//!
//! The original UI held its state in scattered component variables; here it
//! is an explicit object owned by the caller. Lifecycle is linear:
//! `Empty → Loaded → Compressed → (Loaded | Empty)` on a new file or reset.

use std::sync::Arc;
use tracing::debug;

use crate::core::types::{CompressedImage, CompressionResult, Quality, SourceId, SourceImage};
use crate::pipeline::{estimator, loader};
use crate::utils::{CompressorError, CompressorResult};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
    Compressed,
}

/// Snapshot of a compression request.
///
/// Carries the source it was issued against and a request sequence number;
/// both are checked at commit time so stale or superseded results are
/// discarded deterministically.
#[derive(Debug, Clone)]
pub struct CompressionTicket {
    source: Arc<SourceImage>,
    quality: Quality,
    seq: u64,
}

impl CompressionTicket {
    pub fn source(&self) -> &Arc<SourceImage> {
        &self.source
    }

    pub fn source_id(&self) -> SourceId {
        self.source.id
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }
}

/// Holds the current source image and its latest committed compression.
///
/// All pipeline operations are pure; the session is the only place state
/// lives, and it is single-owner — callers needing cross-thread access wrap
/// it in a lock of their choosing.
#[derive(Debug, Default)]
pub struct CompressionSession {
    source: Option<Arc<SourceImage>>,
    compressed: Option<CompressedImage>,
    /// Sequence of the most recently issued compression request
    next_seq: u64,
    /// Sequence of the request whose result is currently committed
    committed_seq: u64,
}

impl CompressionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new source image from raw file bytes.
    ///
    /// On success the previous source and any compressed result are
    /// discarded, and outstanding tickets become stale. On failure the
    /// session is left exactly as it was.
    pub fn load(&mut self, bytes: Vec<u8>) -> CompressorResult<SourceId> {
        let source = loader::load(bytes)?;
        Ok(self.install(source))
    }

    /// Adopts an already-decoded source image, e.g. one produced off-thread
    /// by [`Compressor::load`].
    ///
    /// Replaces the current source exactly as [`Self::load`] does: the
    /// compressed result is cleared and outstanding tickets become stale.
    ///
    /// [`Compressor::load`]: crate::pipeline::Compressor::load
    pub fn install(&mut self, source: SourceImage) -> SourceId {
        let id = source.id;

        debug!(
            "Session loaded source {:?}: {}x{}, {} bytes",
            id, source.width, source.height, source.byte_size
        );

        self.source = Some(Arc::new(source));
        // A compressed image must never outlive the source it was computed
        // from, and results still in flight for the old source are void.
        self.compressed = None;
        self.committed_seq = self.next_seq;
        id
    }

    /// Issues a ticket for compressing the current source at `quality`.
    ///
    /// Each call supersedes earlier tickets at issue time: once a newer
    /// ticket exists, older ones can never commit, even if the newer request
    /// fails or its result never arrives (last-write-wins).
    pub fn begin_compress(&mut self, quality: Quality) -> CompressorResult<CompressionTicket> {
        let source = self.source.clone().ok_or(CompressorError::NoSource)?;
        // Void every earlier outstanding ticket before issuing the new one.
        self.committed_seq = self.next_seq;
        self.next_seq += 1;
        Ok(CompressionTicket {
            source,
            quality,
            seq: self.next_seq,
        })
    }

    /// Commits a finished compression if its ticket is still current.
    ///
    /// Returns `false` (and drops `compressed`) when the source changed
    /// since the ticket was issued or a newer request already committed.
    pub fn commit(&mut self, ticket: &CompressionTicket, compressed: CompressedImage) -> bool {
        let current = match &self.source {
            Some(source) => source.id,
            None => {
                debug!("Discarding result {:?}: session was reset", ticket.source_id());
                return false;
            }
        };

        if ticket.source_id() != current {
            debug!(
                "Discarding stale result for {:?} (current source is {:?})",
                ticket.source_id(),
                current
            );
            return false;
        }

        if ticket.seq <= self.committed_seq {
            debug!("Discarding superseded result (seq {})", ticket.seq);
            return false;
        }

        debug!(
            "Committed compression for {:?}: {} -> {} bytes",
            current,
            ticket.source.byte_size,
            compressed.byte_size
        );
        self.compressed = Some(compressed);
        self.committed_seq = ticket.seq;
        true
    }

    /// Clears all state, returning the session to `Empty`.
    pub fn reset(&mut self) {
        self.source = None;
        self.compressed = None;
        self.committed_seq = self.next_seq;
    }

    pub fn state(&self) -> SessionState {
        match (&self.source, &self.compressed) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Loaded,
            (Some(_), Some(_)) => SessionState::Compressed,
        }
    }

    pub fn source(&self) -> Option<&Arc<SourceImage>> {
        self.source.as_ref()
    }

    pub fn compressed(&self) -> Option<&CompressedImage> {
        self.compressed.as_ref()
    }

    /// Size telemetry for the committed result, if any.
    pub fn result(&self) -> Option<CompressionResult> {
        match (&self.source, &self.compressed) {
            (Some(source), Some(compressed)) => Some(estimator::build_result(source, compressed)),
            _ => None,
        }
    }
}
