//! Size accounting for compression results.

use crate::core::{CompressedImage, CompressionResult, SourceImage};
use crate::utils::formats::format_bytes;

/// Reduction percentage above which the telemetry shows a badge.
pub const BADGE_THRESHOLD_PERCENT: f64 = 5.0;

/// Computes the relative shrinkage of `compressed` versus `original` bytes.
///
/// Returns 0.0 for a zero-byte original (degenerate input, not an error).
/// Negative values mean the "compressed" file grew and are returned as-is,
/// never clamped.
pub fn estimate_reduction(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}

/// Assembles the telemetry for a (source, compressed) pair.
pub fn build_result(source: &SourceImage, compressed: &CompressedImage) -> CompressionResult {
    CompressionResult {
        original_size: source.byte_size,
        compressed_size: compressed.byte_size,
        width: compressed.width,
        height: compressed.height,
        quality: compressed.quality.get(),
        saved_bytes: source.byte_size as i64 - compressed.byte_size as i64,
        reduction_percent: estimate_reduction(source.byte_size, compressed.byte_size),
    }
}

impl CompressionResult {
    /// Whether the reduction badge should be shown (strictly above 5%).
    pub fn shows_badge(&self) -> bool {
        self.reduction_percent > BADGE_THRESHOLD_PERCENT
    }

    /// Display payload for a UI layer: formatted sizes plus the badge text
    /// when the reduction clears the threshold.
    pub fn display_payload(&self) -> serde_json::Value {
        let badge = self
            .shows_badge()
            .then(|| format!("{:.0}% smaller", self.reduction_percent));

        serde_json::json!({
            "originalSize": format_bytes(self.original_size),
            "compressedSize": format_bytes(self.compressed_size),
            "quality": self.quality,
            "reductionPercent": self.reduction_percent,
            "reductionBadge": badge,
        })
    }
}
