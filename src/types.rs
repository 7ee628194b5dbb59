//! Shared data model for the discovery and aggregation pipeline

use std::path::PathBuf;

use serde::Serialize;

/// Technical metadata for one accepted media file
///
/// Produced by a [`MetadataExtractor`](crate::services::MetadataExtractor)
/// backend; immutable once produced. Serialized field names match the
/// original console-object output of the tool this replaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaRecord {
    /// Container title tag, falling back to the file stem
    pub title: String,

    /// Playback duration in milliseconds
    #[serde(rename = "DurationMillis")]
    pub duration_ms: u64,

    /// Creation timestamp (container tag, or filesystem mtime as RFC 3339)
    pub date_created: String,

    /// Video resolution as "WxH", empty when unknown
    pub resolution: String,

    /// File size in bytes
    pub file_size_bytes: u64,

    /// Uppercase file extension (e.g. "MP4")
    pub format: String,
}

/// Why a candidate path was accepted or rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    /// Extension alone is trusted
    DefinitelySupported,
    /// Ambiguous extension, signature confirmed the expected format
    SniffConfirmed,
    /// Ambiguous extension, signature absent or reported another format
    SniffRejected,
    /// Extension is not in the supported set
    ExtensionUnsupported,
}

/// Resolver verdict for a single candidate path
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateDecision {
    /// Absolute path of the candidate
    pub path: PathBuf,
    /// Whether the path is accepted as media
    pub accepted: bool,
    /// Decision rationale
    pub reason: DecisionReason,
}

impl CandidateDecision {
    pub fn accepted(path: PathBuf, reason: DecisionReason) -> Self {
        Self {
            path,
            accepted: true,
            reason,
        }
    }

    pub fn rejected(path: PathBuf, reason: DecisionReason) -> Self {
        Self {
            path,
            accepted: false,
            reason,
        }
    }
}

/// Folder-level aggregate of successfully extracted records
///
/// Invariant: `total_size_bytes` and `total_duration_ms` are the exact sums
/// over `records`. Built by the aggregator, never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FolderSummary {
    pub total_size_bytes: u64,
    #[serde(rename = "TotalDurationMillis")]
    pub total_duration_ms: u64,
    /// Records in enumeration order
    pub records: Vec<MediaRecord>,
}

/// Outcome of aggregating a batch of paths
///
/// `Empty` is distinct from a summary with all-zero totals so callers can
/// print "no media found" rather than "0 bytes total".
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateOutcome {
    /// No file produced a record
    Empty {
        /// Paths handed to the extractor
        attempted: usize,
        /// Extraction failures among them
        failed: usize,
    },
    /// At least one record succeeded
    Summary {
        summary: FolderSummary,
        /// Extraction failures excluded from the summary
        failed: usize,
    },
}

/// Convert a fractional-second duration to integer milliseconds.
///
/// Rounding rule: round half away from zero (`f64::round`). Negative or
/// non-finite inputs clamp to zero.
pub fn secs_to_millis(secs: f64) -> u64 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    (secs * 1000.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secs_to_millis_rounds_half_away_from_zero() {
        assert_eq!(secs_to_millis(5.0), 5000);
        assert_eq!(secs_to_millis(2.0004), 2000);
        assert_eq!(secs_to_millis(2.0006), 2001);
        // 0.0625s is exactly 62.5ms; the half rounds away from zero
        assert_eq!(secs_to_millis(0.0625), 63);
    }

    #[test]
    fn secs_to_millis_clamps_invalid_input() {
        assert_eq!(secs_to_millis(0.0), 0);
        assert_eq!(secs_to_millis(-3.5), 0);
        assert_eq!(secs_to_millis(f64::NAN), 0);
        assert_eq!(secs_to_millis(f64::INFINITY), 0);
    }

    #[test]
    fn record_serializes_with_original_field_names() {
        let record = MediaRecord {
            title: "Clip".to_string(),
            duration_ms: 5000,
            date_created: "2024-01-01T00:00:00Z".to_string(),
            resolution: "1920x1080".to_string(),
            file_size_bytes: 1000,
            format: "MP4".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Title"], "Clip");
        assert_eq!(json["DurationMillis"], 5000);
        assert_eq!(json["DateCreated"], "2024-01-01T00:00:00Z");
        assert_eq!(json["Resolution"], "1920x1080");
        assert_eq!(json["FileSizeBytes"], 1000);
        assert_eq!(json["Format"], "MP4");
    }
}
