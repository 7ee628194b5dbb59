//! Metadata extraction - per-file technical metadata via ffprobe
//!
//! Extraction is a capability trait so the aggregator can be tested with
//! fakes. The production backend shells out to `ffprobe` and maps its JSON
//! report into a [`MediaRecord`]. Any failure (unreadable file, no video
//! stream, corrupt container) is a per-file error; it never aborts a batch.

use std::path::Path;
use std::process::Command;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::{secs_to_millis, MediaRecord};

use super::extension_policy;

/// Metadata extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// ffprobe could not be spawned or exited nonzero
    #[error("probe failed: {0}")]
    ProbeFailed(String),

    /// Probe output was not the expected JSON shape
    #[error("probe output unparseable: {0}")]
    Parse(String),

    /// File has no video stream
    #[error("no video stream found")]
    NoVideoStream,

    /// I/O error reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file metadata extraction
pub trait MetadataExtractor: Send + Sync {
    /// Extract a record from `path`, failing per-file on any problem
    fn extract(&self, path: &Path) -> Result<MediaRecord, ExtractError>;
}

/// Extractor backed by the `ffprobe` command-line tool
///
/// The child process is reaped via `Command::output`, so its handles are
/// released on every exit path before the next file is processed.
pub struct FfprobeExtractor;

impl FfprobeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfprobeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor for FfprobeExtractor {
    fn extract(&self, path: &Path) -> Result<MediaRecord, ExtractError> {
        let fs_meta = std::fs::metadata(path)?;

        let output = Command::new("ffprobe")
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()
            .map_err(|e| ExtractError::ProbeFailed(format!("ffprobe spawn failed: {}", e)))?;

        if !output.status.success() {
            return Err(ExtractError::ProbeFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let report: serde_json::Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let format = report.get("format");

        let title = format
            .and_then(|f| f.get("tags"))
            .and_then(|t| t.get("title"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| file_stem(path));

        let duration_secs = format
            .and_then(|f| f.get("duration"))
            .and_then(|d| d.as_str())
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0);

        let date_created = format
            .and_then(|f| f.get("tags"))
            .and_then(|t| t.get("creation_time"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| mtime_rfc3339(&fs_meta));

        let video_stream = report
            .get("streams")
            .and_then(|s| s.as_array())
            .and_then(|streams| {
                streams.iter().find(|stream| {
                    stream.get("codec_type").and_then(|t| t.as_str()) == Some("video")
                })
            })
            .ok_or(ExtractError::NoVideoStream)?;

        let resolution = match (
            video_stream.get("width").and_then(|w| w.as_u64()),
            video_stream.get("height").and_then(|h| h.as_u64()),
        ) {
            (Some(w), Some(h)) => format!("{}x{}", w, h),
            _ => String::new(),
        };

        Ok(MediaRecord {
            title,
            duration_ms: secs_to_millis(duration_secs),
            date_created,
            resolution,
            file_size_bytes: fs_meta.len(),
            format: extension_policy::lowercase_extension(path)
                .map(|e| e.to_uppercase())
                .unwrap_or_default(),
        })
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_string()
}

fn mtime_rfc3339(meta: &std::fs::Metadata) -> String {
    meta.modified()
        .map(|t| DateTime::<Utc>::from(t).to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_per_file_error() {
        let extractor = FfprobeExtractor::new();
        let result = extractor.extract(Path::new("/nonexistent/movie.mp4"));
        assert!(result.is_err());
    }

    #[test]
    fn file_stem_falls_back_to_unknown() {
        assert_eq!(file_stem(Path::new("/videos/holiday.mp4")), "holiday");
        assert_eq!(file_stem(Path::new("/")), "Unknown");
    }
}
