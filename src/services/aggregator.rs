//! Aggregation - merges per-file records into folder totals
//!
//! Extraction runs on a bounded rayon pool since files are independent and
//! the extractor is the only blocking operation. `par_iter().collect()`
//! preserves input order, so records land in enumeration order without an
//! explicit reduction step. One bad file never aborts the batch.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::types::{AggregateOutcome, FolderSummary, MediaRecord};

use super::extractor::{ExtractError, MetadataExtractor};

/// Folder-level aggregator over a metadata extractor backend
pub struct Aggregator<E: MetadataExtractor> {
    extractor: E,
}

impl<E: MetadataExtractor> Aggregator<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Extract every path and fold the results into a summary
    ///
    /// Failed extractions are logged and excluded; totals are exact integer
    /// sums over the included records. Zero successes yields the explicit
    /// `Empty` marker rather than an all-zero summary.
    pub fn aggregate(&self, paths: &[PathBuf]) -> AggregateOutcome {
        let results: Vec<Result<MediaRecord, ExtractError>> = paths
            .par_iter()
            .map(|path| self.extractor.extract(path))
            .collect();

        let mut records = Vec::with_capacity(paths.len());
        let mut failed = 0usize;

        for (path, result) in paths.iter().zip(results) {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "extraction failed: {}", e);
                    failed += 1;
                }
            }
        }

        if records.is_empty() {
            return AggregateOutcome::Empty {
                attempted: paths.len(),
                failed,
            };
        }

        let total_size_bytes = records.iter().map(|r| r.file_size_bytes).sum();
        let total_duration_ms = records.iter().map(|r| r.duration_ms).sum();

        AggregateOutcome::Summary {
            summary: FolderSummary {
                total_size_bytes,
                total_duration_ms,
                records,
            },
            failed,
        }
    }
}
