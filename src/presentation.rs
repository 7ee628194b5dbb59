//! Human-readable rendering of records and summaries
//!
//! Thin formatting layer over the data model; no decision logic lives
//! here. Durations render as H:MM:SS, sizes with binary-prefix units.

use crate::types::{AggregateOutcome, FolderSummary, MediaRecord};

/// Format integer milliseconds as H:MM:SS (truncating sub-second remainder)
pub fn format_duration_ms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}:{:02}", hours, mins, secs)
}

/// Format a byte count with binary-prefix units
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;

    if bytes >= GIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Render one record as a key/value block (single-file mode)
pub fn render_record(record: &MediaRecord) -> String {
    format!(
        "Title:      {}\n\
         Format:     {}\n\
         Resolution: {}\n\
         Duration:   {}\n\
         Created:    {}\n\
         Size:       {}",
        record.title,
        record.format,
        record.resolution,
        format_duration_ms(record.duration_ms),
        record.date_created,
        format_size(record.file_size_bytes),
    )
}

/// Render a folder outcome as a table plus totals line
pub fn render_outcome(outcome: &AggregateOutcome) -> String {
    match outcome {
        AggregateOutcome::Empty { attempted, failed } => {
            let mut line = "No media files found.".to_string();
            if *failed > 0 {
                line.push_str(&format!(
                    " ({} of {} candidate files could not be read)",
                    failed, attempted
                ));
            }
            line
        }
        AggregateOutcome::Summary { summary, failed } => render_summary(summary, *failed),
    }
}

fn render_summary(summary: &FolderSummary, failed: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<40} {:<6} {:<11} {:<9} {:<26} {:>10}\n",
        "Title", "Format", "Resolution", "Duration", "Created", "Size"
    ));

    for record in &summary.records {
        out.push_str(&format!(
            "{:<40} {:<6} {:<11} {:<9} {:<26} {:>10}\n",
            truncate(&record.title, 40),
            record.format,
            record.resolution,
            format_duration_ms(record.duration_ms),
            truncate(&record.date_created, 26),
            format_size(record.file_size_bytes),
        ));
    }

    out.push_str(&format!(
        "\n{} file{}, total duration {}, total size {}",
        summary.records.len(),
        if summary.records.len() == 1 { "" } else { "s" },
        format_duration_ms(summary.total_duration_ms),
        format_size(summary.total_size_bytes),
    ));

    if failed > 0 {
        out.push_str(&format!(
            " ({} file{} could not be read)",
            failed,
            if failed == 1 { "" } else { "s" }
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(size: u64, duration_ms: u64) -> MediaRecord {
        MediaRecord {
            title: "Holiday".to_string(),
            duration_ms,
            date_created: "2024-06-01T12:00:00Z".to_string(),
            resolution: "1280x720".to_string(),
            file_size_bytes: size,
            format: "MP4".to_string(),
        }
    }

    #[test]
    fn duration_formats_as_h_mm_ss() {
        assert_eq!(format_duration_ms(0), "0:00:00");
        assert_eq!(format_duration_ms(5000), "0:00:05");
        assert_eq!(format_duration_ms(3_661_000), "1:01:01");
        assert_eq!(format_duration_ms(3_661_999), "1:01:01");
    }

    #[test]
    fn size_formats_with_binary_prefixes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MiB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GiB");
    }

    #[test]
    fn empty_outcome_renders_distinct_message() {
        let rendered = render_outcome(&AggregateOutcome::Empty {
            attempted: 3,
            failed: 3,
        });
        assert!(rendered.contains("No media files found"));
        assert!(rendered.contains("3 of 3"));
    }

    #[test]
    fn summary_renders_totals_line() {
        let summary = FolderSummary {
            total_size_bytes: 3000,
            total_duration_ms: 12000,
            records: vec![record(1000, 5000), record(2000, 7000)],
        };
        let rendered = render_outcome(&AggregateOutcome::Summary { summary, failed: 1 });
        assert!(rendered.contains("2 files"));
        assert!(rendered.contains("0:00:12"));
        assert!(rendered.contains("1 file could not be read"));
    }

    #[test]
    fn single_record_block_contains_all_fields() {
        let rendered = render_record(&record(1000, 5000));
        assert!(rendered.contains("Holiday"));
        assert!(rendered.contains("MP4"));
        assert!(rendered.contains("1280x720"));
        assert!(rendered.contains("0:00:05"));
        assert!(rendered.contains("1000 B"));
    }
}
