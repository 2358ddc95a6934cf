// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Summary of the benchmark log.
//!
//! Reads every row of the log and aggregates counts and total time. Rows are
//! read leniently: an unparsable duration is shown as `N/A` and left out of
//! the total, and any status other than `SUCCESS` counts as failed.

use crate::console::{self, rule, REPORT_WIDTH};
use crate::error::Result;
use crate::format::format_duration;
use crate::io;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;
use tracing::warn;

/// Characters of the test name shown in the table.
pub const NAME_WIDTH: usize = 40;

const SUCCESS: &str = "SUCCESS";

/// The columns of a log row the summary reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Identifier of the measured operation.
    pub test_name: String,
    /// Elapsed seconds, `None` when empty or unparsable.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub duration_seconds: Option<f64>,
    /// Status text as written in the log.
    #[serde(default)]
    pub status: String,
}

impl SummaryEntry {
    /// Test name cut to [`NAME_WIDTH`] characters.
    pub fn short_name(&self) -> String {
        self.test_name.chars().take(NAME_WIDTH).collect()
    }

    /// Formatted duration, or `N/A`.
    pub fn display_duration(&self) -> String {
        self.duration_seconds
            .map(format_duration)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Whether the row reports a success.
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS
    }
}

/// Aggregated view of the benchmark log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    /// Every row, in log order.
    pub entries: Vec<SummaryEntry>,
    /// Number of rows.
    pub total: usize,
    /// Rows with status `SUCCESS`.
    pub successful: usize,
    /// `total - successful`.
    pub failed: usize,
    /// Sum of every parsable duration.
    pub total_seconds: f64,
}

impl BenchmarkSummary {
    /// Aggregate `entries`.
    pub fn from_entries(entries: Vec<SummaryEntry>) -> Self {
        let total = entries.len();
        let successful = entries.iter().filter(|e| e.is_success()).count();
        let total_seconds = entries.iter().filter_map(|e| e.duration_seconds).sum();

        Self {
            entries,
            total,
            successful,
            failed: total - successful,
            total_seconds,
        }
    }

    /// Whether the log held no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total time, formatted.
    pub fn total_time(&self) -> String {
        format_duration(self.total_seconds)
    }
}

/// Load and aggregate the log at `path`. A missing file is an empty summary.
pub fn load_summary(path: impl AsRef<Path>) -> Result<BenchmarkSummary> {
    let entries = io::read_summary_entries(path)?;
    Ok(BenchmarkSummary::from_entries(entries))
}

/// Render the summary as a fixed-width console table.
pub fn render_table(summary: &BenchmarkSummary) -> String {
    let mut output = String::new();

    writeln!(output, "\n{}", rule('=', REPORT_WIDTH)).unwrap();
    writeln!(output, "BENCHMARK SUMMARY").unwrap();
    writeln!(output, "{}\n", rule('=', REPORT_WIDTH)).unwrap();

    if summary.is_empty() {
        writeln!(output, "No benchmark results found.").unwrap();
        return output;
    }

    writeln!(output, "{:<40} {:<15} {:<10}", "Test Name", "Duration", "Status").unwrap();
    writeln!(output, "{} {} {}", rule('-', 40), rule('-', 15), rule('-', 10)).unwrap();

    for entry in &summary.entries {
        writeln!(
            output,
            "{:<40} {:<15} {:<10}",
            entry.short_name(),
            entry.display_duration(),
            entry.status
        )
        .unwrap();
    }

    writeln!(output, "\n{}", rule('-', REPORT_WIDTH)).unwrap();
    writeln!(
        output,
        "Total Tests: {} | Successful: {} | Failed: {}",
        summary.total, summary.successful, summary.failed
    )
    .unwrap();
    writeln!(output, "Total Time: {}", summary.total_time()).unwrap();
    writeln!(output, "{}", rule('=', REPORT_WIDTH)).unwrap();

    output
}

/// Print a summary of the log at `path`.
///
/// A missing log and an empty log are reported, not treated as errors. Read
/// failures are printed as warnings.
pub fn print_benchmark_summary(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if !path.exists() {
        console::warning(format!("No benchmark log found at: {}", path.display()));
        return;
    }

    match load_summary(path) {
        Ok(summary) => print!("{}", render_table(&summary)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read benchmark log");
            console::warning(format!("Error reading benchmark log: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, duration: Option<f64>, status: &str) -> SummaryEntry {
        SummaryEntry {
            test_name: name.to_string(),
            duration_seconds: duration,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_aggregates() {
        let summary = BenchmarkSummary::from_entries(vec![
            entry("a", Some(10.0), "SUCCESS"),
            entry("b", Some(20.0), "FAILED"),
        ]);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_time(), "30.0s");
    }

    #[test]
    fn test_missing_duration_listed_not_summed() {
        let summary = BenchmarkSummary::from_entries(vec![
            entry("timed", Some(90.0), "SUCCESS"),
            entry("untimed", None, "FAILED"),
        ]);

        assert_eq!(summary.total_seconds, 90.0);
        let table = render_table(&summary);
        assert!(table.contains("N/A"));
        assert!(table.contains("untimed"));
        assert!(table.contains("Total Time: 1m 30s"));
    }

    #[test]
    fn test_unknown_status_counts_as_failed() {
        let summary = BenchmarkSummary::from_entries(vec![entry("x", Some(1.0), "SKIPPED")]);
        assert_eq!(summary.successful, 0);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_long_names_truncated() {
        let name = "n".repeat(55);
        let summary = BenchmarkSummary::from_entries(vec![entry(&name, Some(1.0), "SUCCESS")]);
        let table = render_table(&summary);

        assert!(table.contains(&"n".repeat(40)));
        assert!(!table.contains(&"n".repeat(41)));
    }

    #[test]
    fn test_empty_summary_message() {
        let table = render_table(&BenchmarkSummary::from_entries(Vec::new()));
        assert!(table.contains("No benchmark results found."));
        assert!(!table.contains("Total Tests"));
    }

    #[test]
    fn test_lenient_read_of_log() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        std::fs::write(
            &path,
            "timestamp,test_name,description,duration_seconds,data_size_mb,throughput_mbps,status,error_message\n\
             2025-01-01 10:00:00,ok,,10.000,,,SUCCESS,\n\
             2025-01-01 10:01:00,bad,,not-a-number,,,FAILED,oops\n\
             2025-01-01 10:02:00,empty,,,,,FAILED,\n",
        )
        .unwrap();

        let summary = load_summary(&path).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.total_seconds, 10.0);
        assert_eq!(summary.entries[1].duration_seconds, None);
    }

    #[test]
    fn test_row_missing_trailing_fields_still_listed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        std::fs::write(
            &path,
            "timestamp,test_name,description,duration_seconds,data_size_mb,throughput_mbps,status,error_message\n\
             2025-01-01 10:00:00,ok,,10.000,,,SUCCESS,\n\
             2025-01-01 10:01:00,cut,,20.000,,,FAILED\n",
        )
        .unwrap();

        let summary = load_summary(&path).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_time(), "30.0s");
        assert_eq!(summary.entries[1].status, "FAILED");
    }

    #[test]
    fn test_missing_log_is_empty_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let summary = load_summary(tmp.path().join("absent.csv")).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);
    }
}
