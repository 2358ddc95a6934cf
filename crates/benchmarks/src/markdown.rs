// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown and JSON exports of the benchmark summary.

use crate::error::Result;
use crate::summary::BenchmarkSummary;
use std::fmt::Write;

/// Generate a markdown report from a summary.
pub fn generate_summary(summary: &BenchmarkSummary) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
    .unwrap();
    writeln!(output).unwrap();

    if summary.is_empty() {
        writeln!(output, "No benchmark results found.").unwrap();
        return output;
    }

    writeln!(output, "| Test Name | Duration | Status |").unwrap();
    writeln!(output, "|-----------|----------|--------|").unwrap();
    for entry in &summary.entries {
        writeln!(
            output,
            "| {} | {} | {} |",
            entry.short_name().replace('|', "\\|"),
            entry.display_duration(),
            entry.status
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(
        output,
        "Total tests: {} | Successful: {} | Failed: {}",
        summary.total, summary.successful, summary.failed
    )
    .unwrap();
    writeln!(output, "Total time: {}", summary.total_time()).unwrap();

    output
}

/// Pretty JSON rendering of a summary.
pub fn generate_json(summary: &BenchmarkSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::SummaryEntry;

    fn sample() -> BenchmarkSummary {
        BenchmarkSummary::from_entries(vec![
            SummaryEntry {
                test_name: "csv | write".to_string(),
                duration_seconds: Some(150.5),
                status: "SUCCESS".to_string(),
            },
            SummaryEntry {
                test_name: "delta merge".to_string(),
                duration_seconds: None,
                status: "FAILED".to_string(),
            },
        ])
    }

    #[test]
    fn test_markdown_table() {
        let report = generate_summary(&sample());
        assert!(report.starts_with("# Benchmark Summary"));
        assert!(report.contains("| csv \\| write | 2m 30s | SUCCESS |"));
        assert!(report.contains("| delta merge | N/A | FAILED |"));
        assert!(report.contains("Total tests: 2 | Successful: 1 | Failed: 1"));
    }

    #[test]
    fn test_json_export() {
        let json = generate_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["entries"][1]["duration_seconds"], serde_json::Value::Null);
    }
}
