// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for the benchmark log.
//!
//! The log is an append-only CSV file. Its header row is written once, when
//! the file is first created, and every later call only appends data rows.
//! No file locking is performed; one writer process at a time is assumed.

use crate::error::Result;
use crate::record::BenchmarkRecord;
use crate::summary::SummaryEntry;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::debug;

/// Whether `path` still needs a header row.
fn needs_header(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

/// Append one record to the log, creating parent directories and the header
/// row when the file does not exist yet.
pub fn append_record(path: impl AsRef<Path>, record: &BenchmarkRecord) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let write_header = needs_header(path);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        test_name = %record.test_name,
        header = write_header,
        "appended benchmark record"
    );
    Ok(())
}

/// Read every record from the log.
///
/// A missing file yields an empty list.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<BenchmarkRecord>> {
    read_rows(path.as_ref())
}

/// Read the columns the summary needs, tolerating unknown status values and
/// unparsable durations.
pub fn read_summary_entries(path: impl AsRef<Path>) -> Result<Vec<SummaryEntry>> {
    read_rows(path.as_ref())
}

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for row in reader.records() {
        let mut row = row?;
        // Rows cut short by an interrupted append read as empty trailing fields.
        while row.len() < headers.len() {
            row.push_field("");
        }
        rows.push(row.deserialize(Some(&headers))?);
    }
    Ok(rows)
}
