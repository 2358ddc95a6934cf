// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark record types.
//!
//! A [`BenchmarkRecord`] is one row of the CSV benchmark log. Field order
//! here is the column order on disk and must not change.

use chrono::Local;
use serde::{Deserialize, Serialize, Serializer};

/// Format of the `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column names of the benchmark log, in order.
pub const LOG_COLUMNS: [&str; 8] = [
    "timestamp",
    "test_name",
    "description",
    "duration_seconds",
    "data_size_mb",
    "throughput_mbps",
    "status",
    "error_message",
];

/// Outcome of a measured operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BenchmarkStatus {
    /// The work completed.
    Success,
    /// The work returned an error, panicked, or never completed.
    Failed,
}

/// One row of the benchmark log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Local capture time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Identifier of the measured operation.
    pub test_name: String,
    /// Free-text annotation, empty when absent.
    #[serde(default)]
    pub description: String,
    /// Elapsed wall-clock seconds.
    #[serde(
        default,
        serialize_with = "fixed_3",
        deserialize_with = "csv::invalid_option"
    )]
    pub duration_seconds: Option<f64>,
    /// Size of the data involved, in MB.
    #[serde(
        default,
        serialize_with = "fixed_2",
        deserialize_with = "csv::invalid_option"
    )]
    pub data_size_mb: Option<f64>,
    /// `data_size_mb / duration_seconds` when both are known and duration > 0.
    #[serde(
        default,
        serialize_with = "fixed_2",
        deserialize_with = "csv::invalid_option"
    )]
    pub throughput_mbps: Option<f64>,
    /// Outcome.
    pub status: BenchmarkStatus,
    /// Error description, empty on success.
    #[serde(default)]
    pub error_message: String,
}

impl BenchmarkRecord {
    /// Create a record stamped with the current local time.
    pub fn new(test_name: impl Into<String>, status: BenchmarkStatus) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            test_name: test_name.into(),
            description: String::new(),
            duration_seconds: None,
            data_size_mb: None,
            throughput_mbps: None,
            status,
            error_message: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the measured duration and refresh throughput.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self.throughput_mbps = throughput_mbps(self.data_size_mb, self.duration_seconds);
        self
    }

    /// Set the data size and refresh throughput.
    pub fn with_data_size(mut self, size_mb: Option<f64>) -> Self {
        self.data_size_mb = size_mb;
        self.throughput_mbps = throughput_mbps(self.data_size_mb, self.duration_seconds);
        self
    }

    /// Set the error message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Whether the record reports a success.
    pub fn is_success(&self) -> bool {
        self.status == BenchmarkStatus::Success
    }
}

/// Throughput in MB/s, or `None` when size is unknown or duration is not positive.
pub fn throughput_mbps(data_size_mb: Option<f64>, duration_seconds: Option<f64>) -> Option<f64> {
    match (data_size_mb, duration_seconds) {
        (Some(size), Some(duration)) if duration > 0.0 => Some(size / duration),
        _ => None,
    }
}

fn fixed_3<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&format!("{:.3}", v)),
        None => serializer.serialize_str(""),
    }
}

fn fixed_2<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&format!("{:.2}", v)),
        None => serializer.serialize_str(""),
    }
}
