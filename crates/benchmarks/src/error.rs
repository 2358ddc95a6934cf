// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for benchmark measurement and reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while measuring or reporting benchmarks.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Directory to measure does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The engine failed to drop its cached state.
    #[error("{0}")]
    CacheClear(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;
