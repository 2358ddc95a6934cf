// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration and bootstrap.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings or preparing the project layout.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Requested data format is not one of the supported values.
    #[error("Invalid format_type '{given}'. Must be one of: {supported}")]
    UnsupportedFormat {
        /// Value the caller asked for.
        given: String,
        /// Comma separated list of accepted values.
        supported: String,
    },

    /// A project directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The Hadoop home is missing native helper files.
    #[error("Hadoop files missing under {}: {}", home.display(), format_missing(missing))]
    HadoopFilesMissing {
        /// Hadoop home that was inspected.
        home: PathBuf,
        /// Every required file that does not exist.
        missing: Vec<PathBuf>,
    },

    /// A path could not be used as an environment value.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Settings sources could not be read or deserialized.
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

fn format_missing(missing: &[PathBuf]) -> String {
    missing
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
