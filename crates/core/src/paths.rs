// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Project directory layout and data locations.

use crate::error::{ConfigError, Result};
use colored::Colorize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Name of the sales fact table.
pub const FACT_SALES_TABLE: &str = "fact_sales";

/// Name of the customer dimension table.
pub const DIM_CUSTOMERS_TABLE: &str = "dim_customers";

/// File name of the benchmark log under `results/`.
pub const BENCHMARK_LOG_NAME: &str = "benchmark_logs.csv";

/// Storage formats the benchmark writes processed data in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// Plain CSV files.
    Csv,
    /// Apache Parquet.
    Parquet,
    /// Delta Lake tables.
    Delta,
}

impl DataFormat {
    /// Every supported format, in display order.
    pub const ALL: [DataFormat; 3] = [DataFormat::Csv, DataFormat::Parquet, DataFormat::Delta];

    /// Lower-case name used for directories and lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
            Self::Delta => "delta",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                given: lowered,
                supported: Self::ALL.map(|f| f.as_str()).join(", "),
            })
    }
}

/// Directory layout of a benchmark project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root.
    pub root: PathBuf,
    /// `data/`
    pub data: PathBuf,
    /// `data/raw/`
    pub raw_data: PathBuf,
    /// `data/processed/`
    pub processed_data: PathBuf,
    /// `data/dictionary/`
    pub dictionary: PathBuf,
    /// `results/`
    pub results: PathBuf,
    /// `results/plots/`
    pub plots: PathBuf,
    /// `notebooks/`
    pub notebooks: PathBuf,
    /// `src/`
    pub src: PathBuf,
    /// Benchmark CSV log.
    pub log_file: PathBuf,
}

impl ProjectPaths {
    /// Derive the standard layout under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let data = root.join("data");
        let processed_data = data.join("processed");
        let results = root.join("results");

        Self {
            raw_data: data.join("raw"),
            dictionary: data.join("dictionary"),
            plots: results.join("plots"),
            notebooks: root.join("notebooks"),
            src: root.join("src"),
            log_file: results.join(BENCHMARK_LOG_NAME),
            processed_data,
            data,
            results,
            root,
        }
    }

    /// Directory holding processed data in `format`.
    pub fn format_dir(&self, format: DataFormat) -> PathBuf {
        self.processed_data.join(format.as_str())
    }

    /// Location of `table_name` stored as `format`.
    pub fn data_path(&self, format: DataFormat, table_name: &str) -> PathBuf {
        self.format_dir(format).join(table_name)
    }

    /// Directories created by [`ensure_directories_exist`].
    pub fn bootstrap_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![
            self.data.clone(),
            self.raw_data.clone(),
            self.processed_data.clone(),
            self.dictionary.clone(),
            self.results.clone(),
            self.plots.clone(),
        ];
        dirs.extend(DataFormat::ALL.map(|format| self.format_dir(format)));
        dirs
    }
}

/// Create every project directory that does not exist yet.
///
/// Safe to call repeatedly. Stops at the first directory that cannot be
/// created and names it in the error.
pub fn ensure_directories_exist(paths: &ProjectPaths) -> Result<()> {
    for dir in paths.bootstrap_dirs() {
        fs::create_dir_all(&dir).map_err(|source| ConfigError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!(path = %dir.display(), "directory ready");
    }

    println!("{} All directories verified/created successfully", "✓".green());
    Ok(())
}
