// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark measurement for Spark Bench.
//!
//! This crate times operations run against a data-processing engine,
//! appends one row per measurement to a CSV log, and summarizes that log.
//!
//! # Quick Start
//!
//! ```no_run
//! use sparkbench_benchmarks::{print_benchmark_summary, BenchmarkTimer};
//!
//! let log = "results/benchmark_logs.csv";
//! let mut timer = BenchmarkTimer::new("Count rows", log);
//! timer.measure(|| -> Result<(), std::io::Error> {
//!     // work against the engine
//!     Ok(())
//! })?;
//!
//! print_benchmark_summary(log);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`timer`] - Scoped timer that logs on every exit path
//! - [`record`] - The `BenchmarkRecord` log row
//! - [`io`] - Appending to and reading the CSV log
//! - [`summary`] - Aggregation and the console table
//! - [`markdown`] - Markdown and JSON exports
//! - [`fs`] - Directory size in MB
//! - [`format`] - Duration formatting
//! - [`engine`] - The cache-clear capability

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod console;
pub mod engine;
pub mod error;
pub mod format;
pub mod fs;
pub mod io;
pub mod markdown;
pub mod record;
pub mod summary;
pub mod timer;

pub use engine::CacheClear;
pub use error::{BenchmarkError, Result};
pub use format::format_duration;
pub use fs::get_directory_size_mb;
pub use record::{BenchmarkRecord, BenchmarkStatus};
pub use summary::{load_summary, print_benchmark_summary, BenchmarkSummary};
pub use timer::{BenchmarkSession, BenchmarkTimer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_cover_the_workflow() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("benchmark_logs.csv");

        let mut timer = BenchmarkTimer::new("reexport", &log);
        timer.measure(|| Ok::<_, BenchmarkError>(())).unwrap();

        let summary = load_summary(&log).unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.successful, 1);
    }
}
