// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Scoped benchmark timer.
//!
//! A [`BenchmarkTimer`] measures one named operation and appends exactly one
//! row to the benchmark log however the measured scope ends: normal
//! completion, an `Err` result, an early return that drops the session, or
//! a panic unwinding through it. The timer records failures but never
//! swallows them.
//!
//! # Example
//!
//! ```no_run
//! use sparkbench_benchmarks::BenchmarkTimer;
//!
//! let mut timer = BenchmarkTimer::new("Read Parquet", "results/benchmark_logs.csv")
//!     .description("Full scan of fact_sales")
//!     .data_size_mb(512.0);
//!
//! let rows = timer.measure(|| -> Result<usize, std::io::Error> { Ok(42) })?;
//! println!("{} rows in {:.2}s", rows, timer.duration().unwrap_or_default());
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::console::{self, rule, BANNER_WIDTH};
use crate::engine::CacheClear;
use crate::error::BenchmarkError;
use crate::io;
use crate::record::{throughput_mbps, BenchmarkRecord, BenchmarkStatus};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const PANIC_MESSAGE: &str = "benchmark panicked";
const ABANDONED_MESSAGE: &str = "benchmark scope exited before completion";

/// Times a named operation and logs the outcome.
pub struct BenchmarkTimer<'a> {
    test_name: String,
    description: String,
    engine: Option<&'a dyn CacheClear>,
    clear_cache: bool,
    data_size_mb: Option<f64>,
    log_file: PathBuf,
    duration: Option<f64>,
}

impl fmt::Debug for BenchmarkTimer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkTimer")
            .field("test_name", &self.test_name)
            .field("description", &self.description)
            .field("engine", &self.engine.is_some())
            .field("clear_cache", &self.clear_cache)
            .field("data_size_mb", &self.data_size_mb)
            .field("log_file", &self.log_file)
            .field("duration", &self.duration)
            .finish()
    }
}

impl<'a> BenchmarkTimer<'a> {
    /// Create a timer for `test_name` that logs to `log_file`.
    pub fn new(test_name: impl Into<String>, log_file: impl Into<PathBuf>) -> Self {
        Self {
            test_name: test_name.into(),
            description: String::new(),
            engine: None,
            clear_cache: true,
            data_size_mb: None,
            log_file: log_file.into(),
            duration: None,
        }
    }

    /// Attach a free-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Engine whose cache is cleared before timing starts.
    pub fn engine(mut self, engine: &'a dyn CacheClear) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Whether to clear the engine cache on entry (default `true`).
    pub fn clear_cache(mut self, clear: bool) -> Self {
        self.clear_cache = clear;
        self
    }

    /// Size of the data the operation processes, for throughput.
    pub fn data_size_mb(mut self, size_mb: f64) -> Self {
        self.data_size_mb = Some(size_mb);
        self
    }

    /// Name of the measured operation.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Log file the timer appends to.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Elapsed seconds of the last completed measurement.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Run `work` inside a measured scope.
    ///
    /// The work's result is returned untouched; an `Err` is logged as
    /// `FAILED` with its `Display` text before being handed back.
    pub fn measure<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        let session = self.start();
        let result = work();
        session.finish(&result);
        result
    }

    /// Enter the measured scope.
    ///
    /// Clears the engine cache if requested, prints the start banner and
    /// starts the clock. The returned session logs when finished or dropped.
    pub fn start(&mut self) -> BenchmarkSession<'_, 'a> {
        if self.clear_cache {
            if let Some(engine) = self.engine {
                match engine.clear_cache() {
                    Ok(()) => console::success(format!("Cache cleared for: {}", self.test_name)),
                    Err(e) => {
                        warn!(test_name = %self.test_name, error = %e, "cache clear failed");
                        console::warning(cache_clear_warning(&e));
                    }
                }
            }
        }

        println!("\n{}", rule('=', BANNER_WIDTH));
        println!("Starting benchmark: {}", self.test_name.bold());
        if !self.description.is_empty() {
            println!("Description: {}", self.description);
        }
        println!("{}", rule('=', BANNER_WIDTH));
        info!(test_name = %self.test_name, "benchmark started");

        self.duration = None;
        BenchmarkSession {
            timer: self,
            start: Instant::now(),
            finished: false,
        }
    }

    fn print_completion(&self, seconds: f64, status: BenchmarkStatus) {
        println!("\n{}", rule('=', BANNER_WIDTH));
        match status {
            BenchmarkStatus::Success => println!("{} Completed: {}", "✓".green(), self.test_name),
            BenchmarkStatus::Failed => println!("{} Failed: {}", "✗".red(), self.test_name),
        }
        println!("Duration: {:.3} seconds ({:.2} minutes)", seconds, seconds / 60.0);
        if let Some(throughput) = throughput_mbps(self.data_size_mb, Some(seconds)) {
            println!("Throughput: {:.2} MB/s", throughput);
        }
        println!("{}\n", rule('=', BANNER_WIDTH));
    }

    fn record(&mut self, elapsed: Duration, error: Option<String>) {
        let seconds = elapsed.as_secs_f64();
        self.duration = Some(seconds);

        let status = if error.is_some() {
            BenchmarkStatus::Failed
        } else {
            BenchmarkStatus::Success
        };
        self.print_completion(seconds, status);
        info!(
            test_name = %self.test_name,
            duration_seconds = seconds,
            status = ?status,
            "benchmark finished"
        );

        let record = BenchmarkRecord::new(self.test_name.clone(), status)
            .with_description(self.description.clone())
            .with_data_size(self.data_size_mb)
            .with_duration(seconds)
            .with_error(error.unwrap_or_default());

        match io::append_record(&self.log_file, &record) {
            Ok(()) => console::success(format!("Results logged to: {}", self.log_file.display())),
            Err(e) => {
                warn!(path = %self.log_file.display(), error = %e, "could not log benchmark");
                console::warning(format!(
                    "Could not log results to {}: {}",
                    self.log_file.display(),
                    e
                ));
            }
        }
    }
}

/// An open measurement scope.
///
/// Call [`finish`](Self::finish) with the work's result. A session dropped
/// without finishing, by an early return or a panic, is logged as `FAILED`.
#[must_use = "dropping the session immediately ends the measurement as FAILED"]
pub struct BenchmarkSession<'t, 'a> {
    timer: &'t mut BenchmarkTimer<'a>,
    start: Instant,
    finished: bool,
}

impl BenchmarkSession<'_, '_> {
    /// Time elapsed since the scope was entered.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Close the scope with the outcome of the work.
    pub fn finish<T, E: fmt::Display>(mut self, result: &Result<T, E>) {
        let error = result.as_ref().err().map(|e| e.to_string());
        self.complete(error);
    }

    fn complete(&mut self, error: Option<String>) {
        if self.finished {
            return;
        }
        self.finished = true;
        let elapsed = self.start.elapsed();
        self.timer.record(elapsed, error);
    }
}

impl Drop for BenchmarkSession<'_, '_> {
    fn drop(&mut self) {
        if !self.finished {
            let message = if thread::panicking() {
                PANIC_MESSAGE
            } else {
                ABANDONED_MESSAGE
            };
            self.complete(Some(message.to_string()));
        }
    }
}

fn cache_clear_warning(error: &BenchmarkError) -> String {
    format!("Could not clear cache: {}", error)
}
