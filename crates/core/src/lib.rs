// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core configuration for Spark Bench.
//!
//! This crate holds everything a benchmark run needs before any timing
//! starts: resolved [`Settings`], the [`ProjectPaths`] layout derived from
//! them, one-shot directory bootstrap, and the Hadoop environment setup
//! Spark requires on Windows.
//!
//! # Modules
//!
//! - [`settings`] - Layered settings loading
//! - [`paths`] - Project layout, data formats and directory bootstrap
//! - [`hadoop`] - Hadoop native helper detection
//! - [`error`] - Error types

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod hadoop;
pub mod paths;
pub mod settings;

pub use error::{ConfigError, Result};
pub use hadoop::{configure_hadoop_home, HadoopHome};
pub use paths::{ensure_directories_exist, DataFormat, ProjectPaths};
pub use settings::Settings;
