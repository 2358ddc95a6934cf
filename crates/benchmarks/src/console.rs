// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Console banners and warnings.

use colored::Colorize;
use std::fmt::Display;

/// Width of the timer banners.
pub const BANNER_WIDTH: usize = 60;

/// Width of the summary report.
pub const REPORT_WIDTH: usize = 80;

/// A horizontal rule of `ch` repeated `width` times.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Print a success line.
pub fn success(message: impl Display) {
    println!("{} {}", "✓".green(), message);
}

/// Print a non-fatal warning to stderr.
pub fn warning(message: impl Display) {
    eprintln!("{} {}", "⚠ Warning:".yellow().bold(), message);
}
