// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Spark Bench CLI entry point.

fn main() {
    if let Err(e) = sparkbench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
