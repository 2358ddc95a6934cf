// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! On-disk size of benchmark data.

use crate::console;
use crate::error::{BenchmarkError, Result};
use std::fmt;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Bytes per megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Total size in MB of every regular file under `path`.
///
/// Symlinks and special files are skipped. A missing directory is an error.
/// Any failure while walking the tree is reported as a warning and yields
/// `0.0`, so callers must read `0.0` as "size unavailable" rather than
/// "empty directory".
pub fn get_directory_size_mb(path: impl AsRef<Path>) -> Result<f64> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BenchmarkError::DirectoryNotFound(path.to_path_buf()));
    }

    Ok(size_or_unavailable(path, directory_size_bytes(path)))
}

/// Megabytes for a completed walk; `0.0` plus a warning when the walk failed.
fn size_or_unavailable<E: fmt::Display>(path: &Path, walked: std::result::Result<u64, E>) -> f64 {
    match walked {
        Ok(bytes) => bytes as f64 / BYTES_PER_MB,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "directory walk failed");
            console::warning(format!("Error calculating directory size: {}", e));
            0.0
        }
    }
}

fn directory_size_bytes(path: &Path) -> std::result::Result<u64, walkdir::Error> {
    let mut total = 0;
    for entry in WalkDir::new(path).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
