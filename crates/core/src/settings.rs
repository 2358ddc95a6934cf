// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime settings.
//!
//! Settings are resolved once at process start and passed by value to the
//! components that need them. Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `sparkbench.toml` in the working directory (optional)
//! 3. `SPARKBENCH_*` environment variables (a `.env` file is loaded first)
//!
//! # Example
//!
//! ```no_run
//! use sparkbench_core::Settings;
//!
//! let settings = Settings::load()?;
//! println!("log file: {}", settings.paths().log_file.display());
//! # Ok::<(), sparkbench_core::ConfigError>(())
//! ```

use crate::error::Result;
use crate::paths::ProjectPaths;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SPARKBENCH";

/// Base name of the optional settings file.
pub const SETTINGS_FILE: &str = "sparkbench";

/// Default Spark application name.
pub const SPARK_APP_NAME: &str = "SparkPerformanceBenchmark";

/// Default Spark master URL (all local cores).
pub const SPARK_MASTER: &str = "local[*]";

/// Resolved settings for a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Root of the benchmark project; every default path hangs off it.
    pub project_root: PathBuf,
    /// Explicit benchmark log location, overriding the default under `results/`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Spark application name.
    pub spark_app_name: String,
    /// Spark master URL.
    pub spark_master: String,
    /// Explicit Hadoop home, consulted before `HADOOP_HOME`.
    #[serde(default)]
    pub hadoop_home: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_root(".")
    }
}

impl Settings {
    /// Settings with defaults rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            log_file: None,
            spark_app_name: SPARK_APP_NAME.to_string(),
            spark_master: SPARK_MASTER.to_string(),
            hadoop_home: None,
        }
    }

    /// Load settings from defaults, the optional settings file and the environment.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }

        let settings = Config::builder()
            .set_default("project_root", ".")?
            .set_default("spark_app_name", SPARK_APP_NAME)?
            .set_default("spark_master", SPARK_MASTER)?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        debug!(root = %settings.project_root.display(), "settings resolved");
        Ok(settings)
    }

    /// Project layout derived from these settings.
    pub fn paths(&self) -> ProjectPaths {
        let mut paths = ProjectPaths::new(&self.project_root);
        if let Some(log_file) = &self.log_file {
            paths.log_file = log_file.clone();
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.project_root, PathBuf::from("."));
        assert_eq!(settings.spark_app_name, "SparkPerformanceBenchmark");
        assert_eq!(settings.spark_master, "local[*]");
        assert!(settings.hadoop_home.is_none());
    }

    #[test]
    fn test_log_file_override() {
        let mut settings = Settings::with_root("/bench");
        assert_eq!(
            settings.paths().log_file,
            Path::new("/bench/results/benchmark_logs.csv")
        );

        settings.log_file = Some(PathBuf::from("/tmp/custom.csv"));
        assert_eq!(settings.paths().log_file, Path::new("/tmp/custom.csv"));
    }

    #[test]
    fn test_deserialize_from_config_source() {
        let settings: Settings = Config::builder()
            .set_default("project_root", "/srv/bench")
            .unwrap()
            .set_default("spark_app_name", "Custom")
            .unwrap()
            .set_default("spark_master", "spark://master:7077")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.project_root, PathBuf::from("/srv/bench"));
        assert_eq!(settings.spark_master, "spark://master:7077");
        assert!(settings.log_file.is_none());
    }
}
