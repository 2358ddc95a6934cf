// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hadoop native helper configuration.
//!
//! Spark on Windows needs `winutils.exe` and `hadoop.dll` under
//! `%HADOOP_HOME%\bin` before any local file write succeeds. Other
//! platforms need nothing, so [`configure_hadoop_home`] is a no-op there.

use crate::error::{ConfigError, Result};
use crate::settings::Settings;
use colored::Colorize;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// Hadoop home used when neither settings nor the environment name one.
pub const DEFAULT_HADOOP_HOME: &str = r"C:\hadoop";

/// Files that must exist under `<home>/bin`.
pub const REQUIRED_BINARIES: [&str; 2] = ["winutils.exe", "hadoop.dll"];

/// A verified Hadoop installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HadoopHome {
    home: PathBuf,
}

impl HadoopHome {
    /// Verify that `home` carries every required native helper.
    pub fn detect(home: impl AsRef<Path>) -> Result<Self> {
        let home = home.as_ref().to_path_buf();
        let bin = home.join("bin");
        let missing: Vec<PathBuf> = REQUIRED_BINARIES
            .iter()
            .map(|name| bin.join(name))
            .filter(|path| !path.is_file())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::HadoopFilesMissing { home, missing });
        }
        Ok(Self { home })
    }

    /// Installation root.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `<home>/bin`.
    pub fn bin_dir(&self) -> PathBuf {
        self.home.join("bin")
    }

    /// `PATH` with the Hadoop `bin` directory prepended, or `None` when it is
    /// already present.
    pub fn path_with_bin(&self, current: Option<OsString>) -> Result<Option<OsString>> {
        let bin = self.bin_dir();
        let mut entries: Vec<PathBuf> = current
            .as_deref()
            .map(|p| env::split_paths(p).collect())
            .unwrap_or_default();

        if entries.iter().any(|entry| entry == &bin) {
            return Ok(None);
        }
        entries.insert(0, bin);
        let joined =
            env::join_paths(entries).map_err(|e| ConfigError::InvalidPath(e.to_string()))?;
        Ok(Some(joined))
    }
}

/// Resolve the Hadoop home: settings first, then `HADOOP_HOME`, then the default.
pub fn resolve_hadoop_home(settings: &Settings) -> PathBuf {
    settings
        .hadoop_home
        .clone()
        .or_else(|| env::var_os("HADOOP_HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HADOOP_HOME))
}

/// Point the process environment at a verified Hadoop installation.
///
/// Must run before the Spark session is created. Returns `Ok(None)` on
/// platforms that do not need native helpers.
pub fn configure_hadoop_home(settings: &Settings) -> Result<Option<HadoopHome>> {
    if !cfg!(windows) {
        info!("hadoop native helpers not required on this platform");
        return Ok(None);
    }

    let hadoop = HadoopHome::detect(resolve_hadoop_home(settings))?;
    env::set_var("HADOOP_HOME", hadoop.home());
    println!("{} HADOOP_HOME set to: {}", "✓".green(), hadoop.home().display());

    if let Some(path) = hadoop.path_with_bin(env::var_os("PATH"))? {
        env::set_var("PATH", path);
        println!("{} Added {} to PATH", "✓".green(), hadoop.bin_dir().display());
    }
    Ok(Some(hadoop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_reports_every_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("bin")).unwrap();

        match HadoopHome::detect(tmp.path()) {
            Err(ConfigError::HadoopFilesMissing { missing, .. }) => {
                assert_eq!(missing.len(), 2);
                assert!(missing[0].ends_with("winutils.exe"));
                assert!(missing[1].ends_with("hadoop.dll"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_detect_accepts_complete_install() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        for name in REQUIRED_BINARIES {
            fs::write(bin.join(name), b"").unwrap();
        }

        let hadoop = HadoopHome::detect(tmp.path()).unwrap();
        assert_eq!(hadoop.home(), tmp.path());
        assert_eq!(hadoop.bin_dir(), bin);
    }

    #[test]
    fn test_path_prepends_bin_once() {
        let hadoop = HadoopHome {
            home: PathBuf::from("/opt/hadoop"),
        };
        let current = env::join_paths(["/usr/bin", "/bin"]).unwrap();

        let updated = hadoop.path_with_bin(Some(current)).unwrap().unwrap();
        let entries: Vec<PathBuf> = env::split_paths(&updated).collect();
        assert_eq!(entries[0], Path::new("/opt/hadoop/bin"));
        assert_eq!(entries.len(), 3);

        assert!(hadoop.path_with_bin(Some(updated)).unwrap().is_none());
    }

    #[test]
    fn test_settings_take_precedence() {
        let mut settings = Settings::default();
        settings.hadoop_home = Some(PathBuf::from("/custom/hadoop"));
        assert_eq!(resolve_hadoop_home(&settings), Path::new("/custom/hadoop"));
    }
}
