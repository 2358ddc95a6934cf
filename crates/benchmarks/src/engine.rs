// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Data-processing engine capability consumed by the timer.

use crate::error::Result;

/// An engine session that can drop everything it has cached.
///
/// The timer calls this before starting the clock so a measurement does not
/// benefit from state left behind by an earlier run. Failures are reported
/// as warnings and never abort the measurement.
#[cfg_attr(test, mockall::automock)]
pub trait CacheClear {
    /// Clear all cached tables and data.
    fn clear_cache(&self) -> Result<()>;
}

impl<F> CacheClear for F
where
    F: Fn() -> Result<()>,
{
    fn clear_cache(&self) -> Result<()> {
        self()
    }
}
