// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Human-readable duration formatting.

/// Format a duration in seconds.
///
/// Durations of a minute or more render as whole minutes and truncated
/// whole seconds (`150.5` → `"2m 30s"`); shorter ones keep one decimal
/// (`45.2` → `"45.2s"`). Negative input renders literally.
pub fn format_duration(seconds: f64) -> String {
    if seconds >= 60.0 {
        let minutes = (seconds / 60.0).floor() as u64;
        let remaining = (seconds % 60.0).floor() as u64;
        format!("{}m {}s", minutes, remaining)
    } else {
        format!("{:.1}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_truncate_seconds() {
        assert_eq!(format_duration(150.5), "2m 30s");
        assert_eq!(format_duration(60.0), "1m 0s");
        assert_eq!(format_duration(119.99), "1m 59s");
        assert_eq!(format_duration(3725.0), "62m 5s");
    }

    #[test]
    fn test_under_a_minute_one_decimal() {
        assert_eq!(format_duration(45.2), "45.2s");
        assert_eq!(format_duration(30.0), "30.0s");
        assert_eq!(format_duration(0.0), "0.0s");
        assert_eq!(format_duration(59.94), "59.9s");
    }

    #[test]
    fn test_negative_renders_literally() {
        assert_eq!(format_duration(-1.5), "-1.5s");
    }
}
