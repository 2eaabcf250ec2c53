//! Time utilities: epoch-millisecond formatting.

use chrono::{Local, TimeZone};

/// `YYYY-MM-DD HH:MM` in local time, or `--` for an invalid timestamp.
pub fn format_millis(ms: i64) -> String {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// `HH:MM` in local time.
pub fn format_clock(ms: i64) -> String {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
