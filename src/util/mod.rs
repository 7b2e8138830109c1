//
//  gcore-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small formatting helpers shared by the command handlers.
//!
//! - **Time**: [`format_timestamp`], [`format_duration`]
//! - **Strings**: [`truncate`]
//! - **Sizes**: [`format_size`]
//!
//! ```rust
//! use gcore_cli::util::{format_size, truncate};
//!
//! assert_eq!(format_size(1536), "1.5 KB");
//! assert_eq!(truncate("hello world", 8), "hello...");
//! ```

use std::time::Duration;

use chrono::{DateTime, Local};

/// Formats an RFC 3339 timestamp from the API in local time.
///
/// Values that do not parse are returned unchanged, so odd server formats
/// still show up in tables.
///
/// ```rust
/// use gcore_cli::util::format_timestamp;
///
/// assert_eq!(format_timestamp("not a date"), "not a date");
/// ```
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => value.to_string(),
    }
}

/// Formats a duration in a compact, human-readable form.
///
/// ```rust
/// use std::time::Duration;
/// use gcore_cli::util::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Truncates a string to at most `max_len` characters, ending in `...`
/// when shortened.
///
/// Counts characters, not bytes, so multi-byte domain names are safe.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Formats a byte count using binary units.
///
/// ```rust
/// use gcore_cli::util::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1048576), "1.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("bücher.example", 6), "büc...");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1610612736), "1.5 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0s");
        assert_eq!(format_duration(Duration::from_secs(300)), "5m 0s");
        assert_eq!(format_duration(Duration::from_secs(3720)), "1h 2m");
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_timestamp_parses_rfc3339() {
        let formatted = format_timestamp("2024-01-15T10:30:00Z");
        assert!(formatted.starts_with("2024-01-1"));
        assert_eq!(formatted.len(), "2024-01-15 10:30:00".len());
    }
}
