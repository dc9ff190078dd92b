//! Display formatting helpers shared by the CLI and TUI.
//!
//! Pure functions for turning raw catalog numbers (durations, view counts,
//! timestamps) into the short strings shown in lists and on the watch screen.

use chrono::{DateTime, Utc};

/// Format a duration in seconds as `M:SS`, or `H:MM:SS` for durations of an
/// hour or more.
///
/// Fractional seconds are truncated; negative inputs format as zero.
///
/// # Examples
/// ```
/// use vtube::format::format_duration;
/// assert_eq!(format_duration(65.0), "1:05");
/// assert_eq!(format_duration(3661.0), "1:01:01");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Abbreviate a count with a `K`/`M` suffix and one decimal place.
///
/// Thresholds are 1,000 and 1,000,000; below 1,000 the plain integer is
/// returned. `1000` formats as `"1.0K"`, matching the single decimal kept
/// at every magnitude.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format a view count for display, e.g. `"1.5K views"`.
pub fn format_views(views: u64) -> String {
    format!("{} views", format_count(views))
}

/// Coarse "time ago" string for an upload timestamp.
///
/// Buckets: under a minute is "just now", then minutes, hours, days,
/// months (30 days), and years (365 days). Takes `now` explicitly so
/// callers and tests control the clock.
pub fn format_time_ago(when: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - when).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3600, "hour")
    } else if secs < 30 * 86_400 {
        (secs / 86_400, "day")
    } else if secs < 365 * 86_400 {
        (secs / (30 * 86_400), "month")
    } else {
        (secs / (365 * 86_400), "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// Truncate text to a character budget, appending `...` when shortened.
///
/// Truncation is by char count, not display width; trailing whitespace
/// before the ellipsis is trimmed.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
