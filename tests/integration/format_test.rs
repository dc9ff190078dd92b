//! Tests for the display formatting helpers.

use chrono::{TimeZone, Utc};

use vtube::format::{format_count, format_duration, format_time_ago, format_views, truncate_text};

// ============================================================================
// Duration formatting
// ============================================================================

#[test]
fn duration_zero_is_0_00() {
    assert_eq!(format_duration(0.0), "0:00");
}

#[test]
fn duration_sixty_five_seconds() {
    assert_eq!(format_duration(65.0), "1:05");
}

#[test]
fn duration_over_an_hour_gets_three_parts() {
    assert_eq!(format_duration(3661.0), "1:01:01");
}

#[test]
fn duration_exactly_one_hour() {
    assert_eq!(format_duration(3600.0), "1:00:00");
}

#[test]
fn duration_just_under_an_hour_keeps_two_parts() {
    assert_eq!(format_duration(3599.0), "59:59");
}

// ============================================================================
// Count abbreviation
// ============================================================================

#[test]
fn count_below_threshold_is_plain() {
    assert_eq!(format_count(950), "950");
}

#[test]
fn count_thousands_one_decimal() {
    assert_eq!(format_count(1500), "1.5K");
}

#[test]
fn count_millions_one_decimal() {
    assert_eq!(format_count(2_500_000), "2.5M");
}

#[test]
fn count_keeps_trailing_zero_decimal() {
    // One decimal place at every magnitude, even when it is zero
    assert_eq!(format_count(1000), "1.0K");
    assert_eq!(format_count(3_000_000), "3.0M");
}

#[test]
fn views_appends_suffix() {
    assert_eq!(format_views(950), "950 views");
    assert_eq!(format_views(1_284_503), "1.3M views");
}

// ============================================================================
// Time ago / truncation
// ============================================================================

#[test]
fn time_ago_picks_the_largest_unit() {
    let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let upload = Utc.with_ymd_and_hms(2026, 5, 25, 0, 0, 0).unwrap();
    assert_eq!(format_time_ago(upload, now), "7 days ago");
}

#[test]
fn truncate_appends_dots_only_when_needed() {
    assert_eq!(truncate_text("short", 100), "short");
    let long = "a".repeat(250);
    let cut = truncate_text(&long, 200);
    assert!(cut.ends_with("..."));
    assert_eq!(cut.chars().count(), 203);
}
