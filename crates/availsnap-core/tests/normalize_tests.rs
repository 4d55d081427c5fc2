//! Tests for ICS timestamp normalization.
//!
//! Covers the four value shapes a feed can carry (date-only, floating,
//! UTC, TZID-qualified) plus the DST edge cases that make normalization
//! total.

use availsnap_core::normalize::{localize, normalize, parse_timezone};
use availsnap_core::SnapshotError;
use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, DatePerhapsTime};

fn new_york() -> Tz {
    "America/New_York".parse().unwrap()
}

fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// ── Date-only (all-day) values ──────────────────────────────────────────────

#[test]
fn all_day_date_becomes_local_midnight() {
    let value = DatePerhapsTime::Date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    let dt = normalize(&value, new_york());
    assert_eq!(dt.to_rfc3339(), "2024-06-10T00:00:00-04:00");
}

#[test]
fn all_day_date_in_winter_gets_standard_offset() {
    let value = DatePerhapsTime::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    let dt = normalize(&value, new_york());
    assert_eq!(dt.to_rfc3339(), "2024-01-15T00:00:00-05:00");
}

// ── Timed values ────────────────────────────────────────────────────────────

#[test]
fn utc_value_converts_to_configured_zone() {
    let utc = Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap();
    let value = DatePerhapsTime::DateTime(CalendarDateTime::Utc(utc));
    let dt = normalize(&value, new_york());
    assert_eq!(dt.to_rfc3339(), "2024-06-10T14:00:00-04:00");
}

#[test]
fn floating_value_gets_configured_zone_attached() {
    let value = DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive(2024, 6, 10, 9, 30)));
    let dt = normalize(&value, new_york());
    assert_eq!(dt.to_rfc3339(), "2024-06-10T09:30:00-04:00");
}

#[test]
fn tzid_value_converts_from_source_zone() {
    // 16:00 in Berlin (UTC+2 in June) is 10:00 in New York.
    let value = DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone {
        date_time: naive(2024, 6, 10, 16, 0),
        tzid: "Europe/Berlin".to_string(),
    });
    let dt = normalize(&value, new_york());
    assert_eq!(dt.to_rfc3339(), "2024-06-10T10:00:00-04:00");
}

#[test]
fn unknown_tzid_is_treated_as_floating() {
    let value = DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone {
        date_time: naive(2024, 6, 10, 9, 0),
        tzid: "Mars/Olympus_Mons".to_string(),
    });
    let dt = normalize(&value, new_york());
    assert_eq!(dt.to_rfc3339(), "2024-06-10T09:00:00-04:00");
}

// ── DST edge cases ──────────────────────────────────────────────────────────

#[test]
fn dst_gap_shifts_forward_to_next_valid_time() {
    // 02:30 on 2024-03-10 does not exist in New York (spring forward).
    let dt = localize(new_york(), naive(2024, 3, 10, 2, 30));
    assert_eq!(dt.to_rfc3339(), "2024-03-10T03:30:00-04:00");
}

#[test]
fn ambiguous_fall_back_time_resolves_to_earlier_offset() {
    // 01:30 on 2024-11-03 occurs twice in New York; the first pass wins.
    let dt = localize(new_york(), naive(2024, 11, 3, 1, 30));
    assert_eq!(dt.to_rfc3339(), "2024-11-03T01:30:00-04:00");
}

// ── Timezone parsing ────────────────────────────────────────────────────────

#[test]
fn valid_iana_names_parse() {
    assert!(parse_timezone("Europe/London").is_ok());
    assert!(parse_timezone("UTC").is_ok());
}

#[test]
fn invalid_timezone_is_a_typed_error() {
    let err = parse_timezone("Not/AZone").unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidTimezone(name) if name == "Not/AZone"));
}
