//! Timestamp normalization -- converts ICS date and date-time values into
//! zone-aware instants in the configured timezone.
//!
//! ICS feeds carry four shapes of time: date-only (all-day), floating local
//! time, UTC, and local time with a `TZID`. All four collapse to a
//! `DateTime<Tz>` in the configured zone:
//!
//! - date-only values become local midnight of that date
//! - floating values get the configured zone attached
//! - UTC and `TZID` values are converted into the configured zone
//!
//! Normalization is total: DST gaps shift forward to the next valid
//! wall-clock time, ambiguous times resolve to the earlier offset.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, DatePerhapsTime};

use crate::error::{Result, SnapshotError};

/// Parse an IANA timezone name.
///
/// # Errors
/// Returns `SnapshotError::InvalidTimezone` if the name is not a valid IANA
/// identifier. Callers that must never abort on a bad zone catch this and
/// substitute UTC.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| SnapshotError::InvalidTimezone(name.to_string()))
}

/// Attach `tz` to a naive wall-clock time.
///
/// Times falling in a DST gap shift forward to the next valid wall-clock
/// instant; ambiguous times (fall-back hour) resolve to the earlier offset.
pub fn localize(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            // DST gap: the wall-clock time does not exist in this zone.
            let shifted = naive + Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&naive))
        }
    }
}

/// Normalize one ICS date or date-time value to an instant in `tz`.
///
/// An unrecognized `TZID` is treated as floating local time — the
/// configured zone is attached instead of aborting the feed.
pub fn normalize(value: &DatePerhapsTime, tz: Tz) -> DateTime<Tz> {
    match value {
        // All-day: local midnight of the date. DTEND of an all-day event is
        // the exclusive end date, so midnight is correct for both ends.
        DatePerhapsTime::Date(date) => localize(tz, date.and_time(NaiveTime::MIN)),
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(utc) => utc.with_timezone(&tz),
            CalendarDateTime::Floating(naive) => localize(tz, *naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => match tzid.parse::<Tz>() {
                Ok(source) => localize(source, *date_time).with_timezone(&tz),
                Err(_) => localize(tz, *date_time),
            },
        },
    }
}
