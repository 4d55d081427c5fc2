//! Fetch window computation -- the half-open span of calendar time a run
//! considers relevant.
//!
//! The window covers the current calendar week plus the four following
//! weeks: local midnight of this week's Monday through 35 days later.
//! It is computed once per run and shared by all feeds.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::normalize::localize;

/// Days covered by a window: the current week plus four more.
const WINDOW_DAYS: i64 = 35;

/// Half-open interval `[start, end)` of zone-aware instants.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl FetchWindow {
    /// Window for the week containing `today`: local midnight of that
    /// week's Monday, spanning exactly 35 days.
    pub fn for_week_of(today: NaiveDate, tz: Tz) -> Self {
        let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let start = localize(tz, monday.and_time(NaiveTime::MIN));
        let end = start + Duration::days(WINDOW_DAYS);
        Self { start, end }
    }

    /// Window for the current calendar week in `tz`.
    pub fn current(tz: Tz) -> Self {
        Self::for_week_of(Utc::now().with_timezone(&tz).date_naive(), tz)
    }

    /// Half-open overlap test. An interval is relevant iff it covers any
    /// instant in `[start, end)`: kept when `start < window.end` and
    /// `end > window.start`, so boundary-touching intervals are dropped
    /// and straddling ones retained.
    pub fn overlaps(&self, start: DateTime<Tz>, end: DateTime<Tz>) -> bool {
        start < self.end && end > self.start
    }
}
