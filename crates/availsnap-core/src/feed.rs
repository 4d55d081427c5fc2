//! ICS feed parsing -- decodes a calendar document and extracts anonymized
//! busy intervals within a fetch window.
//!
//! Only `VEVENT` components that actually block time survive extraction:
//! events without a start, events marked `TRANSP:TRANSPARENT`, and events
//! with the Outlook busy-status `FREE` are skipped. Everything that remains
//! is normalized into the configured zone, filtered against the window, and
//! emitted with the constant label `"Busy"` — the original title is never
//! retained.

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use icalendar::{Calendar, CalendarComponent, Component, Event};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};
use crate::normalize::normalize;
use crate::window::FetchWindow;

/// The anonymized label attached to every emitted interval.
pub const BUSY_SUMMARY: &str = "Busy";

/// A span of time during which the calendar owner is unavailable.
///
/// `start < end` is not enforced — a malformed feed may produce zero- or
/// negative-duration intervals, and they pass through unchanged. Merging
/// overlapping intervals is a display-layer concern, not done here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Always [`BUSY_SUMMARY`].
    pub summary: String,
}

/// Decode an ICS document and extract busy intervals overlapping `window`.
///
/// Intervals are returned in document order. Components other than `VEVENT`
/// are ignored.
///
/// # Errors
/// Returns `SnapshotError::InvalidCalendar` if the text is not a parseable
/// iCalendar document. Callers treat this as "zero events for this feed".
pub fn parse_feed(ics_text: &str, tz: Tz, window: &FetchWindow) -> Result<Vec<BusyInterval>> {
    let calendar: Calendar = ics_text.parse().map_err(SnapshotError::InvalidCalendar)?;

    Ok(calendar
        .components
        .iter()
        .filter_map(CalendarComponent::as_event)
        .filter_map(|event| busy_interval(event, tz, window))
        .collect())
}

/// Extract one event's busy interval, or `None` if the event is skipped.
fn busy_interval(event: &Event, tz: Tz, window: &FetchWindow) -> Option<BusyInterval> {
    let dtstart = event.get_start()?;

    if marked_free(event) {
        return None;
    }

    let start = normalize(&dtstart, tz);
    // No DTEND: the event occupies a single instant.
    let end = match event.get_end() {
        Some(dtend) => normalize(&dtend, tz),
        None => start,
    };

    if !window.overlaps(start, end) {
        return None;
    }

    Some(BusyInterval {
        start: start.fixed_offset(),
        end: end.fixed_offset(),
        summary: BUSY_SUMMARY.to_string(),
    })
}

/// An event blocks no time when the standard `TRANSP` property marks it
/// transparent, or the Outlook busy-status marks it free. Both checks are
/// case-insensitive.
fn marked_free(event: &Event) -> bool {
    let transparent = event
        .property_value("TRANSP")
        .is_some_and(|v| v.eq_ignore_ascii_case("TRANSPARENT"));
    let outlook_free = event
        .property_value("X-MICROSOFT-CDO-BUSYSTATUS")
        .is_some_and(|v| v.eq_ignore_ascii_case("FREE"));
    transparent || outlook_free
}
