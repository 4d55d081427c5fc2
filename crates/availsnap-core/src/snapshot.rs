//! The schedule snapshot -- the aggregated availability document written
//! for downstream display.
//!
//! Created fresh on every run; no prior snapshot is read or merged.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::feed::BusyInterval;

/// Aggregated availability snapshot.
///
/// Serializes to the `schedule.json` shape: camelCase keys, RFC 3339
/// timestamps with the configured zone's offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    /// Instant this snapshot was generated, in the configured zone.
    pub last_updated: DateTime<FixedOffset>,
    /// IANA name of the zone actually used (so `"UTC"` after a fallback,
    /// not the unrecognized input name).
    pub timezone: String,
    pub owner_name: String,
    /// Display metadata, passed through from configuration verbatim.
    pub weekly_project_hours: Number,
    pub workday_start: u32,
    pub workday_end: u32,
    /// Whether any feed URLs were resolved for this run.
    pub configured: bool,
    /// Concatenated per-feed intervals in feed-list order. Overlapping
    /// entries from different feeds are preserved as-is.
    pub events: Vec<BusyInterval>,
}

impl ScheduleSnapshot {
    /// Pretty-printed JSON document, the on-disk representation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
