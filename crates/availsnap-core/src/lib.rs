//! # availsnap-core
//!
//! Busy/free aggregation core for the availability snapshot generator.
//!
//! Decodes ICS calendar documents, extracts the events that actually block
//! time, normalizes them into zone-aware intervals within a bounded fetch
//! window, and models the snapshot document written for downstream display.
//! Event titles are discarded on extraction — every emitted interval carries
//! the anonymized label `"Busy"`.
//!
//! This crate is pure domain logic: no network, no filesystem. Fetching and
//! configuration live in the CLI crate.
//!
//! ## Modules
//!
//! - [`feed`] — ICS document → anonymized busy intervals
//! - [`window`] — fetch window computation (current week + 4 following)
//! - [`normalize`] — ICS date/date-time values → zone-aware instants
//! - [`snapshot`] — the aggregated output document
//! - [`error`] — error types

pub mod error;
pub mod feed;
pub mod normalize;
pub mod snapshot;
pub mod window;

pub use error::SnapshotError;
pub use feed::{parse_feed, BusyInterval, BUSY_SUMMARY};
pub use normalize::parse_timezone;
pub use snapshot::ScheduleSnapshot;
pub use window::FetchWindow;
