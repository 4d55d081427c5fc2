//! Run configuration -- static settings plus feed URL resolution.
//!
//! Loaded once from a JSON file and immutable for the run. The feed list
//! can be overridden wholesale through the `ICS_URLS` environment variable
//! so real feed URLs never have to live in the config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Number;

/// Sentinel shipped in the example config; never a fetchable feed.
pub const PLACEHOLDER_URL: &str = "YOUR_ICS_URL_HERE";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// IANA timezone name. An unrecognized zone falls back to UTC at
    /// resolution time; it is not validated here.
    pub timezone: String,
    pub owner_name: String,
    /// Display metadata passed through to the snapshot verbatim.
    pub weekly_project_hours: Number,
    pub workday_start: u32,
    pub workday_end: u32,
    pub ics_urls: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            owner_name: "Nikki".to_string(),
            weekly_project_hours: Number::from(20),
            workday_start: 8,
            workday_end: 19,
            ics_urls: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file. A missing or unreadable file
    /// is a fatal startup error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve the feed URL list.
    ///
    /// A non-empty `ICS_URLS` override (comma-separated, entries trimmed,
    /// empties dropped) replaces the config list entirely — no merge.
    /// Otherwise the config list is used, with empty entries and the
    /// placeholder sentinel removed.
    pub fn resolve_feed_urls(&self, env_override: Option<&str>) -> Vec<String> {
        if let Some(raw) = env_override {
            if !raw.trim().is_empty() {
                return raw
                    .split(',')
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }

        self.ics_urls
            .iter()
            .filter(|u| !u.is_empty() && u.as_str() != PLACEHOLDER_URL)
            .cloned()
            .collect()
    }
}
