//! `availsnap` CLI — fetch ICS calendar feeds and write an anonymized
//! availability snapshot.
//!
//! One-shot pipeline: load config, resolve feed URLs, fetch and parse each
//! feed sequentially, concatenate the busy intervals, write the snapshot.
//! Individual feed failures are warnings; only a missing or unreadable
//! config aborts the run.
//!
//! ## Usage
//!
//! ```sh
//! # Defaults: ./config.json in, ./schedule.json out
//! availsnap
//!
//! # Explicit paths
//! availsnap --config deploy/config.json --output site/schedule.json
//!
//! # Feed URLs from the environment (overrides icsUrls in the config)
//! ICS_URLS="https://cal.example/a.ics,https://cal.example/b.ics" availsnap
//! ```

mod config;
mod fetch;

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use availsnap_core::{parse_feed, parse_timezone, BusyInterval, FetchWindow, ScheduleSnapshot};
use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;

use crate::config::Config;
use crate::fetch::{truncate_url, FeedClient};

#[derive(Parser)]
#[command(
    name = "availsnap",
    version,
    about = "Aggregate ICS calendar feeds into an availability snapshot"
)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Output file, fully overwritten on each run
    #[arg(long, default_value = "schedule.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    let tz = resolve_timezone(&config.timezone);

    let env_urls = env::var("ICS_URLS").ok();
    let urls = config.resolve_feed_urls(env_urls.as_deref());
    let configured = !urls.is_empty();

    let window = FetchWindow::current(tz);
    let client = FeedClient::new()?;

    let mut events: Vec<BusyInterval> = Vec::new();
    for url in &urls {
        println!("Fetching: {}", truncate_url(url));
        match fetch_feed(&client, url, tz, &window) {
            Ok(batch) => {
                println!("  {} event(s) found", batch.len());
                events.extend(batch);
            }
            Err(err) => {
                eprintln!("warning: could not fetch {}: {:#}", truncate_url(url), err);
            }
        }
    }

    let snapshot = ScheduleSnapshot {
        last_updated: Utc::now().with_timezone(&tz).fixed_offset(),
        timezone: tz.name().to_string(),
        owner_name: config.owner_name.clone(),
        weekly_project_hours: config.weekly_project_hours.clone(),
        workday_start: config.workday_start,
        workday_end: config.workday_end,
        configured,
        events,
    };

    let json = snapshot
        .to_json_pretty()
        .context("Failed to serialize snapshot")?;
    fs::write(&cli.output, json)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!(
        "{} written ({} event(s))",
        cli.output.display(),
        snapshot.events.len()
    );

    Ok(())
}

/// Resolve the configured zone. An unrecognized name is a warning, never a
/// fatal error — the run falls back to UTC.
fn resolve_timezone(name: &str) -> Tz {
    match parse_timezone(name) {
        Ok(tz) => tz,
        Err(_) => {
            eprintln!("warning: unknown timezone '{}', using UTC", name);
            Tz::UTC
        }
    }
}

/// Fetch and parse a single feed. Failures surface per feed; the caller
/// logs them and continues with the remaining feeds.
fn fetch_feed(
    client: &FeedClient,
    url: &str,
    tz: Tz,
    window: &FetchWindow,
) -> Result<Vec<BusyInterval>> {
    let body = client.fetch(url)?;
    Ok(parse_feed(&body, tz, window)?)
}
