use anyhow::{Context, Result};
use clap::Args;
use icsgen_core::{Calendar, Event};
use std::path::PathBuf;

use crate::config::Config;
use crate::ics;

#[derive(Debug, Args)]
pub struct EventArgs {
    /// Event summary/title
    #[arg(long)]
    pub summary: Option<String>,

    /// Start date/time (e.g., "2025-03-20", "2025-03-20T15:00", "20250320T150000Z")
    #[arg(short, long)]
    pub start: String,

    /// End date/time
    #[arg(short, long, conflicts_with = "duration")]
    pub end: Option<String>,

    /// Duration (e.g., "30m", "1h 30m", "PT45M")
    #[arg(short, long, conflicts_with = "end")]
    pub duration: Option<String>,

    /// Unique identifier (generated when omitted)
    #[arg(long)]
    pub uid: Option<String>,

    /// Event description
    #[arg(long)]
    pub description: Option<String>,

    /// Event location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Category (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Attendee calendar address, e.g. "mailto:bob@example.com" (repeatable)
    #[arg(long = "attendee")]
    pub attendees: Vec<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: EventArgs, config: &Config) -> Result<()> {
    let event = build_event(&args, config)?;
    tracing::info!(uid = %event.uid, "Built event");

    let mut calendar = match &config.product_id {
        Some(product_id) => Calendar::with_product_id(product_id.as_str()),
        None => Calendar::new(),
    };
    calendar.add_event(event);

    let ics_content = calendar.render().context("Event is not valid")?;
    ics::write_output(&ics_content, args.output.as_deref())
}

fn build_event(args: &EventArgs, config: &Config) -> Result<Event> {
    let uid = args
        .uid
        .clone()
        .unwrap_or_else(|| ics::generate_uid(&config.uid_domain));

    let mut event = Event::new(uid);
    event.start_time = ics::parse_cli_datetime(&args.start)?;

    if let Some(end) = &args.end {
        event.end_time = ics::parse_cli_datetime(end)?;
    }
    if let Some(duration) = &args.duration {
        event.duration = ics::parse_cli_duration(duration)?;
    }

    event.summary = args.summary.clone().unwrap_or_default();
    event.description = args.description.clone().unwrap_or_default();
    event.location = args.location.clone().unwrap_or_default();
    event.categories = args.categories.clone();
    event.attendees = args.attendees.clone();

    Ok(event)
}
