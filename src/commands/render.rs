use anyhow::{Context, Result};
use icsgen_core::constants::DEFAULT_PRODUCT_ID;
use icsgen_core::{time, Calendar};
use std::path::Path;

use crate::config::Config;
use crate::ics;

pub fn run(input: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let calendar = load_document(input, config)?;

    let ics_content = calendar
        .render()
        .with_context(|| format!("Calendar in {} is not valid", input.display()))?;

    tracing::info!(events = calendar.events.len(), "Rendered calendar");
    ics::write_output(&ics_content, output)
}

/// Load a calendar document (JSON for `.json`, TOML otherwise).
fn load_document(path: &Path, config: &Config) -> Result<Calendar> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path.extension().is_some_and(|e| e == "json");
    let mut calendar: Calendar = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON calendar at {}", path.display()))?
    } else {
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML calendar at {}", path.display()))?
    };

    // The configured PRODID replaces the library default, not an explicit one
    if let Some(product_id) = &config.product_id
        && calendar.product_id == DEFAULT_PRODUCT_ID
    {
        calendar.product_id = product_id.clone();
    }

    let stamp = time::now_utc();
    for event in calendar.events.iter_mut().filter(|e| e.timestamp.is_empty()) {
        tracing::debug!(uid = %event.uid, "Event has no timestamp, using current time");
        event.timestamp = stamp.clone();
    }

    Ok(calendar)
}
