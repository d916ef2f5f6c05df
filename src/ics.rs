//! Conversions from command-line input to iCalendar value text, plus
//! output writing.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use icsgen_core::time::{format_date, format_duration, format_floating, format_utc};
use std::path::Path;

/// Parse a CLI date/time into RFC 5545 text.
///
/// Accepts values already in iCalendar form (`20250320`, `20250320T150000`,
/// `20250320T150000Z`), ISO dates (`2025-03-20`), ISO date-times with or
/// without seconds (`2025-03-20T15:00`, trailing `Z` for UTC) and RFC 3339
/// date-times with an offset, which are converted to UTC.
pub fn parse_cli_datetime(input: &str) -> Result<String> {
    let input = input.trim();

    if NaiveDate::parse_from_str(input, "%Y%m%d").is_ok() {
        return Ok(input.to_string());
    }
    let (body, utc) = match input.strip_suffix('Z') {
        Some(body) => (body, true),
        None => (input, false),
    };
    if NaiveDateTime::parse_from_str(body, "%Y%m%dT%H%M%S").is_ok() {
        return Ok(input.to_string());
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(format_date(d));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(format_utc(dt.with_timezone(&Utc)));
    }

    let body = body.replacen(' ', "T", 1);
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&body, fmt) {
            return Ok(if utc {
                format_utc(dt.and_utc())
            } else {
                format_floating(dt)
            });
        }
    }

    anyhow::bail!(
        "Could not parse date/time: \"{}\"\n\
        Expected YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS][Z] or YYYYMMDDTHHMMSS[Z]",
        input
    )
}

/// Parse a duration into an RFC 5545 dur-value.
///
/// Values starting with `P` (or `-P`) are taken as already formatted;
/// anything else goes through humantime (`30m`, `1h 30m`, `2days`).
pub fn parse_cli_duration(input: &str) -> Result<String> {
    let input = input.trim();

    if input.starts_with('P') || input.starts_with("-P") {
        return Ok(input.to_string());
    }

    let std_dur = humantime::parse_duration(input)
        .with_context(|| format!("Could not parse duration: \"{}\"", input))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    Ok(format_duration(chrono_dur))
}

/// Generate a globally unique UID for a new event.
pub fn generate_uid(domain: &str) -> String {
    format!("{}@{}", uuid::Uuid::new_v4(), domain)
}

/// Write rendered content to `output`, or stdout when None.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory at {}", parent.display())
                })?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote calendar");
        }
        None => print!("{}", content),
    }
    Ok(())
}
