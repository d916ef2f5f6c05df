//! Timestamp formatting for iCalendar values.
//!
//! The serializer treats every value as opaque text; these helpers produce
//! that text in the forms RFC 5545 expects.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const FLOATING_FORMAT: &str = "%Y%m%dT%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

/// UTC date-time, e.g. `20250320T150000Z`.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format(UTC_FORMAT).to_string()
}

/// Current time in UTC form. Used for DTSTAMP on new events.
pub fn now_utc() -> String {
    format_utc(Utc::now())
}

/// Floating (local) date-time without a zone suffix, e.g. `20250320T150000`.
pub fn format_floating(dt: NaiveDateTime) -> String {
    dt.format(FLOATING_FORMAT).to_string()
}

/// DATE value, e.g. `20250320`.
pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// RFC 5545 dur-value (section 3.3.6).
///
/// Whole weeks are written as `PnW`, everything else as days plus a time
/// part. Sub-second precision is dropped.
pub fn format_duration(duration: Duration) -> String {
    let negative = duration < Duration::zero();
    let mut secs = duration.num_seconds().unsigned_abs();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('P');

    if secs == 0 {
        out.push_str("T0S");
        return out;
    }

    const WEEK: u64 = 7 * 24 * 3600;
    if secs % WEEK == 0 {
        out.push_str(&format!("{}W", secs / WEEK));
        return out;
    }

    let days = secs / 86_400;
    secs %= 86_400;
    let hours = secs / 3600;
    secs %= 3600;
    let minutes = secs / 60;
    let seconds = secs % 60;

    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        // dur-time requires minutes between hours and seconds
        if minutes > 0 || (hours > 0 && seconds > 0) {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 {
            out.push_str(&format!("{seconds}S"));
        }
    }

    out
}
