/// Product identifier written to PRODID when the caller doesn't set one.
pub const DEFAULT_PRODUCT_ID: &str = "-//icsgen//icsgen//EN";

/// The only iCalendar version this crate produces.
pub const ICALENDAR_VERSION: &str = "2.0";

/// Content line terminator.
pub const CRLF: &str = "\r\n";
