//! VEVENT property table.
//!
//! `EventProperty::ALL` is the order properties are written in. It is part
//! of the output format, so reordering it changes every rendered document.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the VEVENT emission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventProperty {
    Uid,
    Timestamp,
    StartTime,
    EndTime,
    Summary,
    Classification,
    Created,
    Description,
    Geo,
    LastModified,
    Location,
    Organizer,
    Priority,
    Sequence,
    Status,
    Transparency,
    Url,
    RecurrenceId,
    RecurrenceRule,
    Duration,
    Attachments,
    Attendees,
    Categories,
    Comments,
    Contacts,
    ExceptionDates,
    RequestStatus,
    RelatedTo,
    Resources,
    RecurrenceDates,
    Extensions,
    IanaProperties,
}

impl EventProperty {
    pub const ALL: [EventProperty; 32] = [
        EventProperty::Uid,
        EventProperty::Timestamp,
        EventProperty::StartTime,
        EventProperty::EndTime,
        EventProperty::Summary,
        EventProperty::Classification,
        EventProperty::Created,
        EventProperty::Description,
        EventProperty::Geo,
        EventProperty::LastModified,
        EventProperty::Location,
        EventProperty::Organizer,
        EventProperty::Priority,
        EventProperty::Sequence,
        EventProperty::Status,
        EventProperty::Transparency,
        EventProperty::Url,
        EventProperty::RecurrenceId,
        EventProperty::RecurrenceRule,
        EventProperty::Duration,
        EventProperty::Attachments,
        EventProperty::Attendees,
        EventProperty::Categories,
        EventProperty::Comments,
        EventProperty::Contacts,
        EventProperty::ExceptionDates,
        EventProperty::RequestStatus,
        EventProperty::RelatedTo,
        EventProperty::Resources,
        EventProperty::RecurrenceDates,
        EventProperty::Extensions,
        EventProperty::IanaProperties,
    ];

    /// RFC 5545 property name.
    ///
    /// X- and IANA rows return a placeholder; their real names come from
    /// each `ExtraProperty` entry.
    pub fn name(self) -> &'static str {
        match self {
            EventProperty::Uid => "UID",
            EventProperty::Timestamp => "DTSTAMP",
            EventProperty::StartTime => "DTSTART",
            EventProperty::EndTime => "DTEND",
            EventProperty::Summary => "SUMMARY",
            EventProperty::Classification => "CLASS",
            EventProperty::Created => "CREATED",
            EventProperty::Description => "DESCRIPTION",
            EventProperty::Geo => "GEO",
            EventProperty::LastModified => "LAST-MODIFIED",
            EventProperty::Location => "LOCATION",
            EventProperty::Organizer => "ORGANIZER",
            EventProperty::Priority => "PRIORITY",
            EventProperty::Sequence => "SEQUENCE",
            EventProperty::Status => "STATUS",
            EventProperty::Transparency => "TRANSP",
            EventProperty::Url => "URL",
            EventProperty::RecurrenceId => "RECURRENCE-ID",
            EventProperty::RecurrenceRule => "RRULE",
            EventProperty::Duration => "DURATION",
            EventProperty::Attachments => "ATTACH",
            EventProperty::Attendees => "ATTENDEE",
            EventProperty::Categories => "CATEGORIES",
            EventProperty::Comments => "COMMENT",
            EventProperty::Contacts => "CONTACT",
            EventProperty::ExceptionDates => "EXDATE",
            EventProperty::RequestStatus => "REQUEST-STATUS",
            EventProperty::RelatedTo => "RELATED-TO",
            EventProperty::Resources => "RESOURCES",
            EventProperty::RecurrenceDates => "RDATE",
            EventProperty::Extensions => "X-<name>",
            EventProperty::IanaProperties => "<iana-token>",
        }
    }

    /// Whether the property may appear on more than one line.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            EventProperty::Attachments
                | EventProperty::Attendees
                | EventProperty::Categories
                | EventProperty::Comments
                | EventProperty::Contacts
                | EventProperty::ExceptionDates
                | EventProperty::RequestStatus
                | EventProperty::RelatedTo
                | EventProperty::Resources
                | EventProperty::RecurrenceDates
                | EventProperty::Extensions
                | EventProperty::IanaProperties
        )
    }
}

impl fmt::Display for EventProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single `NAME:VALUE` property line, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<'a> {
    pub name: Cow<'a, str>,
    pub value: &'a str,
}

impl<'a> ContentLine<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, value: &'a str) -> Self {
        ContentLine {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for ContentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// A named property carried verbatim (X- extensions and IANA-registered
/// properties the model has no field for).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtraProperty {
    pub name: String,
    pub value: String,
}

impl ExtraProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ExtraProperty {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Entries with an empty name or value are never written.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.value.is_empty()
    }

    /// Line for an X- extension, adding the prefix when it's missing.
    pub(crate) fn as_extension_line(&self) -> ContentLine<'_> {
        let has_prefix = self
            .name
            .get(..2)
            .is_some_and(|p| p.eq_ignore_ascii_case("X-"));

        if has_prefix {
            ContentLine::new(self.name.as_str(), &self.value)
        } else {
            ContentLine::new(format!("X-{}", self.name), &self.value)
        }
    }

    pub(crate) fn as_line(&self) -> ContentLine<'_> {
        ContentLine::new(self.name.as_str(), &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_emission_order_matches_rfc_names() {
        let names: Vec<&str> = EventProperty::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names[..30],
            [
                "UID",
                "DTSTAMP",
                "DTSTART",
                "DTEND",
                "SUMMARY",
                "CLASS",
                "CREATED",
                "DESCRIPTION",
                "GEO",
                "LAST-MODIFIED",
                "LOCATION",
                "ORGANIZER",
                "PRIORITY",
                "SEQUENCE",
                "STATUS",
                "TRANSP",
                "URL",
                "RECURRENCE-ID",
                "RRULE",
                "DURATION",
                "ATTACH",
                "ATTENDEE",
                "CATEGORIES",
                "COMMENT",
                "CONTACT",
                "EXDATE",
                "REQUEST-STATUS",
                "RELATED-TO",
                "RESOURCES",
                "RDATE",
            ]
        );
        assert_eq!(EventProperty::ALL[30], EventProperty::Extensions);
        assert_eq!(EventProperty::ALL[31], EventProperty::IanaProperties);
    }

    #[test]
    fn test_table_has_no_duplicates() {
        let unique: HashSet<_> = EventProperty::ALL.iter().collect();
        assert_eq!(unique.len(), EventProperty::ALL.len());
    }

    #[test]
    fn test_scalars_precede_multi_valued() {
        let first_multi = EventProperty::ALL
            .iter()
            .position(|p| p.is_multi())
            .unwrap();
        assert_eq!(EventProperty::ALL[first_multi], EventProperty::Attachments);
        assert!(EventProperty::ALL[first_multi..].iter().all(|p| p.is_multi()));
    }

    #[test]
    fn test_extension_prefix_added_once() {
        let bare = ExtraProperty::new("WR-CALNAME", "Work");
        assert_eq!(bare.as_extension_line().to_string(), "X-WR-CALNAME:Work");

        let prefixed = ExtraProperty::new("x-custom", "1");
        assert_eq!(prefixed.as_extension_line().to_string(), "x-custom:1");
    }

    #[test]
    fn test_extra_property_emptiness() {
        assert!(ExtraProperty::new("", "value").is_empty());
        assert!(ExtraProperty::new("X-FOO", "").is_empty());
        assert!(!ExtraProperty::new("X-FOO", "bar").is_empty());
    }
}
