//! VEVENT model and serializer.

use serde::{Deserialize, Serialize};

use crate::constants::CRLF;
use crate::error::{IcsResult, ValidationError, Violation};
use crate::observer::{RenderObserver, TracingObserver};
use crate::property::{ContentLine, EventProperty, ExtraProperty};

/// A calendar event (VEVENT).
///
/// Every value is stored as the exact text written after the colon. An
/// empty string or empty list means "unset" and is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    // Required
    pub uid: String,
    /// DTSTAMP, `YYYYMMDDTHHMMSSZ`
    pub timestamp: String,
    /// Always required here, even when the calendar carries METHOD.
    pub start_time: String,
    pub end_time: String,

    pub summary: String,
    pub classification: String,
    pub created: String,
    pub description: String,
    pub geo: String,
    pub last_modified: String,
    pub location: String,
    pub organizer: String,
    pub priority: String,
    pub sequence: String,
    pub status: String,
    pub transparency: String,
    pub url: String,
    pub recurrence_id: String,
    pub recurrence_rule: String,
    /// Mutually exclusive with `end_time`
    pub duration: String,

    // One line per entry
    pub attachments: Vec<String>,
    pub attendees: Vec<String>,
    pub categories: Vec<String>,
    pub comments: Vec<String>,
    pub contacts: Vec<String>,
    pub exception_dates: Vec<String>,
    pub request_status: Vec<String>,
    pub related_to: Vec<String>,
    pub resources: Vec<String>,
    pub recurrence_dates: Vec<String>,
    pub x_properties: Vec<ExtraProperty>,
    pub iana_properties: Vec<ExtraProperty>,
}

impl Event {
    /// Create an event with DTSTAMP set to the current UTC time.
    pub fn new(uid: impl Into<String>) -> Self {
        Event {
            uid: uid.into(),
            timestamp: crate::time::now_utc(),
            ..Default::default()
        }
    }

    /// Check required properties and the DTEND/DURATION exclusion.
    ///
    /// Rules are checked in order and the first failure is returned.
    pub fn validate(&self) -> IcsResult<()> {
        let required = [
            (EventProperty::Uid, &self.uid),
            (EventProperty::Timestamp, &self.timestamp),
            (EventProperty::StartTime, &self.start_time),
        ];

        for (property, value) in required {
            if value.is_empty() {
                return Err(ValidationError::event(
                    &self.uid,
                    Violation::MissingProperty(property.name()),
                ));
            }
        }

        if !self.end_time.is_empty() && !self.duration.is_empty() {
            return Err(ValidationError::event(&self.uid, Violation::EndAndDuration));
        }

        Ok(())
    }

    /// Every property line this event produces, in emission order.
    pub fn content_lines(&self) -> Vec<ContentLine<'_>> {
        let mut lines = Vec::new();
        for property in EventProperty::ALL {
            self.push_lines(property, &mut lines);
        }
        lines
    }

    fn push_lines<'a>(&'a self, property: EventProperty, out: &mut Vec<ContentLine<'a>>) {
        match property {
            EventProperty::Extensions => out.extend(
                self.x_properties
                    .iter()
                    .filter(|p| !p.is_empty())
                    .map(ExtraProperty::as_extension_line),
            ),
            EventProperty::IanaProperties => out.extend(
                self.iana_properties
                    .iter()
                    .filter(|p| !p.is_empty())
                    .map(ExtraProperty::as_line),
            ),
            _ if property.is_multi() => out.extend(
                self.values(property)
                    .iter()
                    .filter(|v| !v.is_empty())
                    .map(|v| ContentLine::new(property.name(), v)),
            ),
            _ => {
                let value = self.value(property);
                if !value.is_empty() {
                    out.push(ContentLine::new(property.name(), value));
                }
            }
        }
    }

    /// Value of a single-valued property. Empty for multi-valued rows.
    pub fn value(&self, property: EventProperty) -> &str {
        match property {
            EventProperty::Uid => &self.uid,
            EventProperty::Timestamp => &self.timestamp,
            EventProperty::StartTime => &self.start_time,
            EventProperty::EndTime => &self.end_time,
            EventProperty::Summary => &self.summary,
            EventProperty::Classification => &self.classification,
            EventProperty::Created => &self.created,
            EventProperty::Description => &self.description,
            EventProperty::Geo => &self.geo,
            EventProperty::LastModified => &self.last_modified,
            EventProperty::Location => &self.location,
            EventProperty::Organizer => &self.organizer,
            EventProperty::Priority => &self.priority,
            EventProperty::Sequence => &self.sequence,
            EventProperty::Status => &self.status,
            EventProperty::Transparency => &self.transparency,
            EventProperty::Url => &self.url,
            EventProperty::RecurrenceId => &self.recurrence_id,
            EventProperty::RecurrenceRule => &self.recurrence_rule,
            EventProperty::Duration => &self.duration,
            _ => "",
        }
    }

    /// Entries of a multi-valued text property. Empty for every other row,
    /// including the X- and IANA rows.
    pub fn values(&self, property: EventProperty) -> &[String] {
        match property {
            EventProperty::Attachments => &self.attachments,
            EventProperty::Attendees => &self.attendees,
            EventProperty::Categories => &self.categories,
            EventProperty::Comments => &self.comments,
            EventProperty::Contacts => &self.contacts,
            EventProperty::ExceptionDates => &self.exception_dates,
            EventProperty::RequestStatus => &self.request_status,
            EventProperty::RelatedTo => &self.related_to,
            EventProperty::Resources => &self.resources,
            EventProperty::RecurrenceDates => &self.recurrence_dates,
            _ => &[],
        }
    }

    /// Render this event as a `BEGIN:VEVENT` .. `END:VEVENT` block.
    pub fn render(&self) -> IcsResult<String> {
        self.render_with(&mut TracingObserver)
    }

    /// Render, reporting each property line to `observer`.
    pub fn render_with<O>(&self, observer: &mut O) -> IcsResult<String>
    where
        O: RenderObserver + ?Sized,
    {
        self.validate()?;

        let mut out = String::new();
        out.push_str("BEGIN:VEVENT");
        out.push_str(CRLF);

        for line in self.content_lines() {
            observer.property("VEVENT", &line);
            out.push_str(&line.to_string());
            out.push_str(CRLF);
        }

        out.push_str("END:VEVENT");
        out.push_str(CRLF);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Subject;

    fn make_test_event() -> Event {
        Event {
            uid: "e1".to_string(),
            timestamp: "20240101T000000Z".to_string(),
            start_time: "20240101T100000Z".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_sets_timestamp() {
        let event = Event::new("abc");
        assert_eq!(event.uid, "abc");
        assert_eq!(event.timestamp.len(), 16);
        assert!(event.timestamp.ends_with('Z'));
        assert!(event.start_time.is_empty());
    }

    #[test]
    fn test_render_minimal() {
        let ics = make_test_event().render().unwrap();
        assert_eq!(
            ics,
            "BEGIN:VEVENT\r\n\
             UID:e1\r\n\
             DTSTAMP:20240101T000000Z\r\n\
             DTSTART:20240101T100000Z\r\n\
             END:VEVENT\r\n"
        );
    }

    #[test]
    fn test_missing_required_properties() {
        let cases: [(fn(&mut Event), &str); 3] = [
            (|e| e.uid.clear(), "UID"),
            (|e| e.timestamp.clear(), "DTSTAMP"),
            (|e| e.start_time.clear(), "DTSTART"),
        ];

        for (clear, name) in cases {
            let mut event = make_test_event();
            clear(&mut event);
            let err = event.render().unwrap_err();
            assert_eq!(err.violation, Violation::MissingProperty(name));
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let event = Event {
            end_time: "20240101T110000Z".to_string(),
            duration: "PT1H".to_string(),
            ..Default::default()
        };
        let err = event.validate().unwrap_err();
        assert_eq!(err.violation, Violation::MissingProperty("UID"));
        assert_eq!(
            err.subject,
            Subject::Event {
                index: None,
                uid: None
            }
        );
    }

    #[test]
    fn test_end_and_duration_rejected() {
        let mut event = make_test_event();
        event.summary = "Standup".to_string();
        event.end_time = "20240101T110000Z".to_string();
        event.duration = "PT1H".to_string();

        let err = event.render().unwrap_err();
        assert_eq!(err.violation, Violation::EndAndDuration);
        assert_eq!(
            err.subject,
            Subject::Event {
                index: None,
                uid: Some("e1".to_string())
            }
        );
    }

    #[test]
    fn test_end_or_duration_alone_accepted() {
        let mut with_end = make_test_event();
        with_end.end_time = "20240101T110000Z".to_string();
        assert!(with_end.render().unwrap().contains("DTEND:20240101T110000Z\r\n"));

        let mut with_duration = make_test_event();
        with_duration.duration = "PT1H".to_string();
        assert!(with_duration.render().unwrap().contains("DURATION:PT1H\r\n"));
    }

    #[test]
    fn test_order_independent_of_assignment_order() {
        let mut event = make_test_event();
        event.categories.push("WORK".to_string());
        event.duration = "PT30M".to_string();
        event.sequence = "2".to_string();
        event.last_modified = "20240101T090000Z".to_string();
        event.summary = "Review".to_string();

        let names: Vec<String> = event
            .content_lines()
            .into_iter()
            .map(|l| l.name.into_owned())
            .collect();
        assert_eq!(
            names,
            [
                "UID",
                "DTSTAMP",
                "DTSTART",
                "SUMMARY",
                "LAST-MODIFIED",
                "SEQUENCE",
                "DURATION",
                "CATEGORIES"
            ]
        );
    }

    #[test]
    fn test_multi_valued_lines_keep_insertion_order() {
        let mut event = make_test_event();
        event.attendees = vec![
            "mailto:bob@example.com".to_string(),
            "mailto:alice@example.com".to_string(),
        ];
        event.comments = vec!["first".to_string(), String::new(), "second".to_string()];

        let ics = event.render().unwrap();
        assert!(ics.contains(
            "ATTENDEE:mailto:bob@example.com\r\n\
             ATTENDEE:mailto:alice@example.com\r\n\
             COMMENT:first\r\n\
             COMMENT:second\r\n"
        ));
    }

    #[test]
    fn test_extension_and_iana_properties_last() {
        let mut event = make_test_event();
        event.iana_properties.push(ExtraProperty::new("COLOR", "red"));
        event.x_properties.push(ExtraProperty::new("MICROSOFT-CDO-BUSYSTATUS", "BUSY"));
        event.x_properties.push(ExtraProperty::new("", "orphan"));
        event.recurrence_dates.push("20240108T100000Z".to_string());

        let ics = event.render().unwrap();
        assert!(ics.ends_with(
            "RDATE:20240108T100000Z\r\n\
             X-MICROSOFT-CDO-BUSYSTATUS:BUSY\r\n\
             COLOR:red\r\n\
             END:VEVENT\r\n"
        ));
        assert!(!ics.contains("orphan"));
    }

    #[test]
    fn test_setting_field_adds_exactly_one_line() {
        let mut event = make_test_event();
        let before = event.render().unwrap();

        event.location = "Room 4".to_string();
        let after = event.render().unwrap();

        assert_eq!(after.lines().count(), before.lines().count() + 1);
        assert!(after.contains("DTSTART:20240101T100000Z\r\nLOCATION:Room 4\r\nEND:VEVENT"));
    }

    #[test]
    fn test_observer_sees_every_line() {
        let mut event = make_test_event();
        event.summary = "Standup".to_string();

        let mut seen = Vec::new();
        let mut record = |component: &str, line: &ContentLine<'_>| {
            seen.push(format!("{component} {line}"));
        };
        event.render_with(&mut record).unwrap();

        assert_eq!(
            seen,
            [
                "VEVENT UID:e1",
                "VEVENT DTSTAMP:20240101T000000Z",
                "VEVENT DTSTART:20240101T100000Z",
                "VEVENT SUMMARY:Standup",
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut event = make_test_event();
        event.resources.push("PROJECTOR".to_string());
        assert_eq!(event.render().unwrap(), event.render().unwrap());
    }

    #[test]
    fn test_deserialize_partial_event() {
        let event: Event = serde_json::from_str(
            r#"{"uid":"e9","timestamp":"20240101T000000Z","start_time":"20240102","categories":["A","B"]}"#,
        )
        .unwrap();
        assert_eq!(event.categories, ["A", "B"]);
        assert!(event.summary.is_empty());
    }
}
