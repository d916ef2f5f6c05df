//! VCALENDAR model and serializer.

use serde::{Deserialize, Serialize};

use crate::constants::{CRLF, DEFAULT_PRODUCT_ID, ICALENDAR_VERSION};
use crate::error::{IcsResult, ValidationError, Violation};
use crate::event::Event;
use crate::observer::{RenderObserver, TracingObserver};
use crate::property::ContentLine;

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

fn default_version() -> String {
    ICALENDAR_VERSION.to_string()
}

/// A calendar document (VCALENDAR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    // Required
    #[serde(default = "default_product_id")]
    pub product_id: String,
    #[serde(default = "default_version")]
    pub version: String,

    // Modeled but not written yet
    #[serde(default)]
    pub calendar_scale: String,
    #[serde(default)]
    pub method: String,

    /// Written in insertion order
    #[serde(default)]
    pub events: Vec<Event>,

    // Other component kinds are carried opaquely and never rendered
    #[serde(default)]
    pub todos: Vec<String>,
    #[serde(default)]
    pub journals: Vec<String>,
    #[serde(default)]
    pub free_busy: Vec<String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub alarms: Vec<String>,
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar {
            product_id: default_product_id(),
            version: default_version(),
            calendar_scale: String::new(),
            method: String::new(),
            events: Vec::new(),
            todos: Vec::new(),
            journals: Vec::new(),
            free_busy: Vec::new(),
            timezones: Vec::new(),
            alarms: Vec::new(),
        }
    }
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_id(product_id: impl Into<String>) -> Self {
        Calendar {
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    /// Append an event. Events render in the order they were added.
    pub fn add_event(&mut self, event: Event) -> &mut Self {
        self.events.push(event);
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Check VERSION and PRODID. Events are validated when rendered.
    pub fn validate(&self) -> IcsResult<()> {
        if self.version.is_empty() {
            return Err(ValidationError::calendar(Violation::MissingProperty(
                "VERSION",
            )));
        }
        if self.product_id.is_empty() {
            return Err(ValidationError::calendar(Violation::MissingProperty(
                "PRODID",
            )));
        }
        Ok(())
    }

    /// Render the whole document.
    pub fn render(&self) -> IcsResult<String> {
        self.render_with(&mut TracingObserver)
    }

    /// Render, reporting each property line to `observer`.
    ///
    /// If any event is invalid the error is returned with that event's
    /// position and no text is produced.
    pub fn render_with<O>(&self, observer: &mut O) -> IcsResult<String>
    where
        O: RenderObserver + ?Sized,
    {
        self.validate()?;

        let mut out = String::new();
        out.push_str("BEGIN:VCALENDAR");
        out.push_str(CRLF);

        for line in [
            ContentLine::new("VERSION", &self.version),
            ContentLine::new("PRODID", &self.product_id),
        ] {
            observer.property("VCALENDAR", &line);
            out.push_str(&line.to_string());
            out.push_str(CRLF);
        }

        for (index, event) in self.events.iter().enumerate() {
            let block = event.render_with(observer).map_err(|e| {
                tracing::debug!(index, error = %e, "Event failed validation");
                e.at_index(index)
            })?;
            out.push_str(&block);
        }

        out.push_str("END:VCALENDAR");
        out.push_str(CRLF);

        tracing::debug!(
            events = self.events.len(),
            bytes = out.len(),
            "Rendered calendar"
        );

        Ok(out)
    }
}
