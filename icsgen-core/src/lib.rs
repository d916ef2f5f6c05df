//! Calendar and event types with an RFC 5545 serializer.
//!
//! This crate provides the in-memory model used by icsgen:
//! - `Calendar` (VCALENDAR) holding an ordered list of events
//! - `Event` (VEVENT) with every property the serializer knows about
//! - `property` module with the fixed property emission order
//!
//! Rendering is all-or-nothing: an object that fails validation yields a
//! `ValidationError` and no text.

pub mod calendar;
pub mod constants;
pub mod error;
pub mod event;
pub mod observer;
pub mod property;
pub mod time;

pub use calendar::Calendar;
pub use error::{IcsResult, Subject, ValidationError, Violation};
pub use event::Event;
pub use observer::{RenderObserver, TracingObserver};
pub use property::{ContentLine, EventProperty, ExtraProperty};
