//! Error types for calendar serialization.

use std::fmt;

use thiserror::Error;

/// Which object failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Calendar,
    /// `index` is the position inside the owning calendar (None when the
    /// event was rendered on its own). `uid` is None when the uid is empty.
    Event {
        index: Option<usize>,
        uid: Option<String>,
    },
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Calendar => write!(f, "calendar"),
            Subject::Event { index, uid } => {
                write!(f, "event")?;
                if let Some(uid) = uid {
                    write!(f, " '{uid}'")?;
                }
                if let Some(index) = index {
                    write!(f, " (#{index})")?;
                }
                Ok(())
            }
        }
    }
}

/// The invariant that was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("missing required property {0}")]
    MissingProperty(&'static str),

    #[error("DTEND and DURATION must not both be set")]
    EndAndDuration,
}

/// Raised when a calendar or event is not well-formed at render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{subject}: {violation}")]
pub struct ValidationError {
    pub subject: Subject,
    pub violation: Violation,
}

impl ValidationError {
    pub fn calendar(violation: Violation) -> Self {
        ValidationError {
            subject: Subject::Calendar,
            violation,
        }
    }

    pub fn event(uid: &str, violation: Violation) -> Self {
        ValidationError {
            subject: Subject::Event {
                index: None,
                uid: (!uid.is_empty()).then(|| uid.to_string()),
            },
            violation,
        }
    }

    /// Attach the event's position within its calendar.
    pub fn at_index(mut self, position: usize) -> Self {
        if let Subject::Event { index, .. } = &mut self.subject {
            *index = Some(position);
        }
        self
    }
}

/// Result type alias for rendering operations.
pub type IcsResult<T> = Result<T, ValidationError>;
