//! Optional diagnostics emitted while rendering.

use crate::property::ContentLine;

/// Receives every property line as it is written.
///
/// `component` is the enclosing component name (`VCALENDAR` or `VEVENT`).
pub trait RenderObserver {
    fn property(&mut self, component: &str, line: &ContentLine<'_>);
}

impl<F> RenderObserver for F
where
    F: FnMut(&str, &ContentLine<'_>),
{
    fn property(&mut self, component: &str, line: &ContentLine<'_>) {
        (*self)(component, line)
    }
}

/// Forwards each line to `tracing` at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RenderObserver for TracingObserver {
    fn property(&mut self, component: &str, line: &ContentLine<'_>) {
        tracing::trace!(
            component,
            property = %line.name,
            value = line.value,
            "Wrote property"
        );
    }
}
