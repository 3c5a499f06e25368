// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{error::SinkError, event::BoundaryEvent};
use bulwark_accumulator::{operation::Operation, outcome::OperationOutcome, probe::ProbeReport};
use bulwark_core::num::domain::NumericDomain;

/// An append-only recorder of boundary violation events.
///
/// `record` takes `&self`: implementations serialize concurrent writers
/// themselves, so any number of callers may forward results at once.
pub trait EventSink: Send + Sync {
    /// Appends `event`.
    fn record(&self, event: &BoundaryEvent) -> Result<(), SinkError>;

    /// Returns the name of the sink.
    fn name(&self) -> &str;
}

impl<S> EventSink for &S
where
    S: EventSink + ?Sized,
{
    #[inline]
    fn record(&self, event: &BoundaryEvent) -> Result<(), SinkError> {
        (**self).record(event)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S> EventSink for std::sync::Arc<S>
where
    S: EventSink + ?Sized,
{
    #[inline]
    fn record(&self, event: &BoundaryEvent) -> Result<(), SinkError> {
        (**self).record(event)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl std::fmt::Debug for dyn EventSink + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EventSink({})", self.name())
    }
}

/// Records one event for a violating `outcome` and nothing for a value.
///
/// Returns whether an event was recorded.
pub fn forward_outcome<T, S>(
    sink: &S,
    type_name: &str,
    operation: Operation,
    outcome: &OperationOutcome<T>,
) -> Result<bool, SinkError>
where
    T: NumericDomain,
    S: EventSink + ?Sized,
{
    let Some(violation) = outcome.violation() else {
        return Ok(false);
    };

    sink.record(&BoundaryEvent::from_violation(
        type_name,
        operation,
        violation.kind(),
    ))?;
    Ok(true)
}

/// Forwards both outcomes of a probe, using the domain's type name.
///
/// Returns the number of events recorded.
pub fn forward_report<T, S>(sink: &S, report: &ProbeReport<T>) -> Result<usize, SinkError>
where
    T: NumericDomain,
    S: EventSink + ?Sized,
{
    let operation = report.request().operation();
    let mut recorded = 0;
    for outcome in [report.within(), report.beyond()] {
        if forward_outcome(sink, T::TYPE_NAME, operation, outcome)? {
            recorded += 1;
        }
    }
    Ok(recorded)
}
