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

//! Monitoring combinators for evaluation
//!
//! Provides `CompositeMonitor`, a fan‑out monitor that forwards every event
//! to its children, so logging and statistics can be combined for a single
//! evaluation. Events are dispatched in insertion order.

use crate::{
    monitor::accumulation_monitor::AccumulationMonitor,
    operation::OperationRequest,
    outcome::{BoundaryViolation, OperationOutcome},
};
use bulwark_core::num::domain::NumericDomain;

/// An accumulation monitor that aggregates multiple monitors and forwards
/// events to all of them.
pub struct CompositeMonitor<'a, T>
where
    T: NumericDomain,
{
    monitors: Vec<Box<dyn AccumulationMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: NumericDomain,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: NumericDomain,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: AccumulationMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn AccumulationMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn AccumulationMonitor<T> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn AccumulationMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: NumericDomain,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn AccumulationMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> AccumulationMonitor<T> for CompositeMonitor<'a, T>
where
    T: NumericDomain,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    #[inline(always)]
    fn on_enter(&mut self, request: &OperationRequest<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter(request);
        }
    }

    #[inline(always)]
    fn on_step_committed(&mut self, step_index: u64, value: T) {
        for monitor in &mut self.monitors {
            monitor.on_step_committed(step_index, value);
        }
    }

    #[inline(always)]
    fn on_violation(&mut self, request: &OperationRequest<T>, violation: &BoundaryViolation) {
        for monitor in &mut self.monitors {
            monitor.on_violation(request, violation);
        }
    }

    #[inline(always)]
    fn on_exit(&mut self, request: &OperationRequest<T>, outcome: &OperationOutcome<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit(request, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::statistics::StatisticsMonitor;
    use bulwark_core::num::domain::ViolationKind;
    use std::sync::{Arc, Mutex};

    struct RecordingMonitor {
        label: &'static str,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingMonitor {
        fn push(&self, event: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, event));
        }
    }

    impl AccumulationMonitor<i32> for RecordingMonitor {
        fn name(&self) -> &str {
            self.label
        }

        fn on_enter(&mut self, _request: &OperationRequest<i32>) {
            self.push("enter");
        }

        fn on_step_committed(&mut self, step_index: u64, value: i32) {
            self.push(&format!("step{}={}", step_index, value));
        }

        fn on_violation(&mut self, _request: &OperationRequest<i32>, violation: &BoundaryViolation) {
            self.push(&format!("violation@{}", violation.step_index()));
        }

        fn on_exit(&mut self, _request: &OperationRequest<i32>, _outcome: &OperationOutcome<i32>) {
            self.push("exit");
        }
    }

    #[test]
    fn test_events_reach_every_child_in_insertion_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut composite = CompositeMonitor::<i32>::with_capacity(2);
        composite.add_monitor(RecordingMonitor {
            label: "a",
            events: Arc::clone(&events),
        });
        composite.add_monitor_boxed(Box::new(RecordingMonitor {
            label: "b",
            events: Arc::clone(&events),
        }));
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());

        let request = OperationRequest::addition(0, 1, 2);
        let violation = BoundaryViolation::new(ViolationKind::Overflow, 1);
        composite.on_enter(&request);
        composite.on_step_committed(0, 1);
        composite.on_violation(&request, &violation);
        composite.on_exit(&request, &violation.into());

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "a:enter",
                "b:enter",
                "a:step0=1",
                "b:step0=1",
                "a:violation@1",
                "b:violation@1",
                "a:exit",
                "b:exit",
            ]
        );
    }

    #[test]
    fn test_from_iterator() {
        let boxed: Vec<Box<dyn AccumulationMonitor<u8>>> = vec![
            Box::new(StatisticsMonitor::new()),
            Box::new(StatisticsMonitor::new()),
            Box::new(StatisticsMonitor::new()),
        ];
        let composite: CompositeMonitor<'_, u8> = boxed.into_iter().collect();
        assert_eq!(composite.len(), 3);
        assert_eq!(
            format!("{:?}", composite.monitors()[0]),
            "AccumulationMonitor(StatisticsMonitor)"
        );
    }
}
