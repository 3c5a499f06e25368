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

use crate::{
    monitor::accumulation_monitor::AccumulationMonitor,
    operation::OperationRequest,
    outcome::{BoundaryViolation, OperationOutcome},
};
use bulwark_core::num::domain::NumericDomain;

/// Emits `log` records for an evaluation.
///
/// Runs are logged at `debug`, violations at `warn`, and committed steps at
/// `trace` (every `step_interval`-th step, starting with step 0).
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    step_interval: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T>
where
    T: NumericDomain,
{
    /// Creates a new `LogMonitor`. A `step_interval` of 0 disables
    /// per-step records.
    pub fn new(step_interval: u64) -> Self {
        Self {
            step_interval,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn step_interval(&self) -> u64 {
        self.step_interval
    }

    #[inline(always)]
    fn should_log_step(&self, step_index: u64) -> bool {
        self.step_interval != 0 && step_index % self.step_interval == 0
    }
}

impl<T> Default for LogMonitor<T>
where
    T: NumericDomain,
{
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(step_interval: {})", self.step_interval)
    }
}

impl<T> AccumulationMonitor<T> for LogMonitor<T>
where
    T: NumericDomain,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter(&mut self, request: &OperationRequest<T>) {
        log::debug!("evaluating {}", request);
    }

    fn on_step_committed(&mut self, step_index: u64, value: T) {
        if self.should_log_step(step_index) && log::log_enabled!(log::Level::Trace) {
            log::trace!("{}: step {} committed -> {}", T::TYPE_NAME, step_index, value);
        }
    }

    fn on_violation(&mut self, request: &OperationRequest<T>, violation: &BoundaryViolation) {
        log::warn!(
            "{}: {} detected at step {} of {} ({} by {} from {})",
            T::TYPE_NAME,
            violation.kind(),
            violation.step_index(),
            request.steps(),
            request.operation().as_str(),
            request.delta(),
            request.start()
        );
    }

    fn on_exit(&mut self, request: &OperationRequest<T>, outcome: &OperationOutcome<T>) {
        log::debug!("{} finished: {}", request, outcome);
    }
}
