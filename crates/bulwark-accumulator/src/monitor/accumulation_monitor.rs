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
    operation::OperationRequest,
    outcome::{BoundaryViolation, OperationOutcome},
};
use bulwark_core::num::domain::NumericDomain;

/// Trait for observing the evaluation of an `OperationRequest`.
pub trait AccumulationMonitor<T>: Send + Sync
where
    T: NumericDomain,
{
    /// Called once before the first step is checked.
    fn on_enter(&mut self, request: &OperationRequest<T>);

    /// Called after a step passed its bound check and was applied.
    /// `value` is the running result after the step.
    fn on_step_committed(&mut self, _step_index: u64, _value: T) {}

    /// Called when a step is rejected, before the evaluation returns.
    fn on_violation(&mut self, request: &OperationRequest<T>, violation: &BoundaryViolation);

    /// Called once when the evaluation is finished, with its outcome.
    fn on_exit(&mut self, request: &OperationRequest<T>, outcome: &OperationOutcome<T>);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<T, M> AccumulationMonitor<T> for &mut M
where
    T: NumericDomain,
    M: AccumulationMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn on_enter(&mut self, request: &OperationRequest<T>) {
        (**self).on_enter(request);
    }

    #[inline(always)]
    fn on_step_committed(&mut self, step_index: u64, value: T) {
        (**self).on_step_committed(step_index, value);
    }

    #[inline(always)]
    fn on_violation(&mut self, request: &OperationRequest<T>, violation: &BoundaryViolation) {
        (**self).on_violation(request, violation);
    }

    #[inline(always)]
    fn on_exit(&mut self, request: &OperationRequest<T>, outcome: &OperationOutcome<T>) {
        (**self).on_exit(request, outcome);
    }

    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<'a, T> std::fmt::Debug for dyn AccumulationMonitor<T> + 'a
where
    T: NumericDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccumulationMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn AccumulationMonitor<T> + 'a
where
    T: NumericDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccumulationMonitor({})", self.name())
    }
}
