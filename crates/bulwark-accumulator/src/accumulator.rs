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

//! # Range-Checked Accumulator
//!
//! The engine behind every evaluation: apply `delta` to `start`, `steps`
//! times, asking the numeric domain before each step whether the step stays
//! inside its bounds.
//!
//! ## Guarantees
//!
//! - A step is either committed completely or rejected before any mutation,
//!   so the running result is always a previously validated value.
//! - The reported `step_index` is the index of the *first* rejected step,
//!   computed against the running result.
//! - `steps == 0` yields `Value(start)`; a zero delta never violates a
//!   finite start.
//! - No panics, no I/O, no allocation. Cost is linear in `steps`.
//!
//! ## Usage
//!
//! ```rust
//! use bulwark_accumulator::accumulator::{RangeCheckedAccumulator, evaluate};
//! use bulwark_accumulator::operation::{Operation, OperationRequest};
//! use bulwark_accumulator::outcome::OperationOutcome;
//! use bulwark_core::num::domain::ViolationKind;
//!
//! let outcome = evaluate(120i8, 5, 1, Operation::Addition);
//! assert_eq!(outcome, OperationOutcome::Value(125));
//!
//! let request = OperationRequest::addition(120i8, 5, 2);
//! let violation = RangeCheckedAccumulator::new()
//!     .evaluate(&request)
//!     .violation()
//!     .unwrap();
//! assert_eq!(violation.kind(), ViolationKind::Overflow);
//! assert_eq!(violation.step_index(), 1);
//! ```

use crate::{
    monitor::{accumulation_monitor::AccumulationMonitor, no_op::NoOperationMonitor},
    operation::{Operation, OperationRequest},
    outcome::{BoundaryViolation, OperationOutcome},
};
use bulwark_core::num::domain::NumericDomain;

/// Stateless evaluator of `OperationRequest`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeCheckedAccumulator;

impl RangeCheckedAccumulator {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates `request` without observation.
    #[inline]
    pub fn evaluate<T>(&self, request: &OperationRequest<T>) -> OperationOutcome<T>
    where
        T: NumericDomain,
    {
        self.evaluate_with_monitor(request, &mut NoOperationMonitor::new())
    }

    /// Evaluates `request`, reporting progress to `monitor`.
    ///
    /// The monitor sees `on_enter`, one `on_step_committed` per applied step,
    /// `on_violation` if a step is rejected, and finally `on_exit`.
    pub fn evaluate_with_monitor<T, M>(
        &self,
        request: &OperationRequest<T>,
        monitor: &mut M,
    ) -> OperationOutcome<T>
    where
        T: NumericDomain,
        M: AccumulationMonitor<T> + ?Sized,
    {
        monitor.on_enter(request);
        let outcome = accumulate(request, monitor);
        monitor.on_exit(request, &outcome);
        outcome
    }
}

/// Evaluates `steps` applications of `delta` to `start` in the given direction.
///
/// Shorthand for building an `OperationRequest` and passing it to
/// `RangeCheckedAccumulator::evaluate`.
#[inline]
pub fn evaluate<T>(start: T, delta: T, steps: u64, operation: Operation) -> OperationOutcome<T>
where
    T: NumericDomain,
{
    RangeCheckedAccumulator::new().evaluate(&OperationRequest::new(start, delta, steps, operation))
}

#[inline]
fn accumulate<T, M>(request: &OperationRequest<T>, monitor: &mut M) -> OperationOutcome<T>
where
    T: NumericDomain,
    M: AccumulationMonitor<T> + ?Sized,
{
    let delta = request.delta();
    let operation = request.operation();
    let mut result = request.start();

    for step_index in 0..request.steps() {
        let rejected = match operation {
            Operation::Addition => result.add_violation(delta),
            Operation::Subtraction => result.sub_violation(delta),
        };

        if let Some(kind) = rejected {
            let violation = BoundaryViolation::new(kind, step_index);
            monitor.on_violation(request, &violation);
            return OperationOutcome::BoundaryViolation(violation);
        }

        result = match operation {
            Operation::Addition => result.apply_add(delta),
            Operation::Subtraction => result.apply_sub(delta),
        };
        monitor.on_step_committed(step_index, result);
    }

    OperationOutcome::Value(result)
}
