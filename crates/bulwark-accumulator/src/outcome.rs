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

use bulwark_core::num::domain::ViolationKind;
use thiserror::Error;

/// The first step of a run that would have left the numeric domain.
///
/// Implements `std::error::Error` so callers that prefer `?` can convert an
/// outcome with `OperationOutcome::into_result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} detected at step {step_index}")]
pub struct BoundaryViolation {
    kind: ViolationKind,
    step_index: u64,
}

impl BoundaryViolation {
    #[inline]
    pub fn new(kind: ViolationKind, step_index: u64) -> Self {
        Self { kind, step_index }
    }

    /// The bound that would have been crossed.
    #[inline]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The 0-based index of the rejected step.
    #[inline]
    pub fn step_index(&self) -> u64 {
        self.step_index
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, ViolationKind::Overflow)
    }

    #[inline]
    pub fn is_underflow(&self) -> bool {
        matches!(self.kind, ViolationKind::Underflow)
    }
}

/// The result of evaluating an `OperationRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationOutcome<T> {
    /// Every step stayed inside the domain; holds the final value.
    Value(T),
    /// A step would have left the domain. No partial value is reported.
    BoundaryViolation(BoundaryViolation),
}

impl<T> OperationOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, OperationOutcome::Value(_))
    }

    #[inline]
    pub fn is_violation(&self) -> bool {
        matches!(self, OperationOutcome::BoundaryViolation(_))
    }

    /// Returns the final value, if the run completed.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match self {
            OperationOutcome::Value(value) => Some(*value),
            OperationOutcome::BoundaryViolation(_) => None,
        }
    }

    /// Returns the violation, if the run was aborted.
    #[inline]
    pub fn violation(&self) -> Option<BoundaryViolation> {
        match self {
            OperationOutcome::Value(_) => None,
            OperationOutcome::BoundaryViolation(violation) => Some(*violation),
        }
    }

    /// Converts the outcome into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, BoundaryViolation> {
        match self {
            OperationOutcome::Value(value) => Ok(value),
            OperationOutcome::BoundaryViolation(violation) => Err(violation),
        }
    }
}

impl<T> From<BoundaryViolation> for OperationOutcome<T> {
    #[inline]
    fn from(violation: BoundaryViolation) -> Self {
        OperationOutcome::BoundaryViolation(violation)
    }
}

impl<T> std::fmt::Display for OperationOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationOutcome::Value(value) => write!(f, "{}", value),
            OperationOutcome::BoundaryViolation(violation) => write!(f, "{}", violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        let outcome = OperationOutcome::Value(125i8);
        assert!(outcome.is_value());
        assert!(!outcome.is_violation());
        assert_eq!(outcome.value(), Some(125));
        assert_eq!(outcome.violation(), None);
        assert_eq!(outcome.into_result(), Ok(125));
    }

    #[test]
    fn test_violation_accessors() {
        let violation = BoundaryViolation::new(ViolationKind::Overflow, 1);
        let outcome: OperationOutcome<i8> = violation.into();

        assert!(outcome.is_violation());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.violation(), Some(violation));
        assert!(violation.is_overflow());
        assert!(!violation.is_underflow());
        assert_eq!(outcome.into_result(), Err(violation));
    }

    #[test]
    fn test_display() {
        let value: OperationOutcome<u32> = OperationOutcome::Value(7);
        assert_eq!(format!("{}", value), "7");

        let violation: OperationOutcome<u32> =
            BoundaryViolation::new(ViolationKind::Underflow, 3).into();
        assert_eq!(format!("{}", violation), "Underflow detected at step 3");
    }
}
