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

use bulwark_core::num::domain::NumericDomain;

/// The direction in which the delta is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `result := result + delta`
    Addition,
    /// `result := result - delta`
    Subtraction,
}

impl Operation {
    /// Returns the canonical lowercase name of the operation,
    /// as stored by event sinks.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "add",
            Operation::Subtraction => "subtract",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Addition => write!(f, "Addition"),
            Operation::Subtraction => write!(f, "Subtraction"),
        }
    }
}

/// An immutable request to apply `delta` to `start`, `steps` times.
///
/// The accumulator does not require `delta` to be non-negative; the
/// canonical usage supplies a non-negative magnitude and lets the
/// `operation` choose the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationRequest<T> {
    start: T,
    delta: T,
    steps: u64,
    operation: Operation,
}

impl<T> OperationRequest<T>
where
    T: NumericDomain,
{
    /// Creates a new request.
    #[inline]
    pub fn new(start: T, delta: T, steps: u64, operation: Operation) -> Self {
        Self {
            start,
            delta,
            steps,
            operation,
        }
    }

    /// Creates a request that adds `delta` to `start`, `steps` times.
    #[inline]
    pub fn addition(start: T, delta: T, steps: u64) -> Self {
        Self::new(start, delta, steps, Operation::Addition)
    }

    /// Creates a request that subtracts `delta` from `start`, `steps` times.
    #[inline]
    pub fn subtraction(start: T, delta: T, steps: u64) -> Self {
        Self::new(start, delta, steps, Operation::Subtraction)
    }

    /// Returns a copy of this request with a different step count.
    #[inline]
    pub fn with_steps(&self, steps: u64) -> Self {
        Self { steps, ..*self }
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn delta(&self) -> T {
        self.delta
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl<T> std::fmt::Display for OperationRequest<T>
where
    T: NumericDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {}, {}) over {}",
            self.operation,
            self.start,
            self.delta,
            self.steps,
            T::TYPE_NAME
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Addition.as_str(), "add");
        assert_eq!(Operation::Subtraction.as_str(), "subtract");
        assert_eq!(format!("{}", Operation::Subtraction), "Subtraction");
    }

    #[test]
    fn test_constructors_set_operation() {
        let add = OperationRequest::addition(1i32, 2, 3);
        assert_eq!(add.operation(), Operation::Addition);
        assert_eq!((add.start(), add.delta(), add.steps()), (1, 2, 3));

        let sub = OperationRequest::subtraction(1u8, 2, 3);
        assert_eq!(sub.operation(), Operation::Subtraction);
    }

    #[test]
    fn test_with_steps_leaves_original_untouched() {
        let request = OperationRequest::addition(10i64, 1, 5);
        let extended = request.with_steps(6);

        assert_eq!(request.steps(), 5);
        assert_eq!(extended.steps(), 6);
        assert_eq!(extended.start(), request.start());
        assert_eq!(extended.delta(), request.delta());
        assert_eq!(extended.operation(), request.operation());
    }

    #[test]
    fn test_display() {
        let request = OperationRequest::addition(120i8, 5, 2);
        assert_eq!(format!("{}", request), "Addition(120, 5, 2) over i8");
    }
}
