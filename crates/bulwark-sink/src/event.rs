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

use bulwark_accumulator::operation::Operation;
use bulwark_core::num::domain::ViolationKind;

/// A detected boundary violation as stored by a sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundaryEvent {
    type_name: String,
    operation: String,
    status: String,
}

impl BoundaryEvent {
    /// Creates an event from raw text, e.g. as read back from storage.
    pub fn new(
        type_name: impl Into<String>,
        operation: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            operation: operation.into(),
            status: status.into(),
        }
    }

    /// Creates an event from a violation of `operation` in the domain `type_name`.
    pub fn from_violation(type_name: &str, operation: Operation, kind: ViolationKind) -> Self {
        Self::new(type_name, operation.as_str(), kind.as_str())
    }

    /// The numeric domain, e.g. `"i32"`.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// `"add"` or `"subtract"`.
    #[inline]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// `"overflow"` or `"underflow"`.
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl std::fmt::Display for BoundaryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type: {}, Operation: {}, Status: {}",
            self.type_name, self.operation, self.status
        )
    }
}

/// An event together with the identifier the sink assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoggedEvent {
    pub id: i64,
    pub event: BoundaryEvent,
}

impl std::fmt::Display for LoggedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}, {}", self.id, self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_violation_uses_canonical_names() {
        let event =
            BoundaryEvent::from_violation("i32", Operation::Subtraction, ViolationKind::Underflow);
        assert_eq!(event.type_name(), "i32");
        assert_eq!(event.operation(), "subtract");
        assert_eq!(event.status(), "underflow");
    }

    #[test]
    fn test_display() {
        let logged = LoggedEvent {
            id: 1,
            event: BoundaryEvent::new("integer", "add", "overflow"),
        };
        assert_eq!(
            format!("{}", logged),
            "ID: 1, Type: integer, Operation: add, Status: overflow"
        );
    }
}
