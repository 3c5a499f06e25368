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

use bulwark_core::num::{domain::ViolationKind, ops::saturating_arithmetic::SaturatingAddVal};

/// Counters aggregated over any number of evaluations.
///
/// All counters saturate instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatorStatistics {
    /// Total evaluations observed.
    pub evaluations: u64,
    /// Evaluations that completed with a value.
    pub values: u64,
    /// Evaluations aborted by an overflow.
    pub overflows: u64,
    /// Evaluations aborted by an underflow.
    pub underflows: u64,
    /// Steps committed across all evaluations.
    pub steps_committed: u64,
}

impl AccumulatorStatistics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_evaluation(&mut self) {
        self.evaluations = self.evaluations.saturating_add_val(1);
    }

    #[inline]
    pub fn on_value(&mut self) {
        self.values = self.values.saturating_add_val(1);
    }

    #[inline]
    pub fn on_violation(&mut self, kind: ViolationKind) {
        match kind {
            ViolationKind::Overflow => self.overflows = self.overflows.saturating_add_val(1),
            ViolationKind::Underflow => self.underflows = self.underflows.saturating_add_val(1),
        }
    }

    #[inline]
    pub fn on_step_committed(&mut self) {
        self.steps_committed = self.steps_committed.saturating_add_val(1);
    }

    /// Total evaluations aborted by either kind of violation.
    #[inline]
    pub fn violations(&self) -> u64 {
        self.overflows.saturating_add_val(self.underflows)
    }

    /// Folds another set of counters into this one.
    #[inline]
    pub fn merge(&mut self, other: &AccumulatorStatistics) {
        self.evaluations = self.evaluations.saturating_add_val(other.evaluations);
        self.values = self.values.saturating_add_val(other.values);
        self.overflows = self.overflows.saturating_add_val(other.overflows);
        self.underflows = self.underflows.saturating_add_val(other.underflows);
        self.steps_committed = self.steps_committed.saturating_add_val(other.steps_committed);
    }
}

impl std::fmt::Display for AccumulatorStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Accumulator Statistics:")?;
        writeln!(f, "  Evaluations: {}", self.evaluations)?;
        writeln!(f, "  Values: {}", self.values)?;
        writeln!(f, "  Overflows: {}", self.overflows)?;
        writeln!(f, "  Underflows: {}", self.underflows)?;
        writeln!(f, "  Steps Committed: {}", self.steps_committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = AccumulatorStatistics::new();
        stats.on_evaluation();
        stats.on_evaluation();
        stats.on_value();
        stats.on_violation(ViolationKind::Underflow);
        stats.on_step_committed();

        assert_eq!(stats.evaluations, 2);
        assert_eq!(stats.values, 1);
        assert_eq!(stats.overflows, 0);
        assert_eq!(stats.underflows, 1);
        assert_eq!(stats.violations(), 1);
        assert_eq!(stats.steps_committed, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = AccumulatorStatistics {
            steps_committed: u64::MAX,
            ..Default::default()
        };
        stats.on_step_committed();
        assert_eq!(stats.steps_committed, u64::MAX);
    }

    #[test]
    fn test_merge() {
        let mut a = AccumulatorStatistics {
            evaluations: 2,
            values: 1,
            overflows: 1,
            underflows: 0,
            steps_committed: 10,
        };
        let b = AccumulatorStatistics {
            evaluations: 1,
            values: 0,
            overflows: 0,
            underflows: 1,
            steps_committed: 4,
        };
        a.merge(&b);

        assert_eq!(a.evaluations, 3);
        assert_eq!(a.violations(), 2);
        assert_eq!(a.steps_committed, 14);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = AccumulatorStatistics {
            evaluations: 4,
            values: 2,
            overflows: 1,
            underflows: 1,
            steps_committed: 20,
        };
        let rendered = format!("{}", stats);

        assert!(rendered.contains("Accumulator Statistics:"), "missing header");
        assert!(rendered.contains("Evaluations: 4"));
        assert!(rendered.contains("Values: 2"));
        assert!(rendered.contains("Overflows: 1"));
        assert!(rendered.contains("Underflows: 1"));
        assert!(rendered.contains("Steps Committed: 20"));
    }
}
