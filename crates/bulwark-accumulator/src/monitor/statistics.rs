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
    stats::AccumulatorStatistics,
};
use bulwark_core::num::domain::NumericDomain;

/// Collects `AccumulatorStatistics` over every evaluation it observes.
#[derive(Debug, Clone, Default)]
pub struct StatisticsMonitor<T> {
    statistics: AccumulatorStatistics,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> StatisticsMonitor<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            statistics: AccumulatorStatistics::new(),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn statistics(&self) -> &AccumulatorStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_statistics(self) -> AccumulatorStatistics {
        self.statistics
    }

    #[inline]
    pub fn reset(&mut self) {
        self.statistics = AccumulatorStatistics::new();
    }
}

impl<T> AccumulationMonitor<T> for StatisticsMonitor<T>
where
    T: NumericDomain,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "StatisticsMonitor"
    }

    #[inline(always)]
    fn on_enter(&mut self, _request: &OperationRequest<T>) {
        self.statistics.on_evaluation();
    }

    #[inline(always)]
    fn on_step_committed(&mut self, _step_index: u64, _value: T) {
        self.statistics.on_step_committed();
    }

    #[inline(always)]
    fn on_violation(&mut self, _request: &OperationRequest<T>, violation: &BoundaryViolation) {
        self.statistics.on_violation(violation.kind());
    }

    #[inline(always)]
    fn on_exit(&mut self, _request: &OperationRequest<T>, outcome: &OperationOutcome<T>) {
        if outcome.is_value() {
            self.statistics.on_value();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::RangeCheckedAccumulator;

    #[test]
    fn test_counts_across_evaluations() {
        let accumulator = RangeCheckedAccumulator::new();
        let mut monitor = StatisticsMonitor::<i8>::new();

        accumulator.evaluate_with_monitor(&OperationRequest::addition(120, 5, 1), &mut monitor);
        accumulator.evaluate_with_monitor(&OperationRequest::addition(120, 5, 2), &mut monitor);
        accumulator.evaluate_with_monitor(&OperationRequest::subtraction(-125, 5, 1), &mut monitor);

        let stats = monitor.statistics();
        assert_eq!(stats.evaluations, 3);
        assert_eq!(stats.values, 1);
        assert_eq!(stats.overflows, 1);
        assert_eq!(stats.underflows, 1);
        // One step in the first run, one committed step before the overflow in the second.
        assert_eq!(stats.steps_committed, 2);
    }

    #[test]
    fn test_reset() {
        let mut monitor = StatisticsMonitor::<u32>::new();
        RangeCheckedAccumulator::new()
            .evaluate_with_monitor(&OperationRequest::addition(0, 1, 10), &mut monitor);
        assert_eq!(monitor.statistics().steps_committed, 10);

        monitor.reset();
        assert_eq!(monitor.into_statistics(), AccumulatorStatistics::default());
    }
}
