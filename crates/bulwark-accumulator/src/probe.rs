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

//! # Boundary Probes
//!
//! A probe evaluates a request twice: once with its own step count, which is
//! normally expected to stay inside the domain, and once with one extra step,
//! which is normally expected to trip the boundary. `ProbeScenario` builds the
//! two canonical experiments:
//!
//! - `Overflow`: start at zero and add `MAX / steps`.
//! - `Underflow`: start at `MAX` and subtract `MAX / steps`.
//!
//! ```rust
//! use bulwark_accumulator::probe::{BoundaryProbe, ProbeConfigBuilder, ProbeScenario};
//!
//! let probe = BoundaryProbe::new(ProbeConfigBuilder::new().steps(5).build());
//! let report = probe.probe_scenario::<u8>(ProbeScenario::Overflow).unwrap();
//! assert_eq!(report.within().value(), Some(255));
//! assert!(report.crosses_boundary());
//! ```

use crate::{
    accumulator::RangeCheckedAccumulator,
    monitor::accumulation_monitor::AccumulationMonitor,
    operation::{Operation, OperationRequest},
    outcome::OperationOutcome,
};
use bulwark_core::num::{domain::NumericDomain, ops::saturating_arithmetic::SaturatingAddVal};
use num_traits::NumCast;

/// The step count probes use when none is configured.
pub const DEFAULT_PROBE_STEPS: u64 = 5;

/// The canonical boundary experiments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeScenario {
    Overflow,
    Underflow,
}

impl ProbeScenario {
    /// The operation the scenario applies.
    #[inline]
    pub fn operation(&self) -> Operation {
        match self {
            ProbeScenario::Overflow => Operation::Addition,
            ProbeScenario::Underflow => Operation::Subtraction,
        }
    }

    /// Builds the scenario's request for `T` and `steps`.
    ///
    /// Returns `None` if `steps` is zero or not representable in `T`.
    pub fn request<T>(&self, steps: u64) -> Option<OperationRequest<T>>
    where
        T: NumericDomain,
    {
        let divisor = <T as NumCast>::from(steps)?;
        if divisor == T::ZERO {
            return None;
        }

        let delta = T::domain_max() / divisor;
        Some(match self {
            ProbeScenario::Overflow => OperationRequest::addition(T::ZERO, delta, steps),
            ProbeScenario::Underflow => {
                OperationRequest::subtraction(T::domain_max(), delta, steps)
            }
        })
    }
}

impl std::fmt::Display for ProbeScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeScenario::Overflow => write!(f, "Overflow"),
            ProbeScenario::Underflow => write!(f, "Underflow"),
        }
    }
}

/// Configuration for `BoundaryProbe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    steps: u64,
}

impl ProbeConfig {
    /// The step count used for scenario requests.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfigBuilder::new().build()
    }
}

/// Builder for `ProbeConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfigBuilder {
    steps: u64,
}

impl Default for ProbeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfigBuilder {
    /// Creates a new `ProbeConfigBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            steps: DEFAULT_PROBE_STEPS,
        }
    }

    /// Sets the step count used for scenario requests.
    #[inline]
    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Builds the `ProbeConfig` instance.
    #[inline]
    pub fn build(self) -> ProbeConfig {
        ProbeConfig { steps: self.steps }
    }
}

/// The two outcomes of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport<T> {
    request: OperationRequest<T>,
    within: OperationOutcome<T>,
    beyond: OperationOutcome<T>,
}

impl<T> ProbeReport<T>
where
    T: NumericDomain,
{
    /// The request as probed with its own step count.
    #[inline]
    pub fn request(&self) -> &OperationRequest<T> {
        &self.request
    }

    /// The outcome with `steps`.
    #[inline]
    pub fn within(&self) -> &OperationOutcome<T> {
        &self.within
    }

    /// The outcome with `steps + 1`.
    #[inline]
    pub fn beyond(&self) -> &OperationOutcome<T> {
        &self.beyond
    }

    /// The step count used for the `beyond` evaluation.
    #[inline]
    pub fn beyond_steps(&self) -> u64 {
        self.request.steps().saturating_add_val(1)
    }

    /// `true` when `steps` completed and `steps + 1` was rejected, i.e. the
    /// boundary lies exactly at the extra step.
    #[inline]
    pub fn crosses_boundary(&self) -> bool {
        self.within.is_value()
            && self
                .beyond
                .violation()
                .is_some_and(|v| v.step_index() == self.request.steps())
    }
}

impl<T> std::fmt::Display for ProbeReport<T>
where
    T: NumericDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.request)?;
        writeln!(f, "  {} steps: {}", self.request.steps(), self.within)?;
        write!(f, "  {} steps: {}", self.beyond_steps(), self.beyond)
    }
}

/// Runs requests with `steps` and `steps + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryProbe {
    accumulator: RangeCheckedAccumulator,
    config: ProbeConfig,
}

impl BoundaryProbe {
    #[inline]
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            accumulator: RangeCheckedAccumulator::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probes `request` as given.
    pub fn probe<T>(&self, request: &OperationRequest<T>) -> ProbeReport<T>
    where
        T: NumericDomain,
    {
        let within = self.accumulator.evaluate(request);
        let beyond = self
            .accumulator
            .evaluate(&request.with_steps(request.steps().saturating_add_val(1)));
        ProbeReport {
            request: *request,
            within,
            beyond,
        }
    }

    /// Probes `request`, reporting both evaluations to `monitor`.
    pub fn probe_with_monitor<T, M>(
        &self,
        request: &OperationRequest<T>,
        monitor: &mut M,
    ) -> ProbeReport<T>
    where
        T: NumericDomain,
        M: AccumulationMonitor<T> + ?Sized,
    {
        let within = self.accumulator.evaluate_with_monitor(request, monitor);
        let beyond = self.accumulator.evaluate_with_monitor(
            &request.with_steps(request.steps().saturating_add_val(1)),
            monitor,
        );
        ProbeReport {
            request: *request,
            within,
            beyond,
        }
    }

    /// Probes the scenario's request built with the configured step count.
    ///
    /// Returns `None` when the scenario cannot be built for `T`
    /// (see `ProbeScenario::request`).
    #[inline]
    pub fn probe_scenario<T>(&self, scenario: ProbeScenario) -> Option<ProbeReport<T>>
    where
        T: NumericDomain,
    {
        scenario
            .request(self.config.steps)
            .map(|request| self.probe(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::statistics::StatisticsMonitor, outcome::BoundaryViolation};
    use bulwark_core::num::domain::ViolationKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        assert_eq!(ProbeConfig::default().steps(), DEFAULT_PROBE_STEPS);
        assert_eq!(ProbeConfigBuilder::new().steps(9).build().steps(), 9);
    }

    #[test]
    fn test_scenario_requests() {
        let overflow = ProbeScenario::Overflow.request::<i8>(5).unwrap();
        assert_eq!(overflow, OperationRequest::addition(0, 25, 5));

        let underflow = ProbeScenario::Underflow.request::<u16>(5).unwrap();
        assert_eq!(underflow, OperationRequest::subtraction(u16::MAX, 13107, 5));
    }

    #[test]
    fn test_scenario_rejects_unusable_step_counts() {
        assert_eq!(ProbeScenario::Overflow.request::<i32>(0), None);
        // 1000 is not representable as i8.
        assert_eq!(ProbeScenario::Underflow.request::<i8>(1000), None);
    }

    #[test]
    fn test_i8_overflow_scenario_crosses_boundary() {
        let report = BoundaryProbe::default()
            .probe_scenario::<i8>(ProbeScenario::Overflow)
            .unwrap();

        assert_eq!(*report.within(), OperationOutcome::Value(125));
        assert_eq!(
            *report.beyond(),
            OperationOutcome::BoundaryViolation(BoundaryViolation::new(ViolationKind::Overflow, 5))
        );
        assert_eq!(report.beyond_steps(), 6);
        assert!(report.crosses_boundary());
    }

    #[test]
    fn test_signed_underflow_scenario_stays_in_range() {
        // MAX - 6 * (MAX / 5) is still above MIN for signed domains.
        let report = BoundaryProbe::default()
            .probe_scenario::<i8>(ProbeScenario::Underflow)
            .unwrap();

        assert_eq!(*report.within(), OperationOutcome::Value(2));
        assert_eq!(*report.beyond(), OperationOutcome::Value(-23));
        assert!(!report.crosses_boundary());
    }

    #[test]
    fn test_unsigned_underflow_scenario_crosses_boundary() {
        let report = BoundaryProbe::default()
            .probe_scenario::<u32>(ProbeScenario::Underflow)
            .unwrap();

        assert_eq!(*report.within(), OperationOutcome::Value(0));
        assert!(report.crosses_boundary());
    }

    #[test]
    fn test_probe_with_monitor_observes_both_runs() {
        let mut monitor = StatisticsMonitor::new();
        let request = OperationRequest::addition(120i8, 5, 1);
        let report = BoundaryProbe::default().probe_with_monitor(&request, &mut monitor);

        assert!(report.crosses_boundary());
        assert_eq!(monitor.statistics().evaluations, 2);
        assert_eq!(monitor.statistics().values, 1);
        assert_eq!(monitor.statistics().overflows, 1);
    }

    #[test]
    fn test_report_display() {
        let report = BoundaryProbe::default().probe(&OperationRequest::addition(120i8, 5, 1));
        assert_eq!(
            format!("{}", report),
            "Addition(120, 5, 1) over i8:\n  1 steps: 125\n  2 steps: Overflow detected at step 1"
        );
    }
}
