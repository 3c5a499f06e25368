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

use bulwark_accumulator::{
    monitor::{composite::CompositeMonitor, log::LogMonitor, statistics::StatisticsMonitor},
    probe::{BoundaryProbe, ProbeScenario},
    stats::AccumulatorStatistics,
};
use bulwark_core::num::domain::NumericDomain;
use bulwark_sink::sink::{EventSink, forward_report};
use clap::ValueEnum;
use std::io::Write;
use thiserror::Error;

const STAR_LINE: &str = "**************************************************";

/// The primitive types the driver can probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl Domain {
    pub const ALL: [Domain; 14] = [
        Domain::I8,
        Domain::I16,
        Domain::I32,
        Domain::I64,
        Domain::I128,
        Domain::Isize,
        Domain::U8,
        Domain::U16,
        Domain::U32,
        Domain::U64,
        Domain::U128,
        Domain::Usize,
        Domain::F32,
        Domain::F64,
    ];
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What a driver run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    pub statistics: AccumulatorStatistics,
    pub recorded: usize,
}

/// Runs scenario probes, prints their outcomes and forwards violations.
///
/// Sink failures are logged and skipped; only output errors abort a run.
pub struct Driver<'s, S, W>
where
    S: EventSink + ?Sized,
    W: Write,
{
    probe: BoundaryProbe,
    sink: &'s S,
    out: W,
    statistics: AccumulatorStatistics,
    recorded: usize,
}

impl<'s, S, W> Driver<'s, S, W>
where
    S: EventSink + ?Sized,
    W: Write,
{
    pub fn new(probe: BoundaryProbe, sink: &'s S, out: W) -> Self {
        Self {
            probe,
            sink,
            out,
            statistics: AccumulatorStatistics::new(),
            recorded: 0,
        }
    }

    /// Runs the overflow tests for every domain, then the underflow tests.
    pub fn run_all(&mut self, domains: &[Domain]) -> Result<(), DriverError> {
        writeln!(self.out, "Starting Numeric Underflow / Overflow Tests!")?;

        for scenario in [ProbeScenario::Overflow, ProbeScenario::Underflow] {
            writeln!(self.out)?;
            writeln!(self.out, "{}", STAR_LINE)?;
            writeln!(self.out, "*** Running {} Tests ***", scenario)?;
            writeln!(self.out, "{}", STAR_LINE)?;

            for &domain in domains {
                self.run(domain, scenario)?;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "All Numeric Underflow / Overflow Tests Complete!")?;
        Ok(())
    }

    /// Runs one scenario for one domain.
    pub fn run(&mut self, domain: Domain, scenario: ProbeScenario) -> Result<(), DriverError> {
        match domain {
            Domain::I8 => self.run_domain::<i8>(scenario),
            Domain::I16 => self.run_domain::<i16>(scenario),
            Domain::I32 => self.run_domain::<i32>(scenario),
            Domain::I64 => self.run_domain::<i64>(scenario),
            Domain::I128 => self.run_domain::<i128>(scenario),
            Domain::Isize => self.run_domain::<isize>(scenario),
            Domain::U8 => self.run_domain::<u8>(scenario),
            Domain::U16 => self.run_domain::<u16>(scenario),
            Domain::U32 => self.run_domain::<u32>(scenario),
            Domain::U64 => self.run_domain::<u64>(scenario),
            Domain::U128 => self.run_domain::<u128>(scenario),
            Domain::Usize => self.run_domain::<usize>(scenario),
            Domain::F32 => self.run_domain::<f32>(scenario),
            Domain::F64 => self.run_domain::<f64>(scenario),
        }
    }

    fn run_domain<T>(&mut self, scenario: ProbeScenario) -> Result<(), DriverError>
    where
        T: NumericDomain,
    {
        let steps = self.probe.config().steps();
        writeln!(self.out, "{} Test of Type = {}", scenario, T::TYPE_NAME)?;

        let Some(request) = scenario.request::<T>(steps) else {
            writeln!(
                self.out,
                "\tSkipped: {} steps cannot divide the range of {}",
                steps,
                T::TYPE_NAME
            )?;
            return Ok(());
        };

        let mut statistics = StatisticsMonitor::<T>::new();
        let report = {
            let mut monitor = CompositeMonitor::with_capacity(2);
            monitor.add_monitor(LogMonitor::<T>::default());
            monitor.add_monitor(&mut statistics);
            self.probe.probe_with_monitor(&request, &mut monitor)
        };
        self.statistics.merge(statistics.statistics());

        let verb = match scenario {
            ProbeScenario::Overflow => "Adding",
            ProbeScenario::Underflow => "Subtracting",
        };
        writeln!(
            self.out,
            "\t{} Numbers Without {} ({}, {}, {}) = {}",
            verb,
            scenario,
            request.start(),
            request.delta(),
            request.steps(),
            report.within()
        )?;
        writeln!(
            self.out,
            "\t{} Numbers With {} ({}, {}, {}) = {}",
            verb,
            scenario,
            request.start(),
            request.delta(),
            report.beyond_steps(),
            report.beyond()
        )?;

        match forward_report(self.sink, &report) {
            Ok(recorded) => self.recorded += recorded,
            Err(e) => log::warn!(
                "failed to record {} events for {}: {}",
                scenario,
                T::TYPE_NAME,
                e
            ),
        }

        Ok(())
    }

    /// Prints the aggregated statistics and returns the summary.
    pub fn finish(mut self) -> Result<DriverSummary, DriverError> {
        writeln!(self.out)?;
        write!(self.out, "{}", self.statistics)?;
        writeln!(self.out, "  Events Recorded: {}", self.recorded)?;
        self.out.flush()?;

        Ok(DriverSummary {
            statistics: self.statistics,
            recorded: self.recorded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_accumulator::probe::ProbeConfigBuilder;
    use bulwark_sink::{event::BoundaryEvent, memory::MemorySink};
    use pretty_assertions::assert_eq;

    fn run(domains: &[Domain], steps: u64) -> (String, DriverSummary, Vec<BoundaryEvent>) {
        let sink = MemorySink::new();
        let mut out = Vec::new();
        let probe = BoundaryProbe::new(ProbeConfigBuilder::new().steps(steps).build());

        let mut driver = Driver::new(probe, &sink, &mut out);
        driver.run_all(domains).unwrap();
        let summary = driver.finish().unwrap();

        (
            String::from_utf8(out).unwrap(),
            summary,
            sink.events().unwrap(),
        )
    }

    #[test]
    fn test_i8_output_lines() {
        let (output, _, _) = run(&[Domain::I8], 5);

        assert!(output.contains("Overflow Test of Type = i8"));
        assert!(output.contains("\tAdding Numbers Without Overflow (0, 25, 5) = 125"));
        assert!(
            output.contains("\tAdding Numbers With Overflow (0, 25, 6) = Overflow detected at step 5")
        );
        assert!(output.contains("\tSubtracting Numbers Without Underflow (127, 25, 5) = 2"));
        assert!(output.contains("\tSubtracting Numbers With Underflow (127, 25, 6) = -23"));
        assert!(output.contains("All Numeric Underflow / Overflow Tests Complete!"));
    }

    #[test]
    fn test_violations_are_forwarded() {
        let (_, summary, events) = run(&[Domain::I8, Domain::U8], 5);

        assert_eq!(
            events,
            vec![
                BoundaryEvent::new("i8", "add", "overflow"),
                BoundaryEvent::new("u8", "add", "overflow"),
                BoundaryEvent::new("u8", "subtract", "underflow"),
            ]
        );
        assert_eq!(summary.recorded, 3);
        assert_eq!(summary.statistics.evaluations, 8);
        assert_eq!(summary.statistics.overflows, 2);
        assert_eq!(summary.statistics.underflows, 1);
    }

    #[test]
    fn test_unusable_step_count_is_skipped() {
        let (output, summary, events) = run(&[Domain::I8], 1000);

        assert!(output.contains("\tSkipped: 1000 steps cannot divide the range of i8"));
        assert_eq!(summary.statistics.evaluations, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_every_domain_runs() {
        let (output, summary, _) = run(&Domain::ALL, 5);

        for domain in ["i8", "i128", "usize", "f32", "f64"] {
            assert!(output.contains(&format!("Overflow Test of Type = {}", domain)));
            assert!(output.contains(&format!("Underflow Test of Type = {}", domain)));
        }
        assert_eq!(summary.statistics.evaluations, 4 * Domain::ALL.len() as u64);
        assert!(output.contains("Accumulator Statistics:"));
    }
}
