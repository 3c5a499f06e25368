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

//! Bulwark‑Accumulator: range‑checked repeated arithmetic
//!
//! Applies a fixed delta to a starting value a given number of times,
//! checking every step against the bounds of the numeric domain *before*
//! executing it. The first step that would leave the domain aborts the run
//! and is reported as a typed `BoundaryViolation`; nothing wraps and nothing
//! saturates.
//!
//! Core flow
//! - Build an `operation::OperationRequest<T>` for any `NumericDomain` `T`.
//! - Call `accumulator::RangeCheckedAccumulator::evaluate` (or the free
//!   function `accumulator::evaluate`).
//! - Inspect the `outcome::OperationOutcome<T>`: a final value, or the kind
//!   and 0‑based index of the first offending step.
//!
//! Design highlights
//! - Pure and stateless: every call is independent and side‑effect free.
//! - Monitors observe a run without influencing it.
//! - `probe` packages the "`steps` then `steps + 1`" boundary experiment.
//!
//! Module map
//! - `accumulator`: the engine.
//! - `operation`: operations and immutable requests.
//! - `outcome`: values and boundary violations.
//! - `monitor`: evaluation monitors (log, statistics, composite, no‑op).
//! - `probe`: boundary probes and the canonical overflow/underflow scenarios.
//! - `stats`: saturating counters aggregated over many evaluations.

pub mod accumulator;
pub mod monitor;
pub mod operation;
pub mod outcome;
pub mod probe;
pub mod stats;
