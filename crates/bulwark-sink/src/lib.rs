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

//! Bulwark‑Sink: recorders for boundary violation events
//!
//! The accumulator never persists anything itself. Callers that want a
//! record of detected overflows and underflows forward outcomes to an
//! `EventSink`, which stores `(type, operation, status)` tuples on a
//! best‑effort basis: no durability or transactional guarantees.
//!
//! Module map
//! - `event`: the recorded tuple and its stored form.
//! - `sink`: the `EventSink` trait and the forwarding helpers.
//! - `memory`: an in‑memory, append‑only recorder.
//! - `sqlite`: a SQLite‑backed recorder (`logs` table).
//! - `error`: sink errors.

pub mod error;
pub mod event;
pub mod memory;
pub mod sink;
pub mod sqlite;
