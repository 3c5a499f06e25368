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

//! # Bulwark Core
//!
//! Numeric foundations for the Bulwark range-checking workspace. This crate
//! describes what it means for a primitive number type to be a *bounded
//! domain* and provides the by-value arithmetic traits the accumulator is
//! built on.
//!
//! ## Modules
//!
//! - `num`: Bounded numeric domains (`NumericDomain`), violation kinds,
//!   associated constant traits (`Zero`, `PlusOne`) and by-value checked
//!   and saturating arithmetic traits.
//!
//! ## Purpose
//!
//! Generic code that repeatedly applies an operation must know, before it
//! executes a step, whether that step stays inside the type's representable
//! range. These primitives answer that question uniformly for every signed
//! integer, unsigned integer and floating-point primitive.

pub mod num;
