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

use core::ops::Add;

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// Counters that track evaluations and committed steps must never wrap,
/// even over very long runs. This trait clamps at the type's maximum and is
/// implemented for the unsigned counter types.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let a: u64 = u64::MAX - 1;
/// assert_eq!(a.saturating_add_val(10), u64::MAX);
/// assert_eq!(5u32.saturating_add_val(10), 15);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, usize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u128, saturating_add);
