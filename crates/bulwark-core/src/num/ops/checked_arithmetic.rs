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

use core::ops::{Add, Sub};

/// A trait for types that support checked addition by value (no references).
///
/// For integers this is the primitive `checked_add`. For floating-point
/// types a result is considered out of range when it is not finite, so
/// `f64::MAX + 1.0` (which rounds back to `f64::MAX`) is accepted while
/// `f64::MAX + f64::MAX` is rejected.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None); // Overflow occurs
/// assert_eq!(a.checked_add_val(50), Some(250));
///
/// assert_eq!(f32::MAX.checked_add_val(f32::MAX), None);
/// assert_eq!(1.5f32.checked_add_val(1.0), Some(2.5));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if the result
    /// is not representable.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedSubVal;
///
/// let a: u8 = 50;
/// assert_eq!(a.checked_sub_val(100), None); // Underflow occurs
/// assert_eq!(a.checked_sub_val(20), Some(30));
///
/// assert_eq!(f64::MIN.checked_sub_val(f64::MAX), None);
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if the result
    /// is not representable.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! checked_float_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                let result = self $op v;
                if result.is_finite() {
                    Some(result)
                } else {
                    None
                }
            }
        }
    };
}

checked_impl_val!(CheckedAddVal, checked_add_val, u8, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u16, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u32, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u64, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, usize, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u128, checked_add);

checked_impl_val!(CheckedAddVal, checked_add_val, i8, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i16, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i32, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i64, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, isize, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i128, checked_add);

checked_float_impl_val!(CheckedAddVal, checked_add_val, f32, +);
checked_float_impl_val!(CheckedAddVal, checked_add_val, f64, +);

checked_impl_val!(CheckedSubVal, checked_sub_val, u8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, usize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u128, checked_sub);

checked_impl_val!(CheckedSubVal, checked_sub_val, i8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, isize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i128, checked_sub);

checked_float_impl_val!(CheckedSubVal, checked_sub_val, f32, -);
checked_float_impl_val!(CheckedSubVal, checked_sub_val, f64, -);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_val_integers() {
        assert_eq!(127i8.checked_add_val(1), None);
        assert_eq!((-128i8).checked_add_val(-1), None);
        assert_eq!(u64::MAX.checked_add_val(0), Some(u64::MAX));
        assert_eq!(i128::MAX.checked_add_val(1), None);
    }

    #[test]
    fn test_checked_sub_val_integers() {
        assert_eq!(0u32.checked_sub_val(1), None);
        assert_eq!((-128i8).checked_sub_val(1), None);
        assert_eq!(127i8.checked_sub_val(-1), None);
        assert_eq!(10usize.checked_sub_val(10), Some(0));
    }

    #[test]
    fn test_checked_float_accepts_rounded_results() {
        // The exact sum lies below the rounding midpoint, so it rounds back to MAX.
        assert_eq!(f64::MAX.checked_add_val(1.0), Some(f64::MAX));
        assert_eq!(f32::MIN.checked_sub_val(1.0), Some(f32::MIN));
    }

    #[test]
    fn test_checked_float_rejects_non_finite() {
        assert_eq!(f64::MAX.checked_add_val(f64::MAX), None);
        assert_eq!(f32::MIN.checked_sub_val(f32::MAX), None);
        assert_eq!(f64::INFINITY.checked_add_val(0.0), None);
        assert_eq!(f64::NAN.checked_sub_val(1.0), None);
    }
}
