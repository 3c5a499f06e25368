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

//! # Bounded Numeric Domains
//!
//! A *domain* is a fixed-width primitive number type together with its own
//! minimum and maximum representable value. `NumericDomain` is the single
//! capability the accumulator needs: it exposes the bounds and answers,
//! *before* a step is executed, whether adding or subtracting a delta would
//! leave the domain and through which bound.
//!
//! ## Integer domains
//!
//! The provided methods rearrange the bound test so that the test itself can
//! never overflow:
//!
//! | operation   | `delta >= 0`                     | `delta < 0`                      |
//! |-------------|----------------------------------|----------------------------------|
//! | addition    | overflow iff `x > MAX - delta`   | underflow iff `x < MIN - delta`  |
//! | subtraction | underflow iff `x < MIN + delta`  | overflow iff `x > MAX + delta`   |
//!
//! For unsigned domains the right-hand column is unreachable.
//!
//! ## Floating-point domains
//!
//! IEEE-754 arithmetic is total, so the float implementations evaluate the
//! step and reject it only when the result is not finite. Values that round
//! back to a finite number (`f64::MAX + 1.0 == f64::MAX`) are accepted.
//! `+inf` is reported as an overflow, `-inf` as an underflow, and a NaN
//! result, which only non-finite or NaN inputs can produce, is attributed to
//! the direction of the operation.

use crate::num::{
    constants::{PlusOne, Zero},
    ops::checked_arithmetic::{CheckedAddVal, CheckedSubVal},
};
use num_traits::{Bounded, Num, NumCast};

/// The bound a rejected step would have crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    /// The step would exceed the domain's maximum.
    Overflow,
    /// The step would fall below the domain's minimum.
    Underflow,
}

impl ViolationKind {
    /// Returns the canonical lowercase name of the violation kind,
    /// as stored by event sinks.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Overflow => "overflow",
            ViolationKind::Underflow => "underflow",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Overflow => write!(f, "Overflow"),
            ViolationKind::Underflow => write!(f, "Underflow"),
        }
    }
}

/// The family a numeric domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    SignedInteger,
    UnsignedInteger,
    FloatingPoint,
}

impl std::fmt::Display for DomainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainKind::SignedInteger => write!(f, "signed integer"),
            DomainKind::UnsignedInteger => write!(f, "unsigned integer"),
            DomainKind::FloatingPoint => write!(f, "floating point"),
        }
    }
}

/// A fixed-width numeric type with well-defined minimum and maximum values.
///
/// Implemented for every primitive integer (`i8` through `i128`, `isize`,
/// `u8` through `u128`, `usize`) and for `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::domain::{NumericDomain, ViolationKind};
/// assert_eq!(120i8.add_violation(5), None);
/// assert_eq!(125i8.add_violation(5), Some(ViolationKind::Overflow));
/// assert_eq!((-125i8).sub_violation(5), Some(ViolationKind::Underflow));
/// assert_eq!(0u8.sub_violation(1), Some(ViolationKind::Underflow));
/// assert_eq!(f64::MAX.add_violation(1.0), None);
/// assert_eq!(f64::MAX.add_violation(f64::MAX), Some(ViolationKind::Overflow));
/// ```
pub trait NumericDomain:
    Copy
    + PartialOrd
    + Num
    + Bounded
    + NumCast
    + Zero
    + PlusOne
    + CheckedAddVal
    + CheckedSubVal
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
    /// The family of the domain.
    const DOMAIN_KIND: DomainKind;

    /// The primitive type name, e.g. `"i32"`.
    const TYPE_NAME: &'static str;

    /// The smallest representable value (the lowest finite value for floats).
    #[inline(always)]
    fn domain_min() -> Self {
        <Self as Bounded>::min_value()
    }

    /// The largest representable value (the largest finite value for floats).
    #[inline(always)]
    fn domain_max() -> Self {
        <Self as Bounded>::max_value()
    }

    /// Returns the bound `self + delta` would cross, or `None` if the sum
    /// is representable. Never performs an out-of-range operation.
    #[inline]
    fn add_violation(self, delta: Self) -> Option<ViolationKind> {
        if delta >= Self::ZERO {
            (self > Self::domain_max() - delta).then_some(ViolationKind::Overflow)
        } else {
            (self < Self::domain_min() - delta).then_some(ViolationKind::Underflow)
        }
    }

    /// Returns the bound `self - delta` would cross, or `None` if the
    /// difference is representable. Never performs an out-of-range operation.
    #[inline]
    fn sub_violation(self, delta: Self) -> Option<ViolationKind> {
        if delta >= Self::ZERO {
            (self < Self::domain_min() + delta).then_some(ViolationKind::Underflow)
        } else {
            (self > Self::domain_max() + delta).then_some(ViolationKind::Overflow)
        }
    }

    /// Commits an addition that `add_violation` has accepted.
    #[inline(always)]
    fn apply_add(self, delta: Self) -> Self {
        self + delta
    }

    /// Commits a subtraction that `sub_violation` has accepted.
    #[inline(always)]
    fn apply_sub(self, delta: Self) -> Self {
        self - delta
    }
}

/// Classifies a non-finite floating-point result by the sign of the infinity.
/// NaN carries no sign information and falls back to `direction`.
#[inline]
fn classify_non_finite<T>(result: T, direction: ViolationKind) -> ViolationKind
where
    T: PartialOrd + Zero,
{
    if result > T::ZERO {
        ViolationKind::Overflow
    } else if result < T::ZERO {
        ViolationKind::Underflow
    } else {
        direction
    }
}

macro_rules! impl_integer_domain {
    ($kind:expr; $($t:ty),* $(,)?) => {
        $(
            impl NumericDomain for $t {
                const DOMAIN_KIND: DomainKind = $kind;
                const TYPE_NAME: &'static str = stringify!($t);
            }
        )*
    };
}

macro_rules! impl_float_domain {
    ($($t:ty),* $(,)?) => {
        $(
            impl NumericDomain for $t {
                const DOMAIN_KIND: DomainKind = DomainKind::FloatingPoint;
                const TYPE_NAME: &'static str = stringify!($t);

                #[inline]
                fn add_violation(self, delta: Self) -> Option<ViolationKind> {
                    match self.checked_add_val(delta) {
                        Some(_) => None,
                        None => Some(classify_non_finite(self + delta, ViolationKind::Overflow)),
                    }
                }

                #[inline]
                fn sub_violation(self, delta: Self) -> Option<ViolationKind> {
                    match self.checked_sub_val(delta) {
                        Some(_) => None,
                        None => Some(classify_non_finite(self - delta, ViolationKind::Underflow)),
                    }
                }
            }
        )*
    };
}

impl_integer_domain!(DomainKind::SignedInteger; i8, i16, i32, i64, i128, isize);
impl_integer_domain!(DomainKind::UnsignedInteger; u8, u16, u32, u64, u128, usize);
impl_float_domain!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i8_add_violation_matches_widened_arithmetic() {
        for a in i8::MIN..=i8::MAX {
            for d in i8::MIN..=i8::MAX {
                let wide = a as i16 + d as i16;
                let expected = if wide > i8::MAX as i16 {
                    Some(ViolationKind::Overflow)
                } else if wide < i8::MIN as i16 {
                    Some(ViolationKind::Underflow)
                } else {
                    None
                };
                assert_eq!(a.add_violation(d), expected, "{a} + {d}");
            }
        }
    }

    #[test]
    fn test_i8_sub_violation_matches_widened_arithmetic() {
        for a in i8::MIN..=i8::MAX {
            for d in i8::MIN..=i8::MAX {
                let wide = a as i16 - d as i16;
                let expected = if wide > i8::MAX as i16 {
                    Some(ViolationKind::Overflow)
                } else if wide < i8::MIN as i16 {
                    Some(ViolationKind::Underflow)
                } else {
                    None
                };
                assert_eq!(a.sub_violation(d), expected, "{a} - {d}");
            }
        }
    }

    #[test]
    fn test_u8_violations_agree_with_checked_arithmetic() {
        for a in u8::MIN..=u8::MAX {
            for d in u8::MIN..=u8::MAX {
                assert_eq!(
                    a.add_violation(d).is_some(),
                    a.checked_add_val(d).is_none(),
                    "{a} + {d}"
                );
                assert_eq!(
                    a.sub_violation(d).is_some(),
                    a.checked_sub_val(d).is_none(),
                    "{a} - {d}"
                );
            }
        }
    }

    #[test]
    fn test_wide_integer_bounds() {
        assert_eq!(i128::MAX.add_violation(1), Some(ViolationKind::Overflow));
        assert_eq!(i128::MIN.sub_violation(1), Some(ViolationKind::Underflow));
        assert_eq!(i128::MIN.add_violation(i128::MIN), Some(ViolationKind::Underflow));
        assert_eq!(i128::MAX.sub_violation(i128::MIN), Some(ViolationKind::Overflow));
        assert_eq!((-1i128).sub_violation(i128::MIN), None);
        assert_eq!(u128::MAX.add_violation(0), None);
        assert_eq!(usize::MIN.sub_violation(1), Some(ViolationKind::Underflow));
    }

    #[test]
    fn test_float_violation_policy() {
        assert_eq!(f32::MAX.add_violation(1.0), None);
        assert_eq!(f32::MAX.add_violation(f32::MAX), Some(ViolationKind::Overflow));
        assert_eq!(f32::MIN.sub_violation(f32::MAX), Some(ViolationKind::Underflow));
        // Subtracting a negative delta crosses the upper bound.
        assert_eq!(f64::MAX.sub_violation(-f64::MAX), Some(ViolationKind::Overflow));
        assert_eq!(f64::MIN.add_violation(f64::MIN), Some(ViolationKind::Underflow));
    }

    #[test]
    fn test_float_nan_falls_back_to_direction() {
        assert_eq!(f64::NAN.add_violation(1.0), Some(ViolationKind::Overflow));
        assert_eq!(f64::NAN.sub_violation(1.0), Some(ViolationKind::Underflow));
        assert_eq!(
            f64::INFINITY.add_violation(f64::NEG_INFINITY),
            Some(ViolationKind::Overflow)
        );
    }

    #[test]
    fn test_domain_metadata() {
        assert_eq!(<i8 as NumericDomain>::TYPE_NAME, "i8");
        assert_eq!(<u64 as NumericDomain>::TYPE_NAME, "u64");
        assert_eq!(<f32 as NumericDomain>::TYPE_NAME, "f32");
        assert_eq!(<i32 as NumericDomain>::DOMAIN_KIND, DomainKind::SignedInteger);
        assert_eq!(<usize as NumericDomain>::DOMAIN_KIND, DomainKind::UnsignedInteger);
        assert_eq!(<f64 as NumericDomain>::DOMAIN_KIND, DomainKind::FloatingPoint);
        assert_eq!(<f64 as NumericDomain>::domain_min(), f64::MIN);
        assert_eq!(<u16 as NumericDomain>::domain_max(), u16::MAX);
    }

    #[test]
    fn test_violation_kind_names() {
        assert_eq!(ViolationKind::Overflow.as_str(), "overflow");
        assert_eq!(ViolationKind::Underflow.as_str(), "underflow");
        assert_eq!(format!("{}", ViolationKind::Underflow), "Underflow");
    }
}
