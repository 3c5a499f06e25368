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

/// A trait for numeric types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for numeric types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_integer_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl_const_for!(PlusOne, PLUS_ONE, 1, $t);
            impl_const_for!(Zero, ZERO, 0, $t);
        )*
    };
}

macro_rules! impl_float_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl_const_for!(PlusOne, PLUS_ONE, 1.0, $t);
            impl_const_for!(Zero, ZERO, 0.0, $t);
        )*
    };
}

impl_integer_constants_for!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_float_constants_for!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn zero<T: Zero>() -> T {
        T::ZERO
    }

    fn plus_one<T: PlusOne>() -> T {
        T::PLUS_ONE
    }

    #[test]
    fn test_integer_constants() {
        assert_eq!(zero::<i8>(), 0);
        assert_eq!(zero::<u128>(), 0);
        assert_eq!(plus_one::<isize>(), 1);
        assert_eq!(plus_one::<u16>(), 1);
    }

    #[test]
    fn test_float_constants() {
        assert_eq!(zero::<f32>(), 0.0);
        assert_eq!(plus_one::<f64>(), 1.0);
    }
}
