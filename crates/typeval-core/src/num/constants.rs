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

use num_complex::Complex;
use num_rational::Ratio;

/// A trait for number types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for number types that have a constant representing 1.
pub trait One {
    /// The constant representing 1 for the implementing type.
    const ONE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_zero_one_for {
    ($zero:expr, $one:expr; $($t:ty),*) => {
        $(
            impl_const_for!(Zero, ZERO, $zero, $t);
            impl_const_for!(One, ONE, $one, $t);
        )*
    };
}

impl_zero_one_for!(0, 1; i8, i16, i32, i64, i128, isize);
impl_zero_one_for!(0, 1; u8, u16, u32, u64, u128, usize);
impl_zero_one_for!(0.0, 1.0; f32, f64);
impl_zero_one_for!(Ratio::new_raw(0, 1), Ratio::new_raw(1, 1); Ratio<i64>);
impl_zero_one_for!(Complex::new(0, 0), Complex::new(1, 0); Complex<i64>);
impl_zero_one_for!(Complex::new(0.0, 0.0), Complex::new(1.0, 0.0); Complex<f32>, Complex<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_num_traits() {
        assert_eq!(<u8 as Zero>::ZERO, 0);
        assert_eq!(<i128 as One>::ONE, 1);
        assert_eq!(<f32 as One>::ONE, 1.0);
        assert_eq!(<Ratio<i64> as Zero>::ZERO, num_traits::Zero::zero());
        assert_eq!(<Ratio<i64> as One>::ONE, num_traits::One::one());
        assert_eq!(<Complex<f64> as One>::ONE, Complex::new(1.0, 0.0));
        assert_eq!(<Complex<i64> as Zero>::ZERO, Complex::new(0, 0));
    }
}
