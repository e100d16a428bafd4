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

/// A trait for exponentiation where base and exponent share one type.
///
/// # Panics
///
/// - Integer types panic on a negative exponent and on an exponent that
///   does not fit into `usize`. Overflow behaves like `*`.
/// - `Ratio<i64>` panics on a non-integral exponent and on an exponent
///   outside the `i32` range.
/// - `Complex<i64>` panics unless the exponent is a non-negative integer
///   that fits into `u32`.
///
/// # Examples
///
/// ```rust
/// # use typeval_core::num::ops::power::Power;
/// # use num_rational::Ratio;
/// assert_eq!(3_i32.power(4), 81);
/// assert_eq!(2.0_f64.power(3.0), 8.0);
/// assert_eq!(Ratio::new(1_i64, 2).power(Ratio::from_integer(-2)), Ratio::from_integer(4));
/// ```
pub trait Power: Sized {
    /// Raises `self` to the power `exp`.
    fn power(self, exp: Self) -> Self;
}

macro_rules! power_int_impl {
    ($($t:ty),*) => {
        $(
            impl Power for $t {
                #[inline]
                #[allow(unused_comparisons)]
                fn power(self, exp: $t) -> $t {
                    if exp < 0 {
                        panic!("negative exponent {} for integer base {}", exp, self);
                    }
                    let Ok(exp) = usize::try_from(exp) else {
                        panic!("exponent {} out of range", exp);
                    };
                    num_traits::pow(self, exp)
                }
            }
        )*
    };
}

power_int_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! power_float_impl {
    ($($t:ty),*) => {
        $(
            impl Power for $t {
                #[inline(always)]
                fn power(self, exp: $t) -> $t {
                    self.powf(exp)
                }
            }

            impl Power for Complex<$t> {
                #[inline(always)]
                fn power(self, exp: Self) -> Self {
                    self.powc(exp)
                }
            }
        )*
    };
}

power_float_impl!(f32, f64);

impl Power for Ratio<i64> {
    fn power(self, exp: Self) -> Self {
        if !exp.is_integer() {
            panic!("non-integral exponent {} for rational base {}", exp, self);
        }
        let Ok(exp) = i32::try_from(exp.to_integer()) else {
            panic!("exponent {} out of range", exp);
        };
        self.pow(exp)
    }
}

impl Power for Complex<i64> {
    fn power(self, exp: Self) -> Self {
        let integral = if exp.im == 0 {
            u32::try_from(exp.re).ok()
        } else {
            None
        };
        match integral {
            Some(exp) => self.powu(exp),
            None => panic!("exponent {} is not a non-negative integer", exp),
        }
    }
}
