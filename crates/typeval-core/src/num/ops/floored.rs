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

use num_rational::Ratio;

/// A trait for floored modulo by value.
///
/// The result has the sign of the divisor, in contrast to `%` which follows
/// the dividend. For every `x` and non-zero `y`, `x.modulo(y)` lies in
/// `[0, y)` for positive `y` and in `(y, 0]` for negative `y`.
///
/// # Panics
///
/// Integer implementations panic on a zero divisor, like `%`.
///
/// # Examples
///
/// ```rust
/// # use typeval_core::num::ops::floored::Modulo;
/// assert_eq!((-7_i32).modulo(3), 2);
/// assert_eq!(7_i32.modulo(-3), -2);
/// assert_eq!(-7_i32 % 3, -1);
/// ```
pub trait Modulo: Sized {
    /// Computes the floored modulo of `self` by `rhs`.
    fn modulo(self, rhs: Self) -> Self;
}

macro_rules! modulo_signed_impl {
    ($zero:expr; $($t:ty),*) => {
        $(
            impl Modulo for $t {
                #[inline]
                fn modulo(self, rhs: $t) -> $t {
                    let r = self % rhs;
                    if r != $zero && ((r < $zero) != (rhs < $zero)) {
                        r + rhs
                    } else {
                        r
                    }
                }
            }
        )*
    };
}

macro_rules! modulo_unsigned_impl {
    ($($t:ty),*) => {
        $(
            impl Modulo for $t {
                #[inline(always)]
                fn modulo(self, rhs: $t) -> $t {
                    self % rhs
                }
            }
        )*
    };
}

modulo_signed_impl!(0; i8, i16, i32, i64, i128, isize);
modulo_signed_impl!(0.0; f32, f64);
modulo_unsigned_impl!(u8, u16, u32, u64, u128, usize);

impl Modulo for Ratio<i64> {
    #[inline]
    fn modulo(self, rhs: Self) -> Self {
        let zero = Ratio::from_integer(0);
        let r = self % rhs;
        if r != zero && ((r < zero) != (rhs < zero)) {
            r + rhs
        } else {
            r
        }
    }
}
