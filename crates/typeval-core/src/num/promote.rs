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

//! # Promotion
//!
//! `Promote` answers "which runtime type should two operands be coerced to
//! before a generic operation applies". The rules mirror a conventional
//! numeric tower:
//!
//! - A type promotes with itself to itself.
//! - Integers of the same signedness promote to the wider type. For mixed
//!   signedness the signed type wins only if it is strictly wider.
//!   `isize`/`usize` rank as 64-bit and yield to `i64`/`u64`.
//! - Integers and floats promote to the float; `f32` and `f64` to `f64`.
//! - `Ratio<i64>` absorbs integers of at most 64 signed or 32 unsigned bits
//!   and yields to floats.
//! - Complex numbers absorb reals into the matching complex width.
//!
//! Pairs that would require a wider rational or a wider integer complex than
//! the tower provides (for example `Ratio<i64>` with `u64`) have no rule and
//! are rejected at compile time.
//!
//! # Examples
//!
//! ```rust
//! # use typeval_core::num::promote::{Promote, Promoted};
//! let (a, b) = 3_i32.promote(0.5_f32);
//! assert_eq!((a, b), (3.0_f32, 0.5_f32));
//!
//! let _: Promoted<u8, i16> = 1_i16;
//! let _: Promoted<i64, u64> = 1_u64;
//! ```

use crate::num::number::{Number, Plain};
use num_complex::Complex;
use num_rational::Ratio;

/// Determines the common runtime type of `Self` and `Rhs` and converts both
/// operands into it.
pub trait Promote<Rhs>: Sized {
    /// The common type.
    type Output: Plain;

    /// Converts both operands into the common type.
    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// The common type of `L` and `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

macro_rules! promote_self {
    ($($t:ty),* $(,)?) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline(always)]
                fn promote(self, rhs: $t) -> ($t, $t) {
                    (self, rhs)
                }
            }
        )*
    };
}

macro_rules! promote_impl {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn promote(self, rhs: $rhs) -> ($out, $out) {
                (
                    <$out as Plain>::lift(self.into_parts()),
                    <$out as Plain>::lift(rhs.into_parts()),
                )
            }
        }
    };
}

macro_rules! promote_pair {
    ($a:ty, $b:ty => $out:ty) => {
        promote_impl!($a, $b => $out);
        promote_impl!($b, $a => $out);
    };
}

promote_self!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, Ratio<i64>,
    Complex<i64>, Complex<f32>, Complex<f64>,
);

promote_pair!(i8, i16 => i16);
promote_pair!(i8, i32 => i32);
promote_pair!(i8, i64 => i64);
promote_pair!(i8, i128 => i128);
promote_pair!(i8, isize => isize);
promote_pair!(i8, u8 => u8);
promote_pair!(i8, u16 => u16);
promote_pair!(i8, u32 => u32);
promote_pair!(i8, u64 => u64);
promote_pair!(i8, u128 => u128);
promote_pair!(i8, usize => usize);
promote_pair!(i8, f32 => f32);
promote_pair!(i8, f64 => f64);
promote_pair!(i8, Ratio<i64> => Ratio<i64>);
promote_pair!(i8, Complex<i64> => Complex<i64>);
promote_pair!(i8, Complex<f32> => Complex<f32>);
promote_pair!(i8, Complex<f64> => Complex<f64>);

promote_pair!(i16, i32 => i32);
promote_pair!(i16, i64 => i64);
promote_pair!(i16, i128 => i128);
promote_pair!(i16, isize => isize);
promote_pair!(i16, u8 => i16);
promote_pair!(i16, u16 => u16);
promote_pair!(i16, u32 => u32);
promote_pair!(i16, u64 => u64);
promote_pair!(i16, u128 => u128);
promote_pair!(i16, usize => usize);
promote_pair!(i16, f32 => f32);
promote_pair!(i16, f64 => f64);
promote_pair!(i16, Ratio<i64> => Ratio<i64>);
promote_pair!(i16, Complex<i64> => Complex<i64>);
promote_pair!(i16, Complex<f32> => Complex<f32>);
promote_pair!(i16, Complex<f64> => Complex<f64>);

promote_pair!(i32, i64 => i64);
promote_pair!(i32, i128 => i128);
promote_pair!(i32, isize => isize);
promote_pair!(i32, u8 => i32);
promote_pair!(i32, u16 => i32);
promote_pair!(i32, u32 => u32);
promote_pair!(i32, u64 => u64);
promote_pair!(i32, u128 => u128);
promote_pair!(i32, usize => usize);
promote_pair!(i32, f32 => f32);
promote_pair!(i32, f64 => f64);
promote_pair!(i32, Ratio<i64> => Ratio<i64>);
promote_pair!(i32, Complex<i64> => Complex<i64>);
promote_pair!(i32, Complex<f32> => Complex<f32>);
promote_pair!(i32, Complex<f64> => Complex<f64>);

promote_pair!(i64, i128 => i128);
promote_pair!(i64, isize => i64);
promote_pair!(i64, u8 => i64);
promote_pair!(i64, u16 => i64);
promote_pair!(i64, u32 => i64);
promote_pair!(i64, u64 => u64);
promote_pair!(i64, u128 => u128);
promote_pair!(i64, usize => usize);
promote_pair!(i64, f32 => f32);
promote_pair!(i64, f64 => f64);
promote_pair!(i64, Ratio<i64> => Ratio<i64>);
promote_pair!(i64, Complex<i64> => Complex<i64>);
promote_pair!(i64, Complex<f32> => Complex<f32>);
promote_pair!(i64, Complex<f64> => Complex<f64>);

promote_pair!(i128, isize => i128);
promote_pair!(i128, u8 => i128);
promote_pair!(i128, u16 => i128);
promote_pair!(i128, u32 => i128);
promote_pair!(i128, u64 => i128);
promote_pair!(i128, u128 => u128);
promote_pair!(i128, usize => i128);
promote_pair!(i128, f32 => f32);
promote_pair!(i128, f64 => f64);
promote_pair!(i128, Complex<f32> => Complex<f32>);
promote_pair!(i128, Complex<f64> => Complex<f64>);

promote_pair!(isize, u8 => isize);
promote_pair!(isize, u16 => isize);
promote_pair!(isize, u32 => isize);
promote_pair!(isize, u64 => u64);
promote_pair!(isize, u128 => u128);
promote_pair!(isize, usize => usize);
promote_pair!(isize, f32 => f32);
promote_pair!(isize, f64 => f64);
promote_pair!(isize, Ratio<i64> => Ratio<i64>);
promote_pair!(isize, Complex<i64> => Complex<i64>);
promote_pair!(isize, Complex<f32> => Complex<f32>);
promote_pair!(isize, Complex<f64> => Complex<f64>);

promote_pair!(u8, u16 => u16);
promote_pair!(u8, u32 => u32);
promote_pair!(u8, u64 => u64);
promote_pair!(u8, u128 => u128);
promote_pair!(u8, usize => usize);
promote_pair!(u8, f32 => f32);
promote_pair!(u8, f64 => f64);
promote_pair!(u8, Ratio<i64> => Ratio<i64>);
promote_pair!(u8, Complex<i64> => Complex<i64>);
promote_pair!(u8, Complex<f32> => Complex<f32>);
promote_pair!(u8, Complex<f64> => Complex<f64>);

promote_pair!(u16, u32 => u32);
promote_pair!(u16, u64 => u64);
promote_pair!(u16, u128 => u128);
promote_pair!(u16, usize => usize);
promote_pair!(u16, f32 => f32);
promote_pair!(u16, f64 => f64);
promote_pair!(u16, Ratio<i64> => Ratio<i64>);
promote_pair!(u16, Complex<i64> => Complex<i64>);
promote_pair!(u16, Complex<f32> => Complex<f32>);
promote_pair!(u16, Complex<f64> => Complex<f64>);

promote_pair!(u32, u64 => u64);
promote_pair!(u32, u128 => u128);
promote_pair!(u32, usize => usize);
promote_pair!(u32, f32 => f32);
promote_pair!(u32, f64 => f64);
promote_pair!(u32, Ratio<i64> => Ratio<i64>);
promote_pair!(u32, Complex<i64> => Complex<i64>);
promote_pair!(u32, Complex<f32> => Complex<f32>);
promote_pair!(u32, Complex<f64> => Complex<f64>);

promote_pair!(u64, u128 => u128);
promote_pair!(u64, usize => u64);
promote_pair!(u64, f32 => f32);
promote_pair!(u64, f64 => f64);
promote_pair!(u64, Complex<f32> => Complex<f32>);
promote_pair!(u64, Complex<f64> => Complex<f64>);

promote_pair!(u128, usize => u128);
promote_pair!(u128, f32 => f32);
promote_pair!(u128, f64 => f64);
promote_pair!(u128, Complex<f32> => Complex<f32>);
promote_pair!(u128, Complex<f64> => Complex<f64>);

promote_pair!(usize, f32 => f32);
promote_pair!(usize, f64 => f64);
promote_pair!(usize, Complex<f32> => Complex<f32>);
promote_pair!(usize, Complex<f64> => Complex<f64>);

promote_pair!(f32, f64 => f64);
promote_pair!(f32, Ratio<i64> => f32);
promote_pair!(f32, Complex<i64> => Complex<f32>);
promote_pair!(f32, Complex<f32> => Complex<f32>);
promote_pair!(f32, Complex<f64> => Complex<f64>);

promote_pair!(f64, Ratio<i64> => f64);
promote_pair!(f64, Complex<i64> => Complex<f64>);
promote_pair!(f64, Complex<f32> => Complex<f64>);
promote_pair!(f64, Complex<f64> => Complex<f64>);

promote_pair!(Ratio<i64>, Complex<i64> => Complex<f64>);
promote_pair!(Ratio<i64>, Complex<f32> => Complex<f32>);
promote_pair!(Ratio<i64>, Complex<f64> => Complex<f64>);

promote_pair!(Complex<i64>, Complex<f32> => Complex<f32>);
promote_pair!(Complex<i64>, Complex<f64> => Complex<f64>);

promote_pair!(Complex<f32>, Complex<f64> => Complex<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<A: Promote<B>, B>(a: A, b: B) -> (A::Output, A::Output) {
        a.promote(b)
    }

    #[test]
    fn test_reflexive_promotion_is_identity() {
        assert_eq!(promoted(7_u16, 9_u16), (7, 9));
        assert_eq!(promoted(Ratio::new(1_i64, 3), Ratio::new(2, 3)).0, Ratio::new(1, 3));
    }

    #[test]
    fn test_integer_promotion() {
        let (a, b): (i32, i32) = promoted(-3_i8, 5_i32);
        assert_eq!((a, b), (-3, 5));
        let (a, b): (u16, u16) = promoted(-1_i8, 2_u16);
        assert_eq!((a, b), (u16::MAX, 2));
        let (a, b): (i64, i64) = promoted(4_u32, -4_i64);
        assert_eq!((a, b), (4, -4));
        let (a, b): (i64, i64) = promoted(1_isize, 2_i64);
        assert_eq!((a, b), (1, 2));
    }

    #[test]
    fn test_float_promotion() {
        let (a, b): (f32, f32) = promoted(3_i64, 0.5_f32);
        assert_eq!((a, b), (3.0, 0.5));
        let (a, b): (f64, f64) = promoted(0.5_f32, 2.0_f64);
        assert_eq!((a, b), (0.5, 2.0));
    }

    #[test]
    fn test_rational_promotion() {
        let (a, b): (Ratio<i64>, Ratio<i64>) = promoted(Ratio::new(1_i64, 2), 3_u8);
        assert_eq!((a, b), (Ratio::new(1, 2), Ratio::from_integer(3)));
        let (a, b): (f64, f64) = promoted(Ratio::new(1_i64, 4), 1.0_f64);
        assert_eq!((a, b), (0.25, 1.0));
    }

    #[test]
    fn test_complex_promotion() {
        let (a, b): (Complex<i64>, Complex<i64>) = promoted(Complex::new(1_i64, 2), 3_i32);
        assert_eq!((a, b), (Complex::new(1, 2), Complex::new(3, 0)));
        let (a, _): (Complex<f64>, Complex<f64>) = promoted(Complex::new(1_i64, 2), 0.5_f64);
        assert_eq!(a, Complex::new(1.0, 2.0));
        let (_, b): (Complex<f32>, Complex<f32>) = promoted(Complex::new(1.0_f32, 0.0), 7_u128);
        assert_eq!(b, Complex::new(7.0, 0.0));
        let (a, b): (Complex<f64>, Complex<f64>) = promoted(Ratio::new(3_i64, 2), Complex::new(0_i64, 1));
        assert_eq!((a, b), (Complex::new(1.5, 0.0), Complex::new(0.0, 1.0)));
    }
}
