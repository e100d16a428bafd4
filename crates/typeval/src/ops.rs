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

//! # Operators
//!
//! Arithmetic, bitwise and comparison operators for wrappers.
//!
//! When both operands embed the same value `X` the result is known from `X`
//! alone and is answered without promoting the right operand:
//!
//! | Operation | Result |
//! |---|---|
//! | `+`, `*`, `/`, [`Wrapper::pow`] | `X op X` |
//! | `-`, `%`, `^`, [`Wrapper::modulo`] | zero |
//! | `&`, `\|` | `X` |
//! | `<`, `>` | `false` |
//! | `<=`, `>=` | `true` |
//! | `partial_cmp` | `Some(Equal)` |
//! | [`MulAdd`] | `X.mul_add(X, X)` |
//!
//! Everything else, including operations between a wrapper and a plain
//! number in either order, promotes both operands to their common type and
//! applies the ordinary operator there.
//!
//! Note that the shortcut answers are exact even where the ordinary
//! operator is not: `NaN - NaN` through two `NaN` wrappers is `0.0`.

use crate::{
    embedded::{same_value, Embedded},
    kind::Whole,
    macros::for_each_plain,
    promote::Common,
    wrapper::Wrapper,
};
use num_complex::Complex;
use num_rational::Ratio;
use num_traits::{MulAdd, PrimInt};
use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Rem, Shl, Shr, Sub};
use typeval_core::num::{
    constants::{One, Zero},
    ops::{Modulo, Power, Widen},
    Number, Plain, Promote, Promoted,
};

/// Restates the value embedded in `A` as a `P`. Exact when `P` is the type
/// of the embedded value.
#[inline(always)]
fn restate<A: Embedded, P: Plain>() -> P {
    P::lift(A::VALUE.into_parts())
}

macro_rules! computed_op {
    ($($trait:ident $method:ident),*) => {
        $(
            impl<A: Embedded, B: Embedded> $trait<Wrapper<B>> for Wrapper<A>
            where
                A::Value: Promote<B::Value>,
                Common<A, B>: $trait<Output = Common<A, B>>,
            {
                type Output = Common<A, B>;

                #[inline]
                fn $method(self, rhs: Wrapper<B>) -> Self::Output {
                    if same_value::<A, B>() {
                        let x: Common<A, B> = restate::<A, _>();
                        return x.$method(x);
                    }
                    let (x, y) = self.promote(rhs);
                    x.$method(y)
                }
            }
        )*
    };
}

macro_rules! zero_op {
    ($($trait:ident $method:ident),*) => {
        $(
            impl<A: Embedded, B: Embedded> $trait<Wrapper<B>> for Wrapper<A>
            where
                A::Value: Promote<B::Value>,
                Common<A, B>: $trait<Output = Common<A, B>>,
            {
                type Output = Common<A, B>;

                #[inline]
                fn $method(self, rhs: Wrapper<B>) -> Self::Output {
                    if same_value::<A, B>() {
                        return <Common<A, B> as Zero>::ZERO;
                    }
                    let (x, y) = self.promote(rhs);
                    x.$method(y)
                }
            }
        )*
    };
}

macro_rules! idempotent_op {
    ($($trait:ident $method:ident),*) => {
        $(
            impl<A: Embedded, B: Embedded> $trait<Wrapper<B>> for Wrapper<A>
            where
                A::Value: Promote<B::Value>,
                Common<A, B>: $trait<Output = Common<A, B>>,
            {
                type Output = Common<A, B>;

                #[inline]
                fn $method(self, rhs: Wrapper<B>) -> Self::Output {
                    if same_value::<A, B>() {
                        return restate::<A, _>();
                    }
                    let (x, y) = self.promote(rhs);
                    x.$method(y)
                }
            }
        )*
    };
}

computed_op!(Add add, Mul mul, Div div);
zero_op!(Sub sub, Rem rem, BitXor bitxor);
idempotent_op!(BitAnd bitand, BitOr bitor);

impl<A: Embedded, B: Embedded> PartialOrd<Wrapper<B>> for Wrapper<A>
where
    A::Value: Promote<B::Value>,
    Common<A, B>: PartialOrd,
{
    /// Two wrappers around the same value are `Equal`, even for `NaN`,
    /// which keeps `partial_cmp` in line with `<=` and `>=`. Equality via
    /// `==` stays numeric, so a `NaN` wrapper is `Equal` to itself here but
    /// not `==` to itself.
    #[inline]
    fn partial_cmp(&self, rhs: &Wrapper<B>) -> Option<Ordering> {
        if same_value::<A, B>() {
            return Some(Ordering::Equal);
        }
        let (x, y) = (*self).promote(*rhs);
        x.partial_cmp(&y)
    }

    #[inline]
    fn lt(&self, rhs: &Wrapper<B>) -> bool {
        if same_value::<A, B>() {
            return false;
        }
        let (x, y) = (*self).promote(*rhs);
        x < y
    }

    #[inline]
    fn le(&self, rhs: &Wrapper<B>) -> bool {
        if same_value::<A, B>() {
            return true;
        }
        let (x, y) = (*self).promote(*rhs);
        x <= y
    }

    #[inline]
    fn gt(&self, rhs: &Wrapper<B>) -> bool {
        if same_value::<A, B>() {
            return false;
        }
        let (x, y) = (*self).promote(*rhs);
        x > y
    }

    #[inline]
    fn ge(&self, rhs: &Wrapper<B>) -> bool {
        if same_value::<A, B>() {
            return true;
        }
        let (x, y) = (*self).promote(*rhs);
        x >= y
    }
}

impl<A, B, C> MulAdd<Wrapper<B>, Wrapper<C>> for Wrapper<A>
where
    A: Embedded,
    B: Embedded,
    C: Embedded,
    A::Value: Promote<B::Value>,
    Common<A, B>: Promote<C::Value>,
    Promoted<Common<A, B>, C::Value>: MulAdd<Output = Promoted<Common<A, B>, C::Value>>,
{
    type Output = Promoted<Common<A, B>, C::Value>;

    fn mul_add(self, a: Wrapper<B>, b: Wrapper<C>) -> Self::Output {
        if same_value::<A, B>() && same_value::<A, C>() {
            let x: Self::Output = restate::<A, _>();
            return x.mul_add(x, x);
        }
        let (x, y) = self.promote(a);
        let (x, z) = x.promote(C::VALUE);
        let (y, _) = y.promote(C::VALUE);
        x.mul_add(y, z)
    }
}

impl<E: Embedded> Neg for Wrapper<E>
where
    E::Value: Neg,
{
    type Output = <E::Value as Neg>::Output;

    #[inline]
    fn neg(self) -> Self::Output {
        -E::VALUE
    }
}

// Shifting by at least the bit width of the embedded integer panics in
// debug builds and masks the amount in release builds, as it does for the
// integer itself.
macro_rules! shift_op {
    ($t:ident; $($amount:ty),*) => {
        $(
            impl<E: Embedded> Shl<$amount> for $t<E>
            where
                E::Value: Shl<$amount>,
            {
                type Output = <E::Value as Shl<$amount>>::Output;

                #[inline]
                fn shl(self, rhs: $amount) -> Self::Output {
                    E::VALUE << rhs
                }
            }

            impl<E: Embedded> Shr<$amount> for $t<E>
            where
                E::Value: Shr<$amount>,
            {
                type Output = <E::Value as Shr<$amount>>::Output;

                #[inline]
                fn shr(self, rhs: $amount) -> Self::Output {
                    E::VALUE >> rhs
                }
            }
        )*
    };
}

shift_op!(Whole; u8, u16, u32, u64, u128, usize);
shift_op!(Wrapper; u8, u16, u32, u64, u128, usize);

impl<E: Embedded> Wrapper<E> {
    /// Raises the embedded value to the power embedded in `rhs`.
    ///
    /// # Panics
    ///
    /// Panics where [`Power`] does, e.g. for a negative integer exponent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use typeval::{wrap, Int};
    /// let two = wrap(Int::<2>).unwrap();
    /// assert_eq!(two.pow(two), 4);
    /// assert_eq!(two.pow(wrap(Int::<10>).unwrap()), 1024);
    /// ```
    #[inline]
    pub fn pow<B: Embedded>(self, rhs: Wrapper<B>) -> Common<E, B>
    where
        E::Value: Promote<B::Value>,
        Common<E, B>: Power,
    {
        if same_value::<E, B>() {
            let x: Common<E, B> = restate::<E, _>();
            return x.power(x);
        }
        let (x, y) = self.promote(rhs);
        x.power(y)
    }

    /// Floored modulo of the embedded value by the value embedded in `rhs`.
    #[inline]
    pub fn modulo<B: Embedded>(self, rhs: Wrapper<B>) -> Common<E, B>
    where
        E::Value: Promote<B::Value>,
        Common<E, B>: Modulo,
    {
        if same_value::<E, B>() {
            return <Common<E, B> as Zero>::ZERO;
        }
        let (x, y) = self.promote(rhs);
        x.modulo(y)
    }

    /// The additive identity of the embedded value's type.
    #[inline(always)]
    pub fn zero(self) -> E::Value
    where
        E::Value: Zero,
    {
        <E::Value as Zero>::ZERO
    }

    /// The multiplicative identity of the embedded value's type.
    #[inline(always)]
    pub fn one(self) -> E::Value
    where
        E::Value: One,
    {
        <E::Value as One>::ONE
    }

    /// The unit of the embedded value's type. For dimensionless numbers this
    /// is the multiplicative identity.
    #[inline(always)]
    pub fn oneunit(self) -> E::Value
    where
        E::Value: One,
    {
        <E::Value as One>::ONE
    }

    /// The number of trailing zero bits of the embedded integer.
    #[inline]
    pub fn trailing_zeros(self) -> u32
    where
        E::Value: PrimInt,
    {
        E::VALUE.trailing_zeros()
    }

    /// The embedded value in the next wider type.
    #[inline]
    pub fn widen(self) -> <E::Value as Widen>::Wide
    where
        E::Value: Widen,
    {
        E::VALUE.widen()
    }
}

macro_rules! mixed_op {
    ($p:ty; $($trait:ident $method:ident),*) => {
        $(
            impl<E: Embedded> $trait<$p> for Wrapper<E>
            where
                E::Value: Promote<$p>,
                Promoted<E::Value, $p>: $trait<Output = Promoted<E::Value, $p>>,
            {
                type Output = Promoted<E::Value, $p>;

                #[inline]
                fn $method(self, rhs: $p) -> Self::Output {
                    let (x, y) = E::VALUE.promote(rhs);
                    x.$method(y)
                }
            }

            impl<E: Embedded> $trait<Wrapper<E>> for $p
            where
                $p: Promote<E::Value>,
                Promoted<$p, E::Value>: $trait<Output = Promoted<$p, E::Value>>,
            {
                type Output = Promoted<$p, E::Value>;

                #[inline]
                fn $method(self, _rhs: Wrapper<E>) -> Self::Output {
                    let (x, y) = self.promote(E::VALUE);
                    x.$method(y)
                }
            }
        )*
    };
}

macro_rules! mixed_ops {
    ($($p:ty),*) => {
        $(
            mixed_op!($p; Add add, Sub sub, Mul mul, Div div, Rem rem, BitAnd bitand, BitOr bitor, BitXor bitxor);

            impl<E: Embedded> PartialEq<Wrapper<E>> for $p {
                #[inline]
                fn eq(&self, _other: &Wrapper<E>) -> bool {
                    self.into_parts() == E::VALUE.into_parts()
                }
            }

            impl<E: Embedded> PartialOrd<$p> for Wrapper<E>
            where
                E::Value: Promote<$p>,
                Promoted<E::Value, $p>: PartialOrd,
            {
                #[inline]
                fn partial_cmp(&self, rhs: &$p) -> Option<Ordering> {
                    let (x, y) = E::VALUE.promote(*rhs);
                    x.partial_cmp(&y)
                }
            }

            impl<E: Embedded> PartialOrd<Wrapper<E>> for $p
            where
                $p: Promote<E::Value>,
                Promoted<$p, E::Value>: PartialOrd,
            {
                #[inline]
                fn partial_cmp(&self, _rhs: &Wrapper<E>) -> Option<Ordering> {
                    let (x, y) = (*self).promote(E::VALUE);
                    x.partial_cmp(&y)
                }
            }
        )*
    };
}

for_each_plain!(mixed_ops);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constant, wrap, Int, UInt};

    constant! {
        Two: i64 = 2;
        Quarter: f32 = 0.25;
        TwoAndHalf: f64 = 2.5;
        NotANumber: f64 = f64::NAN;
        Third: Ratio<i64> = Ratio::new_raw(1, 3);
        OnePlusTwoI: Complex<i64> = Complex::new(1, 2);
    }

    #[test]
    fn test_subtracting_a_value_from_itself_is_zero() {
        assert_eq!(wrap(Int::<3>).unwrap() - wrap(Int::<3>).unwrap(), 0_i64);
        assert_eq!(wrap(TwoAndHalf).unwrap() - wrap(TwoAndHalf).unwrap(), 0.0_f64);
        assert_eq!(
            wrap(Third).unwrap() - wrap(Third).unwrap(),
            Ratio::from_integer(0)
        );
        assert_eq!(
            wrap(OnePlusTwoI).unwrap() - wrap(OnePlusTwoI).unwrap(),
            Complex::new(0, 0)
        );
    }

    #[test]
    fn test_shortcut_bypasses_host_arithmetic() {
        let nan = wrap(NotANumber).unwrap();
        let other = wrap(NotANumber).unwrap();
        assert_eq!(nan - other, 0.0);
        assert_eq!(nan % other, 0.0);
        assert!(nan <= other);
        assert!(nan >= other);
        assert!(!(nan < other));
        assert_eq!(nan.partial_cmp(&other), Some(Ordering::Equal));
        assert!(nan != other);
    }

    #[test]
    fn test_comparison_operators_agree_with_partial_cmp() {
        let nan = wrap(NotANumber).unwrap();
        let two = wrap(Int::<2>).unwrap();
        let half = wrap(TwoAndHalf).unwrap();
        let pairs = [
            (nan.partial_cmp(&nan), nan <= nan, nan >= nan),
            (two.partial_cmp(&half), two <= half, two >= half),
            (half.partial_cmp(&two), half <= two, half >= two),
            (two.partial_cmp(&two), two <= two, two >= two),
        ];
        for (ordering, le, ge) in pairs {
            assert_eq!(le, matches!(ordering, Some(Ordering::Less | Ordering::Equal)));
            assert_eq!(ge, matches!(ordering, Some(Ordering::Greater | Ordering::Equal)));
        }
        assert_eq!(nan.partial_cmp(&two), None);
        assert!(!(nan <= two));
    }

    #[test]
    fn test_shortcut_applies_across_markers_with_the_same_value() {
        let a = wrap(Int::<2>).unwrap();
        let b = wrap(Two).unwrap();
        assert_eq!(a - b, 0);
        assert!(!(a < b));
        assert!(a <= b);
    }

    #[test]
    fn test_computed_shortcuts() {
        let x = wrap(Int::<6>).unwrap();
        let y = wrap(Int::<6>).unwrap();
        assert_eq!(x + y, 12);
        assert_eq!(x * y, 36);
        assert_eq!(x / y, 1);
        assert_eq!(x.pow(y), 46_656);
        let q = wrap(Quarter).unwrap();
        assert_eq!(q + q, 0.5_f32);
    }

    #[test]
    fn test_idempotent_and_zero_bitwise_shortcuts() {
        let x = wrap(Int::<12>).unwrap();
        let y = wrap(Int::<12>).unwrap();
        assert_eq!(x & y, 12);
        assert_eq!(x | y, 12);
        assert_eq!(x ^ y, 0);
        assert_eq!(x % y, 0);
        assert_eq!(x.modulo(y), 0);
    }

    #[test]
    fn test_same_value_comparisons() {
        let x = wrap(TwoAndHalf).unwrap();
        let y = wrap(TwoAndHalf).unwrap();
        assert!(!(x < y));
        assert!(!(x > y));
        assert!(x <= y);
        assert!(x >= y);
        assert_eq!(x.partial_cmp(&y), Some(Ordering::Equal));
    }

    #[test]
    fn test_different_values_use_promotion() {
        let two = wrap(Int::<2>).unwrap();
        let quarter = wrap(Quarter).unwrap();
        assert_eq!(two + quarter, 2.25_f32);
        assert_eq!(two - quarter, 1.75_f32);
        assert!(quarter < two);
        assert!(two > quarter);

        let five = wrap(UInt::<5>).unwrap();
        let three = wrap(Int::<3>).unwrap();
        assert_eq!(five - three, 2_u64);
        assert_eq!(five % three, 2_u64);
        assert_eq!(five ^ three, 6_u64);
        assert_eq!(wrap(Int::<-7>).unwrap().modulo(three), 2);
        assert_eq!(two.pow(wrap(Int::<10>).unwrap()), 1024);

        assert_eq!(
            wrap(Third).unwrap() + wrap(OnePlusTwoI).unwrap(),
            Complex::new(1.0 + 1.0 / 3.0, 2.0)
        );
    }

    #[test]
    fn test_mixed_with_plain_numbers() {
        let three = wrap(Int::<3>).unwrap();
        assert_eq!(three + 1_u8, 4_i64);
        assert_eq!(1_u8 + three, 4_i64);
        assert_eq!(three * 0.5_f64, 1.5);
        assert_eq!(0.5_f64 * three, 1.5);
        assert_eq!(10_i128 - three, 7_i128);
        assert_eq!(three / Ratio::new(1_i64, 2), Ratio::from_integer(6));
        assert_eq!(three & 1_i32, 1_i64);
        assert!(3_i32 == three);
        assert!(three == 3_u16);
        assert!(three < 4_i32);
        assert!(2.5_f64 < three);
        assert!(Ratio::new(7_i64, 2) > three);
    }

    #[test]
    fn test_fused_multiply_add() {
        let three = wrap(Int::<3>).unwrap();
        assert_eq!(three.mul_add(three, three), 12);

        let two = wrap(Int::<2>).unwrap();
        let four = wrap(Int::<4>).unwrap();
        assert_eq!(two.mul_add(three, four), 10);

        let q = wrap(Quarter).unwrap();
        assert_eq!(q.mul_add(q, q), 0.3125_f32);
        assert_eq!(two.mul_add(q, four), 4.5_f32);
    }

    #[test]
    fn test_unary_operations() {
        let eight = wrap(Int::<8>).unwrap();
        assert_eq!(-eight, -8);
        assert_eq!(-wrap(TwoAndHalf).unwrap(), -2.5);
        assert_eq!(eight.zero(), 0);
        assert_eq!(eight.one(), 1);
        assert_eq!(wrap(Third).unwrap().oneunit(), Ratio::from_integer(1));
        assert_eq!(eight.trailing_zeros(), 3);
        assert_eq!(wrap(UInt::<8>).unwrap().trailing_zeros(), 3);
        assert_eq!(eight.widen(), 8_i128);
        assert_eq!(wrap(Quarter).unwrap().widen(), 0.25_f64);
    }

    #[test]
    fn test_shifts() {
        let five = wrap(Int::<5>).unwrap();
        assert_eq!(five << 2_u32, 20);
        assert_eq!(five >> 1_u32, 2);
        assert_eq!(wrap(UInt::<1>).unwrap() << 63_u32, 1_u64 << 63);
    }

    #[test]
    fn test_shifts_accept_any_unsigned_amount() {
        let five = wrap(Int::<5>).unwrap();
        assert_eq!(five << 2_u8, 20);
        assert_eq!(five << 2_u16, 20);
        assert_eq!(five << 2_u64, 20);
        assert_eq!(five << 2_u128, 20);
        assert_eq!(five >> 2_usize, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "attempt to shift left with overflow")]
    fn test_shift_past_bit_width_panics_in_debug() {
        let _ = wrap(Int::<1>).unwrap() << 64_u32;
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_integer_division_by_zero_panics() {
        let zero = wrap(Int::<0>).unwrap();
        let _ = zero / zero;
    }
}
