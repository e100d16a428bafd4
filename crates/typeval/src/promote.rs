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

//! # Promotion of Wrappers
//!
//! A wrapper promotes exactly like the value it embeds:
//!
//! - Two wrappers around the same value promote to the type of that value,
//!   since promotion of a type with itself is the identity.
//! - Two wrappers around different values promote like the two values.
//! - A wrapper and a plain number promote like the embedded value and the
//!   plain number, in either order.

use crate::{embedded::Embedded, macros::for_each_plain, wrapper::Wrapper};
use num_complex::Complex;
use num_rational::Ratio;
use typeval_core::num::{Promote, Promoted};

/// The common runtime type of the values embedded in `A` and `B`.
pub type Common<A, B> = Promoted<<A as Embedded>::Value, <B as Embedded>::Value>;

impl<A: Embedded, B: Embedded> Promote<Wrapper<B>> for Wrapper<A>
where
    A::Value: Promote<B::Value>,
{
    type Output = Common<A, B>;

    #[inline]
    fn promote(self, _rhs: Wrapper<B>) -> (Self::Output, Self::Output) {
        A::VALUE.promote(B::VALUE)
    }
}

macro_rules! promote_plain {
    ($($p:ty),*) => {
        $(
            impl<E: Embedded> Promote<$p> for Wrapper<E>
            where
                E::Value: Promote<$p>,
            {
                type Output = Promoted<E::Value, $p>;

                #[inline]
                fn promote(self, rhs: $p) -> (Self::Output, Self::Output) {
                    E::VALUE.promote(rhs)
                }
            }

            impl<E: Embedded> Promote<Wrapper<E>> for $p
            where
                $p: Promote<E::Value>,
            {
                type Output = Promoted<$p, E::Value>;

                #[inline]
                fn promote(self, _rhs: Wrapper<E>) -> (Self::Output, Self::Output) {
                    self.promote(E::VALUE)
                }
            }
        )*
    };
}

for_each_plain!(promote_plain);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constant, wrap, Int, UInt};

    constant! {
        Quarter: f32 = 0.25;
        Half: Ratio<i64> = Ratio::new_raw(1, 2);
        Imag: Complex<i64> = Complex::new(0, 1);
    }

    fn promoted<A: Promote<B>, B>(a: A, b: B) -> (A::Output, A::Output) {
        a.promote(b)
    }

    #[test]
    fn test_same_value_promotes_to_value_type() {
        let w = wrap(Quarter).unwrap();
        let (a, b): (f32, f32) = promoted(w, w);
        assert_eq!((a, b), (0.25, 0.25));
    }

    #[test]
    fn test_different_values_promote_like_values() {
        let (a, b): (f32, f32) = promoted(wrap(Int::<2>).unwrap(), wrap(Quarter).unwrap());
        assert_eq!((a, b), (2.0, 0.25));

        let (a, b): (u64, u64) = promoted(wrap(Int::<-1>).unwrap(), wrap(UInt::<1>).unwrap());
        assert_eq!((a, b), (u64::MAX, 1));

        let (a, b): (Complex<f64>, Complex<f64>) =
            promoted(wrap(Half).unwrap(), wrap(Imag).unwrap());
        assert_eq!(a, Complex::new(0.5, 0.0));
        assert_eq!(b, Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_wrapper_and_plain_promote_in_both_orders() {
        let (a, b): (f64, f64) = promoted(wrap(Int::<3>).unwrap(), 0.5_f64);
        assert_eq!((a, b), (3.0, 0.5));

        let (a, b): (Ratio<i64>, Ratio<i64>) = promoted(7_i32, wrap(Half).unwrap());
        assert_eq!((a, b), (Ratio::from_integer(7), Ratio::new(1, 2)));

        let (a, b): (i64, i64) = promoted(4_u8, wrap(Int::<3>).unwrap());
        assert_eq!((a, b), (4, 3));
    }
}
