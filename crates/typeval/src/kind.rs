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

//! # Value Categories
//!
//! The three wrapper kinds. Each is a zero-sized handle on a marker `E` that
//! can only be obtained through its validating constructor, so holding a
//! `Whole<E>` proves that `E::VALUE` is a canonical integer that is not
//! itself a wrapper.
//!
//! | Kind | Embedded values |
//! |---|---|
//! | [`Whole`] | integers |
//! | [`Real`] | floats and rationals |
//! | [`General`] | complex numbers |

use crate::{
    embedded::Embedded,
    error::CategoryError,
    registry,
    wrapper::{Wrap, Wrapper},
};
use std::marker::PhantomData;
use typeval_core::num::{Category, Number, Parts};

macro_rules! kind {
    ($(#[$meta:meta])* $name:ident, $category:expr) => {
        $(#[$meta])*
        pub struct $name<E> {
            _marker: PhantomData<E>,
        }

        impl<E> Clone for $name<E> {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<E> Copy for $name<E> {}

        impl<E: Embedded> $name<E> {
            /// Validates the embedded value and returns the unique instance.
            ///
            /// # Errors
            ///
            /// Returns a `CategoryError` if the embedded value belongs to
            /// another category, is itself a wrapper, or is not canonical.
            pub fn new() -> Result<Self, CategoryError> {
                registry::validate::<E>($category)?;
                Ok(Self::unchecked())
            }

            #[inline(always)]
            pub(crate) const fn unchecked() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }

            /// Returns the embedded value.
            #[inline(always)]
            pub fn value(self) -> E::Value {
                E::VALUE
            }
        }

        impl<E: Embedded, T: Number> PartialEq<T> for $name<E> {
            #[inline]
            fn eq(&self, other: &T) -> bool {
                E::VALUE.into_parts() == other.into_parts()
            }
        }

        impl<E: Embedded> Number for $name<E> {
            const CATEGORY: Category = <E::Value as Number>::CATEGORY;
            const IS_WRAPPER: bool = true;

            #[inline]
            fn into_parts(self) -> Parts {
                E::VALUE.into_parts()
            }

            fn from_parts(parts: Parts) -> Option<Self> {
                (parts == E::VALUE.into_parts())
                    .then(Self::new)
                    .and_then(Result::ok)
            }

            #[inline(always)]
            fn is_identical(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<E: Embedded> From<$name<E>> for Wrapper<E> {
            #[inline(always)]
            fn from(_: $name<E>) -> Self {
                Wrapper::unchecked()
            }
        }

        impl<E: Embedded> Wrap for $name<E> {
            type Marker = E;

            #[inline(always)]
            fn wrap(self) -> Result<Wrapper<E>, CategoryError> {
                Ok(self.into())
            }
        }
    };
}

kind!(
    /// Wraps an embedded integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use typeval::{Int, Whole};
    /// let three = Whole::<Int<3>>::new().unwrap();
    /// assert_eq!(three.value(), 3);
    /// assert_eq!(three << 2_u32, 12);
    /// ```
    Whole,
    Category::Whole
);

kind!(
    /// Wraps an embedded real number that is not an integer by type: a float
    /// or a rational in lowest terms.
    Real,
    Category::Real
);

kind!(
    /// Wraps an embedded number that is not real.
    General,
    Category::General
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constant, Int, UInt};
    use num_complex::Complex;
    use num_rational::Ratio;

    constant! {
        Threeish: f64 = 3.0;
        TwoAndHalf: f64 = 2.5;
        Third: Ratio<i64> = Ratio::new_raw(1, 3);
        TwoSixths: Ratio<i64> = Ratio::new_raw(2, 6);
        OnePlusTwoI: Complex<i64> = Complex::new(1, 2);
        NestedWhole: Whole<Int<2>> = Whole::unchecked();
        NestedWrapper: Wrapper<Int<2>> = Wrapper::unchecked();
    }

    #[test]
    fn test_whole_accepts_integers_only() {
        assert!(Whole::<Int<-5>>::new().is_ok());
        assert!(Whole::<UInt<5>>::new().is_ok());
        assert!(matches!(
            Whole::<TwoAndHalf>::new(),
            Err(CategoryError::Mismatch {
                expected: Category::Whole,
                found: Category::Real,
                ..
            })
        ));
        // Integral floats are still floats.
        assert!(Whole::<Threeish>::new().is_err());
    }

    #[test]
    fn test_real_accepts_floats_and_rationals() {
        assert!(Real::<TwoAndHalf>::new().is_ok());
        assert!(Real::<Third>::new().is_ok());
        assert!(Real::<Int<2>>::new().is_err());
        assert!(Real::<OnePlusTwoI>::new().is_err());
    }

    #[test]
    fn test_general_accepts_complex_only() {
        assert!(General::<OnePlusTwoI>::new().is_ok());
        assert!(General::<TwoAndHalf>::new().is_err());
    }

    #[test]
    fn test_non_canonical_rational_is_rejected() {
        assert_eq!(
            Real::<TwoSixths>::new().err(),
            Some(CategoryError::NonCanonical {
                value: "2/6".to_string()
            })
        );
    }

    #[test]
    fn test_nested_wrappers_are_rejected_by_every_kind() {
        let nested = |r: Result<(), CategoryError>| matches!(r, Err(CategoryError::Nested { .. }));
        assert!(nested(Whole::<NestedWhole>::new().map(drop)));
        assert!(nested(Real::<NestedWhole>::new().map(drop)));
        assert!(nested(General::<NestedWhole>::new().map(drop)));
        assert!(nested(Whole::<NestedWrapper>::new().map(drop)));
    }

    #[test]
    fn test_kinds_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Whole<Int<1>>>(), 0);
        assert_eq!(std::mem::size_of::<Real<TwoAndHalf>>(), 0);
        assert_eq!(std::mem::size_of::<General<OnePlusTwoI>>(), 0);
    }

    #[test]
    fn test_kind_equality_is_numeric() {
        let three = Whole::<Int<3>>::new().unwrap();
        assert!(three == 3_u8);
        assert!(three == 3.0_f32);
        assert!(three != 4_i64);
        let third = Real::<Third>::new().unwrap();
        assert!(third == Ratio::new(2_i64, 6));
    }

    #[test]
    fn test_whole_shifts() {
        let five = Whole::<Int<5>>::new().unwrap();
        assert_eq!(five << 3_u32, 40_i64);
        assert_eq!(five >> 1_u8, 2_i64);
    }

    #[test]
    fn test_kind_from_parts() {
        assert!(Whole::<Int<3>>::from_parts(3.0_f64.into_parts()).is_some());
        assert!(Whole::<Int<3>>::from_parts(4_i32.into_parts()).is_none());
        assert!(Whole::<TwoAndHalf>::from_parts(2.5_f64.into_parts()).is_none());
    }
}
