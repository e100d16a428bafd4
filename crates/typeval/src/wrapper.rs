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

//! # Unified Wrapper
//!
//! [`Wrapper`] is the closed union of the three kinds. Which kind it holds
//! is fixed by the marker, so the wrapper stores nothing and every
//! `Wrapper<E>` value is interchangeable with every other. [`Kind`] is the
//! matchable view of that union. [`Wrap`] and [`wrap`] are the recommended
//! entry points: they pick the kind from the category of the embedded value
//! and leave existing wrappers untouched.

use crate::{
    embedded::{Embedded, Int, Size, UInt},
    error::CategoryError,
    kind::{General, Real, Whole},
};
use std::marker::PhantomData;
use typeval_core::num::{Category, Number, Parts};

/// A type-level numeric constant of any category.
///
/// # Examples
///
/// ```rust
/// # use typeval::{Category, Int, Wrapper};
/// let w = Wrapper::<Int<3>>::new().unwrap();
/// assert_eq!(w.category(), Category::Whole);
/// assert_eq!(w.value(), 3);
/// assert!(w == 3.0_f64);
/// assert_eq!(w.to_string(), "Wrapper(3)");
/// ```
pub struct Wrapper<E> {
    _marker: PhantomData<E>,
}

/// The kind held by a [`Wrapper`].
///
/// # Examples
///
/// ```rust
/// # use typeval::{wrap, Int, Kind};
/// match wrap(Int::<3>).unwrap().kind() {
///     Kind::Whole(w) => assert_eq!(w.value(), 3),
///     Kind::Real(_) | Kind::General(_) => unreachable!(),
/// }
/// ```
pub enum Kind<E> {
    Whole(Whole<E>),
    Real(Real<E>),
    General(General<E>),
}

impl<E> Clone for Wrapper<E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Wrapper<E> {}

impl<E> Clone for Kind<E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Kind<E> {}

impl<E: Embedded> Wrapper<E> {
    /// Validates the embedded value with the kind matching its category.
    ///
    /// # Errors
    ///
    /// Returns a `CategoryError` if the embedded value is itself a wrapper
    /// or is not canonical.
    pub fn new() -> Result<Self, CategoryError> {
        match <E::Value as Number>::CATEGORY {
            Category::Whole => Whole::<E>::new().map(Self::from),
            Category::Real => Real::<E>::new().map(Self::from),
            Category::General => General::<E>::new().map(Self::from),
        }
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

    /// Returns the category of the embedded value.
    #[inline(always)]
    pub fn category(self) -> Category {
        <E::Value as Number>::CATEGORY
    }

    /// Views the wrapper as the kind it holds.
    #[inline]
    pub fn kind(self) -> Kind<E> {
        match <E::Value as Number>::CATEGORY {
            Category::Whole => Kind::Whole(Whole::unchecked()),
            Category::Real => Kind::Real(Real::unchecked()),
            Category::General => Kind::General(General::unchecked()),
        }
    }

    /// Returns the whole-number kind, if that is what this wrapper holds.
    #[inline]
    pub fn as_whole(self) -> Option<Whole<E>> {
        match self.kind() {
            Kind::Whole(w) => Some(w),
            _ => None,
        }
    }

    /// Returns the real kind, if that is what this wrapper holds.
    #[inline]
    pub fn as_real(self) -> Option<Real<E>> {
        match self.kind() {
            Kind::Real(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the general kind, if that is what this wrapper holds.
    #[inline]
    pub fn as_general(self) -> Option<General<E>> {
        match self.kind() {
            Kind::General(g) => Some(g),
            _ => None,
        }
    }
}

impl<E: Embedded> Number for Wrapper<E> {
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

/// Exact numeric equality with any number, wrapped or not.
impl<E: Embedded, T: Number> PartialEq<T> for Wrapper<E> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        E::VALUE.into_parts() == other.into_parts()
    }
}

/// Conversion into the unified wrapper.
pub trait Wrap {
    /// The marker of the resulting wrapper.
    type Marker: Embedded;

    /// Wraps `self`.
    ///
    /// # Errors
    ///
    /// Returns a `CategoryError` if the embedded value cannot be wrapped.
    fn wrap(self) -> Result<Wrapper<Self::Marker>, CategoryError>;
}

/// Wrapping a wrapper is the identity.
impl<E: Embedded> Wrap for Wrapper<E> {
    type Marker = E;

    #[inline(always)]
    fn wrap(self) -> Result<Wrapper<E>, CategoryError> {
        Ok(self)
    }
}

macro_rules! wrap_const_generic {
    ($($marker:ident<const N: $t:ty>),*) => {
        $(
            impl<const N: $t> Wrap for $marker<N> {
                type Marker = $marker<N>;

                #[inline]
                fn wrap(self) -> Result<Wrapper<$marker<N>>, CategoryError> {
                    Wrapper::new()
                }
            }
        )*
    };
}

wrap_const_generic!(Int<const N: i64>, UInt<const N: u64>, Size<const N: usize>);

/// Wraps a marker, a kind or a wrapper.
///
/// # Examples
///
/// ```rust
/// # use typeval::{wrap, Int, Category};
/// let w = wrap(Int::<3>).unwrap();
/// assert_eq!(w.category(), Category::Whole);
/// assert!(wrap(w).unwrap() == w);
/// ```
#[inline]
pub fn wrap<W: Wrap>(value: W) -> Result<Wrapper<W::Marker>, CategoryError> {
    value.wrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant;
    use num_complex::Complex;
    use num_rational::Ratio;
    use proptest::prelude::*;

    constant! {
        TwoAndHalf: f64 = 2.5;
        Half: Ratio<i64> = Ratio::new_raw(1, 2);
        OnePlusTwoI: Complex<f64> = Complex::new(1.0, 2.0);
        Nested: Wrapper<Int<2>> = Wrapper::unchecked();
    }

    #[test]
    fn test_wrap_dispatches_on_category() {
        assert!(wrap(Int::<3>).unwrap().as_whole().is_some());
        assert!(wrap(UInt::<3>).unwrap().as_whole().is_some());
        assert!(wrap(Size::<3>).unwrap().as_whole().is_some());
        assert!(wrap(TwoAndHalf).unwrap().as_real().is_some());
        assert!(wrap(Half).unwrap().as_real().is_some());
        assert!(wrap(OnePlusTwoI).unwrap().as_general().is_some());
        assert_eq!(wrap(OnePlusTwoI).unwrap().category(), Category::General);
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let once = wrap(Int::<3>).unwrap();
        let twice = wrap(wrap(Int::<3>).unwrap()).unwrap();
        assert!(once == twice);
        assert_eq!(twice.value(), 3);
    }

    #[test]
    fn test_wrap_of_kind() {
        let real = Real::<TwoAndHalf>::new().unwrap();
        assert!(wrap(real).unwrap().as_real().is_some());
        assert!(Wrapper::from(real) == 2.5_f32);
    }

    #[test]
    fn test_wrapper_of_wrapper_is_rejected() {
        assert!(matches!(
            wrap(Nested),
            Err(CategoryError::Nested { value }) if value == "Wrapper(2)"
        ));
        assert!(Whole::<Nested>::new().is_err());
    }

    #[test]
    fn test_wrapper_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Wrapper<Int<1>>>(), 0);
        assert_eq!(std::mem::size_of::<Wrapper<TwoAndHalf>>(), 0);
        assert_eq!(std::mem::size_of::<Wrapper<OnePlusTwoI>>(), 0);
        assert_eq!(std::mem::size_of::<Option<Wrapper<Int<1>>>>(), 1);
    }

    #[test]
    fn test_kind_view_follows_category() {
        assert!(matches!(wrap(Int::<3>).unwrap().kind(), Kind::Whole(_)));
        assert!(matches!(wrap(Half).unwrap().kind(), Kind::Real(_)));
        assert!(matches!(wrap(OnePlusTwoI).unwrap().kind(), Kind::General(_)));
        assert!(wrap(Half).unwrap().as_whole().is_none());
        assert!(wrap(Int::<3>).unwrap().as_general().is_none());
    }

    #[test]
    fn test_equality_across_wrappers() {
        let a = wrap(Int::<2>).unwrap();
        let b = wrap(UInt::<2>).unwrap();
        let c = wrap(Int::<3>).unwrap();
        assert!(a == b);
        assert!(a != c);
        assert!(wrap(Half).unwrap() == 0.5_f64);
        assert!(wrap(OnePlusTwoI).unwrap() == Complex::new(1_i64, 2));
    }

    #[test]
    fn test_wrapper_as_number() {
        assert!(<Wrapper<Int<2>> as Number>::IS_WRAPPER);
        assert_eq!(<Wrapper<Half> as Number>::CATEGORY, Category::Real);
        assert!(Wrapper::<Int<2>>::from_parts(2.0_f64.into_parts()).is_some());
        assert!(Wrapper::<Int<2>>::from_parts(2.5_f64.into_parts()).is_none());
    }

    proptest! {
        #[test]
        fn prop_wrapper_equality_matches_value_equality(v in -100_i64..100) {
            let w = wrap(Int::<7>).unwrap();
            prop_assert_eq!(w == v, v == 7);
            prop_assert_eq!(w == v as f64, v == 7);
        }
    }
}
