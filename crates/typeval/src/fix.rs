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

//! # Catalog Matching
//!
//! [`fix`] reclassifies a runtime number as one of a list of known
//! wrappers: it tests the candidates in order with exact numeric equality
//! and returns the first wrapper equal to the value, or the value itself if
//! none is. A value that already is a wrapper is returned as is without
//! consulting the catalog.
//!
//! Catalogs come in two shapes:
//!
//! - compile-time cons lists of wrappers built with [`catalog!`], where
//!   every candidate keeps its concrete type;
//! - slices and vectors of `Box<dyn AnyWrapper>`, when the candidate set is
//!   only known at runtime.
//!
//! The search is linear in the number of candidates.
//!
//! [`catalog!`]: crate::catalog

use crate::{
    embedded::Embedded,
    error::CategoryError,
    wrapper::{Wrap, Wrapper},
};
use std::any::Any;
use std::fmt;
use typeval_core::num::{Category, Number, Parts};

/// An object-safe view of any wrapper.
pub trait AnyWrapper: fmt::Display + fmt::Debug + Send + Sync + 'static {
    fn category(&self) -> Category;

    /// The exact parts of the embedded value.
    fn parts(&self) -> Parts;

    fn as_any(&self) -> &dyn Any;

    fn boxed(&self) -> Box<dyn AnyWrapper>;
}

impl<E: Embedded> AnyWrapper for Wrapper<E> {
    #[inline]
    fn category(&self) -> Category {
        Wrapper::category(*self)
    }

    #[inline]
    fn parts(&self) -> Parts {
        E::VALUE.into_parts()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn boxed(&self) -> Box<dyn AnyWrapper> {
        Box::new(*self)
    }
}

impl Clone for Box<dyn AnyWrapper> {
    fn clone(&self) -> Self {
        (**self).boxed()
    }
}

/// The outcome of [`fix`].
#[derive(Debug, Clone)]
pub enum Fixed<T> {
    /// The value equals this catalog entry.
    Matched(Box<dyn AnyWrapper>),
    /// No entry matched, or the value already was a wrapper.
    Unchanged(T),
}

impl<T> Fixed<T> {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Fixed::Matched(_))
    }

    /// Returns the matched entry if it is a `Wrapper<E>`.
    pub fn wrapper<E: Embedded>(&self) -> Option<Wrapper<E>> {
        match self {
            Fixed::Matched(w) => w.as_any().downcast_ref::<Wrapper<E>>().copied(),
            Fixed::Unchanged(_) => None,
        }
    }

    pub fn matched(&self) -> Option<&dyn AnyWrapper> {
        match self {
            Fixed::Matched(w) => Some(w.as_ref()),
            Fixed::Unchanged(_) => None,
        }
    }

    pub fn into_unchanged(self) -> Option<T> {
        match self {
            Fixed::Matched(_) => None,
            Fixed::Unchanged(x) => Some(x),
        }
    }
}

/// Two matches are equal when they matched the same wrapper type.
impl<T: PartialEq> PartialEq for Fixed<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Fixed::Matched(a), Fixed::Matched(b)) => {
                a.as_any().type_id() == b.as_any().type_id()
            }
            (Fixed::Unchanged(a), Fixed::Unchanged(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Fixed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fixed::Matched(w) => fmt::Display::fmt(w, f),
            Fixed::Unchanged(x) => fmt::Display::fmt(x, f),
        }
    }
}

/// An ordered list of candidate wrappers for values of type `T`.
pub trait Catalog<T> {
    /// Returns the first candidate equal to `x`.
    fn find(&self, x: &T) -> Option<Box<dyn AnyWrapper>>;
}

impl<T> Catalog<T> for () {
    #[inline(always)]
    fn find(&self, _x: &T) -> Option<Box<dyn AnyWrapper>> {
        None
    }
}

impl<T, E, Tail> Catalog<T> for (Wrapper<E>, Tail)
where
    T: Number,
    E: Embedded,
    Tail: Catalog<T>,
{
    #[inline]
    fn find(&self, x: &T) -> Option<Box<dyn AnyWrapper>> {
        if self.0 == *x {
            return Some(self.0.boxed());
        }
        self.1.find(x)
    }
}

impl<T: Number> Catalog<T> for [Box<dyn AnyWrapper>] {
    fn find(&self, x: &T) -> Option<Box<dyn AnyWrapper>> {
        let parts = x.into_parts();
        self.iter()
            .find(|candidate| candidate.parts() == parts)
            .map(|candidate| candidate.boxed())
    }
}

impl<T: Number> Catalog<T> for Vec<Box<dyn AnyWrapper>> {
    #[inline]
    fn find(&self, x: &T) -> Option<Box<dyn AnyWrapper>> {
        self.as_slice().find(x)
    }
}

/// Matches `x` against the catalog.
///
/// # Examples
///
/// ```rust
/// # use typeval::{catalog, fix, wrap, Int};
/// let candidates = catalog![
///     wrap(Int::<3>).unwrap(),
///     wrap(Int::<5>).unwrap(),
///     wrap(Int::<7>).unwrap(),
/// ];
///
/// let fixed = fix(5_i32, &candidates);
/// assert_eq!(fixed.to_string(), "Wrapper(5)");
/// assert!(fixed.wrapper::<Int<5>>().is_some());
///
/// assert_eq!(fix(4_i32, &candidates).into_unchanged(), Some(4));
/// ```
pub fn fix<T, C>(x: T, catalog: &C) -> Fixed<T>
where
    T: Number,
    C: Catalog<T> + ?Sized,
{
    if T::IS_WRAPPER {
        return Fixed::Unchanged(x);
    }

    match catalog.find(&x) {
        Some(matched) => {
            tracing::trace!(value = %x, matched = %matched, "fix: matched catalog entry");
            Fixed::Matched(matched)
        }
        None => Fixed::Unchanged(x),
    }
}

/// A cons list whose every element can be wrapped.
pub trait WrapAll {
    /// The list of the resulting wrappers.
    type Wrapped;

    fn wrap_all(self) -> Result<Self::Wrapped, CategoryError>;
}

impl WrapAll for () {
    type Wrapped = ();

    #[inline(always)]
    fn wrap_all(self) -> Result<(), CategoryError> {
        Ok(())
    }
}

impl<H: Wrap, Tail: WrapAll> WrapAll for (H, Tail) {
    type Wrapped = (Wrapper<H::Marker>, Tail::Wrapped);

    #[inline]
    fn wrap_all(self) -> Result<Self::Wrapped, CategoryError> {
        Ok((self.0.wrap()?, self.1.wrap_all()?))
    }
}

/// Wraps every candidate in `candidates`, then matches `x` against them.
///
/// # Errors
///
/// Returns the `CategoryError` of the first candidate that cannot be
/// wrapped. Candidates are wrapped before any is compared.
///
/// # Examples
///
/// ```rust
/// # use typeval::{fix::try_fix, list, Int, UInt};
/// let fixed = try_fix(2.0_f64, list![Int::<1>, UInt::<2>]).unwrap();
/// assert!(fixed.wrapper::<UInt<2>>().is_some());
/// ```
pub fn try_fix<T, L>(x: T, candidates: L) -> Result<Fixed<T>, CategoryError>
where
    T: Number,
    L: WrapAll,
    L::Wrapped: Catalog<T>,
{
    let catalog = candidates.wrap_all()?;
    Ok(fix(x, &catalog))
}
