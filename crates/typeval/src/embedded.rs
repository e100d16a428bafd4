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

//! # Embedded Values
//!
//! A marker is a zero-sized type whose only content is a compile-time
//! constant, exposed through [`Embedded::VALUE`]. Markers come from const
//! generics ([`Int`], [`UInt`], [`Size`]) or from the
//! [`constant!`](crate::constant) macro for values const generics cannot
//! carry (floats, rationals, complex numbers).

use std::any::{Any, TypeId};
use typeval_core::num::Number;

/// A zero-sized type carrying a numeric constant.
///
/// The `Number` bound on the value excludes references and heap data, so an
/// embedded value is always immutable and self-contained.
pub trait Embedded: Copy + Send + Sync + 'static {
    /// The runtime type of the embedded value.
    type Value: Number;

    /// The embedded value.
    const VALUE: Self::Value;
}

/// A signed integer constant.
///
/// # Examples
///
/// ```rust
/// # use typeval::{Embedded, Int};
/// assert_eq!(<Int<-3> as Embedded>::VALUE, -3_i64);
/// assert_eq!(std::mem::size_of::<Int<-3>>(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Int<const N: i64>;

/// An unsigned integer constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt<const N: u64>;

/// A size constant, typically an array dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size<const N: usize>;

impl<const N: i64> Embedded for Int<N> {
    type Value = i64;
    const VALUE: i64 = N;
}

impl<const N: u64> Embedded for UInt<N> {
    type Value = u64;
    const VALUE: u64 = N;
}

impl<const N: usize> Embedded for Size<N> {
    type Value = usize;
    const VALUE: usize = N;
}

/// Returns `true` if `A` and `B` embed the same value.
///
/// Two markers share a value when they are the same type, or when their
/// values have the same runtime type and are identical (bitwise for floats,
/// so `NaN` shares its value with `NaN` but `0.0` does not with `-0.0`).
/// Values of different runtime types never share a value, even when they
/// are numerically equal.
///
/// # Examples
///
/// ```rust
/// # use typeval::{embedded::same_value, Int, UInt};
/// assert!(same_value::<Int<2>, Int<2>>());
/// assert!(!same_value::<Int<2>, Int<3>>());
/// assert!(!same_value::<Int<2>, UInt<2>>());
/// ```
#[inline]
pub fn same_value<A: Embedded, B: Embedded>() -> bool {
    if TypeId::of::<A>() == TypeId::of::<B>() {
        return true;
    }
    let rhs = B::VALUE;
    let rhs: &dyn Any = &rhs;
    rhs.downcast_ref::<A::Value>()
        .is_some_and(|rhs| A::VALUE.is_identical(rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant;

    constant! {
        Two: i64 = 2;
        NaN: f64 = f64::NAN;
        OtherNaN: f64 = f64::NAN;
        Zero: f64 = 0.0;
        NegZero: f64 = -0.0;
    }

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Int<7>>(), 0);
        assert_eq!(std::mem::size_of::<UInt<7>>(), 0);
        assert_eq!(std::mem::size_of::<Size<7>>(), 0);
        assert_eq!(std::mem::size_of::<Two>(), 0);
    }

    #[test]
    fn test_same_value_across_markers() {
        assert!(same_value::<Int<2>, Two>());
        assert!(same_value::<Two, Int<2>>());
        assert!(!same_value::<Size<2>, Two>());
    }

    #[test]
    fn test_same_value_uses_identity_for_floats() {
        assert!(same_value::<NaN, OtherNaN>());
        assert!(!same_value::<Zero, NegZero>());
    }
}
