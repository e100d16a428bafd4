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

//! # Conversion Protocol
//!
//! Conversion into a wrapper is an identity assertion, not a cast: it
//! succeeds only when the runtime value equals the embedded value exactly.
//! Conversion out of a wrapper converts the embedded value into the target
//! type, rounding for float targets and failing for every other target if
//! the value is not representable.

use crate::{
    embedded::Embedded,
    error::ConversionError,
    macros::for_each_plain,
    wrapper::{Wrap, Wrapper},
};
use num_complex::Complex;
use num_rational::Ratio;
use num_traits::ToPrimitive;
use std::any::type_name;
use typeval_core::num::Number;

impl<E: Embedded> Wrapper<E> {
    /// Returns the wrapper if `value` equals the embedded value.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Mismatch` if the values differ, or
    /// `ConversionError::Category` if the wrapper itself cannot be built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use typeval::{Int, Wrapper};
    /// assert!(Wrapper::<Int<3>>::convert_from(3.0_f32).is_ok());
    /// assert!(Wrapper::<Int<3>>::convert_from(4_u8).is_err());
    /// ```
    pub fn convert_from<V: Number>(value: V) -> Result<Self, ConversionError> {
        let wrapper = Self::new()?;
        if value.into_parts() == E::VALUE.into_parts() {
            Ok(wrapper)
        } else {
            Err(ConversionError::Mismatch {
                value: value.to_string(),
                expected: E::VALUE.to_string(),
            })
        }
    }

    /// Converts the embedded value into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Inexact` if `T` is not a float type and
    /// cannot represent the embedded value exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use typeval::{wrap, Int};
    /// # use num_complex::Complex;
    /// let three = wrap(Int::<3>).unwrap();
    /// assert_eq!(three.convert_to::<u8>(), Ok(3));
    /// assert_eq!(three.convert_to::<Complex<f32>>(), Ok(Complex::new(3.0, 0.0)));
    /// assert!(wrap(Int::<-3>).unwrap().convert_to::<u8>().is_err());
    /// ```
    pub fn convert_to<T: Number>(self) -> Result<T, ConversionError> {
        T::from_parts(E::VALUE.into_parts()).ok_or_else(|| ConversionError::Inexact {
            value: E::VALUE.to_string(),
            target: type_name::<T>(),
        })
    }

    /// Returns the embedded value as a rational, if it is exactly one.
    #[inline]
    pub fn to_rational64(self) -> Option<Ratio<i64>> {
        self.convert_to().ok()
    }

    /// Returns the embedded value as a `Complex<f32>`, rounding each part.
    #[inline]
    pub fn to_complex32(self) -> Option<Complex<f32>> {
        self.convert_to().ok()
    }

    #[inline]
    pub fn to_complex64(self) -> Option<Complex<f64>> {
        self.convert_to().ok()
    }
}

/// Converts `value` into the wrapper around `E`.
///
/// See [`Wrapper::convert_from`].
#[inline]
pub fn convert_from<E: Embedded, V: Number>(value: V) -> Result<Wrapper<E>, ConversionError> {
    Wrapper::convert_from(value)
}

/// Converts anything wrappable into `T`.
///
/// See [`Wrapper::convert_to`].
///
/// # Examples
///
/// ```rust
/// # use typeval::{convert_to, Int};
/// assert_eq!(convert_to::<f64, _>(Int::<7>), Ok(7.0));
/// ```
#[inline]
pub fn convert_to<T: Number, W: Wrap>(value: W) -> Result<T, ConversionError> {
    value.wrap()?.convert_to()
}

macro_rules! try_from_plain {
    ($($p:ty),*) => {
        $(
            impl<E: Embedded> TryFrom<$p> for Wrapper<E> {
                type Error = ConversionError;

                #[inline]
                fn try_from(value: $p) -> Result<Self, Self::Error> {
                    Self::convert_from(value)
                }
            }
        )*
    };
}

for_each_plain!(try_from_plain);

macro_rules! to_primitive_method {
    ($($method:ident -> $t:ty),*) => {
        $(
            #[inline]
            fn $method(&self) -> Option<$t> {
                self.convert_to().ok()
            }
        )*
    };
}

impl<E: Embedded> ToPrimitive for Wrapper<E> {
    to_primitive_method!(
        to_isize -> isize,
        to_i8 -> i8,
        to_i16 -> i16,
        to_i32 -> i32,
        to_i64 -> i64,
        to_i128 -> i128,
        to_usize -> usize,
        to_u8 -> u8,
        to_u16 -> u16,
        to_u32 -> u32,
        to_u64 -> u64,
        to_u128 -> u128,
        to_f32 -> f32,
        to_f64 -> f64
    );
}
