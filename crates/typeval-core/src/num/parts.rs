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

//! # Exact Interchange Form
//!
//! Every number in the tower can be decomposed into [`Parts`]: a real and an
//! imaginary [`Component`], each of which is an integer, a float or a
//! rational. Equality on components is *exact numeric* equality across forms,
//! so `3_i64`, `3.0_f64` and `Ratio::new(6, 2)` all compare equal, while
//! `2^53 + 1` and `2.0^53` do not, even though the latter is what `as` would
//! produce.
//!
//! Floats are compared with rationals through their exact binary expansion
//! (`mantissa * 2^exponent`), never through rounding.

use num_rational::Ratio;
use num_traits::{Float, ToPrimitive};

/// One exact scalar.
///
/// Integers are normalized: `Unsigned` only holds values above `i128::MAX`,
/// so an integer has exactly one representation.
#[derive(Clone, Copy, Debug)]
pub enum Component {
    /// An integer in `i128` range.
    Signed(i128),
    /// An integer above `i128::MAX`.
    Unsigned(u128),
    /// A binary floating point value (`f32` values are widened losslessly).
    Float(f64),
    /// A rational number.
    Ratio(Ratio<i64>),
}

impl Component {
    /// Creates an integer component from an unsigned value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use typeval_core::num::parts::Component;
    /// assert!(matches!(Component::from_u128(7), Component::Signed(7)));
    /// assert!(matches!(Component::from_u128(u128::MAX), Component::Unsigned(_)));
    /// ```
    #[inline]
    pub fn from_u128(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(value) => Component::Signed(value),
            Err(_) => Component::Unsigned(value),
        }
    }

    /// Returns `true` if the component is numerically zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Component::Signed(v) => v == 0,
            Component::Unsigned(_) => false,
            Component::Float(v) => v == 0.0,
            Component::Ratio(v) => *v.numer() == 0 && *v.denom() != 0,
        }
    }

    /// Returns the component as an `i128` if it is an integer in range.
    pub fn to_i128(self) -> Option<i128> {
        match self {
            Component::Signed(v) => Some(v),
            Component::Unsigned(_) => None,
            Component::Float(v) => {
                // i128::MIN is -2^127 and exact; i128::MAX rounds up to 2^127.
                let in_range = v >= i128::MIN as f64 && v < i128::MAX as f64;
                (v.fract() == 0.0 && in_range).then_some(v as i128)
            }
            Component::Ratio(v) => {
                (*v.denom() == 1).then_some(i128::from(*v.numer()))
            }
        }
    }

    /// Returns the component as a `u128` if it is a non-negative integer in range.
    pub fn to_u128(self) -> Option<u128> {
        match self {
            Component::Signed(v) => u128::try_from(v).ok(),
            Component::Unsigned(v) => Some(v),
            Component::Float(v) => {
                let in_range = v >= 0.0 && v < u128::MAX as f64;
                (v.fract() == 0.0 && in_range).then_some(v as u128)
            }
            Component::Ratio(v) => {
                if *v.denom() == 1 {
                    u128::try_from(*v.numer()).ok()
                } else {
                    None
                }
            }
        }
    }

    /// Returns the component as a `Ratio<i64>` if it is exactly representable.
    pub fn to_ratio(self) -> Option<Ratio<i64>> {
        match self {
            Component::Signed(v) => i64::try_from(v).ok().map(Ratio::from_integer),
            Component::Unsigned(_) => None,
            Component::Float(v) => float_to_ratio(v),
            Component::Ratio(v) => Some(v),
        }
    }

    /// Returns the nearest `f64`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Component::Signed(v) => v as f64,
            Component::Unsigned(v) => v as f64,
            Component::Float(v) => v,
            Component::Ratio(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Returns the nearest `f32`, converting each form directly.
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Component::Signed(v) => v as f32,
            Component::Unsigned(v) => v as f32,
            Component::Float(v) => v as f32,
            Component::Ratio(v) => v.to_f32().unwrap_or(f32::NAN),
        }
    }

    /// Returns the component truncated to an integer with `as` semantics.
    ///
    /// `Unsigned` values keep their bit pattern, so a subsequent `as u128`
    /// restores them.
    #[inline]
    pub fn as_i128(self) -> i128 {
        match self {
            Component::Signed(v) => v,
            Component::Unsigned(v) => v as i128,
            Component::Float(v) => v as i128,
            Component::Ratio(v) => i128::from(v.to_integer()),
        }
    }

    /// Returns the component as a rational, rounding floats that have no exact
    /// `Ratio<i64>` form to the nearest integer.
    #[inline]
    pub fn as_ratio(self) -> Ratio<i64> {
        self.to_ratio()
            .unwrap_or_else(|| Ratio::from_integer(self.as_f64() as i64))
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        use Component as C;

        match (*self, *other) {
            (C::Float(a), C::Float(b)) => a == b,
            (C::Float(f), exact) | (exact, C::Float(f)) => match exact {
                C::Signed(v) => C::Float(f).to_i128() == Some(v),
                C::Unsigned(v) => C::Float(f).to_u128() == Some(v),
                C::Ratio(v) => float_to_ratio(f).is_some_and(|r| r == v),
                C::Float(_) => false,
            },
            (C::Signed(a), C::Signed(b)) => a == b,
            (C::Unsigned(a), C::Unsigned(b)) => a == b,
            (C::Signed(_), C::Unsigned(_)) | (C::Unsigned(_), C::Signed(_)) => false,
            (C::Ratio(a), C::Ratio(b)) => a == b,
            (C::Ratio(r), int) | (int, C::Ratio(r)) => {
                *r.denom() == 1 && int.to_i128() == Some(i128::from(*r.numer()))
            }
        }
    }
}

/// Converts a float into the exact rational it denotes, if both numerator and
/// denominator fit into `i64`. The result is in lowest terms.
///
/// # Examples
///
/// ```rust
/// # use typeval_core::num::parts::float_to_ratio;
/// # use num_rational::Ratio;
/// assert_eq!(float_to_ratio(2.5), Some(Ratio::new(5, 2)));
/// assert_eq!(float_to_ratio(f64::NAN), None);
/// // 0.1 is stored as a dyadic fraction close to, but not equal to, 1/10.
/// assert_ne!(float_to_ratio(0.1), Some(Ratio::new(1, 10)));
/// // Too small for an `i64` denominator.
/// assert_eq!(float_to_ratio(1e-30), None);
/// ```
pub fn float_to_ratio(value: f64) -> Option<Ratio<i64>> {
    if !value.is_finite() {
        return None;
    }

    let (mantissa, exponent, sign) = Float::integer_decode(value);
    if mantissa == 0 {
        return Some(Ratio::new_raw(0, 1));
    }
    let sign = i64::from(sign);

    if exponent >= 0 {
        let exponent = u32::from(exponent.unsigned_abs());
        if exponent > 63 {
            return None;
        }
        let numer = i128::from(sign) * (i128::from(mantissa) << exponent);
        return Some(Ratio::new_raw(i64::try_from(numer).ok()?, 1));
    }

    let mut mantissa = mantissa;
    let mut exponent = u32::from(exponent.unsigned_abs());
    let shift = mantissa.trailing_zeros().min(exponent);
    mantissa >>= shift;
    exponent -= shift;
    if exponent > 62 {
        return None;
    }
    let numer = i64::try_from(mantissa).ok()?;
    Some(Ratio::new_raw(sign * numer, 1_i64 << exponent))
}

/// The exact decomposition of a number into real and imaginary components.
///
/// Real numbers have a zero imaginary component. Equality is exact numeric
/// equality on both components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parts {
    /// The real component.
    pub re: Component,
    /// The imaginary component.
    pub im: Component,
}

impl Parts {
    /// Creates the parts of a real number.
    #[inline]
    pub const fn real(re: Component) -> Self {
        Self {
            re,
            im: Component::Signed(0),
        }
    }

    /// Creates the parts of a complex number.
    #[inline]
    pub const fn complex(re: Component, im: Component) -> Self {
        Self { re, im }
    }

    /// Returns `true` if the imaginary component is zero.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}
