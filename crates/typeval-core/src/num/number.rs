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

//! # Number Traits
//!
//! `Number` is the contract every numeric value in the system fulfils, be it
//! an ordinary runtime number or a type-level wrapper. `Plain` narrows it
//! down to the ordinary runtime numbers of the tower, which are the only
//! possible results of promotion.
//!
//! The supertraits (`Copy + Send + Sync + 'static`) are what make a value
//! "immutable and self-contained": a `Number` cannot borrow, cannot own heap
//! memory and cannot be mutated through a shared handle.

use crate::num::{
    category::Category,
    constants::{One, Zero},
    parts::{Component, Parts},
};
use num_complex::Complex;
use num_rational::Ratio;

/// A numeric value that belongs to exactly one [`Category`] and can be
/// decomposed into exact [`Parts`].
pub trait Number: Copy + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static {
    /// The category every value of this type belongs to.
    const CATEGORY: Category;

    /// Whether this type is itself a type-level wrapper around a constant.
    const IS_WRAPPER: bool = false;

    /// Decomposes the value into its exact parts.
    fn into_parts(self) -> Parts;

    /// Reconstructs a value from parts, returning `None` unless the parts are
    /// representable in `Self`. Float targets round to the nearest value;
    /// every other target is exact.
    fn from_parts(parts: Parts) -> Option<Self>;

    /// Identity as opposed to numeric equality: `NaN` is identical to `NaN`
    /// and `0.0` is not identical to `-0.0`.
    fn is_identical(&self, other: &Self) -> bool;

    /// Whether the value is in canonical form.
    #[inline]
    fn is_canonical(&self) -> bool {
        true
    }
}

/// An ordinary runtime number of the tower.
pub trait Plain: Number + PartialEq + Zero + One {
    /// Converts parts into `Self` with host rounding (`as` semantics),
    /// ignoring any imaginary component for real targets.
    fn lift(parts: Parts) -> Self;
}

macro_rules! impl_number_for_int {
    ($($t:ty => $to_component:expr),* $(,)?) => {
        $(
            impl Number for $t {
                const CATEGORY: Category = Category::Whole;

                #[inline]
                fn into_parts(self) -> Parts {
                    Parts::real(($to_component)(self))
                }

                #[inline]
                fn from_parts(parts: Parts) -> Option<Self> {
                    if !parts.is_real() {
                        return None;
                    }
                    parts
                        .re
                        .to_i128()
                        .and_then(|v| <$t>::try_from(v).ok())
                        .or_else(|| parts.re.to_u128().and_then(|v| <$t>::try_from(v).ok()))
                }

                #[inline]
                fn is_identical(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Plain for $t {
                #[inline]
                fn lift(parts: Parts) -> Self {
                    parts.re.as_i128() as $t
                }
            }
        )*
    };
}

impl_number_for_int!(
    i8 => |v: i8| Component::Signed(i128::from(v)),
    i16 => |v: i16| Component::Signed(i128::from(v)),
    i32 => |v: i32| Component::Signed(i128::from(v)),
    i64 => |v: i64| Component::Signed(i128::from(v)),
    i128 => Component::Signed,
    isize => |v: isize| Component::Signed(v as i128),
    u8 => |v: u8| Component::Signed(i128::from(v)),
    u16 => |v: u16| Component::Signed(i128::from(v)),
    u32 => |v: u32| Component::Signed(i128::from(v)),
    u64 => |v: u64| Component::Signed(i128::from(v)),
    u128 => Component::from_u128,
    usize => |v: usize| Component::from_u128(v as u128),
);

macro_rules! impl_number_for_float {
    ($($t:ty => $to_float:ident),*) => {
        $(
            impl Number for $t {
                const CATEGORY: Category = Category::Real;

                #[inline]
                fn into_parts(self) -> Parts {
                    Parts::real(Component::Float(f64::from(self)))
                }

                #[inline]
                fn from_parts(parts: Parts) -> Option<Self> {
                    parts.is_real().then(|| parts.re.$to_float())
                }

                #[inline]
                fn is_identical(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }
            }

            impl Plain for $t {
                #[inline]
                fn lift(parts: Parts) -> Self {
                    parts.re.$to_float()
                }
            }
        )*
    };
}

impl_number_for_float!(f32 => as_f32, f64 => as_f64);

impl Number for Ratio<i64> {
    const CATEGORY: Category = Category::Real;

    #[inline]
    fn into_parts(self) -> Parts {
        Parts::real(Component::Ratio(self))
    }

    #[inline]
    fn from_parts(parts: Parts) -> Option<Self> {
        if !parts.is_real() {
            return None;
        }
        parts.re.to_ratio()
    }

    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        self.numer() == other.numer() && self.denom() == other.denom()
    }

    /// A rational is canonical when its denominator is positive and it is
    /// in lowest terms.
    fn is_canonical(&self) -> bool {
        if *self.denom() <= 0 {
            return false;
        }
        let reduced = self.reduced();
        reduced.numer() == self.numer() && reduced.denom() == self.denom()
    }
}

impl Plain for Ratio<i64> {
    #[inline]
    fn lift(parts: Parts) -> Self {
        parts.re.as_ratio()
    }
}

macro_rules! impl_number_for_complex {
    ($($t:ty),*) => {
        $(
            impl Number for Complex<$t> {
                const CATEGORY: Category = Category::General;

                #[inline]
                fn into_parts(self) -> Parts {
                    Parts::complex(self.re.into_parts().re, self.im.into_parts().re)
                }

                #[inline]
                fn from_parts(parts: Parts) -> Option<Self> {
                    let re = <$t>::from_parts(Parts::real(parts.re))?;
                    let im = <$t>::from_parts(Parts::real(parts.im))?;
                    Some(Complex::new(re, im))
                }

                #[inline]
                fn is_identical(&self, other: &Self) -> bool {
                    self.re.is_identical(&other.re) && self.im.is_identical(&other.im)
                }
            }

            impl Plain for Complex<$t> {
                #[inline]
                fn lift(parts: Parts) -> Self {
                    Complex::new(
                        <$t>::lift(Parts::real(parts.re)),
                        <$t>::lift(Parts::real(parts.im)),
                    )
                }
            }
        )*
    };
}

impl_number_for_complex!(i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(<u16 as Number>::CATEGORY, Category::Whole);
        assert_eq!(<usize as Number>::CATEGORY, Category::Whole);
        assert_eq!(<f32 as Number>::CATEGORY, Category::Real);
        assert_eq!(<Ratio<i64> as Number>::CATEGORY, Category::Real);
        assert_eq!(<Complex<i64> as Number>::CATEGORY, Category::General);
        assert!(!<Complex<f64> as Number>::IS_WRAPPER);
    }

    #[test]
    fn test_from_parts_is_exact_for_integers() {
        assert_eq!(i8::from_parts(3.0_f64.into_parts()), Some(3));
        assert_eq!(i8::from_parts(300_i32.into_parts()), None);
        assert_eq!(u8::from_parts((-1_i32).into_parts()), None);
        assert_eq!(i64::from_parts(2.5_f64.into_parts()), None);
        assert_eq!(i64::from_parts(Complex::new(1_i64, 1).into_parts()), None);
        assert_eq!(u128::from_parts(u128::MAX.into_parts()), Some(u128::MAX));
        assert_eq!(i32::from_parts(Ratio::new(10_i64, 5).into_parts()), Some(2));
    }

    #[test]
    fn test_from_parts_rounds_for_floats() {
        assert_eq!(f32::from_parts(0.1_f64.into_parts()), Some(0.1_f32));
        assert_eq!(f64::from_parts(Ratio::new(1_i64, 4).into_parts()), Some(0.25));
        assert_eq!(f64::from_parts(Complex::new(0.0_f64, 1.0).into_parts()), None);
    }

    #[test]
    fn test_from_parts_complex_and_ratio() {
        assert_eq!(
            Complex::<f64>::from_parts(3_i64.into_parts()),
            Some(Complex::new(3.0, 0.0))
        );
        assert_eq!(
            Complex::<i64>::from_parts(Complex::new(1.0_f32, 2.0).into_parts()),
            Some(Complex::new(1, 2))
        );
        assert_eq!(Complex::<i64>::from_parts(Complex::new(1.5_f64, 2.0).into_parts()), None);
        assert_eq!(Ratio::<i64>::from_parts(2.5_f64.into_parts()), Some(Ratio::new(5, 2)));
        assert_eq!(Ratio::<i64>::from_parts(u64::MAX.into_parts()), None);
    }

    #[test]
    fn test_identity_differs_from_equality_for_floats() {
        assert!(f64::NAN.is_identical(&f64::NAN));
        assert!(!0.0_f64.is_identical(&-0.0));
        assert!(Complex::new(f32::NAN, 1.0).is_identical(&Complex::new(f32::NAN, 1.0)));
    }

    #[test]
    fn test_ratio_canonical_form() {
        assert!(Ratio::new(2_i64, 4).is_canonical());
        assert!(!Ratio::new_raw(2_i64, 4).is_canonical());
        assert!(!Ratio::new_raw(1_i64, 0).is_canonical());
        assert!(!Ratio::new_raw(1_i64, -2).is_canonical());
        assert!(Ratio::new(-1_i64, 2).is_canonical());
    }

    #[test]
    fn test_lift_uses_host_rounding() {
        assert_eq!(f32::lift(16_777_217_i64.into_parts()), 16_777_216.0);
        let big = (1_i64 << 60) + (1 << 36) + 1;
        assert_eq!(f32::lift(big.into_parts()).to_bits(), (big as f32).to_bits());
        assert_eq!(f32::from_parts(big.into_parts()), Some(big as f32));
        assert_eq!(i64::lift(7_u8.into_parts()), 7);
        assert_eq!(u128::lift(u128::MAX.into_parts()), u128::MAX);
        assert_eq!(Ratio::<i64>::lift(3_i32.into_parts()), Ratio::from_integer(3));
        assert_eq!(Complex::<f64>::lift(Ratio::new(1_i64, 2).into_parts()), Complex::new(0.5, 0.0));
    }
}
