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

//! Predeclared constants.

use num_complex::Complex;
use num_rational::Ratio;

crate::constant! {
    /// Archimedes' constant, `π`.
    pub Pi: f64 = std::f64::consts::PI;

    /// The full circle constant, `τ = 2π`.
    pub Tau: f64 = std::f64::consts::TAU;

    /// Euler's number, `e`.
    pub Euler: f64 = std::f64::consts::E;

    /// One half as an exact rational.
    pub Half: Ratio<i64> = Ratio::new_raw(1, 2);

    /// The imaginary unit, `i`.
    pub ImaginaryUnit: Complex<i64> = Complex::new(0, 1);

    /// Positive infinity.
    pub Infinity: f64 = f64::INFINITY;

    /// Not a number.
    pub NotANumber: f64 = f64::NAN;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fix, wrap, Category, Int};

    #[test]
    fn test_constants_wrap_into_their_category() {
        assert_eq!(wrap(Pi).unwrap().category(), Category::Real);
        assert_eq!(wrap(Half).unwrap().category(), Category::Real);
        assert_eq!(wrap(ImaginaryUnit).unwrap().category(), Category::General);
        assert_eq!(wrap(Infinity).unwrap().to_string(), "Wrapper(inf)");
    }

    #[test]
    fn test_tau_is_two_pi() {
        let two = wrap(Int::<2>).unwrap();
        assert_eq!(two * wrap(Pi).unwrap(), wrap(Tau).unwrap().value());
        assert!(wrap(Tau).unwrap() > wrap(Pi).unwrap());
    }

    #[test]
    fn test_imaginary_unit_squared() {
        let i = wrap(ImaginaryUnit).unwrap();
        assert_eq!(i * i, Complex::new(-1, 0));
    }

    #[test]
    fn test_nan_never_matches() {
        let nan = wrap(NotANumber).unwrap();
        assert!(nan != f64::NAN);
        assert!(!fix(f64::NAN, &crate::catalog![nan]).is_matched());
    }

    #[test]
    fn test_half_matches_float() {
        let fixed = fix(0.5_f32, &crate::catalog![wrap(Half).unwrap()]);
        assert!(fixed.wrapper::<Half>().is_some());
    }
}
