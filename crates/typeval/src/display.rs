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

//! Rendering. Every wrapper renders as `Wrapper(<value>)` regardless of
//! kind; the category shows only through how the value itself renders.

use crate::{
    embedded::Embedded,
    kind::{General, Real, Whole},
    wrapper::Wrapper,
};
use std::fmt;

macro_rules! display_impl {
    ($($t:ident),*) => {
        $(
            impl<E: Embedded> fmt::Display for $t<E> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "Wrapper({})", E::VALUE)
                }
            }

            impl<E: Embedded> fmt::Debug for $t<E> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_impl!(Wrapper, Whole, Real, General);

#[cfg(test)]
mod tests {
    use crate::{constant, wrap, Int, Real, UInt, Whole};
    use num_complex::Complex;
    use num_rational::Ratio;

    constant! {
        TwoAndHalf: f64 = 2.5;
        OnePlusTwoI: Complex<i64> = Complex::new(1, 2);
        Third: Ratio<i64> = Ratio::new_raw(1, 3);
    }

    #[test]
    fn test_wrapper_display() {
        assert_eq!(wrap(Int::<3>).unwrap().to_string(), "Wrapper(3)");
        assert_eq!(wrap(TwoAndHalf).unwrap().to_string(), "Wrapper(2.5)");
        assert_eq!(wrap(OnePlusTwoI).unwrap().to_string(), "Wrapper(1+2i)");
        assert_eq!(wrap(Third).unwrap().to_string(), "Wrapper(1/3)");
    }

    #[test]
    fn test_display_is_uniform_across_kinds() {
        let whole = Whole::<UInt<3>>::new().unwrap();
        assert_eq!(whole.to_string(), "Wrapper(3)");
        assert_eq!(format!("{:?}", whole), "Wrapper(3)");
        let real = Real::<TwoAndHalf>::new().unwrap();
        assert_eq!(format!("{:?}", real), "Wrapper(2.5)");
    }
}
