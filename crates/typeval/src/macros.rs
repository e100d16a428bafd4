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

//! Declarative macros: marker declaration (`constant!`), compile-time
//! catalogs (`catalog!`) and cons lists (`list!`).

/// Declares zero-sized markers embedding the given constants.
///
/// Each marker implements [`Embedded`](crate::Embedded) and
/// [`Wrap`](crate::Wrap). The value may be any constant expression of a type
/// implementing [`Number`](crate::Number).
///
/// # Examples
///
/// ```rust
/// # use typeval::{constant, wrap, Embedded};
/// # use num_rational::Ratio;
/// constant! {
///     /// The golden ratio.
///     pub Phi: f64 = 1.618_033_988_749_895;
///     ThreeQuarters: Ratio<i64> = Ratio::new_raw(3, 4);
/// }
///
/// assert_eq!(Phi::VALUE, 1.618_033_988_749_895);
/// assert_eq!(wrap(ThreeQuarters).unwrap().to_string(), "Wrapper(3/4)");
/// ```
#[macro_export]
macro_rules! constant {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $t:ty = $value:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            impl $crate::Embedded for $name {
                type Value = $t;
                const VALUE: $t = $value;
            }

            impl $crate::Wrap for $name {
                type Marker = $name;

                #[inline]
                fn wrap(self) -> ::core::result::Result<$crate::Wrapper<$name>, $crate::CategoryError> {
                    $crate::Wrapper::new()
                }
            }
        )*
    };
}

/// Builds a compile-time catalog of wrappers for [`fix`](crate::fix).
///
/// Accepts wrappers and kinds; the catalog is a nested tuple ending in `()`.
///
/// # Examples
///
/// ```rust
/// # use typeval::{catalog, fix, wrap, Int, Whole};
/// let three = wrap(Int::<3>).unwrap();
/// let five = Whole::<Int<5>>::new().unwrap();
/// let candidates = catalog![three, five];
/// assert!(fix(5_u8, &candidates).is_matched());
/// ```
#[macro_export]
macro_rules! catalog {
    () => { () };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($crate::Wrapper::from($head), $crate::catalog!($($tail),*))
    };
}

/// Builds a cons list `(a, (b, (c, ())))`.
///
/// # Examples
///
/// ```rust
/// # use typeval::list;
/// let l = list![1_u8, 2.0_f32];
/// assert_eq!(l, (1_u8, (2.0_f32, ())));
/// ```
#[macro_export]
macro_rules! list {
    () => { () };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($head, $crate::list!($($tail),*))
    };
}

/// Invokes `$m!` with every plain number type of the tower.
macro_rules! for_each_plain {
    ($m:ident) => {
        $m!(
            i8, i16, i32, i64, i128, isize,
            u8, u16, u32, u64, u128, usize,
            f32, f64, Ratio<i64>,
            Complex<i64>, Complex<f32>, Complex<f64>
        );
    };
}

pub(crate) use for_each_plain;
