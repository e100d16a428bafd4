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

/// The category a number belongs to.
///
/// Categories are mutually exclusive and form the lattice
/// `Whole ⊂ Real ⊂ General` by value, but every number type is assigned to
/// exactly one of them: integers are `Whole`, non-integer reals (floats and
/// rationals) are `Real`, everything else (complex numbers) is `General`.
///
/// # Examples
///
/// ```rust
/// # use typeval_core::num::{category::Category, number::Number};
/// assert_eq!(<i32 as Number>::CATEGORY, Category::Whole);
/// assert_eq!(<f64 as Number>::CATEGORY, Category::Real);
/// assert_eq!(format!("{}", Category::General), "general");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Integers.
    Whole,
    /// Real numbers that are not integers by type.
    Real,
    /// Numbers that are not real.
    General,
}

impl Category {
    /// Returns the lowercase name of the category.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Whole => "whole",
            Category::Real => "real",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
