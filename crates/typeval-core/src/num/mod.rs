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

//! # Numeric Foundations
//!
//! Traits and utilities that turn the primitive numbers, `Ratio<i64>` and
//! `Complex<_>` into one coherent tower with a promotion lattice.
//!
//! ## Submodules
//!
//! - `category`: The three mutually exclusive categories (`Whole`, `Real`,
//!   `General`).
//! - `parts`: `Component` and `Parts`, an exact representation every number
//!   converts into; equality across types is defined on it.
//! - `number`: `Number` (anything numeric, including type-level wrappers) and
//!   `Plain` (ordinary runtime numbers), implemented for the whole tower.
//! - `promote`: `Promote`, the table of common types for mixed operands.
//! - `constants`: Associated-constant traits (`Zero`, `One`).
//! - `ops`: `Widen`, `Modulo` (floored) and `Power`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod category;
pub mod constants;
pub mod number;
pub mod ops;
pub mod parts;
pub mod promote;

pub use category::Category;
pub use number::{Number, Plain};
pub use parts::{Component, Parts};
pub use promote::{Promote, Promoted};
