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

//! # Typeval Core
//!
//! The host numeric tower used by `typeval`. Rust has no built-in notion of
//! "promote these two numbers to a common type", so this crate defines one:
//! a closed set of plain runtime number types, their category, an exact
//! interchange form, and the promotion table that mixed arithmetic relies on.
//!
//! ## Modules
//!
//! - `num`: Categories (`Category`), the exact interchange form (`Parts`,
//!   `Component`), the `Number` and `Plain` traits with their tower impls,
//!   promotion (`Promote`), associated-constant traits (`Zero`, `One`) and
//!   single-purpose numeric operations (`Widen`, `Modulo`, `Power`).
//!
//! ## The tower
//!
//! | Category | Types |
//! |---|---|
//! | whole   | `i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize` |
//! | real    | `f32 f64 Ratio<i64>` |
//! | general | `Complex<i64> Complex<f32> Complex<f64>` |
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
