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

//! # Numeric Operations Traits
//!
//! By-value operations that have no uniform trait in `core::ops` or
//! `num_traits` across the whole tower.
//!
//! ## Submodules
//!
//! - `widen`: `Widen`, the next wider type of the same kind.
//! - `floored`: `Modulo`, floored modulo whose result takes the sign of the
//!   divisor (as opposed to `%`, which takes the sign of the dividend).
//! - `power`: `Power`, exponentiation with an exponent of the same type.
//!
//! Refer to each submodule for examples and type lists.

pub mod floored;
pub mod power;
pub mod widen;

pub use floored::Modulo;
pub use power::Power;
pub use widen::Widen;
