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

//! # Typeval
//!
//! Numeric constants carried entirely in the type system. A wrapper around a
//! marker type is zero-sized, knows its value at compile time and takes part
//! in ordinary arithmetic with plain numbers and with other wrappers.
//!
//! ## Modules
//!
//! - `embedded`: The `Embedded` trait and the const-generic markers `Int`,
//!   `UInt` and `Size`.
//! - `kind`: The three validated kinds `Whole`, `Real` and `General`.
//! - `wrapper`: The unified `Wrapper` and its `Kind` view, plus `Wrap` and
//!   `wrap` which pick the kind from the embedded value's category.
//! - `registry`: Process-wide cache of validation results.
//! - `promote`: Promotion of wrappers to a common runtime type.
//! - `convert`: Exact conversion into and out of wrappers.
//! - `fix`: Matching a runtime value against a catalog of wrappers.
//! - `consts`: A handful of predeclared constants.
//! - `error`: `CategoryError` and `ConversionError`.
//!
//! Operators and rendering are implemented on the types directly. Two
//! wrappers around the same value answer operators from that value alone
//! (`x - x` is zero, `x <= x` holds); everything else goes through
//! promotion.
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for `Wrapper`.
//!
//! # Examples
//!
//! ```rust
//! use typeval::{catalog, fix, wrap, Int};
//!
//! let three = wrap(Int::<3>).unwrap();
//! let five = wrap(Int::<5>).unwrap();
//!
//! assert_eq!(three + five, 8);
//! assert_eq!(three - three, 0);
//! assert_eq!(three * 0.5_f64, 1.5);
//! assert_eq!(three.to_string(), "Wrapper(3)");
//!
//! let fixed = fix(5_u8, &catalog![three, five]);
//! assert!(fixed.wrapper::<Int<5>>().is_some());
//! ```

mod macros;

pub mod consts;
pub mod convert;
mod display;
pub mod embedded;
pub mod error;
pub mod fix;
pub mod kind;
mod ops;
pub mod promote;
pub mod registry;
#[cfg(feature = "serde")]
mod serde;
pub mod wrapper;

pub use convert::{convert_from, convert_to};
pub use embedded::{Embedded, Int, Size, UInt};
pub use error::{CategoryError, ConversionError};
pub use fix::{fix, try_fix, AnyWrapper, Catalog, Fixed};
pub use kind::{General, Real, Whole};
pub use wrapper::{wrap, Kind, Wrap, Wrapper};

pub use typeval_core;
pub use typeval_core::num::{Category, Number, Plain, Promote, Promoted};
