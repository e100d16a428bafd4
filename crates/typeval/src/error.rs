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

//! # Errors
//!
//! `CategoryError` reports why an embedded value cannot be wrapped;
//! `ConversionError` reports why a runtime value cannot be converted into or
//! out of a wrapper.

use thiserror::Error;
use typeval_core::num::Category;

/// Raised when an embedded value cannot be wrapped by the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("Category mismatch: {value} is a {found} value, expected {expected}")]
    Mismatch {
        value: String,
        expected: Category,
        found: Category,
    },

    #[error("Nested wrapper: {value} is already a wrapper")]
    Nested { value: String },

    #[error("Non-canonical value: {value}")]
    NonCanonical { value: String },
}

/// Raised when a conversion into or out of a wrapper does not hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Value mismatch: {value} does not equal the embedded value {expected}")]
    Mismatch { value: String, expected: String },

    #[error("Inexact conversion: {value} cannot be represented as {target}")]
    Inexact { value: String, target: &'static str },

    #[error(transparent)]
    Category(#[from] CategoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_error_messages() {
        let err = CategoryError::Mismatch {
            value: "2.5".to_string(),
            expected: Category::Whole,
            found: Category::Real,
        };
        assert_eq!(
            err.to_string(),
            "Category mismatch: 2.5 is a real value, expected whole"
        );
    }

    #[test]
    fn test_conversion_error_wraps_category_error() {
        let err: ConversionError = CategoryError::NonCanonical {
            value: "2/4".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Non-canonical value: 2/4");
        assert!(matches!(err, ConversionError::Category(_)));
    }
}
