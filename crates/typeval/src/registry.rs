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

//! # Validation Registry
//!
//! Validation of an embedded value runs once per (marker, kind) pair. The
//! outcome, success or the `CategoryError`, is cached process-wide so every
//! later construction of the same wrapper is a read-locked map lookup.

use crate::{embedded::Embedded, error::CategoryError};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::{type_name, TypeId};
use typeval_core::num::{Category, Number};

type Key = (TypeId, Category);

static REGISTRY: Lazy<RwLock<FxHashMap<Key, Result<(), CategoryError>>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// Checks that the value embedded in `E` may be wrapped by the kind of the
/// given category.
fn check<E: Embedded>(kind: Category) -> Result<(), CategoryError> {
    let value = E::VALUE;
    if <E::Value as Number>::IS_WRAPPER {
        return Err(CategoryError::Nested {
            value: value.to_string(),
        });
    }

    let found = <E::Value as Number>::CATEGORY;
    if found != kind {
        return Err(CategoryError::Mismatch {
            value: value.to_string(),
            expected: kind,
            found,
        });
    }

    if !value.is_canonical() {
        return Err(CategoryError::NonCanonical {
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Validates `E` for the given kind, consulting and filling the cache.
pub(crate) fn validate<E: Embedded>(kind: Category) -> Result<(), CategoryError> {
    let key = (TypeId::of::<E>(), kind);
    if let Some(result) = REGISTRY.read().get(&key) {
        return result.clone();
    }

    let result = check::<E>(kind);
    match &result {
        Ok(()) => tracing::debug!(
            marker = type_name::<E>(),
            value = %E::VALUE,
            kind = %kind,
            "registry: validated embedded value"
        ),
        Err(error) => tracing::debug!(
            marker = type_name::<E>(),
            kind = %kind,
            error = %error,
            "registry: rejected embedded value"
        ),
    }

    REGISTRY.write().entry(key).or_insert(result).clone()
}

/// Returns the number of (marker, kind) pairs validated so far, including
/// rejected ones.
pub fn validated_count() -> usize {
    REGISTRY.read().len()
}

/// Returns `true` if `E` has been validated successfully for the given kind.
///
/// # Examples
///
/// ```rust
/// # use typeval::{registry, Category, Int, Wrapper};
/// assert!(!registry::is_validated::<Int<424242>>(Category::Whole));
/// let _ = Wrapper::<Int<424242>>::new();
/// assert!(registry::is_validated::<Int<424242>>(Category::Whole));
/// ```
pub fn is_validated<E: Embedded>(kind: Category) -> bool {
    matches!(REGISTRY.read().get(&(TypeId::of::<E>(), kind)), Some(Ok(())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constant, Int};
    use num_rational::Ratio;
    use std::{sync::Barrier, thread};

    constant! {
        Quarter: Ratio<i64> = Ratio::new_raw(1, 4);
        Unreduced: Ratio<i64> = Ratio::new_raw(2, 8);
    }

    #[test]
    fn test_check_rejects_wrong_category() {
        assert!(check::<Int<1>>(Category::Whole).is_ok());
        assert_eq!(
            check::<Int<1>>(Category::Real),
            Err(CategoryError::Mismatch {
                value: "1".to_string(),
                expected: Category::Real,
                found: Category::Whole,
            })
        );
    }

    #[test]
    fn test_check_rejects_non_canonical() {
        assert!(check::<Quarter>(Category::Real).is_ok());
        assert_eq!(
            check::<Unreduced>(Category::Real),
            Err(CategoryError::NonCanonical {
                value: "2/8".to_string()
            })
        );
    }

    #[test]
    fn test_validation_is_cached() {
        assert!(!is_validated::<Int<9_001>>(Category::Whole));
        assert!(validate::<Int<9_001>>(Category::Whole).is_ok());
        assert!(is_validated::<Int<9_001>>(Category::Whole));
        let count = validated_count();
        assert!(count >= 1);

        assert!(validate::<Int<9_001>>(Category::Whole).is_ok());
        assert!(REGISTRY
            .read()
            .contains_key(&(TypeId::of::<Int<9_001>>(), Category::Whole)));
    }

    #[test]
    fn test_concurrent_first_validation_leaves_one_entry() {
        const THREADS: usize = 8;
        let barrier = Barrier::new(THREADS);

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        validate::<Int<9_003>>(Category::Whole)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.iter().all(Result::is_ok));
        let marker = TypeId::of::<Int<9_003>>();
        let entries = REGISTRY
            .read()
            .keys()
            .filter(|(id, _)| *id == marker)
            .count();
        assert_eq!(entries, 1);
        assert!(is_validated::<Int<9_003>>(Category::Whole));
    }

    #[test]
    fn test_rejections_are_cached_but_not_validated() {
        assert!(validate::<Int<9_002>>(Category::General).is_err());
        assert!(!is_validated::<Int<9_002>>(Category::General));
        assert!(REGISTRY
            .read()
            .contains_key(&(TypeId::of::<Int<9_002>>(), Category::General)));
    }
}
