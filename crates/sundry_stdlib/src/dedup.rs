//! Order-preserving deduplication of two sequences.
//!
//! Elements are compared by their [`CanonicalKey`], not by `PartialEq`. This
//! is a lossy policy: `1_i32` and `1.0_f64` print the same and would collapse,
//! while `0.1 + 0.2` and `0.3` print differently and stay distinct. Using a
//! string key keeps membership tests O(1) through a hash set.

use std::borrow::Cow;
use std::collections::HashSet;

use sundry_foundation::{CanonicalKey, Error, ErrorContext, Kind, Result, Value};
use tracing::trace;

/// Returns every distinct element of `first` followed by every element of
/// `second` not already emitted, each exactly once, in first-seen order.
///
/// Both inputs share one element type, so numbers cannot be mixed with text.
/// Neither input is modified; the result is a fresh vector.
///
/// ```
/// use sundry_stdlib::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3], &[3, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(unique(&["a", "b", "a"], &["b", "c"]), vec!["a", "b", "c"]);
/// ```
///
/// Dynamic values go through [`unique_values`] instead:
///
/// ```compile_fail
/// use sundry_foundation::Value;
/// use sundry_stdlib::unique;
///
/// let _ = unique(&[Value::from(1)], &[Value::from("1")]);
/// ```
#[must_use]
pub fn unique<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: CanonicalKey + Clone,
{
    dedup_by_key(first, second, T::canonical_key)
}

fn dedup_by_key<'a, T, F>(first: &'a [T], second: &'a [T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&'a T) -> Cow<'a, str>,
{
    let mut seen = HashSet::with_capacity(first.len() + second.len());
    let mut result = Vec::new();
    for item in first.iter().chain(second) {
        if seen.insert(key(item)) {
            result.push(item.clone());
        }
    }
    trace!(
        first = first.len(),
        second = second.len(),
        unique = result.len(),
        "deduplicated sequences"
    );
    result
}

/// Dynamically-typed [`unique`] over [`Value`]s.
///
/// # Errors
///
/// Returns `InvalidArgument` if any element is a boolean, and `MixedKinds` if
/// numbers and text appear together across the two inputs.
pub fn unique_values(first: &[Value], second: &[Value]) -> Result<Vec<Value>> {
    ensure_uniform_kind(first.iter().chain(second))
        .map_err(|e| e.with_context(ErrorContext::new().with_operation("unique_values")))?;
    Ok(dedup_by_key(first, second, Value::key))
}

fn ensure_uniform_kind<'a>(values: impl IntoIterator<Item = &'a Value>) -> Result<()> {
    let mut expected: Option<Kind> = None;
    for value in values {
        let kind = value.kind();
        if !kind.is_keyable() {
            return Err(Error::invalid_argument(format!(
                "cannot deduplicate {kind} values"
            )));
        }
        match expected {
            None => expected = Some(kind),
            Some(first) if first != kind => return Err(Error::mixed_kinds(first, kind)),
            Some(_) => {}
        }
    }
    Ok(())
}
