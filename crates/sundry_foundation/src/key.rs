//! Canonical string keys.
//!
//! Two elements are considered the same by deduplication when their canonical
//! keys are equal. The key is the element's textual rendering, so numbers that
//! print identically collapse together and numbers that print differently stay
//! distinct, even if they compare equal numerically.

use std::borrow::Cow;
use std::sync::Arc;

/// Produces the canonical string key of an element.
///
/// Implemented for primitive integers, floats and string types. `bool` is
/// deliberately not keyable, so cross-kind or boolean deduplication is
/// rejected at compile time.
pub trait CanonicalKey {
    /// Returns the canonical key of this element.
    fn canonical_key(&self) -> Cow<'_, str>;
}

impl CanonicalKey for str {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl CanonicalKey for String {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl CanonicalKey for Box<str> {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl CanonicalKey for Arc<str> {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl CanonicalKey for Cow<'_, str> {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: CanonicalKey + ?Sized> CanonicalKey for &T {
    fn canonical_key(&self) -> Cow<'_, str> {
        (**self).canonical_key()
    }
}

macro_rules! integer_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl CanonicalKey for $t {
                fn canonical_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Integral floats drop the fraction, -0 prints as 0, and very large or very
// small magnitudes switch to exponent form with an explicit sign.
macro_rules! float_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl CanonicalKey for $t {
                fn canonical_key(&self) -> Cow<'_, str> {
                    let n = *self;
                    if n.is_nan() {
                        return Cow::Borrowed("NaN");
                    }
                    if n.is_infinite() {
                        return Cow::Borrowed(if n > 0.0 { "Infinity" } else { "-Infinity" });
                    }
                    if n == 0.0 {
                        return Cow::Borrowed("0");
                    }
                    let magnitude = n.abs();
                    if magnitude >= 1e21 || magnitude < 1e-6 {
                        Cow::Owned(signed_exponent(&format!("{n:e}")))
                    } else {
                        Cow::Owned(n.to_string())
                    }
                }
            }
        )*
    };
}

float_key!(f32, f64);

/// Rewrites `1e21` as `1e+21`; negative exponents are left alone.
fn signed_exponent(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered.to_string(),
    }
}
