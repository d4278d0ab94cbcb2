//! Value formatting and length computation.

use sundry_foundation::{Error, ErrorContext, Kind, Result, Value};

use crate::config::Config;

/// Formats a value using the default configuration.
///
/// Numbers are multiplied by 10, text is upper-cased, booleans are negated.
#[must_use]
pub fn format_value(value: &Value) -> Value {
    format_value_with(value, &Config::default())
}

/// Formats a value, scaling numbers by `config.number_scale`.
#[must_use]
pub fn format_value_with(value: &Value, config: &Config) -> Value {
    match value {
        Value::Number(n) => Value::Number(n * config.number_scale),
        Value::Text(s) => Value::from(s.to_uppercase()),
        Value::Bool(b) => Value::Bool(!b),
    }
}

/// Anything with a length: strings count characters, sequences count elements.
pub trait Measure {
    /// Returns the length.
    fn measure(&self) -> usize;
}

impl Measure for str {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for String {
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

impl<T> Measure for [T] {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

/// Returns the character count of a string or the element count of a sequence.
///
/// Strings are measured in Unicode scalar values, not bytes or UTF-16 code
/// units: `length("😀")` is 1.
#[must_use]
pub fn length<L: Measure + ?Sized>(value: &L) -> usize {
    value.measure()
}

/// Returns the character count of a text value.
///
/// # Errors
///
/// Returns `TypeMismatch` for numbers and booleans, which have no length.
pub fn value_length(value: &Value) -> Result<usize> {
    match value {
        Value::Text(s) => Ok(length(&**s)),
        other => Err(Error::type_mismatch(Kind::Text, other.kind())
            .with_context(ErrorContext::new().with_operation("value_length"))),
    }
}
