//! Integration tests for formatting and length

use sundry_foundation::{ErrorKind, Value};
use sundry_stdlib::{format_value, length, value_length};

#[test]
fn format_each_kind() {
    assert_eq!(format_value(&Value::from(10)), Value::from(100));
    assert_eq!(format_value(&Value::from("rust")), Value::from("RUST"));
    assert_eq!(format_value(&Value::from(true)), Value::from(false));
}

#[test]
fn format_twice_restores_bool() {
    let v = Value::from(false);
    assert_eq!(format_value(&format_value(&v)), v);
}

#[test]
fn length_of_text_and_lists() {
    assert_eq!(length("TypeScript"), 10);
    assert_eq!(length(&vec![10, 20, 30]), 3);
}

#[test]
fn value_length_of_bool_fails() {
    let err = value_length(&Value::from(true)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(
        err.context.and_then(|c| c.operation).as_deref(),
        Some("value_length")
    );
}
