//! Integration tests for order-preserving deduplication

use proptest::prelude::*;
use std::collections::HashSet;

use sundry::unique;
use sundry_foundation::{CanonicalKey, ErrorKind, Kind, Value};
use sundry_stdlib::unique_values;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn overlapping_numbers() {
    assert_eq!(unique(&[1, 2, 2, 3], &[3, 4]), vec![1, 2, 3, 4]);
}

#[test]
fn overlapping_strings() {
    assert_eq!(unique(&["a", "b", "a"], &["b", "c"]), vec!["a", "b", "c"]);
}

#[test]
fn both_empty() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(unique(&empty, &empty), empty);
}

#[test]
fn single_value_repeated() {
    assert_eq!(unique(&[5], &[5, 5, 5]), vec![5]);
}

#[test]
fn second_input_order_kept_for_new_keys() {
    assert_eq!(unique(&[10, 20], &[40, 30, 20, 10]), vec![10, 20, 40, 30]);
}

#[test]
fn floats_that_print_alike_collapse() {
    assert_eq!(unique(&[1.0, 1.50], &[1.5, 2.0]), vec![1.0, 1.5, 2.0]);
}

#[test]
fn result_owns_its_elements() {
    let first = vec![String::from("x")];
    let result = unique(&first[..], &[]);
    drop(first);
    assert_eq!(result, vec!["x"]);
}

// =============================================================================
// Dynamic Values
// =============================================================================

#[test]
fn values_text() {
    let a = [Value::from("b"), Value::from("a")];
    let b = [Value::from("a"), Value::from("c")];
    assert_eq!(
        unique_values(&a, &b).unwrap(),
        vec![Value::from("b"), Value::from("a"), Value::from("c")]
    );
}

#[test]
fn values_across_kinds_fail() {
    let err = unique_values(&[Value::from("a")], &[Value::from(1)]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MixedKinds {
            first: Kind::Text,
            second: Kind::Number
        }
    ));
}

#[test]
fn values_numbers_text_and_bools_are_not_merged() {
    let first = [Value::from(1), Value::from(true)];
    let second = [Value::from("1"), Value::from("true")];
    let err = unique_values(&first, &second).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

// =============================================================================
// Properties
// =============================================================================

fn keys<T: CanonicalKey>(items: &[T]) -> Vec<String> {
    items.iter().map(|i| i.canonical_key().into_owned()).collect()
}

proptest! {
    #[test]
    fn result_is_distinct_union(
        a in prop::collection::vec("[a-c]{0,2}", 0..30),
        b in prop::collection::vec("[a-c]{0,2}", 0..30),
    ) {
        let result = unique(&a, &b);
        let result_keys = keys(&result);

        let distinct: HashSet<&String> = result_keys.iter().collect();
        prop_assert_eq!(distinct.len(), result_keys.len());

        let union: HashSet<String> = keys(&a).into_iter().chain(keys(&b)).collect();
        prop_assert_eq!(result_keys.into_iter().collect::<HashSet<_>>(), union);
    }

    #[test]
    fn prefix_of_result_is_first_input_deduplicated(
        a in prop::collection::vec(0..10_u8, 0..30),
        b in prop::collection::vec(0..10_u8, 0..30),
    ) {
        let empty: Vec<u8> = Vec::new();
        let first_only = unique(&a, &empty);
        let combined = unique(&a, &b);
        prop_assert_eq!(&combined[..first_only.len()], &first_only[..]);
    }
}
