//! End-to-end tests for deep canonical sorting and rendering.
//!
//! Tests the mixed-kind scenarios (maps holding tuples, sets, lists and
//! nested maps), key coercion, the composites-first grouping, comparability
//! failures, depth limits, and idempotence under re-application.

use std::cmp::Ordering;

use algokit::{
    natural_cmp, normalize, normalize_with, render, to_canonical_string, Error, NormalizeConfig,
    StructuralKind, Value,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn s(text: &str) -> Value {
    Value::from(text)
}

fn int(i: i64) -> Value {
    Value::Int(i)
}

/// {"c": (2, 1, 3), "a": {6, 5}, 10: ["d", "c", "a"], "b": 1, "d": {4: 2, 3: 4}}
fn mixed_mapping() -> Value {
    Value::map([
        (s("c"), Value::tuple([2, 1, 3])),
        (s("a"), Value::set([6, 5])),
        (int(10), Value::list(["d", "c", "a"])),
        (s("b"), int(1)),
        (s("d"), Value::map([(4, 2), (3, 4)])),
    ])
}

// ============================================================================
// 1. Canonical rendering of mixed structures
// ============================================================================

#[test]
fn test_mixed_mapping_rendering() {
    assert_eq!(
        to_canonical_string(&mixed_mapping()).unwrap(),
        "{'10': ['a', 'c', 'd'], 'a': {5, 6}, 'b': 1, 'c': (1, 2, 3), 'd': {'3': 4, '4': 2}}"
    );
}

#[test]
fn test_mixed_mapping_structure() {
    let n = normalize(&mixed_mapping()).unwrap();
    let Value::Map(entries) = &n else { panic!("expected a map, got {n}") };
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str().unwrap()).collect();
    assert_eq!(keys, vec!["10", "a", "b", "c", "d"]);

    assert_eq!(n.get(&s("10")), Some(&Value::list(["a", "c", "d"])));
    assert_eq!(n.get(&s("c")), Some(&Value::tuple([1, 2, 3])));
    assert_eq!(n.get(&s("d")), Some(&Value::map([("3", 4), ("4", 2)])));
    assert_eq!(n.get(&s("b")), Some(&int(1)));
}

#[test]
fn test_tuple_of_mixed_kinds() {
    let v = Value::tuple([
        Value::tuple([2, 1, 3]),
        Value::set([6, 5]),
        Value::list(["d", "c", "a"]),
        int(1),
        Value::map([(4, 2), (3, 4)]),
    ]);
    assert_eq!(
        to_canonical_string(&v).unwrap(),
        "((1, 2, 3), {5, 6}, ['a', 'c', 'd'], {'3': 4, '4': 2}, 1)"
    );
}

#[test]
fn test_list_of_mixed_kinds() {
    let v = Value::list([
        Value::tuple([2, 1, 3]),
        Value::set([6, 5]),
        Value::list(["d", "c", "a"]),
        int(1),
        Value::map([(4, 2), (3, 4)]),
    ]);
    assert_eq!(
        to_canonical_string(&v).unwrap(),
        "[(1, 2, 3), {5, 6}, ['a', 'c', 'd'], {'3': 4, '4': 2}, 1]"
    );
}

#[test]
fn test_deeply_mixed_list() {
    let v = Value::list([
        Value::tuple([int(2), Value::list([6, 2, 9]), Value::map([("b", 2), ("a", 1)])]),
        Value::set([6, 5]),
        Value::list(["d", "c", "a"]),
        int(1),
        Value::map([
            (int(4), Value::tuple([3, 2, 5, 1])),
            (int(3), Value::list([8, 5, 2])),
        ]),
    ]);
    assert_eq!(
        to_canonical_string(&v).unwrap(),
        "[([2, 6, 9], {'a': 1, 'b': 2}, 2), {5, 6}, ['a', 'c', 'd'], {'3': [2, 5, 8], '4': (1, 2, 3, 5)}, 1]"
    );
}

#[test]
fn test_render_writes_line() {
    let mut out = Vec::new();
    render(&Value::tuple([3, 1, 2]), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "(1, 2, 3)\n");
}

// ============================================================================
// 2. Grouping policy
// ============================================================================

#[test]
fn test_composites_keep_encounter_order() {
    let v = Value::list([
        Value::list([3, 1]),
        int(9),
        Value::tuple([5, 4]),
        int(-2),
        Value::map([("z", 1)]),
    ]);
    let n = normalize(&v).unwrap();
    let kinds: Vec<StructuralKind> = n.items().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            StructuralKind::Sequence,
            StructuralKind::Tuple,
            StructuralKind::Mapping,
            StructuralKind::Scalar,
            StructuralKind::Scalar,
        ]
    );
    assert_eq!(&n.items()[3..], &[int(-2), int(9)]);
}

#[test]
fn test_tuple_keeps_arity() {
    let v = Value::tuple([int(3), Value::list([2, 1]), int(1)]);
    let n = normalize(&v).unwrap();
    assert_eq!(n.kind(), StructuralKind::Tuple);
    assert_eq!(n.items().len(), 3);
}

#[test]
fn test_nested_set_of_tuples() {
    let v = Value::set([Value::tuple([2, 1]), Value::tuple([4, 3])]);
    let n = normalize(&v).unwrap();
    assert_eq!(n, Value::set([Value::tuple([1, 2]), Value::tuple([3, 4])]));
}

#[test]
fn test_empty_composites() {
    assert_eq!(to_canonical_string(&Value::list(Vec::<Value>::new())).unwrap(), "[]");
    assert_eq!(to_canonical_string(&Value::map(Vec::<(Value, Value)>::new())).unwrap(), "{}");
    assert_eq!(to_canonical_string(&Value::set(Vec::<Value>::new())).unwrap(), "set()");
}

// ============================================================================
// 3. Key canonicalization
// ============================================================================

#[test]
fn test_numeric_keys_sort_as_text() {
    let v = Value::map([(int(10), 1), (int(9), 2), (int(100), 3)]);
    assert_eq!(to_canonical_string(&v).unwrap(), "{'10': 1, '100': 3, '9': 2}");
}

#[test]
fn test_colliding_keys_keep_later_entry() {
    let v = Value::map([(s("1"), s("first")), (int(1), s("second"))]);
    assert_eq!(to_canonical_string(&v).unwrap(), "{'1': 'second'}");
}

#[test]
fn test_scalar_map_values_untouched() {
    // A map value is only normalized when it is composite.
    let v = Value::map([("k", Value::Null)]);
    assert_eq!(normalize(&v).unwrap(), v);
}

#[test]
fn test_json_input() {
    let json = serde_json::json!({"b": [3, 1, 2], "a": {"y": true, "x": null}});
    let n = normalize(&Value::from(json)).unwrap();
    assert_eq!(n.to_string(), "{'a': {'x': None, 'y': True}, 'b': [1, 2, 3]}");
}

// ============================================================================
// 4. Failures
// ============================================================================

#[test]
fn test_number_and_text_not_comparable() {
    let v = Value::list([int(1), s("a")]);
    let err = normalize(&v).unwrap_err();
    assert!(matches!(err, Error::Comparability { .. }), "got {err}");
}

#[test]
fn test_comparability_error_propagates_from_depth() {
    let v = Value::map([("outer", Value::list([Value::tuple([Value::Float(1.5), s("x")])]))]);
    assert!(matches!(normalize(&v), Err(Error::Comparability { .. })));
}

#[test]
fn test_adversarial_nesting_is_rejected() {
    let mut v = int(0);
    for _ in 0..10_000 {
        v = Value::list([v]);
    }
    let err = normalize(&v).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { limit: 256 }));

    let err = normalize_with(&v, &NormalizeConfig { max_depth: 32 }).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { limit: 32 }));

    // Unwind iteratively so dropping the input does not recurse 10k frames.
    loop {
        match v {
            Value::List(mut items) => v = items.pop().unwrap_or(Value::Null),
            _ => break,
        }
    }
}

#[test]
fn test_deep_map_key_is_rejected() {
    let mut key = int(0);
    for _ in 0..10_000 {
        key = Value::tuple([key]);
    }
    let v = Value::Map(vec![(key, int(1))]);
    let err = normalize(&v).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { limit: 256 }));

    let Value::Map(mut entries) = v else { unreachable!() };
    let mut key = entries.pop().map(|(k, _)| k).unwrap_or(Value::Null);
    loop {
        match key {
            Value::Tuple(mut items) => key = items.pop().unwrap_or(Value::Null),
            _ => break,
        }
    }
}

#[test]
fn test_large_ints_and_floats_sort_exactly() {
    let edge = 1_i64 << 53;
    let v = Value::list([int(edge + 1), Value::Float(edge as f64), int(edge)]);
    assert_eq!(
        to_canonical_string(&v).unwrap(),
        "[9007199254740992.0, 9007199254740992, 9007199254740993]"
    );
}

#[test]
fn test_nan_reported_by_name() {
    let v = Value::list([Value::Float(1.0), Value::Float(f64::NAN)]);
    let err = normalize(&v).unwrap_err();
    assert_eq!(err.to_string(), "Comparability error: cannot order FLOAT against NaN");
}

// ============================================================================
// 5. Properties
// ============================================================================

/// Scalar family for one collection. Members of a family are mutually
/// orderable, so a collection drawn from one family always normalizes.
#[derive(Debug, Clone, Copy)]
enum ScalarFamily {
    Int,
    Numeric,
    Text,
    Bool,
    Date,
}

fn arb_family() -> impl Strategy<Value = ScalarFamily> {
    prop_oneof![
        Just(ScalarFamily::Int),
        Just(ScalarFamily::Numeric),
        Just(ScalarFamily::Text),
        Just(ScalarFamily::Bool),
        Just(ScalarFamily::Date),
    ]
}

fn arb_scalar(family: ScalarFamily) -> BoxedStrategy<Value> {
    const EDGE: i64 = 1 << 53;
    match family {
        ScalarFamily::Int => any::<i64>().prop_map(Value::Int).boxed(),
        ScalarFamily::Numeric => prop_oneof![
            any::<i32>().prop_map(|i| Value::Int(i as i64)),
            (-1.0e6..1.0e6_f64).prop_map(Value::Float),
            (EDGE - 2..EDGE + 3).prop_map(Value::Int),
            (EDGE - 2..EDGE + 3).prop_map(|i| Value::Float(i as f64)),
        ]
        .boxed(),
        ScalarFamily::Text => "[a-d]{0,3}".prop_map(Value::String).boxed(),
        ScalarFamily::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        ScalarFamily::Date => (2000_i32..2030, 1_u32..=12, 1_u32..=28)
            .prop_map(|(y, m, d)| Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
            .boxed(),
    }
}

/// Map keys that exercise coercion: colliding text and integers, floats,
/// and tuple keys.
fn arb_key() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-c1-3]{0,2}".prop_map(Value::String),
        (-3_i64..4).prop_map(Value::Int),
        (-3_i64..4).prop_map(|i| Value::Float(i as f64 / 2.0)),
        prop::collection::vec((0_i64..3).prop_map(Value::Int), 0..3).prop_map(Value::Tuple),
    ]
}

/// Composites interleaved with scalars of a single family.
fn arb_items(inner: BoxedStrategy<Value>) -> BoxedStrategy<Vec<Value>> {
    (prop::collection::vec(inner, 0..3), arb_family())
        .prop_flat_map(|(composites, family)| {
            prop::collection::vec(arb_scalar(family), 0..5).prop_map(move |scalars| {
                let mut items = composites.clone();
                items.extend(scalars);
                items
            })
        })
        .prop_shuffle()
        .boxed()
}

fn arb_composite(inner: BoxedStrategy<Value>) -> BoxedStrategy<Value> {
    let items = arb_items(inner.clone());
    let map_value = prop_oneof![inner, arb_family().prop_flat_map(arb_scalar)];
    prop_oneof![
        items.clone().prop_map(Value::List),
        items.clone().prop_map(Value::Tuple),
        items.prop_map(|items| Value::set(items)),
        prop::collection::vec((arb_key(), map_value), 0..5).prop_map(Value::Map),
    ]
    .boxed()
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_composite(Just(Value::List(Vec::new())).boxed())
        .prop_recursive(3, 32, 4, |inner| arb_composite(inner))
}

fn check_grouping(value: &Value) -> Result<(), TestCaseError> {
    let items = match value {
        Value::List(items) | Value::Tuple(items) | Value::Set(items) => items.as_slice(),
        Value::Map(entries) => {
            for (key, child) in entries {
                prop_assert!(key.is_string());
                check_grouping(child)?;
            }
            return Ok(());
        }
        _ => return Ok(()),
    };
    let first_scalar = items.iter().position(|v| !v.is_composite()).unwrap_or(items.len());
    prop_assert!(items[first_scalar..].iter().all(|v| !v.is_composite()));
    for pair in items[first_scalar..].windows(2) {
        let order = natural_cmp(&pair[0], &pair[1]);
        prop_assert!(
            matches!(order, Some(Ordering::Less | Ordering::Equal)),
            "{} before {} is out of order",
            pair[0],
            pair[1]
        );
    }
    for child in &items[..first_scalar] {
        check_grouping(child)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(v in arb_value()) {
        let once = normalize(&v).unwrap();
        let twice = normalize(&once).unwrap();
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(twice.to_string(), once.to_string());
    }

    #[test]
    fn prop_scalars_sorted_after_composites(v in arb_value()) {
        let n = normalize(&v).unwrap();
        check_grouping(&n)?;
    }

    #[test]
    fn prop_kind_preserved(v in arb_value()) {
        prop_assert_eq!(normalize(&v).unwrap().kind(), v.kind());
    }
}
