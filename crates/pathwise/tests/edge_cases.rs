//! Edge case tests for pathwise.

use pathwise::{
    apply, apply_json, apply_patch, copy, get, move_value, path, remove, set, swap, Op, Patch,
    Path, PathwiseError, Value,
};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ============================================================================
// Root-level paths
// ============================================================================

#[test]
fn test_empty_path_addresses_root() {
    let root = v(json!({"x": 1}));
    assert_eq!(get(&root, &Path::root()), Some(&root));
    assert_eq!(set(&root, &Path::root(), Value::from("r")).unwrap(), Value::from("r"));
    assert_eq!(remove(&root, &Path::root()), root);
}

#[test]
fn test_scalar_root() {
    let root = Value::from(7);
    assert_eq!(get(&root, &path!("a")), None);
    assert!(matches!(
        set(&root, &path!("a"), Value::Null),
        Err(PathwiseError::PathTraversal { ref path, .. }) if path.is_empty()
    ));
    let null_root = Value::Null;
    assert_eq!(
        set(&null_root, &path!("a", "b"), Value::from(1)).unwrap(),
        v(json!({"a": {"b": 1}}))
    );
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_remove_array_element_shifts() {
    let root = v(json!({"list": ["a", "b", "c"]}));
    let next = remove(&root, &path!("list", 1));
    assert_eq!(next["list"], v(json!(["a", "c"])));
    assert_eq!(remove(&root, &path!("list", 3)), root);
}

#[test]
fn test_nested_array_write() {
    let root = v(json!({"grid": [[0, 0], [0, 0]]}));
    let next = set(&root, &path!("grid", 1, 0), Value::from(9)).unwrap();
    assert_eq!(next["grid"], v(json!([[0, 0], [9, 0]])));
    assert!(Value::ptr_eq(&root["grid"][0], &next["grid"][0]));
}

#[test]
fn test_copy_array_element_to_end() {
    let root = v(json!({"list": [{"id": 1}]}));
    let next = copy(&root, &path!("list", 0), &path!("list", 1)).unwrap();
    assert_eq!(next["list"], v(json!([{"id": 1}, {"id": 1}])));
    assert!(Value::ptr_eq(&next["list"][0], &next["list"][1]));
}

#[test]
fn test_swap_array_elements() {
    let root = v(json!([1, 2, 3]));
    let next = swap(&root, &path!(0), &path!(2)).unwrap();
    assert_eq!(next, v(json!([3, 2, 1])));
}

// ============================================================================
// Overlapping paths
// ============================================================================

#[test]
fn test_move_onto_itself_keeps_value() {
    let root = v(json!({"a": {"b": 1}}));
    let next = move_value(&root, &path!("a", "b"), &path!("a", "b")).unwrap();
    assert_eq!(next, root);
}

#[test]
fn test_swap_with_itself_is_identity() {
    let root = v(json!({"a": {"b": 1}}));
    let next = swap(&root, &path!("a", "b"), &path!("a", "b")).unwrap();
    assert_eq!(next, root);
}

#[test]
fn test_copy_into_own_descendant() {
    let root = v(json!({"a": {"b": 1}}));
    let next = copy(&root, &path!("a"), &path!("a", "self")).unwrap();
    assert_eq!(next, v(json!({"a": {"b": 1, "self": {"b": 1}}})));
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_set_replaces_entire_value() {
    let root = v(json!({"user": {"name": "Alice", "age": 30}}));
    let next = set(&root, &path!("user"), v(json!({"name": "Bob"}))).unwrap();
    assert_eq!(next["user"], v(json!({"name": "Bob"})));
    assert!(next["user"].get("age").is_none());
}

#[test]
fn test_removed_key_differs_from_null_key() {
    let root = v(json!({"a": 1, "b": 2}));
    let removed = remove(&root, &path!("a"));
    let nulled = set(&root, &path!("a"), Value::Null).unwrap();
    assert_ne!(removed, nulled);
    assert_eq!(get(&removed, &path!("a")), None);
    assert_eq!(get(&nulled, &path!("a")), Some(&Value::Null));
}

#[test]
fn test_special_keys() {
    let root = v(json!({}));
    let next = set(&root, &path!("", "with.dot", "[0]"), Value::from(true)).unwrap();
    assert_eq!(next, v(json!({"": {"with.dot": {"[0]": true}}})));
    assert_eq!(get(&next, &path!("", "with.dot", "[0]")), Some(&Value::Bool(true)));
}

// ============================================================================
// Untyped boundary
// ============================================================================

#[test]
fn test_apply_json_each_tag() {
    let root = v(json!({"a": {"b": 1, "c": 2}}));
    let next = apply_json(&root, &json!({"op": "set", "path": ["a", "b"], "value": [5]})).unwrap();
    assert_eq!(next["a"]["b"], v(json!([5])));
    let next = apply_json(&root, &json!({"op": "swap", "path1": ["a", "b"], "path2": ["a", "c"]}))
        .unwrap();
    assert_eq!(next, v(json!({"a": {"b": 2, "c": 1}})));
}

#[test]
fn test_patch_from_json_round_trip() {
    let root = v(json!({"list": [10, 20]}));
    let raw = json!([
        {"op": "copy", "from": ["list", 0], "to": ["first"]},
        {"op": "remove", "path": ["list", 0]},
        {"op": "move", "from": ["list", 0], "to": ["second"]}
    ]);
    let patch = Patch::from_json(&raw).unwrap();
    assert_eq!(serde_json::to_value(&patch).unwrap(), raw);

    let next = apply_patch(&root, &patch).unwrap();
    assert_eq!(next, v(json!({"list": [], "first": 10, "second": 20})));
}

#[test]
fn test_unsupported_operation_is_descriptive() {
    let root = v(json!({}));
    let err = apply_json(&root, &json!({"op": "increment", "path": ["n"]})).unwrap_err();
    assert!(err.to_string().contains("increment"), "got: {err}");
}

#[test]
fn test_huge_index_from_json_is_an_error() {
    let root = v(json!({"a": []}));
    for target in [json!(["a", u64::MAX]), json!(["b", u64::MAX])] {
        let err = apply_json(&root, &json!({"op": "set", "path": target, "value": 1})).unwrap_err();
        assert!(
            matches!(err, PathwiseError::IndexOutOfBounds { .. }),
            "got: {err}"
        );
    }

    let patch = Patch::from_json(&json!([
        {"op": "set", "path": ["a", 0], "value": 1},
        {"op": "copy", "from": ["a", 0], "to": ["a", 1u64 << 40]}
    ]))
    .unwrap();
    assert!(matches!(
        apply_patch(&root, &patch),
        Err(PathwiseError::IndexOutOfBounds { len: 1, .. })
    ));
}

#[test]
fn test_traversal_error_message_names_location() {
    let root = v(json!({"user": {"name": "Alice"}}));
    let err = apply(&root, &Op::set(path!("user", "name", "first"), "A")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot traverse $.user.name: expected object, found string"
    );
}
