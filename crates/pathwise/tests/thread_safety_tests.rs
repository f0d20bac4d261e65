//! Thread safety tests for pathwise.
//!
//! A root can be shared between threads and edited independently from each
//! one; every thread gets its own new root and none observes another's edit.

use pathwise::{applies, path, Op, Patch, Value};
use serde_json::json;
use std::sync::Arc;
use std::thread;

// ============================================================================
// Compile-time verification
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<Value>();
    assert_send_sync::<Op>();
    assert_send_sync::<Patch>();
    assert_send_sync::<pathwise::Path>();
    assert_send_sync::<pathwise::Shape>();
    assert_send_sync::<pathwise::PathwiseError>();
}

// ============================================================================
// Concurrent edits of one shared root
// ============================================================================

#[test]
fn test_concurrent_edits_are_independent() {
    let root = Arc::new(Value::from(json!({
        "counters": {"shared": 0},
        "config": {"limits": [1, 2, 3]}
    })));

    let handles: Vec<_> = (0..16i64)
        .map(|i| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let ops = [
                    Op::set(path!("counters", "shared"), i),
                    Op::set(path!("counters", format!("t{i}")), i * 10),
                    Op::remove(path!("config", "limits", 0)),
                ];
                applies(&root, &ops).map(|next| (i, next))
            })
        })
        .collect();

    for handle in handles {
        let (i, next) = handle.join().unwrap().unwrap();
        assert_eq!(next["counters"]["shared"].as_i64(), Some(i));
        assert_eq!(next["counters"][format!("t{i}").as_str()].as_i64(), Some(i * 10));
        assert_eq!(next["counters"].as_object().map(|m| m.len()), Some(2));
        assert_eq!(next["config"]["limits"], Value::from(json!([2, 3])));
    }

    // The shared root saw none of it.
    assert_eq!(
        *root,
        Value::from(json!({"counters": {"shared": 0}, "config": {"limits": [1, 2, 3]}}))
    );
}

#[test]
fn test_results_can_be_sent_back_and_reused() {
    let root = Value::from(json!({"items": []}));

    let next = thread::spawn(move || {
        applies(&root, &[Op::set(path!("items", 0), "first")]).unwrap()
    })
    .join()
    .unwrap();

    let handles: Vec<_> = (0..4usize)
        .map(|i| {
            let base = next.clone();
            thread::spawn(move || {
                applies(&base, &[Op::set(path!("items", i + 1), "more")]).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        let items = result["items"].as_array().unwrap();
        assert_eq!(items.len(), i + 2);
        assert_eq!(items[0].as_str(), Some("first"));
        assert!(Value::ptr_eq(&items[0], &next["items"][0]));
    }
}
