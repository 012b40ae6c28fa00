#![cfg(feature = "serde")]

//! Integration tests for the serialized shape of `AsyncData`.
//!
//! The shape is the wire contract: `state` tag, camelCase `isLoading`,
//! `data` and `error`. These tests also cover the loose structural
//! recognizer `is` and the untyped `fork_value`.

use async_data::{
    AsyncData, AsyncState, Rejected, UnknownStateError, create, fork, fork_value, is,
    is_fulfilled_and_defined, reject, resolve,
};
use rstest::rstest;
use serde_json::{Value, json};

// =============================================================================
// Serialized Shape
// =============================================================================

#[rstest]
fn pending_without_data_omits_data_key() {
    let value: AsyncData<i32, String> = create(None, true);
    assert_eq!(
        serde_json::to_value(value).unwrap(),
        json!({ "state": "pending", "isLoading": true })
    );
}

#[rstest]
fn fulfilled_shape() {
    let value: AsyncData<i32, String> = resolve(1);
    assert_eq!(
        serde_json::to_value(value).unwrap(),
        json!({ "state": "fulfilled", "data": 1, "isLoading": false })
    );
}

#[rstest]
fn rejected_shape_with_stale_data() {
    let value: AsyncData<Vec<i32>, String> = Rejected {
        data: Some(vec![1, 2]),
        error: "boom".to_string(),
        is_loading: true,
    }
    .into();
    assert_eq!(
        serde_json::to_value(value).unwrap(),
        json!({ "state": "rejected", "data": [1, 2], "error": "boom", "isLoading": true })
    );
}

#[rstest]
fn state_serializes_as_lowercase_tag() {
    assert_eq!(
        serde_json::to_value(AsyncState::Fulfilled).unwrap(),
        json!("fulfilled")
    );
    let parsed: AsyncState = serde_json::from_value(json!("rejected")).unwrap();
    assert_eq!(parsed, AsyncState::Rejected);
}

// =============================================================================
// Strict Deserialization
// =============================================================================

#[rstest]
fn json_roundtrip_for_every_variant() {
    let values: Vec<AsyncData<String, String>> = vec![
        create(None, false),
        create(Some("stale".to_string()), true),
        resolve("fresh".to_string()),
        reject(None, "boom".to_string()),
        reject(Some("stale".to_string()), "boom".to_string()),
    ];

    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let restored: AsyncData<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(value, restored);
    }
}

#[rstest]
fn missing_optional_data_deserializes_to_none() {
    let restored: AsyncData<i32, String> =
        serde_json::from_value(json!({ "state": "rejected", "error": "boom", "isLoading": false }))
            .unwrap();
    assert_eq!(restored, reject(None, "boom".to_string()));
}

#[rstest]
#[case(json!({ "state": "unknown", "isLoading": false }))]
#[case(json!({ "state": "fulfilled", "isLoading": false }))]
#[case(json!({ "state": "rejected", "isLoading": false }))]
#[case(json!({ "isLoading": false }))]
fn strict_deserialization_rejects_malformed_shapes(#[case] input: Value) {
    assert!(serde_json::from_value::<AsyncData<i32, String>>(input).is_err());
}

#[rstest]
#[case(create(Some(None), true))]
#[case(create(Some(Some(3)), false))]
#[case(create(None, false))]
#[case(reject(Some(None), "boom".to_string()))]
#[case(reject(Some(Some(3)), "boom".to_string()))]
#[case(reject(None, "boom".to_string()))]
fn nullable_payload_survives_roundtrip(#[case] value: AsyncData<Option<i32>, String>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: AsyncData<Option<i32>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
#[case(create(Some(Value::Null), true))]
#[case(reject(Some(Value::Null), "boom".to_string()))]
fn json_null_payload_survives_roundtrip(#[case] value: AsyncData<Value, String>) {
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["data"], Value::Null);
    assert!(json.as_object().unwrap().contains_key("data"));

    let restored: AsyncData<Value, String> = serde_json::from_value(json).unwrap();
    assert_eq!(restored.data(), Some(&Value::Null));
    assert_eq!(value, restored);
}

#[rstest]
fn present_null_data_differs_from_missing_data() {
    let present: AsyncData<Option<i32>, String> =
        serde_json::from_value(json!({ "state": "pending", "data": null, "isLoading": false }))
            .unwrap();
    let missing: AsyncData<Option<i32>, String> =
        serde_json::from_value(json!({ "state": "pending", "isLoading": false })).unwrap();
    assert_eq!(present, create(Some(None), false));
    assert_eq!(missing, create(None, false));
}

#[rstest]
fn fork_to_null_survives_roundtrip() {
    let source: AsyncData<i32, String> = create(None, true);
    let forked = fork(source, Value::Null);
    let json = serde_json::to_string(&forked).unwrap();
    let restored: AsyncData<Value, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(forked, restored);
}

#[rstest]
fn json_null_payload_is_not_defined() {
    let value: AsyncData<Value, String> =
        serde_json::from_value(json!({ "state": "fulfilled", "data": null, "isLoading": false }))
            .unwrap();
    assert!(value.is_fulfilled());
    assert!(!is_fulfilled_and_defined(&value));

    let empty: AsyncData<Value, String> = resolve(json!(""));
    assert!(is_fulfilled_and_defined(&empty));
}

// =============================================================================
// Structural Recognizer
// =============================================================================

#[rstest]
#[case(json!({ "state": "pending", "isLoading": false }), true)]
#[case(json!({ "state": "unknown", "isLoading": false }), true)]
#[case(json!({ "state": 42, "isLoading": "no", "extra": [] }), true)]
#[case(json!({ "state": "fulfilled", "data": 1 }), false)]
#[case(json!({ "isLoading": true }), false)]
#[case(json!({}), false)]
#[case(json!(null), false)]
#[case(json!("pending"), false)]
fn is_checks_key_presence_only(#[case] input: Value, #[case] expected: bool) {
    assert_eq!(is(&input), expected);
    if let Value::Object(object) = &input {
        assert_eq!(is(object), expected);
    }
}

#[rstest]
fn is_recognizes_serialized_values() {
    let value: AsyncData<i32, String> = reject(None, "boom".to_string());
    assert!(is(&serde_json::to_value(value).unwrap()));
}

// =============================================================================
// Untyped Fork
// =============================================================================

#[rstest]
#[case(json!({ "state": "pending", "isLoading": true }))]
#[case(json!({ "state": "fulfilled", "data": 1, "isLoading": false }))]
#[case(json!({ "state": "rejected", "error": { "code": 500 }, "isLoading": false }))]
fn fork_value_replaces_only_data(#[case] source: Value) {
    let forked = fork_value(&source, json!("forked")).unwrap();

    let mut expected = source.as_object().unwrap().clone();
    expected.insert("data".to_string(), json!("forked"));
    assert_eq!(forked, Value::Object(expected));
}

#[rstest]
fn fork_value_keeps_extra_keys() {
    let source = json!({ "state": "fulfilled", "data": 1, "isLoading": false, "requestId": 9 });
    let forked = fork_value(&source, Value::Null).unwrap();
    assert_eq!(forked["requestId"], json!(9));
    assert_eq!(forked["data"], Value::Null);
}

#[rstest]
fn fork_value_fails_on_unknown_state() {
    let source = json!({ "state": "unknown", "isLoading": false });
    assert!(is(&source));
    assert_eq!(
        fork_value(&source, json!("x")),
        Err(UnknownStateError::new("unknown"))
    );
}

#[rstest]
fn fork_value_fails_on_missing_state() {
    let source = json!({ "isLoading": false });
    assert_eq!(
        fork_value(&source, json!("x")),
        Err(UnknownStateError::missing())
    );
}

#[rstest]
#[case(json!({ "state": "pending", "isLoading": true }))]
#[case(json!({ "state": "rejected", "error": "boom", "isLoading": false }))]
fn fork_value_output_loads_with_null_data(#[case] source: Value) {
    let forked = fork_value(&source, Value::Null).unwrap();
    let loaded: AsyncData<Value, String> = serde_json::from_value(forked).unwrap();
    assert_eq!(loaded.data(), Some(&Value::Null));
}

#[rstest]
fn fork_value_agrees_with_typed_fork() {
    let value: AsyncData<i32, String> = reject(Some(1), "boom".to_string());
    let untyped = fork_value(&serde_json::to_value(&value).unwrap(), json!("x")).unwrap();
    let typed = serde_json::to_value(value.fork("x")).unwrap();
    assert_eq!(untyped, typed);
}
