use serde_json::json;
use structured_error::{kvs, StructuredError, Value};

#[test]
fn values_serialize_untagged() {
    assert_eq!(serde_json::to_value(Value::from("a")).unwrap(), json!("a"));
    assert_eq!(serde_json::to_value(Value::from(-1)).unwrap(), json!(-1));
    assert_eq!(serde_json::to_value(Value::from(2u8)).unwrap(), json!(2));
    assert_eq!(serde_json::to_value(Value::from(true)).unwrap(), json!(true));
}

#[test]
fn key_values_serialize_as_map_outer_wins() {
    let kvs = kvs!("name" => "dogs", "age" => 3, "name" => "cats");
    let value = serde_json::to_value(&kvs).unwrap();

    assert_eq!(value, json!({ "name": "dogs", "age": 3 }));
}

#[test]
fn structured_error_serializes_logging_payload() {
    let inner = StructuredError::new("e1").with_kvs(kvs!("name" => "cats", "lives" => 9));
    let err = StructuredError::wrap(inner, "e2").with_kv("name", "dogs");

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({
            "message": "e2",
            "error": "e2: e1",
            "kvs": { "name": "dogs", "lives": 9 },
        })
    );
}
