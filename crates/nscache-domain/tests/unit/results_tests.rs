//! Result shape tests

use nscache_domain::value_objects::{CommandReply, KeyCount, KeysDeleted};
use serde_json::json;

#[test]
fn test_key_count_serializes_camel_case() {
    let count = KeyCount {
        key_prefix: "sys:app".to_string(),
        num_keys: 2,
    };
    assert_eq!(
        serde_json::to_value(&count).unwrap(),
        json!({ "keyPrefix": "sys:app", "numKeys": 2 })
    );
}

#[test]
fn test_keys_deleted_serializes_camel_case() {
    let deleted = KeysDeleted {
        key_prefix: "sys:app".to_string(),
        num_deleted: 7,
    };
    assert_eq!(
        serde_json::to_value(&deleted).unwrap(),
        json!({ "keyPrefix": "sys:app", "numDeleted": 7 })
    );
}

#[test]
fn test_command_reply_display() {
    assert_eq!(CommandReply::ok().to_string(), "OK");
    assert_eq!(CommandReply::Integer(1).to_string(), "1");
}
