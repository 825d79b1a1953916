// crates/shared-kernel/tests/serde_roundtrip.rs
use distribution_index_shared_kernel::{ValueBounds, ValueCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    count: ValueCount,
    bounds: ValueBounds,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper { count: ValueCount::from(42), bounds: ValueBounds::new(2, 50).unwrap() };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn invalid_bounds_fail_to_deserialize() {
    let result = serde_json::from_str::<ValueBounds>(r#"{"min": 0, "max": 10}"#);
    assert!(result.is_err());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let bounds: ValueBounds = serde_json::from_str(r#"{"max": 50}"#).expect("deserializes");
    assert_eq!(bounds, ValueBounds::new(1, 50).unwrap());
}
