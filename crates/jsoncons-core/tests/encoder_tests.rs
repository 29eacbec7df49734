/// Serialization tests: JSON text produced from the tagged model.
use jsoncons_core::{parse_str, to_json_value, to_string, to_string_pretty, JsonError, Value};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn encode_scalars() {
    assert_eq!(to_string(&Value::null()).unwrap(), "null");
    assert_eq!(to_string(&Value::boolean(false)).unwrap(), "false");
    assert_eq!(to_string(&Value::integer(-42)).unwrap(), "-42");
    assert_eq!(to_string(&Value::double(3.5)).unwrap(), "3.5");
    assert_eq!(to_string(&Value::string("a\"b")).unwrap(), r#""a\"b""#);
}

#[test]
fn whole_double_keeps_fraction() {
    assert_eq!(to_string(&Value::double(2.0)).unwrap(), "2.0");
}

#[test]
fn non_finite_doubles_are_rejected() {
    for d in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = to_string(&Value::double(d)).unwrap_err();
        assert!(matches!(err, JsonError::Encode(_)), "{d}");
    }
}

#[test]
fn non_finite_double_nested_is_rejected() {
    let value = Value::object([("bad", Value::array([Value::double(f64::NAN)]))]);
    assert!(to_string(&value).is_err());
    assert!(to_json_value(&value).is_err());
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn encode_object_in_insertion_order() {
    let value = Value::object([
        ("z", Value::integer(1)),
        ("a", Value::array([Value::null(), Value::boolean(true)])),
    ]);
    assert_eq!(to_string(&value).unwrap(), r#"{"z":1,"a":[null,true]}"#);
}

#[test]
fn encode_empty_containers() {
    assert_eq!(to_string(&Value::array(Vec::new())).unwrap(), "[]");
    assert_eq!(
        to_string(&Value::object(Vec::<(String, Value)>::new())).unwrap(),
        "{}"
    );
}

#[test]
fn pretty_output_is_indented() {
    let value = Value::object([("a", Value::integer(1))]);
    assert_eq!(to_string_pretty(&value).unwrap(), "{\n  \"a\": 1\n}");
}

#[test]
fn encoded_text_parses_back_to_equal_value() {
    let original = Value::object([
        ("i", Value::integer(7)),
        ("d", Value::double(7.0)),
        ("s", Value::string("line1\nline2")),
        ("nested", Value::array([Value::object([("k", Value::null())])])),
    ]);
    let text = to_string(&original).unwrap();
    assert_eq!(parse_str(&text).unwrap(), original);
}

#[test]
fn to_json_value_preserves_structure() {
    let value = Value::object([("n", Value::integer(1)), ("d", Value::double(0.5))]);
    let json = to_json_value(&value).unwrap();
    assert_eq!(json, serde_json::json!({"n": 1, "d": 0.5}));
    assert!(json["n"].is_i64());
    assert!(json["d"].is_f64());
}

#[test]
fn serde_json_value_try_from() {
    let value = Value::array([Value::string("a"), Value::double(1.5), Value::null()]);
    let json = serde_json::Value::try_from(&value).unwrap();
    assert_eq!(json, serde_json::json!(["a", 1.5, null]));

    for d in [f64::NAN, f64::INFINITY] {
        let bad = Value::object([("x", Value::double(d))]);
        let err = serde_json::Value::try_from(&bad).unwrap_err();
        assert!(matches!(err, JsonError::Encode(_)), "{d}");
    }
}

#[test]
fn display_writes_null_for_non_finite() {
    let value = Value::array([Value::double(f64::INFINITY), Value::integer(1)]);
    assert_eq!(value.to_string(), "[null,1]");
}
