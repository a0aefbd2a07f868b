use keypath::{Key, RawPath, Value, get, get_as, get_or, keypath};

use crate::helpers::*;

// ===== BASIC GET TESTS =====

#[test]
fn test_get_property_value() {
    let object = json(r#"{"a": 1}"#);
    for path in both_forms("a", &["a"]) {
        assert_eq!(get(&object, path), Some(&Value::Int(1)));
    }
}

#[test]
fn test_get_deep_property_value() {
    let object = json(r#"{"a": {"b": {"c": 3}}}"#);
    for path in both_forms("a.b.c", &["a", "b", "c"]) {
        assert_eq!(get(&object, path), Some(&Value::Int(3)));
    }
}

#[test]
fn test_get_key_over_path() {
    let object = json(r#"{"a.b.c": 3}"#);
    for path in both_forms("a.b.c", &["a.b.c"]) {
        assert_eq!(get(&object, path), Some(&Value::Int(3)));
    }
}

#[test]
fn test_get_prefers_literal_key_over_nested_path() {
    let object = json(r#"{"a.b": "flat", "a": {"b": "nested"}}"#);
    assert_eq!(get(&object, "a.b"), Some(&Value::from("flat")));
    assert_eq!(get(&object, ["a", "b"]), Some(&Value::from("nested")));
}

#[test]
fn test_get_from_list_root() {
    let object = json(r#"[{"a": 1}, {"a": 2}]"#);
    assert_eq!(get(&object, "[0].a"), Some(&Value::Int(1)));
    assert_eq!(get(&object, "[1].a"), Some(&Value::Int(2)));
    assert_eq!(get(&object, 1), Some(&json(r#"{"a": 2}"#)));
}

#[test]
fn test_get_does_not_coerce_sequences_to_strings() {
    let object = json(r#"{"a,b,c": 3, "a": {"b": {"c": 4}}}"#);
    assert_eq!(get(&object, ["a", "b", "c"]), Some(&Value::Int(4)));
}

#[test]
fn test_get_ignores_empty_brackets() {
    let object = json(r#"{"a": 1}"#);
    assert_eq!(get(&object, "a[]"), Some(&Value::Int(1)));
}

#[test]
fn test_get_empty_paths() {
    assert_eq!(get(&Value::map(), ""), None);
    assert_eq!(get(&Value::map(), RawPath::Keys(Vec::new())), None);

    let object = json(r#"{"": 3}"#);
    assert_eq!(get(&object, ""), Some(&Value::Int(3)));
    assert_eq!(get(&object, [""]), Some(&Value::Int(3)));
    assert_eq!(get(&object, RawPath::Keys(Vec::new())), None);
}

#[test]
fn test_get_complex_path() {
    let object = complex_object(8);
    let segments = complex_segments();
    for path in both_forms(COMPLEX_PATH, &segments) {
        assert_eq!(get(&object, path), Some(&Value::Int(8)));
    }
}

#[test]
fn test_get_with_keypath() {
    let object = json(r#"{"a": [null, {"b": {"c": 4}}]}"#);
    assert_eq!(get(&object, keypath!["a", 1, "b", "c"]), Some(&Value::Int(4)));
    assert_eq!(
        get(&object, vec![Key::from("a"), Key::from("1")]),
        Some(&json(r#"{"b": {"c": 4}}"#))
    );
}

// ===== MISSING VALUES =====

#[test]
fn test_get_missing_parts() {
    let object = json(r#"{"a": [null, null]}"#);
    for path in both_forms("a[1].b.c", &["a", "1", "b", "c"]) {
        assert_eq!(get(&object, path), None);
    }
}

#[test]
fn test_get_null_values_are_absent() {
    let object = json(r#"{"a": {"b": null}}"#);
    assert_eq!(get(&object, "a.b"), None);
    assert_eq!(get(&object, ["a", "b"]), None);
}

#[test]
fn test_get_through_scalar() {
    let object = json(r#"{"a": "text"}"#);
    assert_eq!(get(&object, "a.b"), None);
    assert_eq!(get(&object, "a[0]"), None);
}

#[test]
fn test_get_list_requires_index() {
    let object = json(r#"{"a": [1, 2, 3]}"#);
    assert_eq!(get(&object, "a.x"), None);
    assert_eq!(get(&object, "a[-1]"), None);
    assert_eq!(get(&object, "a[01]"), None);
    assert_eq!(get(&object, "a[3]"), None);
    assert_eq!(get(&object, vec![Key::from("a"), Key::Index(-1)]), None);
    assert_eq!(get(&object, "a[2]"), Some(&Value::Int(3)));
}

#[test]
fn test_get_on_null_root() {
    assert_eq!(get(&Value::Null, "a"), None);
    assert_eq!(get(&Value::Null, ""), None);
}

// ===== DEFAULTS AND CONVERSIONS =====

#[test]
fn test_get_or_uses_default_for_null() {
    let object = json(r#"{"a": {"b": null}}"#);
    let yes = Value::from(true);
    let fallback = Value::from(898);

    assert_eq!(get_or(&object, "a.b", &yes), &yes);
    assert_eq!(get_or(&object, ["a", "b"], &fallback), &fallback);
    assert_eq!(get_or(&object, ["a", "b"], &Value::Null), &Value::Null);
}

#[test]
fn test_get_or_prefers_present_value() {
    let object = json(r#"{"a": {"b": false}}"#);
    let fallback = Value::from(true);
    assert_eq!(get_or(&object, "a.b", &fallback), &Value::Bool(false));
}

#[test]
fn test_get_as_typed() {
    let object = json(r#"{"user": {"name": "ada", "age": 36, "score": 1.5, "tags": ["x"]}}"#);

    assert_eq!(get_as::<&str>(&object, "user.name"), Some("ada"));
    assert_eq!(get_as::<String>(&object, "user.name"), Some("ada".to_string()));
    assert_eq!(get_as::<i64>(&object, "user.age"), Some(36));
    assert_eq!(get_as::<f64>(&object, "user.score"), Some(1.5));
    assert_eq!(get_as::<bool>(&object, "user.age"), None);
    assert_eq!(
        get_as::<keypath::List>(&object, "user.tags").map(|l| l.len()),
        Some(1)
    );
}
