//! Request body representation and the emptiness rule applied by `finalize`.

use serde_json::{Map, Value};

/// Insertion-ordered parameter map sent along with an operation.
pub type Body = Map<String, Value>;

/// Decide whether a body value survives finalization.
///
/// Booleans and numbers are always kept, `false` and `0` included. Strings
/// are dropped only when empty; `"0"` is numeric text and stays. Null and
/// empty arrays/objects are dropped. Nested values are not inspected.
pub fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Keys of `body` that `is_meaningful` rejects, in body order.
pub fn empty_keys(body: &Body) -> Vec<&str> {
    body.iter()
        .filter(|(_, value)| !is_meaningful(value))
        .map(|(key, _)| key.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_zero_like_scalars() {
        assert!(is_meaningful(&json!(false)));
        assert!(is_meaningful(&json!(true)));
        assert!(is_meaningful(&json!(0)));
        assert!(is_meaningful(&json!(0.0)));
        assert!(is_meaningful(&json!(-3)));
    }

    #[test]
    fn test_numeric_text_is_kept() {
        assert!(is_meaningful(&json!("0")));
        assert!(is_meaningful(&json!(" ")));
        assert!(!is_meaningful(&json!("")));
    }

    #[test]
    fn test_drops_empty_containers_and_null() {
        assert!(!is_meaningful(&json!(null)));
        assert!(!is_meaningful(&json!([])));
        assert!(!is_meaningful(&json!({})));
        assert!(is_meaningful(&json!([null])));
        assert!(is_meaningful(&json!({"k": {}})));
    }

    #[test]
    fn test_empty_keys_in_order() {
        let body = json!({"b": "", "a": 1, "c": null})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(empty_keys(&body), vec!["b", "c"]);
    }
}
