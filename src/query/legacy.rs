//! Conversion between [`RawQuery`] and its JSON forms.
//!
//! The legacy wire form is the two-element array `["Scan", {...}]`. Newer
//! producers may send `{"operation": "Scan", "body": {...}}`; both are read,
//! only the array form is written by `Serialize`.

use super::envelope::RawQuery;
use crate::core::{Body, EnvelopeError, PAIR_LEN, Result};
use serde::de::Error as _;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const OPERATION_FIELD: &str = "operation";
const BODY_FIELD: &str = "body";

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_operation(value: Value) -> Result<String> {
    match value {
        Value::String(op) => Ok(op),
        other => Err(EnvelopeError::MalformedLegacy(format!(
            "operation must be a string, got {}",
            kind_of(&other)
        ))),
    }
}

fn expect_body(value: Value) -> Result<Body> {
    match value {
        Value::Object(body) => Ok(body),
        other => Err(EnvelopeError::MalformedLegacy(format!(
            "body must be an object, got {}",
            kind_of(&other)
        ))),
    }
}

impl RawQuery {
    /// `[operation, body]` as a JSON array.
    pub fn to_legacy_value(&self) -> Value {
        Value::Array(vec![
            Value::String(self.operation().to_string()),
            Value::Object(self.body().clone()),
        ])
    }

    /// `{"operation": ..., "body": ...}` as a JSON object.
    pub fn to_object_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert(
            OPERATION_FIELD.to_string(),
            Value::String(self.operation().to_string()),
        );
        map.insert(BODY_FIELD.to_string(), Value::Object(self.body().clone()));
        Value::Object(map)
    }

    /// Build a query from either the legacy array or the object form.
    ///
    /// A missing `body` field in the object form means an empty body.
    pub fn from_legacy_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                let [operation, body]: [Value; PAIR_LEN] =
                    items.try_into().map_err(|items: Vec<Value>| {
                        EnvelopeError::MalformedLegacy(format!(
                            "expected {} elements, got {}",
                            PAIR_LEN,
                            items.len()
                        ))
                    })?;
                Ok(Self::new(expect_operation(operation)?, expect_body(body)?))
            }
            Value::Object(mut map) => {
                let operation = map.remove(OPERATION_FIELD).ok_or_else(|| {
                    EnvelopeError::MalformedLegacy(format!("missing '{}' field", OPERATION_FIELD))
                })?;
                let body = map
                    .remove(BODY_FIELD)
                    .unwrap_or_else(|| Value::Object(Body::new()));

                if let Some(extra) = map.keys().next() {
                    return Err(EnvelopeError::MalformedLegacy(format!(
                        "unexpected field '{}'",
                        extra
                    )));
                }

                Ok(Self::new(expect_operation(operation)?, expect_body(body)?))
            }
            other => Err(EnvelopeError::MalformedLegacy(format!(
                "expected array or object, got {}",
                kind_of(&other)
            ))),
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_legacy_value(value)
    }
}

impl Serialize for RawQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(PAIR_LEN)?;
        tuple.serialize_element(self.operation())?;
        tuple.serialize_element(self.body())?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for RawQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RawQuery::from_legacy_value(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_pair() {
        let query = RawQuery::from_legacy_value(json!(["Scan", {"TableName": "Foo"}])).unwrap();
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"["Scan",{"TableName":"Foo"}]"#
        );
        assert_eq!(query.to_legacy_value(), json!(["Scan", {"TableName": "Foo"}]));
    }

    #[test]
    fn test_reads_object_form() {
        let query: RawQuery =
            serde_json::from_str(r#"{"operation":"Query","body":{"Limit":5}}"#).unwrap();
        assert_eq!(query.operation(), "Query");
        assert_eq!(query.body()["Limit"], json!(5));

        let bare = RawQuery::from_legacy_value(json!({"operation": "Scan"})).unwrap();
        assert!(bare.body().is_empty());
        assert_eq!(
            bare.to_object_value(),
            json!({"operation": "Scan", "body": {}})
        );
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in [
            json!(["Scan"]),
            json!(["Scan", {}, {}]),
            json!([1, {}]),
            json!(["Scan", []]),
            json!({"body": {}}),
            json!({"operation": "Scan", "extra": 1}),
            json!("Scan"),
        ] {
            assert!(
                matches!(
                    RawQuery::from_legacy_value(input.clone()),
                    Err(EnvelopeError::MalformedLegacy(_))
                ),
                "accepted {}",
                input
            );
        }
    }

    #[test]
    fn test_from_json_str_reports_parse_errors() {
        assert!(matches!(
            RawQuery::from_json_str("[\"Scan\","),
            Err(EnvelopeError::Json(_))
        ));
    }
}
