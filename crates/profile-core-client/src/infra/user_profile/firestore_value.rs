// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// A document as returned by the Firestore REST API.
#[derive(Debug, Deserialize)]
pub(super) struct FirestoreDocument {
    #[allow(dead_code)]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl FirestoreDocument {
    pub fn into_plain_fields(self) -> HashMap<String, Value> {
        self.fields
            .into_iter()
            .map(|(key, value)| (key, plain_value(value)))
            .collect()
    }
}

/// Converts a typed Firestore value (`{"stringValue": "…"}`) into plain JSON. Values of unknown
/// type become `null`.
pub(super) fn plain_value(value: Value) -> Value {
    let Value::Object(object) = value else {
        return Value::Null;
    };
    let Some((kind, value)) = object.into_iter().next() else {
        return Value::Null;
    };

    match (kind.as_str(), value) {
        ("nullValue", _) => Value::Null,
        ("booleanValue", value @ Value::Bool(_)) => value,
        // 64-bit integers are transmitted as strings.
        ("integerValue", Value::String(value)) => value
            .parse::<i64>()
            .map(|value| Value::Number(value.into()))
            .unwrap_or(Value::String(value)),
        ("integerValue", value @ Value::Number(_)) => value,
        ("doubleValue", Value::Number(value)) => Value::Number(value),
        ("doubleValue", Value::String(value)) => value
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::String(value)),
        (
            "stringValue" | "timestampValue" | "referenceValue" | "bytesValue",
            value @ Value::String(_),
        ) => value,
        ("geoPointValue", value @ Value::Object(_)) => value,
        ("arrayValue", Value::Object(mut array)) => match array.remove("values") {
            Some(Value::Array(values)) => {
                Value::Array(values.into_iter().map(plain_value).collect())
            }
            _ => Value::Array(vec![]),
        },
        ("mapValue", Value::Object(mut map)) => match map.remove("fields") {
            Some(Value::Object(fields)) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, plain_value(value)))
                    .collect::<Map<_, _>>(),
            ),
            _ => Value::Object(Map::new()),
        },
        _ => Value::Null,
    }
}
