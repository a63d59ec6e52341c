//! JSON-tree model construction.
//!
//! `FromJson` is the capability "can be built from a parsed JSON tree".
//! Construction never fails: a missing or mismatched field degrades to the
//! type's default (0, "", false, empty sequence) instead of erroring, so a
//! well-formed but incomplete body always produces a usable model. No
//! cross-type coercion is attempted; a string `"1"` is a mismatch for an
//! integer field, not a `1`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build a value from a JSON tree, defaulting on missing or mismatched
/// fields.
pub trait FromJson: Sized {
    /// Construct `Self` from a JSON tree.
    fn from_json(value: &Value) -> Self;
}

impl FromJson for i64 {
    fn from_json(value: &Value) -> Self {
        value.as_i64().unwrap_or_default()
    }
}

impl FromJson for i32 {
    fn from_json(value: &Value) -> Self {
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or_default()
    }
}

impl FromJson for u64 {
    fn from_json(value: &Value) -> Self {
        value.as_u64().unwrap_or_default()
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Self {
        value.as_f64().unwrap_or_default()
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Self {
        value.as_bool().unwrap_or_default()
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Self {
        value.as_str().unwrap_or_default().to_string()
    }
}

/// Sequences build element-wise; anything but an array is an empty vec.
impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Self {
        value
            .as_array()
            .map(|items| items.iter().map(T::from_json).collect())
            .unwrap_or_default()
    }
}

/// The tree itself (identity), for callers that want the raw JSON.
impl FromJson for Value {
    fn from_json(value: &Value) -> Self {
        value.clone()
    }
}

/// Generic response envelope: status code, message, result flag, payload.
///
/// Backends that wrap payloads differently should define their own envelope
/// in this shape and implement `FromJson` for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResult<T> {
    /// Backend status code.
    #[serde(default)]
    pub code: i64,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Whether the backend considers the call successful.
    #[serde(default)]
    pub result: bool,
    /// Payload.
    pub data: T,
}

impl<T: FromJson> FromJson for RequestResult<T> {
    fn from_json(value: &Value) -> Self {
        Self {
            code: i64::from_json(&value["code"]),
            message: String::from_json(&value["message"]),
            result: bool::from_json(&value["result"]),
            data: T::from_json(&value["data"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_all_defaults() {
        let envelope = RequestResult::<String>::from_json(&json!({}));
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.message, "");
        assert!(!envelope.result);
        assert_eq!(envelope.data, "");
    }

    #[test]
    fn mismatched_fields_degrade_to_defaults() {
        let tree = json!({"code": "7", "message": 42, "result": "yes", "data": {"x": 1}});
        let envelope = RequestResult::<Vec<i64>>::from_json(&tree);
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.message, "");
        assert!(!envelope.result);
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn conforming_envelope_builds_field_for_field() {
        let tree = json!({"result": true, "code": 0, "message": "ok", "data": [1, 2, 3]});
        let envelope = RequestResult::<Vec<i64>>::from_json(&tree);
        assert!(envelope.result);
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn sequence_elements_each_default_independently() {
        let tree = json!(["a", 1, "b"]);
        assert_eq!(
            Vec::<String>::from_json(&tree),
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn raw_tree_passes_through() {
        let tree = json!({"nested": {"v": 1}});
        assert_eq!(Value::from_json(&tree), tree);
    }

    #[test]
    fn envelope_schema_decode_matches_dynamic_construction() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Wrapper {
            v: i64,
        }

        impl FromJson for Wrapper {
            fn from_json(value: &Value) -> Self {
                Self {
                    v: i64::from_json(&value["v"]),
                }
            }
        }

        let body = json!({"result": true, "code": 0, "message": "ok", "data": {"v": 1}});
        let schema: RequestResult<Wrapper> = serde_json::from_value(body.clone()).unwrap();
        let dynamic = RequestResult::<Wrapper>::from_json(&body);
        assert_eq!(schema, dynamic);
        assert_eq!(dynamic.data.v, 1);
    }
}
