//! Decode strategies: schema decode vs dynamic construction.
//!
//! The strategy is an explicit value passed to dispatch, not an overload
//! picked by return type. `Schema` is strict: bytes must match `T`'s shape
//! or decoding fails. `Dynamic` parses a generic tree and then builds `T`
//! via [`FromJson`]; construction itself never fails, only the parse can.

use crate::error::RequestError;
use crate::json::FromJson;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// How response bytes become a typed model.
pub enum DecodeStrategy<T> {
    /// Structural decode via serde.
    Schema(fn(&[u8]) -> Result<T, RequestError>),
    /// Tree parse followed by infallible `FromJson` construction.
    Dynamic(fn(&Value) -> T),
}

impl<T: DeserializeOwned> DecodeStrategy<T> {
    /// Strict serde-based strategy.
    pub fn schema() -> Self {
        Self::Schema(|bytes| {
            serde_json::from_slice(bytes).map_err(|e| RequestError::DecodeError(e.to_string()))
        })
    }
}

impl<T: FromJson> DecodeStrategy<T> {
    /// Lenient tree-construction strategy.
    pub fn dynamic() -> Self {
        Self::Dynamic(T::from_json)
    }
}

impl<T> DecodeStrategy<T> {
    /// Apply the strategy to response bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<T, RequestError> {
        match self {
            Self::Schema(decode) => decode(bytes),
            Self::Dynamic(construct) => {
                let tree: Value = serde_json::from_slice(bytes)
                    .map_err(|e| RequestError::ParseError(e.to_string()))?;
                Ok(construct(&tree))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Model {
        v: i64,
    }

    impl FromJson for Model {
        fn from_json(value: &Value) -> Self {
            Self {
                v: i64::from_json(&value["v"]),
            }
        }
    }

    #[test]
    fn schema_decodes_conforming_bytes() {
        let model = DecodeStrategy::<Model>::schema()
            .decode(br#"{"v": 3}"#)
            .unwrap();
        assert_eq!(model, Model { v: 3 });
    }

    #[test]
    fn schema_rejects_mismatched_shape() {
        match DecodeStrategy::<Model>::schema().decode(br#"{"v": "three"}"#) {
            Err(RequestError::DecodeError(_)) => {}
            other => panic!("expected DecodeError, got: {other:?}"),
        }
    }

    #[test]
    fn dynamic_defaults_on_incomplete_body() {
        let model = DecodeStrategy::<Model>::dynamic().decode(b"{}").unwrap();
        assert_eq!(model, Model { v: 0 });
    }

    #[test]
    fn dynamic_fails_only_on_invalid_json() {
        match DecodeStrategy::<Model>::dynamic().decode(b"not json") {
            Err(RequestError::ParseError(_)) => {}
            other => panic!("expected ParseError, got: {other:?}"),
        }
    }
}
