//! normalized result objects handed back to callers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Key/value object returned by every command exchange.
///
/// Holds either the backend's JSON body verbatim or the synthesized
/// `{"status": "error", "message": ...}` object. Always a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultPayload(Map<String, Value>);

impl ResultPayload {
    /// synthesized failure object
    pub fn failure(message: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("status".into(), Value::String("error".into()));
        map.insert("message".into(), Value::String(message.into()));
        Self(map)
    }

    /// accept a parsed body, refusing anything that isn't an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ClientError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `status` field, if it is a string
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// `message` field, if it is a string
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.status() == Some("error")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<ResultPayload> for Value {
    fn from(payload: ResultPayload) -> Self {
        Value::Object(payload.0)
    }
}

impl TryFrom<Value> for ResultPayload {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_shape() {
        let payload = ResultPayload::failure("backend down");
        assert_eq!(
            Value::from(payload.clone()),
            json!({"status": "error", "message": "backend down"})
        );
        assert!(payload.is_error());
        assert_eq!(payload.message(), Some("backend down"));
    }

    #[test]
    fn test_object_body_kept_verbatim() {
        let payload = ResultPayload::from_slice(br#"{"status":"ok","reply":"hello","n":[1,2]}"#).unwrap();
        assert_eq!(payload.status(), Some("ok"));
        assert_eq!(payload.get("n"), Some(&json!([1, 2])));
        assert!(!payload.is_error());
    }

    #[test]
    fn test_non_object_rejected() {
        let bodies: [&[u8]; 4] = [b"null", b"\"hello\"", b"[1,2,3]", b"42"];
        for body in bodies {
            let err = ResultPayload::from_slice(body).unwrap_err();
            assert!(matches!(err, ClientError::MalformedResponse(_)));
        }
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = ResultPayload::from_slice(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let payload = ResultPayload::failure("x");
        let text = serde_json::to_string(&payload).unwrap();
        assert_eq!(text, r#"{"status":"error","message":"x"}"#);
    }
}
