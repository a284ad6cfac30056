//! Wire messages exchanged over the method channel

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::BridgeError;

/// Error code for lines that are not a valid method call
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";

/// Inbound method call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl MethodCall {
    /// Call without arguments
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Call with a JSON argument payload
    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments: Some(arguments),
        }
    }
}

/// Outbound result of a method call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    Success {
        #[serde(default)]
        result: Option<Value>,
    },
    Error {
        code: String,
        message: String,
        #[serde(default)]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResponse {
    /// Successful call with no result value
    pub fn success() -> Self {
        Self::Success { result: None }
    }

    /// Structured error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Result<(), BridgeError>> for MethodResponse {
    fn from(result: Result<(), BridgeError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(BridgeError::NotImplemented(_)) => Self::NotImplemented,
            Err(e @ BridgeError::InvalidArguments(_)) => Self::error(e.code(), e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_without_arguments_parses() {
        let call: MethodCall = serde_json::from_str(r#"{"method":"playSound"}"#).unwrap();
        assert_eq!(call, MethodCall::new("playSound"));
    }

    #[test]
    fn call_with_arguments_parses() {
        let call: MethodCall = serde_json::from_str(
            r#"{"method":"showNotification","arguments":{"title":"Done"}}"#,
        )
        .unwrap();
        assert_eq!(call.method, "showNotification");
        assert_eq!(call.arguments, Some(json!({"title": "Done"})));
    }

    #[test]
    fn success_serializes_with_status_tag() {
        let value = serde_json::to_value(MethodResponse::success()).unwrap();
        assert_eq!(value, json!({"status": "success", "result": null}));
    }

    #[test]
    fn not_implemented_serializes_without_payload() {
        let value = serde_json::to_value(MethodResponse::NotImplemented).unwrap();
        assert_eq!(value, json!({"status": "notImplemented"}));
    }

    #[test]
    fn invalid_arguments_maps_to_error_response() {
        let response =
            MethodResponse::from(Err(BridgeError::InvalidArguments("title".to_string())));
        match response {
            MethodResponse::Error { code, .. } => assert_eq!(code, "INVALID_ARGUMENTS"),
            other => panic!("Expected error response, got {:?}", other),
        }
    }

    #[test]
    fn not_implemented_maps_to_not_implemented_response() {
        let response = MethodResponse::from(Err(BridgeError::NotImplemented("x".to_string())));
        assert_eq!(response, MethodResponse::NotImplemented);
    }
}
