//! Bridge commands decoded from method calls

use serde_json::{Map, Value};

use crate::domain::channel::MethodCall;
use crate::domain::error::BridgeError;
use crate::domain::notification::NotificationContent;

/// Method name for the sound cue
pub const PLAY_SOUND: &str = "playSound";

/// Method name for the local notification
pub const SHOW_NOTIFICATION: &str = "showNotification";

/// All method names the bridge handles
pub const ALL_METHODS: &[&str] = &[PLAY_SOUND, SHOW_NOTIFICATION];

/// A decoded, validated bridge command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCommand {
    PlaySound,
    ShowNotification(NotificationContent),
}

impl BridgeCommand {
    /// Decode a method call.
    ///
    /// Unknown method names yield `NotImplemented`. For `showNotification`,
    /// missing fields take their defaults while wrong-typed fields are
    /// rejected with `InvalidArguments`.
    pub fn from_call(call: &MethodCall) -> Result<Self, BridgeError> {
        match call.method.as_str() {
            PLAY_SOUND => Ok(Self::PlaySound),
            SHOW_NOTIFICATION => {
                parse_notification_arguments(call.arguments.as_ref()).map(Self::ShowNotification)
            }
            other => Err(BridgeError::NotImplemented(other.to_string())),
        }
    }

    /// Method name this command answers to
    pub const fn method(&self) -> &'static str {
        match self {
            Self::PlaySound => PLAY_SOUND,
            Self::ShowNotification(_) => SHOW_NOTIFICATION,
        }
    }
}

fn parse_notification_arguments(
    arguments: Option<&Value>,
) -> Result<NotificationContent, BridgeError> {
    let map = match arguments {
        None | Some(Value::Null) => return Ok(NotificationContent::default()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(BridgeError::InvalidArguments(format!(
                "expected an object, got {}",
                json_type_name(other)
            )))
        }
    };

    let title = optional_string(map, "title")?;
    let body = optional_string(map, "body")?;

    Ok(NotificationContent::with_defaults(title, body))
}

fn optional_string(map: &Map<String, Value>, key: &str) -> Result<Option<String>, BridgeError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(BridgeError::InvalidArguments(format!(
            "'{}' must be a string, got {}",
            key,
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::notification::{DEFAULT_BODY, DEFAULT_TITLE};

    fn notification_call(arguments: Value) -> MethodCall {
        MethodCall::with_arguments(SHOW_NOTIFICATION, arguments)
    }

    #[test]
    fn play_sound_decodes() {
        let cmd = BridgeCommand::from_call(&MethodCall::new("playSound")).unwrap();
        assert_eq!(cmd, BridgeCommand::PlaySound);
    }

    #[test]
    fn play_sound_ignores_arguments() {
        let call = MethodCall::with_arguments("playSound", json!([1, 2, 3]));
        assert_eq!(
            BridgeCommand::from_call(&call).unwrap(),
            BridgeCommand::PlaySound
        );
    }

    #[test]
    fn show_notification_with_both_fields() {
        let call = notification_call(json!({"title": "Focus done", "body": "Take five"}));
        let cmd = BridgeCommand::from_call(&call).unwrap();
        assert_eq!(
            cmd,
            BridgeCommand::ShowNotification(NotificationContent::new("Focus done", "Take five"))
        );
    }

    #[test]
    fn show_notification_without_arguments_uses_defaults() {
        let cmd = BridgeCommand::from_call(&MethodCall::new(SHOW_NOTIFICATION)).unwrap();
        assert_eq!(
            cmd,
            BridgeCommand::ShowNotification(NotificationContent::new(DEFAULT_TITLE, DEFAULT_BODY))
        );
    }

    #[test]
    fn show_notification_with_null_arguments_uses_defaults() {
        let cmd = BridgeCommand::from_call(&notification_call(Value::Null)).unwrap();
        assert_eq!(cmd, BridgeCommand::ShowNotification(NotificationContent::default()));
    }

    #[test]
    fn show_notification_missing_body_uses_default_body() {
        let cmd = BridgeCommand::from_call(&notification_call(json!({"title": "Hi"}))).unwrap();
        assert_eq!(
            cmd,
            BridgeCommand::ShowNotification(NotificationContent::new("Hi", DEFAULT_BODY))
        );
    }

    #[test]
    fn show_notification_ignores_unknown_keys() {
        let call = notification_call(json!({"title": "a", "body": "b", "badge": 3}));
        assert!(BridgeCommand::from_call(&call).is_ok());
    }

    #[test]
    fn wrong_typed_title_is_invalid() {
        let err = BridgeCommand::from_call(&notification_call(json!({"title": 42}))).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArguments(ref m) if m.contains("title")));
    }

    #[test]
    fn wrong_typed_body_is_invalid() {
        let call = notification_call(json!({"title": "ok", "body": ["not", "text"]}));
        let err = BridgeCommand::from_call(&call).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArguments(ref m) if m.contains("array")));
    }

    #[test]
    fn non_object_arguments_are_invalid() {
        let err = BridgeCommand::from_call(&notification_call(json!("title"))).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENTS");
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        let err = BridgeCommand::from_call(&MethodCall::new("cancelTimer")).unwrap_err();
        assert_eq!(err, BridgeError::NotImplemented("cancelTimer".to_string()));
    }

    #[test]
    fn method_names_are_case_sensitive() {
        let err = BridgeCommand::from_call(&MethodCall::new("PlaySound")).unwrap_err();
        assert!(matches!(err, BridgeError::NotImplemented(_)));
    }

    #[test]
    fn command_reports_its_method() {
        assert_eq!(BridgeCommand::PlaySound.method(), PLAY_SOUND);
        assert_eq!(
            BridgeCommand::ShowNotification(NotificationContent::default()).method(),
            SHOW_NOTIFICATION
        );
    }
}
