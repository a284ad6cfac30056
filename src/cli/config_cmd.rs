//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::channel::ChannelName;
use crate::domain::config::{AppConfig, NotifierKind};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    // Load existing config
    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate a value and store it under its key
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "channel" => {
            let channel: ChannelName = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.channel = Some(channel.to_string());
        }
        "app_name" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
            config.app_name = Some(value.to_string());
        }
        "sound" => {
            config.sound = Some(
                parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".into()))?,
            )
        }
        "notifications" => {
            config.notifications = Some(
                parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".into()))?,
            )
        }
        "notifier" => {
            let kind: NotifierKind = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.notifier = Some(kind.to_string());
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "channel" => config.channel.clone(),
        "app_name" => config.app_name.clone(),
        "sound" => config.sound.map(|b| b.to_string()),
        "notifications" => config.notifications.map(|b| b.to_string()),
        "notifier" => config.notifier.clone(),
        _ => None,
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("OFF"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn notifier_is_normalized() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "notifier", "Native").unwrap();
        assert_eq!(config.notifier, Some("notify-rust".to_string()));
    }

    #[test]
    fn invalid_notifier_rejected() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "notifier", "growl").is_err());
        assert!(config.notifier.is_none());
    }

    #[test]
    fn blank_values_rejected() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "channel", "   ").is_err());
        assert!(apply_value(&mut config, "app_name", "").is_err());
    }

    #[test]
    fn channel_is_trimmed() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "channel", "  app/timer ").unwrap();
        assert_eq!(config.channel, Some("app/timer".to_string()));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = check_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
    }

    #[tokio::test]
    async fn set_then_get_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "sound", "no").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.sound, Some(false));
        assert_eq!(read_value(&config, "sound"), Some("false".to_string()));
        assert_eq!(read_value(&config, "channel"), None);
    }

    #[tokio::test]
    async fn invalid_set_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        let err = handle_set(&store, &Presenter::new(), "sound", "maybe")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(!store.exists());
    }
}
