//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::channel::ChannelName;
use crate::domain::config::NotifierKind;

/// Default application name shown on notifications
pub const DEFAULT_APP_NAME: &str = "Pomodoro Timer";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub channel: Option<String>,
    pub app_name: Option<String>,
    pub sound: Option<bool>,
    pub notifications: Option<bool>,
    pub notifier: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            channel: Some(ChannelName::DEFAULT.to_string()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            sound: Some(true),
            notifications: Some(true),
            notifier: Some(NotifierKind::default().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            channel: other.channel.or(self.channel),
            app_name: other.app_name.or(self.app_name),
            sound: other.sound.or(self.sound),
            notifications: other.notifications.or(self.notifications),
            notifier: other.notifier.or(self.notifier),
        }
    }

    /// Get channel as parsed ChannelName, or default if not set/invalid
    pub fn channel_or_default(&self) -> ChannelName {
        self.channel
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the application name, or the default if not set/blank
    pub fn app_name_or_default(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get sound setting, or true if not set
    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(true)
    }

    /// Get notifications setting, or true if not set
    pub fn notifications_or_default(&self) -> bool {
        self.notifications.unwrap_or(true)
    }

    /// Effective notifier backend.
    ///
    /// Disabling notifications wins over any configured backend.
    pub fn notifier_or_default(&self) -> NotifierKind {
        if !self.notifications_or_default() {
            return NotifierKind::None;
        }
        self.notifier
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}
