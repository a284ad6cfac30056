//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. Notifications are only shown on a
//! registered channel. On freedesktop (XDG) platforms a repeated post with
//! the same `NotificationId` replaces the earlier notification; macOS and
//! Windows stack them. The default sound is attached on every platform.
//! High importance maps to normal urgency, since critical notifications
//! stay on screen until dismissed.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::{Hint, Urgency};

use super::NOTIFICATION_ICON;
use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::{
    ChannelDescriptor, ChannelRegistry, NotificationId, NotificationRequest, Registration,
};
#[cfg(all(unix, not(target_os = "macos")))]
use crate::domain::notification::Importance;

/// Sound attached to timer notifications
#[cfg(all(unix, not(target_os = "macos")))]
const SOUND_NAME: &str = super::XDG_SOUND_NAME;

/// Sound attached to timer notifications
#[cfg(not(all(unix, not(target_os = "macos"))))]
const SOUND_NAME: &str = "Default";

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Fallback application name when the channel has no display name
    app_name: String,
    registry: Mutex<ChannelRegistry>,
    /// Server-assigned handle ids of live notifications
    handles: Mutex<HashMap<NotificationId, u32>>,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            registry: Mutex::new(ChannelRegistry::new()),
            handles: Mutex::new(HashMap::new()),
        }
    }

    /// Application name to show for a channel
    fn app_name_for(&self, channel_id: &str) -> Result<String, NotificationError> {
        let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        let channel = registry
            .get(channel_id)
            .ok_or_else(|| NotificationError::ChannelNotRegistered(channel_id.to_string()))?;

        if channel.name.trim().is_empty() {
            Ok(self.app_name.clone())
        } else {
            Ok(channel.name.clone())
        }
    }

    fn previous_handle(&self, id: NotificationId) -> Option<u32> {
        self.handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .copied()
    }

    fn remember_handle(&self, id: NotificationId, handle: u32) {
        self.handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, handle);
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn urgency_for(importance: Importance) -> Urgency {
    match importance {
        Importance::Low => Urgency::Low,
        Importance::Default | Importance::High => Urgency::Normal,
    }
}

// Not resident: clicking the notification dismisses it
#[cfg(all(unix, not(target_os = "macos")))]
fn resident_hint(request: &NotificationRequest) -> Hint {
    Hint::Resident(!request.auto_cancel)
}

fn sound_for(request: &NotificationRequest) -> Option<&'static str> {
    request.sound.then_some(SOUND_NAME)
}

/// Show a notification (called from spawn_blocking).
///
/// Returns the server handle id where the platform exposes one.
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(unused_variables))]
fn show_sync(
    app_name: &str,
    request: &NotificationRequest,
    replaces: Option<u32>,
) -> Result<Option<u32>, NotificationError> {
    let mut notification = notify_rust::Notification::new();
    notification
        .appname(app_name)
        .summary(&request.title)
        .body(&request.body)
        .icon(NOTIFICATION_ICON);
    if let Some(sound) = sound_for(request) {
        notification.sound_name(sound);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        notification.urgency(urgency_for(request.importance));
        notification.hint(resident_hint(request));
        if let Some(id) = replaces {
            notification.id(id);
        }

        let handle = notification
            .show()
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        Ok(Some(handle.id()))
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        notification
            .show()
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        Ok(None)
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    fn requires_channel(&self) -> bool {
        true
    }

    async fn register_channel(
        &self,
        descriptor: &ChannelDescriptor,
    ) -> Result<Registration, NotificationError> {
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        Ok(registry.register(descriptor))
    }

    async fn post(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let app_name = self.app_name_for(&request.channel_id)?;
        let replaces = self.previous_handle(request.id);
        let owned = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        let handle = tokio::task::spawn_blocking(move || show_sync(&app_name, &owned, replaces))
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))??;

        if let Some(handle) = handle {
            self.remember_handle(request.id, handle);
        }

        Ok(())
    }
}
