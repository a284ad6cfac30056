//! notify-send notification adapter
//!
//! Notifications posted through `notify-send` stack; the tool has no
//! portable way to replace an earlier notification. High importance maps to
//! `normal` urgency: `critical` notifications stay until dismissed.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::{NOTIFICATION_ICON, XDG_SOUND_NAME};
use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::{Importance, NotificationRequest};
use crate::domain::config::DEFAULT_APP_NAME;

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn args(&self, request: &NotificationRequest) -> Vec<String> {
        let mut args = vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--urgency".to_string(),
            urgency_arg(request.importance).to_string(),
            "--icon".to_string(),
            NOTIFICATION_ICON.to_string(),
        ];
        if request.sound {
            args.push(format!("--hint=string:sound-name:{}", XDG_SOUND_NAME));
        }
        if request.auto_cancel {
            args.push("--hint=boolean:resident:false".to_string());
        }

        // Text starting with '-' must not be read as an option
        args.push("--".to_string());
        args.push(request.title.clone());
        args.push(request.body.clone());
        args
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

fn urgency_arg(importance: Importance) -> &'static str {
    match importance {
        Importance::Low => "low",
        Importance::Default | Importance::High => "normal",
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn post(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let status = Command::new("notify-send")
            .args(self.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
