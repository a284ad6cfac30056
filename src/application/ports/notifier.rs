//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{ChannelDescriptor, NotificationRequest, Registration};

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    SendFailed(String),

    #[error("Notification channel '{0}' is not registered")]
    ChannelNotRegistered(String),

    #[error("Notification permission denied")]
    PermissionDenied,
}

/// Whether the user allows the application to show notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Not asked yet
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionState {
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Port for the OS notification subsystem
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Whether channels must be registered before posting
    fn requires_channel(&self) -> bool {
        false
    }

    /// Register a notification channel.
    ///
    /// Must be idempotent: registering the same id again returns
    /// `AlreadyRegistered` and changes nothing.
    async fn register_channel(
        &self,
        _descriptor: &ChannelDescriptor,
    ) -> Result<Registration, NotificationError> {
        Ok(Registration::NotRequired)
    }

    /// Ask the user for permission to show notifications
    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        Ok(PermissionState::Granted)
    }

    /// Hand a notification to the OS.
    ///
    /// # Returns
    /// Ok(()) once the OS accepted the request, error otherwise
    async fn post(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    fn requires_channel(&self) -> bool {
        self.as_ref().requires_channel()
    }

    async fn register_channel(
        &self,
        descriptor: &ChannelDescriptor,
    ) -> Result<Registration, NotificationError> {
        self.as_ref().register_channel(descriptor).await
    }

    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        self.as_ref().request_permission().await
    }

    async fn post(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().post(request).await
    }
}
