//! No-op notification adapter

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::NotificationRequest;

/// Notifier that drops every notification
pub struct NoOpNotifier;

impl NoOpNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn post(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        debug!(title = %request.title, "Notifications disabled, dropping notification");
        Ok(())
    }
}
