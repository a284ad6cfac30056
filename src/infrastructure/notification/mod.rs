//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary),
//! the `notify-send` tool as fallback, or a no-op adapter when disabled.

mod noop;
mod notify_rust;
mod notify_send;

pub use noop::NoOpNotifier;
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::Notifier;
use crate::domain::config::NotifierKind;

/// Freedesktop icon used for timer notifications
pub(crate) const NOTIFICATION_ICON: &str = "appointment-soon";

/// Freedesktop sound theme name attached to timer notifications
pub(crate) const XDG_SOUND_NAME: &str = "message-new-instant";

/// Create the notifier selected in configuration
pub fn create_notifier(kind: NotifierKind, app_name: &str) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::NotifyRust => Box::new(NotifyRustNotifier::with_app_name(app_name)),
        NotifierKind::NotifySend => Box::new(NotifySendNotifier::with_app_name(app_name)),
        NotifierKind::None => Box::new(NoOpNotifier::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_native_notifier_requires_channel() {
        assert!(create_notifier(NotifierKind::NotifyRust, "App").requires_channel());
        assert!(!create_notifier(NotifierKind::NotifySend, "App").requires_channel());
        assert!(!create_notifier(NotifierKind::None, "App").requires_channel());
    }
}
