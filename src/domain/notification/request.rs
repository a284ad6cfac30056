//! Notification post request

use std::fmt;

use super::{ChannelDescriptor, Importance, NotificationContent};

/// Identity of a posted notification.
///
/// Posting twice with the same id replaces the earlier notification on
/// platforms that support replacement; elsewhere they stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u32);

impl NotificationId {
    /// Fixed identity used for every timer notification
    pub const TIMER: Self = Self(1);

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully-specified notification ready to hand to the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub id: NotificationId,
    pub channel_id: String,
    pub title: String,
    pub body: String,
    pub importance: Importance,
    /// Dismiss the notification when the user clicks it
    pub auto_cancel: bool,
    /// Attach the default notification sound
    pub sound: bool,
}

impl NotificationRequest {
    /// Build a timer notification for the given channel
    pub fn timer(content: NotificationContent, channel: &ChannelDescriptor) -> Self {
        Self {
            id: NotificationId::TIMER,
            channel_id: channel.id.clone(),
            title: content.title,
            body: content.body,
            importance: channel.importance,
            auto_cancel: true,
            sound: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_request_uses_fixed_id_and_channel() {
        let channel = ChannelDescriptor::timer();
        let request =
            NotificationRequest::timer(NotificationContent::new("Done", "Take a break"), &channel);

        assert_eq!(request.id, NotificationId::TIMER);
        assert_eq!(request.channel_id, ChannelDescriptor::TIMER_ID);
        assert_eq!(request.title, "Done");
        assert_eq!(request.body, "Take a break");
        assert_eq!(request.importance, Importance::High);
        assert!(request.auto_cancel);
        assert!(request.sound);
    }
}
