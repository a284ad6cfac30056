//! Notification channel descriptor

use std::fmt;

/// Importance level of a notification channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    Low,
    #[default]
    Default,
    High,
}

impl Importance {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Default => "default",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category metadata the notification subsystem needs before it shows
/// notifications under that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDescriptor {
    /// Stable identifier, the registry key
    pub id: String,
    /// Display name shown by the OS
    pub name: String,
    pub description: String,
    pub importance: Importance,
}

impl ChannelDescriptor {
    /// Identifier of the timer channel
    pub const TIMER_ID: &'static str = "pomodoro_notification_channel";

    /// Create a descriptor with high importance
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            importance: Importance::High,
        }
    }

    /// The single channel used for timer notifications
    pub fn timer() -> Self {
        Self::new(
            Self::TIMER_ID,
            "Pomodoro Timer",
            "Notifications for Pomodoro Timer",
        )
    }

    /// Timer channel with a custom display name
    pub fn timer_named(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("Notifications for {}", name);
        Self::new(Self::TIMER_ID, name, description)
    }
}

impl Default for ChannelDescriptor {
    fn default() -> Self {
        Self::timer()
    }
}
