//! Notification text value object

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "Pomodoro Timer";

/// Body used when the caller does not supply one
pub const DEFAULT_BODY: &str = "Timer completed!";

/// User-visible text of a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// Create content from explicit title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create content, substituting defaults for missing fields
    pub fn with_defaults(title: Option<String>, body: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
        }
    }
}

impl Default for NotificationContent {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_BODY)
    }
}
