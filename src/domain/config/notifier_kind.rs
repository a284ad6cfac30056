//! Notifier backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidNotifierError;

/// All selectable notifier backends
pub const ALL_NOTIFIERS: &[NotifierKind] = &[
    NotifierKind::NotifyRust,
    NotifierKind::NotifySend,
    NotifierKind::None,
];

/// Which notification adapter the bridge uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotifierKind {
    /// Native notifications through notify-rust
    #[default]
    NotifyRust,
    /// The `notify-send` command-line tool
    NotifySend,
    /// Notifications disabled
    None,
}

impl NotifierKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
            Self::None => "none",
        }
    }
}

impl FromStr for NotifierKind {
    type Err = InvalidNotifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notify-rust" | "native" => Ok(Self::NotifyRust),
            "notify-send" => Ok(Self::NotifySend),
            "none" | "off" => Ok(Self::None),
            _ => Err(InvalidNotifierError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
