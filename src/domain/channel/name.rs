//! Channel name value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidChannelNameError;

/// Logical name of the method channel (e.g. `com.example.pomodoro_app/timer`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    /// Channel the timer application listens on
    pub const DEFAULT: &'static str = "com.example.pomodoro_app/timer";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-system and pipe safe form of the name.
    ///
    /// `[A-Za-z0-9._]` pass through, `/` becomes `-`, every other byte is
    /// written as `%XX`. Distinct names always get distinct stems.
    pub fn endpoint_stem(&self) -> String {
        let mut stem = String::with_capacity(self.0.len());
        for byte in self.0.bytes() {
            match byte {
                b'/' => stem.push('-'),
                b if b.is_ascii_alphanumeric() || b == b'.' || b == b'_' => stem.push(b as char),
                b => stem.push_str(&format!("%{:02X}", b)),
            }
        }
        stem
    }
}

impl Default for ChannelName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for ChannelName {
    type Err = InvalidChannelNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidChannelNameError {
                input: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
