//! CLI presenter for output formatting

use colored::*;

use crate::domain::channel::MethodResponse;
use crate::domain::command::ALL_METHODS;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print server status
    pub fn server_status(&self, state: &str) {
        eprintln!("{} Bridge: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the outcome of a method call.
    ///
    /// Returns whether the call succeeded.
    pub fn method_response(&self, method: &str, response: &MethodResponse) -> bool {
        match response {
            MethodResponse::Success { result } => {
                if let Some(value) = result {
                    self.output(&value.to_string());
                }
                self.success(&format!("{} succeeded", method));
                true
            }
            MethodResponse::Error { code, message, .. } => {
                self.error(&format_error(code, message));
                false
            }
            MethodResponse::NotImplemented => {
                self.error(&not_implemented_message(method));
                false
            }
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Message for a method the bridge does not handle
pub fn not_implemented_message(method: &str) -> String {
    format!(
        "{}: not implemented (available: {})",
        method,
        ALL_METHODS.join(", ")
    )
}

/// Render an error response as `CODE: message`
pub fn format_error(code: &str, message: &str) -> String {
    format!("{}: {}", code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_prefixes_code() {
        assert_eq!(
            format_error("INVALID_ARGUMENTS", "bad title"),
            "INVALID_ARGUMENTS: bad title"
        );
    }

    #[test]
    fn not_implemented_lists_available_methods() {
        assert_eq!(
            not_implemented_message("cancelTimer"),
            "cancelTimer: not implemented (available: playSound, showNotification)"
        );
    }

    #[test]
    fn method_response_reports_outcome() {
        let presenter = Presenter::new();
        assert!(presenter.method_response("playSound", &MethodResponse::success()));
        assert!(!presenter.method_response("pause", &MethodResponse::NotImplemented));
        assert!(!presenter.method_response(
            "showNotification",
            &MethodResponse::error("INVALID_ARGUMENTS", "bad")
        ));
    }
}
