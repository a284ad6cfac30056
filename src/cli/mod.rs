//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! the method channel transport and the command runners.

use std::path::PathBuf;

pub mod app;
pub mod args;
pub mod call_cmd;
pub mod config_cmd;
pub mod ipc;
#[cfg(unix)]
pub mod pid_file;
pub mod presenter;
pub mod serve;
pub mod signals;

// Re-export commonly used types
pub use app::{run_invoke, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{BridgeArgs, BridgeOptions, Cli, Commands, ConfigAction};
pub use call_cmd::handle_call_command;
pub use presenter::Presenter;
pub use serve::run_server;

/// Directory holding the socket and PID files.
///
/// Falls back to the temp dir where no per-user runtime dir exists.
pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir().unwrap_or_else(std::env::temp_dir)
}
