//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

use crate::domain::channel::ChannelName;
use crate::domain::config::NotifierKind;

/// pomodoro-bridge - native sound and notification bridge
#[derive(Parser, Debug)]
#[command(name = "pomodoro-bridge")]
#[command(version)]
#[command(about = "Native sound and notification bridge for the Pomodoro timer")]
#[command(long_about = None)]
pub struct Cli {
    /// Method channel name
    #[arg(short = 'C', long, global = true, value_name = "NAME")]
    pub channel: Option<String>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the method channel until interrupted
    Serve {
        #[command(flatten)]
        bridge: BridgeArgs,
    },
    /// Call a method on a running bridge
    Call {
        /// Method name (playSound, showNotification)
        method: String,

        /// Method arguments as a JSON object
        #[arg(short = 'a', long, value_name = "JSON")]
        args: Option<String>,
    },
    /// Run a single method call in-process, without a server
    Invoke {
        /// Method name (playSound, showNotification)
        method: String,

        /// Method arguments as a JSON object
        #[arg(short = 'a', long, value_name = "JSON")]
        args: Option<String>,

        #[command(flatten)]
        bridge: BridgeArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags selecting the bridge adapters
#[derive(Args, Debug, Clone, Default)]
pub struct BridgeArgs {
    /// Notification backend
    #[arg(long, value_name = "KIND")]
    pub notifier: Option<NotifierArg>,

    /// Do not play sounds
    #[arg(long)]
    pub no_sound: bool,

    /// Do not show notifications
    #[arg(long)]
    pub no_notifications: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Notifier argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotifierArg {
    NotifyRust,
    NotifySend,
    None,
}

impl From<NotifierArg> for NotifierKind {
    fn from(arg: NotifierArg) -> Self {
        match arg {
            NotifierArg::NotifyRust => NotifierKind::NotifyRust,
            NotifierArg::NotifySend => NotifierKind::NotifySend,
            NotifierArg::None => NotifierKind::None,
        }
    }
}

/// Resolved options for hosting a bridge
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub channel: ChannelName,
    pub app_name: String,
    pub sound: bool,
    pub notifier: NotifierKind,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["channel", "app_name", "sound", "notifications", "notifier"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Parse the `--args` payload.
///
/// Any JSON value is accepted here; the bridge decides whether its shape
/// fits the method.
pub fn parse_method_arguments(raw: Option<&str>) -> Result<Option<Value>, String> {
    match raw {
        None => Ok(None),
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| format!("Invalid --args JSON: {}", e)),
    }
}
