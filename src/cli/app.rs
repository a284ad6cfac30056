//! Shared runner plumbing and the one-shot `invoke` mode

use std::env;
use std::process::ExitCode;

use tracing::debug;

use crate::application::ports::{ConfigStore, Notifier, SoundPlayer};
use crate::application::NotificationBridge;
use crate::domain::channel::{ChannelName, MethodCall};
use crate::domain::config::{AppConfig, NotifierKind};
use crate::domain::notification::ChannelDescriptor;
use crate::infrastructure::{create_notifier, create_sound_player, XdgConfigStore};

use super::args::{parse_method_arguments, BridgeArgs, BridgeOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the channel name
pub const CHANNEL_ENV: &str = "POMODORO_BRIDGE_CHANNEL";

/// Bridge wired to the adapters chosen at runtime
pub type DynBridge = NotificationBridge<Box<dyn SoundPlayer>, Box<dyn Notifier>>;

impl BridgeOptions {
    /// Resolve the effective options from a merged config
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            channel: config.channel_or_default(),
            app_name: config.app_name_or_default().to_string(),
            sound: config.sound_or_default(),
            notifier: config.notifier_or_default(),
        }
    }
}

/// Build the CLI layer of the config from flags
pub fn cli_config(channel: Option<String>, bridge: Option<&BridgeArgs>) -> AppConfig {
    let mut config = AppConfig {
        channel,
        ..AppConfig::empty()
    };

    if let Some(bridge) = bridge {
        config.notifier = bridge.notifier.map(|n| NotifierKind::from(n).to_string());
        if bridge.no_sound {
            config.sound = Some(false);
        }
        if bridge.no_notifications {
            config.notifications = Some(false);
        }
    }

    config
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            debug!(error = %e, "Ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    // Build env config
    let env_config = AppConfig {
        channel: env::var(CHANNEL_ENV).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Reject a blank channel given explicitly on the command line
pub fn validate_channel(channel: Option<&str>) -> Result<(), String> {
    match channel {
        Some(raw) => raw
            .parse::<ChannelName>()
            .map(|_| ())
            .map_err(|e| e.to_string()),
        None => Ok(()),
    }
}

/// Wire a bridge to the adapters selected by the options
pub fn build_bridge(options: &BridgeOptions) -> DynBridge {
    let sound = create_sound_player(options.sound);
    let notifier = create_notifier(options.notifier, &options.app_name);

    NotificationBridge::new(sound, notifier)
        .with_channel(ChannelDescriptor::timer_named(options.app_name.clone()))
}

/// Run a single method call in-process and report its outcome
pub async fn run_invoke(method: String, args: Option<String>, options: BridgeOptions) -> ExitCode {
    let presenter = Presenter::new();

    let arguments = match parse_method_arguments(args.as_deref()) {
        Ok(arguments) => arguments,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let bridge = build_bridge(&options);
    let registration = bridge.initialize().await;
    debug!(?registration, notifier = %options.notifier, "Bridge initialized");

    let call = MethodCall {
        method,
        arguments,
    };
    let response = bridge.handle(&call).await;

    // Let the sound cue finish before the process exits
    bridge.flush().await;

    if presenter.method_response(&call.method, &response) {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::NotifierArg;

    #[test]
    fn cli_config_without_flags_is_empty() {
        assert_eq!(cli_config(None, None), AppConfig::empty());
    }

    #[test]
    fn cli_config_maps_flags() {
        let bridge = BridgeArgs {
            notifier: Some(NotifierArg::NotifySend),
            no_sound: true,
            no_notifications: false,
        };
        let config = cli_config(Some("app/alt".to_string()), Some(&bridge));

        assert_eq!(config.channel, Some("app/alt".to_string()));
        assert_eq!(config.notifier, Some("notify-send".to_string()));
        assert_eq!(config.sound, Some(false));
        assert_eq!(config.notifications, None);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let file = AppConfig {
            sound: Some(true),
            notifier: Some("notify-rust".to_string()),
            ..AppConfig::empty()
        };
        let bridge = BridgeArgs {
            notifier: Some(NotifierArg::None),
            no_sound: true,
            no_notifications: false,
        };

        let merged = AppConfig::defaults()
            .merge(file)
            .merge(cli_config(None, Some(&bridge)));
        let options = BridgeOptions::from_config(&merged);

        assert!(!options.sound);
        assert_eq!(options.notifier, NotifierKind::None);
    }

    #[test]
    fn options_from_defaults() {
        let options = BridgeOptions::from_config(&AppConfig::defaults());
        assert_eq!(options.channel, ChannelName::default());
        assert_eq!(options.app_name, "Pomodoro Timer");
        assert!(options.sound);
        assert_eq!(options.notifier, NotifierKind::NotifyRust);
    }

    #[test]
    fn blank_channel_is_rejected() {
        assert!(validate_channel(Some("  ")).is_err());
        assert!(validate_channel(Some("app/timer")).is_ok());
        assert!(validate_channel(None).is_ok());
    }

    #[test]
    fn built_bridge_uses_app_name_for_channel() {
        let options = BridgeOptions {
            channel: ChannelName::default(),
            app_name: "Focus".to_string(),
            sound: false,
            notifier: NotifierKind::None,
        };
        let bridge = build_bridge(&options);
        assert_eq!(bridge.channel().name, "Focus");
        assert_eq!(bridge.channel().id, ChannelDescriptor::TIMER_ID);
    }
}
