//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the desktop notification service, the audio
//! output and the config file.

pub mod config;
pub mod notification;
pub mod sound;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NoOpNotifier, NotifyRustNotifier, NotifySendNotifier};
pub use sound::{create_sound_player, NoOpSoundPlayer, RodioSoundPlayer};
