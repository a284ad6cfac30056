//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod handler;
pub mod notifier;
pub mod sound;

// Re-export common types
pub use config::ConfigStore;
pub use handler::MethodHandler;
pub use notifier::{NotificationError, Notifier, PermissionState};
pub use sound::{SoundError, SoundPlayer};
