//! Domain layer - Core bridge contract
//!
//! Contains the method channel messages, decoded commands, notification
//! value objects, configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use channel::{ChannelName, MethodCall, MethodResponse};
pub use command::BridgeCommand;
pub use config::{AppConfig, NotifierKind};
pub use error::*;
pub use notification::{
    ChannelDescriptor, ChannelRegistry, Importance, NotificationContent, NotificationId,
    NotificationRequest, Registration,
};
