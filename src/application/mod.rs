//! Application layer - Use cases and port interfaces
//!
//! Contains the notification bridge and the trait definitions
//! for the OS facilities it drives.

pub mod bridge;
pub mod ports;

// Re-export use cases
pub use bridge::NotificationBridge;
