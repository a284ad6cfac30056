//! pomodoro-bridge - native sound and notification bridge for a Pomodoro timer
//!
//! The timer UI calls two methods over a named method channel:
//! `playSound` plays the platform's default notification sound and
//! `showNotification` posts a local notification with a title and body.
//! Environmental failures are logged and never reported back to the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Method call messages, commands, notification values, and errors
//! - **Application**: The notification bridge use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, rodio, config file)
//! - **CLI**: Command-line interface, IPC transport, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
