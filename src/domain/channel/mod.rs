//! Method channel domain module
//!
//! The channel is the single logical endpoint the application layer uses to
//! reach the bridge. Messages are JSON: a `MethodCall` in, a
//! `MethodResponse` out.

mod message;
mod name;

pub use message::{MethodCall, MethodResponse, INVALID_MESSAGE};
pub use name::ChannelName;
