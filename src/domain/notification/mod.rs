//! Notification domain module

mod content;
mod descriptor;
mod registry;
mod request;

pub use content::{NotificationContent, DEFAULT_BODY, DEFAULT_TITLE};
pub use descriptor::{ChannelDescriptor, Importance};
pub use registry::{ChannelRegistry, Registration};
pub use request::{NotificationId, NotificationRequest};
