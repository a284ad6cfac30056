//! Configuration domain module

mod app_config;
mod notifier_kind;

pub use app_config::{AppConfig, DEFAULT_APP_NAME};
pub use notifier_kind::NotifierKind;
