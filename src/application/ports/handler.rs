//! Inbound port: something that answers method calls

use async_trait::async_trait;

use crate::domain::channel::{MethodCall, MethodResponse};

/// Handler the IPC transport hands decoded calls to
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn handle(&self, call: &MethodCall) -> MethodResponse;
}
