//! Named Pipe transport for the method channel on Windows

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::windows::named_pipe::{ClientOptions, ServerOptions};
use tracing::warn;

use super::{exchange, serve_connection, IpcClient, IpcServer};
use crate::application::ports::MethodHandler;
use crate::domain::channel::{ChannelName, MethodCall, MethodResponse};

/// Prefix of every local named pipe
const PIPE_PREFIX: &str = r"\\.\pipe\";

/// Named pipe path resolver
#[derive(Debug, Clone)]
pub struct PipePath {
    path: String,
}

impl PipePath {
    /// Pipe for a channel
    pub fn for_channel(channel: &ChannelName) -> Self {
        Self {
            path: format!("{}{}", PIPE_PREFIX, channel.endpoint_stem()),
        }
    }

    /// Get the pipe path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check if named pipe exists
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
}

impl Default for PipePath {
    fn default() -> Self {
        Self::for_channel(&ChannelName::default())
    }
}

/// Named Pipe server for the method channel
pub struct NamedPipeServer {
    pipe_path: PipePath,
    bound: bool,
}

impl NamedPipeServer {
    /// Create a new pipe server
    pub fn new(pipe_path: PipePath) -> Self {
        Self {
            pipe_path,
            bound: false,
        }
    }
}

#[async_trait]
impl IpcServer for NamedPipeServer {
    fn bind(&mut self) -> io::Result<()> {
        // Named pipes on Windows are created when first listening
        self.bound = true;
        Ok(())
    }

    fn path(&self) -> String {
        self.pipe_path.path().to_string()
    }

    async fn run(&self, handler: Arc<dyn MethodHandler>) -> io::Result<()> {
        if !self.bound {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "Pipe not bound"));
        }

        let mut first = true;
        loop {
            // One pipe instance per connection
            let server = ServerOptions::new()
                .first_pipe_instance(first)
                .create(self.pipe_path.path())?;
            first = false;

            server.connect().await?;

            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                if let Err(e) = serve_connection(server, handler).await {
                    warn!(error = %e, "Pipe connection error");
                }
            });
        }
    }

    fn cleanup(&self) {
        // Named pipes are removed when the last server instance drops
    }
}

/// Named Pipe client for calling a running bridge
pub struct NamedPipeClient {
    pipe_path: PipePath,
}

impl NamedPipeClient {
    /// Create a new pipe client
    pub fn new(pipe_path: PipePath) -> Self {
        Self { pipe_path }
    }
}

#[async_trait]
impl IpcClient for NamedPipeClient {
    fn is_server_running(&self) -> bool {
        self.pipe_path.exists()
    }

    async fn call(&self, call: &MethodCall) -> io::Result<MethodResponse> {
        let client = ClientOptions::new().open(self.pipe_path.path())?;
        exchange(client, call).await
    }
}
