//! Unix Domain Socket transport for the method channel
//!
//! Used on Linux and macOS.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::{UnixListener, UnixStream};
use tracing::{debug, warn};

use super::{exchange, serve_connection, IpcClient, IpcServer};
use crate::application::ports::MethodHandler;
use crate::cli::runtime_dir;
use crate::domain::channel::{ChannelName, MethodCall, MethodResponse};

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Socket for a channel, placed in the user runtime dir (or temp dir)
    pub fn for_channel(channel: &ChannelName) -> Self {
        Self {
            path: runtime_dir().join(format!("{}.sock", channel.endpoint_stem())),
        }
    }

    /// Socket at an explicit location
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::for_channel(&ChannelName::default())
    }
}

/// Unix Domain Socket server for the method channel
pub struct UnixSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl UnixSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }
}

impl Drop for UnixSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[async_trait]
impl IpcServer for UnixSocketServer {
    fn bind(&mut self) -> io::Result<()> {
        // Remove stale socket file if it exists
        self.socket_path.cleanup()?;

        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    fn path(&self) -> String {
        self.socket_path.path().to_string_lossy().to_string()
    }

    async fn run(&self, handler: Arc<dyn MethodHandler>) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    debug!("Accepted method channel connection");
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        if let Err(e) = serve_connection(stream, handler).await {
                            warn!(error = %e, "Socket connection error");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Socket accept error");
                }
            }
        }
    }

    fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

/// Unix Domain Socket client for calling a running bridge
pub struct UnixSocketClient {
    socket_path: SocketPath,
}

impl UnixSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }
}

#[async_trait]
impl IpcClient for UnixSocketClient {
    fn is_server_running(&self) -> bool {
        self.socket_path.exists()
    }

    async fn call(&self, call: &MethodCall) -> io::Result<MethodResponse> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        exchange(stream, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_path_uses_channel_stem() {
        let socket_path = SocketPath::for_channel(&ChannelName::default());
        assert_eq!(
            socket_path.path(),
            runtime_dir()
                .join("com.example.pomodoro_app-timer.sock")
                .as_path()
        );
    }

    #[test]
    fn custom_socket_path() {
        let socket_path = SocketPath::with_path("/tmp/custom.sock");
        assert_eq!(socket_path.path(), Path::new("/tmp/custom.sock"));
    }

    #[test]
    fn cleanup_of_missing_socket_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = SocketPath::with_path(dir.path().join("missing.sock"));
        assert!(socket_path.cleanup().is_ok());
    }

    #[tokio::test]
    async fn run_without_bind_fails() {
        let dir = tempfile::tempdir().unwrap();
        let server = UnixSocketServer::new(SocketPath::with_path(dir.path().join("a.sock")));

        struct Never;
        #[async_trait]
        impl MethodHandler for Never {
            async fn handle(&self, _call: &MethodCall) -> MethodResponse {
                MethodResponse::NotImplemented
            }
        }

        let err = server.run(Arc::new(Never)).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }
}
