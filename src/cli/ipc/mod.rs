//! IPC (Inter-Process Communication) module for the method channel
//!
//! Provides platform-specific transports:
//! - Unix (Linux/macOS): Unix Domain Sockets
//! - Windows: Named Pipes
//!
//! Both speak the same framing: one JSON `MethodCall` per line in, one JSON
//! `MethodResponse` per line out. A connection may carry several calls.

#[cfg(windows)]
mod named_pipe;
#[cfg(unix)]
mod unix_socket;

#[cfg(windows)]
pub use named_pipe::{NamedPipeClient, NamedPipeServer, PipePath};
#[cfg(unix)]
pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::application::ports::MethodHandler;
use crate::domain::channel::{ChannelName, MethodCall, MethodResponse, INVALID_MESSAGE};

/// Trait for IPC servers that expose the method channel
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept and handle connections
    ///
    /// This runs in a loop, answering every call on every connection with
    /// the given handler.
    async fn run(&self, handler: Arc<dyn MethodHandler>) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that call methods on a running bridge
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if a bridge appears to be serving the endpoint
    fn is_server_running(&self) -> bool;

    /// Send a call and receive its response
    async fn call(&self, call: &MethodCall) -> io::Result<MethodResponse>;
}

/// Decode one request line and answer it
pub async fn respond(handler: &dyn MethodHandler, line: &str) -> MethodResponse {
    match serde_json::from_str::<MethodCall>(line) {
        Ok(call) => handler.handle(&call).await,
        Err(e) => MethodResponse::error(INVALID_MESSAGE, format!("Malformed method call: {}", e)),
    }
}

/// Serve calls on one connection until the peer closes it
pub(crate) async fn serve_connection<T>(stream: T, handler: Arc<dyn MethodHandler>) -> io::Result<()>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = respond(handler.as_ref(), line).await;
        debug!(?response, "Answering method call");
        write_message(&mut writer, &response).await?;
    }

    writer.shutdown().await
}

/// Send one call over a fresh connection and read the response
pub(crate) async fn exchange<T>(stream: T, call: &MethodCall) -> io::Result<MethodResponse>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    write_message(&mut writer, call).await?;

    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Bridge closed the connection without responding",
        ));
    }

    serde_json::from_str(line.trim()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

async fn write_message<W, M>(writer: &mut W, message: &M) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
    M: serde::Serialize,
{
    let mut encoded =
        serde_json::to_string(message).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    encoded.push('\n');
    writer.write_all(encoded.as_bytes()).await?;
    writer.flush().await
}

/// Create the appropriate IPC server for the current platform
#[cfg(unix)]
pub fn create_ipc_server(channel: &ChannelName) -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::for_channel(channel)))
}

#[cfg(windows)]
pub fn create_ipc_server(channel: &ChannelName) -> Box<dyn IpcServer> {
    Box::new(NamedPipeServer::new(PipePath::for_channel(channel)))
}

/// Create the appropriate IPC client for the current platform
#[cfg(unix)]
pub fn create_ipc_client(channel: &ChannelName) -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::for_channel(channel)))
}

#[cfg(windows)]
pub fn create_ipc_client(channel: &ChannelName) -> Box<dyn IpcClient> {
    Box::new(NamedPipeClient::new(PipePath::for_channel(channel)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoHandler;

    #[async_trait]
    impl MethodHandler for EchoHandler {
        async fn handle(&self, call: &MethodCall) -> MethodResponse {
            if call.method == "known" {
                MethodResponse::success()
            } else {
                MethodResponse::NotImplemented
            }
        }
    }

    #[tokio::test]
    async fn respond_routes_valid_calls() {
        let response = respond(&EchoHandler, r#"{"method":"known"}"#).await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn respond_rejects_garbage() {
        let response = respond(&EchoHandler, "not json").await;
        match response {
            MethodResponse::Error { code, .. } => assert_eq!(code, INVALID_MESSAGE),
            other => panic!("Expected error response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn respond_rejects_call_without_method() {
        let response = respond(&EchoHandler, r#"{"arguments":{}}"#).await;
        assert!(matches!(response, MethodResponse::Error { .. }));
    }

    #[tokio::test]
    async fn connection_answers_each_line_in_order() {
        let (client, server) = tokio::io::duplex(1024);
        let handler: Arc<dyn MethodHandler> = Arc::new(EchoHandler);
        let server_task = tokio::spawn(serve_connection(server, handler));

        let (reader, mut writer) = tokio::io::split(client);
        writer
            .write_all(b"{\"method\":\"known\"}\n\n{\"method\":\"other\"}\n")
            .await
            .unwrap();
        writer.shutdown().await.unwrap();

        let mut lines = BufReader::new(reader).lines();
        let first: MethodResponse =
            serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        let second: MethodResponse =
            serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();

        assert!(first.is_success());
        assert_eq!(second, MethodResponse::NotImplemented);
        server_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn exchange_round_trips_one_call() {
        let (client, server) = tokio::io::duplex(1024);
        let handler: Arc<dyn MethodHandler> = Arc::new(EchoHandler);
        tokio::spawn(serve_connection(server, handler));

        let response = exchange(client, &MethodCall::new("known")).await.unwrap();
        assert!(response.is_success());
    }
}
