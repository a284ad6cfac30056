//! Call command handler - sends one method call to a running bridge via IPC

use std::io;

use thiserror::Error;

use crate::domain::channel::{ChannelName, MethodCall};

use super::args::parse_method_arguments;
use super::ipc::{create_ipc_client, IpcClient};
use super::presenter::Presenter;

/// Why a `call` did not succeed
#[derive(Debug, Error)]
pub enum CallError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("No bridge serving '{0}'. Start one with: pomodoro-bridge serve")]
    NotRunning(ChannelName),

    #[error("Failed to communicate with bridge: {0}")]
    Transport(#[from] io::Error),

    /// The bridge answered with an error or not-implemented response
    #[error("{0} was rejected by the bridge")]
    Rejected(String),
}

impl CallError {
    /// Whether the failure is the caller's usage mistake
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }
}

/// Handle call subcommand
pub async fn handle_call_command(
    channel: &ChannelName,
    method: String,
    args: Option<String>,
    presenter: &Presenter,
) -> Result<(), CallError> {
    let arguments = parse_method_arguments(args.as_deref()).map_err(CallError::InvalidArguments)?;

    let client = create_ipc_client(channel);
    let call = MethodCall { method, arguments };
    call_with_client(client.as_ref(), channel, &call, presenter).await
}

/// Send a decoded call through a client and report the response
pub async fn call_with_client(
    client: &dyn IpcClient,
    channel: &ChannelName,
    call: &MethodCall,
    presenter: &Presenter,
) -> Result<(), CallError> {
    if !client.is_server_running() {
        return Err(CallError::NotRunning(channel.clone()));
    }

    let response = match client.call(call).await {
        Ok(response) => response,
        // A socket left behind by a server that died
        Err(e) if matches!(e.kind(), io::ErrorKind::ConnectionRefused | io::ErrorKind::NotFound) => {
            return Err(CallError::NotRunning(channel.clone()))
        }
        Err(e) => return Err(e.into()),
    };

    if presenter.method_response(&call.method, &response) {
        Ok(())
    } else {
        Err(CallError::Rejected(call.method.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bad_json_is_a_usage_error() {
        let err = handle_call_command(
            &ChannelName::default(),
            "showNotification".to_string(),
            Some("{oops".to_string()),
            &Presenter::new(),
        )
        .await
        .unwrap_err();

        assert!(err.is_usage());
    }

    #[tokio::test]
    async fn missing_server_is_reported() {
        let channel: ChannelName = "test.pomodoro/no-such-channel".parse().unwrap();
        let err = handle_call_command(&channel, "playSound".to_string(), None, &Presenter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, CallError::NotRunning(_)));
        assert!(!err.is_usage());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stale_socket_is_reported_as_not_running() {
        use crate::cli::ipc::{SocketPath, UnixSocketClient};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stale.sock");
        // Bind and drop: the file stays but nobody accepts
        drop(std::os::unix::net::UnixListener::bind(&path).unwrap());
        assert!(path.exists());

        let client = UnixSocketClient::new(SocketPath::with_path(&path));
        let err = call_with_client(
            &client,
            &ChannelName::default(),
            &MethodCall::new("playSound"),
            &Presenter::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CallError::NotRunning(_)), "got {:?}", err);
    }
}
