//! Bridge server runner
//!
//! Hosts a `NotificationBridge` behind the method channel endpoint until
//! SIGINT or SIGTERM arrives.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::ports::MethodHandler;

use super::app::{build_bridge, EXIT_ERROR, EXIT_SUCCESS};
use super::args::BridgeOptions;
use super::ipc::create_ipc_server;
#[cfg(unix)]
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::wait_for_shutdown;

/// Run the bridge server
pub async fn run_server(options: BridgeOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Acquire PID file
    #[cfg(unix)]
    let pid_file = {
        let pid_file = PidFile::for_channel(&options.channel);
        if let Err(e) = pid_file.acquire() {
            match e {
                PidFileError::AlreadyRunning(pid) => presenter.error(&format!(
                    "A bridge is already serving '{}' (PID: {})",
                    options.channel, pid
                )),
                _ => presenter.error(&e.to_string()),
            }
            return ExitCode::from(EXIT_ERROR);
        }
        pid_file
    };

    let bridge = Arc::new(build_bridge(&options));
    let registration = bridge.initialize().await;
    info!(
        channel = %bridge.channel().id,
        ?registration,
        notifier = %options.notifier,
        sound = options.sound,
        "Notification bridge initialized"
    );

    let mut server = create_ipc_server(&options.channel);
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind {}: {}", server.path(), e));
        return ExitCode::from(EXIT_ERROR);
    }
    let endpoint = server.path();
    let server = Arc::new(server);

    let handler: Arc<dyn MethodHandler> = bridge.clone();
    let serving = {
        let server = Arc::clone(&server);
        tokio::spawn(async move {
            if let Err(e) = server.run(handler).await {
                error!(error = %e, "Method channel server stopped");
            }
        })
    };

    presenter.server_status(&format!("Serving '{}'", options.channel));
    presenter.info(&format!(
        "PID: {} | Endpoint: {} | SIGINT: exit",
        std::process::id(),
        endpoint
    ));

    let result = match wait_for_shutdown().await {
        Ok(reason) => {
            info!(?reason, "Shutting down");
            true
        }
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            false
        }
    };

    serving.abort();
    bridge.flush().await;
    server.cleanup();

    #[cfg(unix)]
    {
        if let Err(e) = pid_file.release() {
            warn!(error = %e, "Failed to remove PID file");
        }
    }

    presenter.server_status("Stopped");

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
