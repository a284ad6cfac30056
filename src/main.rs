//! pomodoro-bridge CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pomodoro_bridge::cli::{
    app::{cli_config, load_merged_config, run_invoke, validate_channel, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{BridgeOptions, Cli, Commands},
    call_cmd::handle_call_command,
    config_cmd::handle_config_command,
    presenter::Presenter,
    serve::run_server,
};
use pomodoro_bridge::infrastructure::XdgConfigStore;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    if let Err(e) = validate_channel(cli.channel.as_deref()) {
        presenter.error(&e);
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Call { method, args } => {
            let config = load_merged_config(cli_config(cli.channel, None)).await;
            let channel = config.channel_or_default();

            match handle_call_command(&channel, method, args, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) if e.is_usage() => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Invoke {
            method,
            args,
            bridge,
        } => {
            let config = load_merged_config(cli_config(cli.channel, Some(&bridge))).await;
            run_invoke(method, args, BridgeOptions::from_config(&config)).await
        }
        Commands::Serve { bridge } => {
            let config = load_merged_config(cli_config(cli.channel, Some(&bridge))).await;
            run_server(BridgeOptions::from_config(&config)).await
        }
    }
}
