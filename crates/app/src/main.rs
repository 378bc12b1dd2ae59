mod browse;
mod cli;
mod config;
mod http;
mod state;
mod wiring;

#[cfg(test)]
mod test_support;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::browse::BrowseError;
use crate::cli::{Cli, Mode};
use crate::config::ConfigError;
use crate::http::HttpError;
use crate::wiring::WiringError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),
    #[error("http error: {0}")]
    Http(#[from] HttpError),
    #[error("browse error: {0}")]
    Browse(#[from] BrowseError),
    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    config::load_dotenv()?;

    match cli.mode {
        Mode::Api => run_api().await,
        Mode::Browse => {
            let config = config::ClientConfig::from_env()?;
            browse::run(config, cli.initial_search()).await?;
            Ok(())
        }
    }
}

async fn run_api() -> Result<(), AppError> {
    let config = config::AppConfig::from_env().inspect_err(|err| {
        error!(error = %err, "refusing to start without a valid configuration");
    })?;
    let state = wiring::build_state(config)?;

    let addr = state.config.http_addr;
    let api = tokio::spawn(async move {
        info!(%addr, "http server starting");
        http::serve(addr, state).await
    });

    tokio::select! {
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
        res = api => {
            res??;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install ctrl-c handler");
    }
}
