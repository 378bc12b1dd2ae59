pub mod command;
pub mod dashboard;
pub mod render;
pub mod session;

use std::io::IsTerminal;
use std::sync::Arc;

use newsdesk_core::domain::filters::SearchState;
use newsdesk_core::domain::news::{NewsSource, SourcesEnvelope};
use newsdesk_core::types::language::DEFAULT_LANGUAGE;
use newsdesk_infra::backend::BackendClient;
use newsdesk_infra::prefs::PreferenceStore;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::browse::command::{HELP, parse_command};
use crate::browse::dashboard::{Dashboard, Outcome};
use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub async fn run(config: ClientConfig, initial: SearchState) -> Result<(), BrowseError> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let client = Arc::new(BackendClient::new(http, &config.backend_url));
    let prefs = PreferenceStore::new(config.prefs_dir.clone());
    let theme = prefs.load_theme().unwrap_or_else(|err| {
        warn!(error = %err, "failed to load theme preference");
        Default::default()
    });
    let sources = load_sources(&client).await;
    let source_count = sources.len();
    let color = std::io::stdout().is_terminal();
    let mut dashboard = Dashboard::new(initial.clone(), theme, sources, prefs, color);
    info!(
        backend = %config.backend_url,
        sources = source_count,
        dark = dashboard.theme().dark,
        color,
        "dashboard starting"
    );

    let (search_tx, search_rx) = watch::channel(initial);
    let (view_tx, mut view_rx) = mpsc::channel(16);
    let session = tokio::spawn(session::run(client, search_rx, view_tx));

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match dashboard.handle(command) {
                    Outcome::Publish => {
                        search_tx.send_replace(dashboard.search().clone());
                    }
                    Outcome::Print(text) => println!("{text}"),
                    Outcome::Quit => break,
                    Outcome::Nothing => {}
                }
            }
            Some(view) = view_rx.recv() => {
                println!("{}", dashboard.show(view));
            }
        }
    }

    drop(search_tx);
    drop(view_rx);
    session.await?;
    info!("dashboard closed");
    Ok(())
}

async fn load_sources(client: &BackendClient) -> Vec<NewsSource> {
    match client.sources(DEFAULT_LANGUAGE).await {
        Ok(SourcesEnvelope::Ok { sources }) => sources,
        Ok(SourcesEnvelope::Error { error, code }) => {
            warn!(%code, %error, "source list unavailable");
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, "source list request failed");
            Vec::new()
        }
    }
}
