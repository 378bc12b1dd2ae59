use std::sync::Arc;

use reqwest::Client;
use thiserror::Error;

use crate::config::AppConfig;
use crate::state::AppState;
use newsdesk_infra::newsapi::NewsApiClient;

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub fn build_state(config: AppConfig) -> Result<AppState, WiringError> {
    let client = Client::builder().timeout(config.request_timeout).build()?;
    let news = NewsApiClient::new(client, &config.upstream_url, config.news_api_key.clone());
    Ok(AppState {
        config: Arc::new(config),
        news,
    })
}
