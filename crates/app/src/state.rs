use std::sync::Arc;

use crate::config::AppConfig;
use newsdesk_infra::newsapi::NewsApiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub news: NewsApiClient,
}
