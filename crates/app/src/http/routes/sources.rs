use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use newsdesk_core::domain::news::SourcesEnvelope;
use serde::Deserialize;
use tracing::debug;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SourcesParams {
    pub language: Option<String>,
}

pub async fn sources(
    State(state): State<AppState>,
    query: Result<Query<SourcesParams>, QueryRejection>,
) -> Result<Json<SourcesEnvelope>, ApiError> {
    let Query(params) = query?;
    let language = params
        .language
        .as_deref()
        .map(str::trim)
        .filter(|language| !language.is_empty());
    debug!(?language, "fetching source list");
    let sources = state.news.sources(language).await?;
    Ok(Json(SourcesEnvelope::Ok { sources }))
}
