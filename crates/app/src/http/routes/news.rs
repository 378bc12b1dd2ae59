use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use newsdesk_core::domain::news::NewsEnvelope;
use newsdesk_core::query::QueryParams;
use tracing::debug;

use crate::http::error::ApiError;
use crate::state::AppState;

pub async fn news(
    State(state): State<AppState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<NewsEnvelope>, ApiError> {
    let Query(params) = query?;
    let params = params.normalized();
    debug!(?params, "forwarding article search");
    let page = state.news.everything(&params).await?;
    debug!(total = page.total_results, returned = page.articles.len(), "article search complete");
    Ok(Json(NewsEnvelope::Ok {
        total_results: page.total_results,
        articles: page.articles,
    }))
}
