use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use newsdesk_core::domain::news::NewsEnvelope;
use newsdesk_core::query::HeadlinesParams;
use tracing::debug;

use crate::http::error::ApiError;
use crate::state::AppState;

pub async fn top_headlines(
    State(state): State<AppState>,
    query: Result<Query<HeadlinesParams>, QueryRejection>,
) -> Result<Json<NewsEnvelope>, ApiError> {
    let Query(params) = query?;
    let params = params.normalized();
    debug!(?params, "forwarding top headlines");
    let page = state.news.top_headlines(&params).await?;
    Ok(Json(NewsEnvelope::Ok {
        total_results: page.total_results,
        articles: page.articles,
    }))
}
