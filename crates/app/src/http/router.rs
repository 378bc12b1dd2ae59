use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::http::routes::{fallback, headlines, health, news, sources};
use crate::state::AppState;

pub fn build(state: AppState) -> Router {
    let cors = OriginPolicy::from_config(&state.config.cors_allow_origins).layer();
    let router = Router::new()
        .route("/health", get(health::health))
        .route("/news", get(news::news))
        .route("/top-headlines", get(headlines::top_headlines))
        .route("/sources", get(sources::sources))
        .fallback(fallback::not_found)
        .with_state(state);
    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

#[derive(Debug, PartialEq, Eq)]
enum OriginPolicy {
    Any,
    List(Vec<HeaderValue>),
    Disabled,
}

impl OriginPolicy {
    fn from_config(origins: &[String]) -> Self {
        if origins.iter().any(|origin| origin.trim() == "*") {
            return OriginPolicy::Any;
        }
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "invalid CORS origin ignored");
                    None
                }
            })
            .collect();
        if parsed.is_empty() {
            OriginPolicy::Disabled
        } else {
            OriginPolicy::List(parsed)
        }
    }

    fn layer(self) -> Option<CorsLayer> {
        // The proxy is read-only.
        let base = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any);
        match self {
            OriginPolicy::Any => Some(base.allow_origin(Any)),
            OriginPolicy::List(origins) => Some(base.allow_origin(AllowOrigin::list(origins))),
            OriginPolicy::Disabled => None,
        }
    }
}
