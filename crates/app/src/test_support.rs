use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::router;
use crate::wiring;

pub const TEST_API_KEY: &str = "test-key";

pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn test_config(upstream_url: &str) -> AppConfig {
    AppConfig {
        http_addr: "127.0.0.1:0".parse().unwrap(),
        news_api_key: TEST_API_KEY.to_string(),
        upstream_url: upstream_url.to_string(),
        request_timeout: Duration::from_secs(2),
        cors_allow_origins: vec!["*".to_string()],
    }
}

pub async fn test_router(upstream_url: &str) -> Router {
    test_router_with(test_config(upstream_url))
}

pub fn test_router_with(config: AppConfig) -> Router {
    let state = wiring::build_state(config).unwrap();
    router::build(state)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
