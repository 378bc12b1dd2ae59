use axum::Json;
use axum::http::{StatusCode, Uri};
use serde::Serialize;
use tracing::debug;

pub const AVAILABLE_ENDPOINTS: [&str; 4] = ["/health", "/news", "/top-headlines", "/sources"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundBody {
    pub status: &'static str,
    pub error: &'static str,
    pub available_endpoints: [&'static str; 4],
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundBody>) {
    debug!(%uri, "unmatched route");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            status: "error",
            error: "Endpoint not found",
            available_endpoints: AVAILABLE_ENDPOINTS,
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::test_support::{body_json, test_router};

    #[tokio::test]
    async fn unknown_route_lists_endpoints() {
        let router = test_router("http://127.0.0.1:9").await;
        let response = router
            .oneshot(Request::builder().uri("/everything").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(body["availableEndpoints"].as_array().unwrap().len(), 4);
    }
}
