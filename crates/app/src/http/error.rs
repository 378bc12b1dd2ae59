use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newsdesk_core::error::{ErrorKind, Failure};
use newsdesk_infra::newsapi::NewsApiError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] NewsApiError),
    #[error("invalid query: {0}")]
    Query(#[from] QueryRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
    pub code: ErrorKind,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, failure) = match &self {
            ApiError::Upstream(err) => {
                let failure = err.failure();
                warn!(
                    kind = %failure.code,
                    upstream_status = ?err.upstream_status(),
                    error = %err,
                    "upstream request failed"
                );
                (response_status(failure.code, err.upstream_status()), failure)
            }
            ApiError::Query(rejection) => {
                debug!(error = %rejection, "rejected query string");
                let failure = Failure::new(
                    ErrorKind::UpstreamError,
                    format!("Invalid query parameters: {}", rejection.body_text()),
                );
                (StatusCode::BAD_REQUEST, failure)
            }
        };
        let body = Json(ErrorBody {
            status: "error",
            error: failure.message,
            code: failure.code,
        });
        (status, body).into_response()
    }
}

fn response_status(kind: ErrorKind, upstream_status: Option<u16>) -> StatusCode {
    match kind {
        ErrorKind::InvalidCredential => StatusCode::UNAUTHORIZED,
        ErrorKind::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
        ErrorKind::PlanRequired => StatusCode::UPGRADE_REQUIRED,
        ErrorKind::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::NetworkUnreachable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::UpstreamError | ErrorKind::NoResults => upstream_status
            .and_then(|status| StatusCode::from_u16(status).ok())
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_kinds_map_to_their_status() {
        assert_eq!(
            response_status(ErrorKind::QuotaExceeded, Some(429)),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            response_status(ErrorKind::NetworkUnreachable, None),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn other_upstream_errors_echo_status_or_bad_gateway() {
        assert_eq!(
            response_status(ErrorKind::UpstreamError, Some(400)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            response_status(ErrorKind::UpstreamError, Some(200)),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            response_status(ErrorKind::UpstreamError, None),
            StatusCode::BAD_GATEWAY
        );
    }
}
