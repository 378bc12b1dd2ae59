use newsdesk_core::domain::news::{NewsEnvelope, SourcesEnvelope};
use newsdesk_core::orchestrator::NewsTransport;
use newsdesk_core::query::QueryParams;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid backend body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SourcesQuery<'a> {
    language: &'a str,
}

/// Dashboard-side client for the proxy's HTTP surface. Replies are read from
/// the JSON body alone; HTTP status codes are not inspected.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn news(&self, params: &QueryParams) -> Result<NewsEnvelope, BackendError> {
        self.get_json("news", params).await
    }

    pub async fn sources(&self, language: &str) -> Result<SourcesEnvelope, BackendError> {
        self.get_json("sources", &SourcesQuery { language }).await
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path);
        let body = self.http.get(url).query(query).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl NewsTransport for BackendClient {
    type Error = BackendError;

    async fn search(&self, params: &QueryParams) -> Result<NewsEnvelope, BackendError> {
        self.news(params).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use chrono::Utc;
    use newsdesk_core::domain::filters::{FilterState, SearchState};
    use newsdesk_core::error::{CONNECTION_FAILED_MESSAGE, ErrorKind};
    use newsdesk_core::orchestrator::Orchestrator;
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    async fn spawn_backend(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn client(base_url: &str) -> BackendClient {
        client_with_timeout(base_url, Duration::from_secs(2))
    }

    fn client_with_timeout(base_url: &str, timeout: Duration) -> BackendClient {
        let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
        BackendClient::new(http, base_url)
    }

    #[tokio::test]
    async fn error_body_is_read_regardless_of_status() {
        let router = Router::new().route(
            "/news",
            get(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    axum::Json(json!({
                        "status": "error",
                        "error": "daily rate limit exceeded",
                        "code": "QUOTA_EXCEEDED"
                    })),
                )
            }),
        );
        let base = spawn_backend(router).await;
        let envelope = client(&base).search(&QueryParams::default()).await.unwrap();
        match envelope {
            NewsEnvelope::Error { code, .. } => assert_eq!(code, ErrorKind::QuotaExceeded),
            other => panic!("unexpected envelope {other:?}"),
        }
    }

    #[tokio::test]
    async fn sources_decode() {
        let router = Router::new().route(
            "/sources",
            get(|| async {
                axum::Json(json!({
                    "status": "ok",
                    "sources": [{ "id": "the-verge", "name": "The Verge" }]
                }))
            }),
        );
        let base = spawn_backend(router).await;
        let envelope = client(&base).sources("en").await.unwrap();
        match envelope {
            SourcesEnvelope::Ok { sources } => assert_eq!(sources[0].name, "The Verge"),
            other => panic!("unexpected envelope {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_envelope_body_is_decode_error() {
        let router = Router::new().route("/news", get(|| async { "not json" }));
        let base = spawn_backend(router).await;
        let err = client(&base).news(&QueryParams::default()).await.unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[tokio::test]
    async fn timed_out_search_fails_the_orchestrator_as_unreachable() {
        let router = Router::new().route(
            "/news",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                axum::Json(json!({ "status": "ok", "totalResults": 0, "articles": [] }))
            }),
        );
        let base = spawn_backend(router).await;
        let client = client_with_timeout(&base, Duration::from_millis(100));

        let mut orchestrator = Orchestrator::new();
        let search = SearchState::new("rust", FilterState::default());
        let ticket = orchestrator.commit(&search, Utc::now()).unwrap();
        let outcome = client.search(&ticket.params).await;
        assert!(matches!(&outcome, Err(BackendError::Http(err)) if err.is_timeout()));

        assert!(orchestrator.resolve(ticket.token, outcome));
        let failure = orchestrator.state().failure().unwrap();
        assert_eq!(failure.code, ErrorKind::NetworkUnreachable);
        assert_eq!(failure.message, CONNECTION_FAILED_MESSAGE);
    }
}
