use newsdesk_core::domain::news::{Article, NewsSource};
use newsdesk_core::error::Failure;
use newsdesk_core::query::{HeadlinesParams, QueryParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const USER_AGENT: &str = "newsdesk";
const STATUS_ERROR: &str = "error";

#[derive(Debug, Error)]
pub enum NewsApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid upstream body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("upstream status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Upstream {
        status: u16,
        message: Option<String>,
    },
}

impl NewsApiError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            NewsApiError::Upstream { status, .. } => Some(*status),
            NewsApiError::Http(_) | NewsApiError::Decode(_) => None,
        }
    }

    pub fn failure(&self) -> Failure {
        match self {
            NewsApiError::Upstream { status, message } => {
                Failure::from_upstream(*status, message.as_deref())
            }
            NewsApiError::Http(_) | NewsApiError::Decode(_) => Failure::unreachable(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlesPage {
    pub total_results: u64,
    pub articles: Vec<Article>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UpstreamBody {
    status: String,
    code: Option<String>,
    message: Option<String>,
    total_results: u64,
    articles: Vec<Article>,
    sources: Vec<NewsSource>,
}

#[derive(Debug, Serialize)]
struct SourcesQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NewsApiClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub async fn everything(&self, params: &QueryParams) -> Result<ArticlesPage, NewsApiError> {
        let body = self.get("everything", params).await?;
        Ok(ArticlesPage {
            total_results: body.total_results,
            articles: body.articles,
        })
    }

    pub async fn top_headlines(
        &self,
        params: &HeadlinesParams,
    ) -> Result<ArticlesPage, NewsApiError> {
        let body = self.get("top-headlines", params).await?;
        Ok(ArticlesPage {
            total_results: body.total_results,
            articles: body.articles,
        })
    }

    pub async fn sources(&self, language: Option<&str>) -> Result<Vec<NewsSource>, NewsApiError> {
        let body = self
            .get("top-headlines/sources", &SourcesQuery { language })
            .await?;
        Ok(body.sources)
    }

    async fn get<Q>(&self, path: &str, query: &Q) -> Result<UpstreamBody, NewsApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<UpstreamBody>(&text)
                .ok()
                .and_then(|body| body.message);
            return Err(NewsApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: UpstreamBody = serde_json::from_str(&text)?;
        if body.status == STATUS_ERROR {
            let message = body.message.or(body.code);
            return Err(NewsApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }
}
