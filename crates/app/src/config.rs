use std::fmt;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const API_KEY_VAR: &str = "NEWS_API_KEY";

#[derive(Clone)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub news_api_key: String,
    pub upstream_url: String,
    pub request_timeout: Duration,
    pub cors_allow_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub prefs_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),
    #[error("invalid socket address: {0}")]
    InvalidSocket(String),
    #[error("invalid integer for {0}: {1}")]
    InvalidNumber(&'static str, String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("dotenv error: {0}")]
    Dotenv(#[from] dotenv::Error),
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("http_addr", &self.http_addr)
            .field("news_api_key", &"<redacted>")
            .field("upstream_url", &self.upstream_url)
            .field("request_timeout", &self.request_timeout)
            .field("cors_allow_origins", &self.cors_allow_origins)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);
        let news_api_key = vars
            .optional(API_KEY_VAR)
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let http_addr_raw = vars.string("NEWSDESK_HTTP_ADDR", "127.0.0.1:5000");
        let http_addr = http_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidSocket(http_addr_raw.clone()))?;
        let upstream_url = vars.url("NEWSDESK_UPSTREAM_URL", "https://newsapi.org/v2")?;
        let request_timeout_secs = vars.u64("NEWSDESK_REQUEST_TIMEOUT_SECS", 10)?;
        let cors_allow_origins = vars
            .string("NEWSDESK_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            http_addr,
            news_api_key,
            upstream_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            cors_allow_origins,
        })
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);
        let backend_url = vars.url("NEWSDESK_BACKEND_URL", "http://127.0.0.1:5000")?;
        let request_timeout_secs = vars.u64("NEWSDESK_REQUEST_TIMEOUT_SECS", 10)?;
        let prefs_dir = PathBuf::from(vars.string("NEWSDESK_PREFS_DIR", "./data/prefs"));
        Ok(Self {
            backend_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            prefs_dir,
        })
    }
}

pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &'static str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn string(&self, key: &'static str, default: &'static str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    fn u64(&self, key: &'static str, default: u64) -> Result<u64, ConfigError> {
        let raw = self.string(key, "");
        if raw.is_empty() {
            return Ok(default);
        }
        raw.parse().map_err(|_| ConfigError::InvalidNumber(key, raw))
    }

    fn url(&self, key: &'static str, default: &'static str) -> Result<String, ConfigError> {
        let value = self.string(key, default);
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue(key, value));
        }
        Ok(value.trim_end_matches('/').to_string())
    }
}
