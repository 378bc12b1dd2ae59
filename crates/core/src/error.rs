use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INVALID_CREDENTIAL_MESSAGE: &str = "invalid API key";
pub const QUOTA_EXCEEDED_MESSAGE: &str = "daily rate limit exceeded";
pub const PLAN_REQUIRED_MESSAGE: &str = "paid plan required for this request";
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "upstream server error, retry later";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Unexpected response from the news service";
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to the news service";
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Failed to connect to the news server, check your connection and try again";
pub const NO_RESULTS_MESSAGE: &str = "No articles found, try a different search or filters";

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid language code: {0}")]
    InvalidLanguage(String),
    #[error("invalid source filter: {0}")]
    InvalidSource(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidCredential,
    QuotaExceeded,
    PlanRequired,
    UpstreamUnavailable,
    NetworkUnreachable,
    NoResults,
    #[default]
    #[serde(other)]
    UpstreamError,
}

impl ErrorKind {
    pub fn from_upstream_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::InvalidCredential,
            426 => ErrorKind::PlanRequired,
            429 => ErrorKind::QuotaExceeded,
            500 => ErrorKind::UpstreamUnavailable,
            _ => ErrorKind::UpstreamError,
        }
    }

    pub fn fixed_message(self) -> Option<&'static str> {
        match self {
            ErrorKind::InvalidCredential => Some(INVALID_CREDENTIAL_MESSAGE),
            ErrorKind::QuotaExceeded => Some(QUOTA_EXCEEDED_MESSAGE),
            ErrorKind::PlanRequired => Some(PLAN_REQUIRED_MESSAGE),
            ErrorKind::UpstreamUnavailable => Some(UPSTREAM_UNAVAILABLE_MESSAGE),
            ErrorKind::NetworkUnreachable => Some(UNREACHABLE_MESSAGE),
            ErrorKind::NoResults => Some(NO_RESULTS_MESSAGE),
            ErrorKind::UpstreamError => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidCredential => "INVALID_CREDENTIAL",
            ErrorKind::QuotaExceeded => "QUOTA_EXCEEDED",
            ErrorKind::PlanRequired => "PLAN_REQUIRED",
            ErrorKind::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ErrorKind::UpstreamError => "UPSTREAM_ERROR",
            ErrorKind::NetworkUnreachable => "NETWORK_UNREACHABLE",
            ErrorKind::NoResults => "NO_RESULTS",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub code: ErrorKind,
}

impl Failure {
    pub fn new(code: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn from_upstream(status: u16, upstream_message: Option<&str>) -> Self {
        let code = ErrorKind::from_upstream_status(status);
        let message = match code.fixed_message() {
            Some(message) => message.to_string(),
            None => upstream_message
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .unwrap_or(UPSTREAM_ERROR_MESSAGE)
                .to_string(),
        };
        Self { message, code }
    }

    pub fn unreachable() -> Self {
        Self::new(ErrorKind::NetworkUnreachable, UNREACHABLE_MESSAGE)
    }

    pub fn connection_failed() -> Self {
        Self::new(ErrorKind::NetworkUnreachable, CONNECTION_FAILED_MESSAGE)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_statuses_map_to_taxonomy() {
        assert_eq!(ErrorKind::from_upstream_status(401), ErrorKind::InvalidCredential);
        assert_eq!(ErrorKind::from_upstream_status(429), ErrorKind::QuotaExceeded);
        assert_eq!(ErrorKind::from_upstream_status(426), ErrorKind::PlanRequired);
        assert_eq!(ErrorKind::from_upstream_status(500), ErrorKind::UpstreamUnavailable);
        assert_eq!(ErrorKind::from_upstream_status(400), ErrorKind::UpstreamError);
        assert_eq!(ErrorKind::from_upstream_status(503), ErrorKind::UpstreamError);
    }

    #[test]
    fn known_statuses_use_fixed_messages() {
        let failure = Failure::from_upstream(429, Some("You have made too many requests"));
        assert_eq!(failure.code, ErrorKind::QuotaExceeded);
        assert_eq!(failure.message, QUOTA_EXCEEDED_MESSAGE);
    }

    #[test]
    fn other_statuses_pass_upstream_message_through() {
        let failure = Failure::from_upstream(400, Some("The from parameter is too far in the past"));
        assert_eq!(failure.code, ErrorKind::UpstreamError);
        assert_eq!(failure.message, "The from parameter is too far in the past");
    }

    #[test]
    fn blank_upstream_message_falls_back() {
        let failure = Failure::from_upstream(418, Some("  "));
        assert_eq!(failure.message, UPSTREAM_ERROR_MESSAGE);
        let failure = Failure::from_upstream(418, None);
        assert_eq!(failure.message, UPSTREAM_ERROR_MESSAGE);
    }

    #[test]
    fn codes_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorKind::QuotaExceeded).unwrap();
        assert_eq!(json, "\"QUOTA_EXCEEDED\"");
        assert_eq!(ErrorKind::QuotaExceeded.as_str(), "QUOTA_EXCEEDED");
    }

    #[test]
    fn unknown_codes_decode_as_upstream_error() {
        let kind: ErrorKind = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(kind, ErrorKind::UpstreamError);
        let kind: ErrorKind = serde_json::from_str("\"NETWORK_UNREACHABLE\"").unwrap();
        assert_eq!(kind, ErrorKind::NetworkUnreachable);
    }

    #[test]
    fn every_code_decodes_back_to_its_kind() {
        let kinds = [
            ErrorKind::InvalidCredential,
            ErrorKind::QuotaExceeded,
            ErrorKind::PlanRequired,
            ErrorKind::UpstreamUnavailable,
            ErrorKind::NetworkUnreachable,
            ErrorKind::NoResults,
            ErrorKind::UpstreamError,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let decoded: ErrorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, kind);
        }
        assert_eq!(ErrorKind::default(), ErrorKind::UpstreamError);
    }

    #[test]
    fn fixed_messages_follow_status_table() {
        let cases = [
            (401, "invalid API key"),
            (429, "daily rate limit exceeded"),
            (426, "paid plan required for this request"),
            (500, "upstream server error, retry later"),
        ];
        for (status, message) in cases {
            assert_eq!(Failure::from_upstream(status, Some("ignored")).message, message);
        }
    }
}
