//! Every triggered fetch is tagged with a [`RequestToken`]. Only the most
//! recently issued token may resolve the state, so a slow response to an
//! older trigger is dropped no matter when it arrives.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::filters::SearchState;
use crate::domain::news::{Article, NewsEnvelope};
use crate::error::{Failure, NO_RESULTS_MESSAGE, UPSTREAM_ERROR_MESSAGE};
use crate::query::{QueryParams, build_query};

pub trait NewsTransport: Send + Sync {
    type Error: fmt::Display + Send + 'static;

    fn search(
        &self,
        params: &QueryParams,
    ) -> impl Future<Output = Result<NewsEnvelope, Self::Error>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestResult {
    #[default]
    Idle,
    Loading,
    Success {
        articles: Vec<Article>,
        total_results: u64,
    },
    Failure(Failure),
}

impl RequestResult {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestResult::Loading)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RequestResult::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoResults,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::NoResults => NO_RESULTS_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub params: QueryParams,
}

#[derive(Debug, Default)]
pub struct Orchestrator {
    state: RequestResult,
    notice: Option<Notice>,
    last_trigger: Option<SearchState>,
    current: Option<RequestToken>,
    issued: u64,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestResult {
        &self.state
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.current
    }

    pub fn commit(&mut self, search: &SearchState, now: DateTime<Utc>) -> Option<FetchTicket> {
        if search.trimmed_query().is_none() {
            self.state = RequestResult::Idle;
            self.notice = None;
            self.last_trigger = None;
            self.current = None;
            return None;
        }
        if self.last_trigger.as_ref() == Some(search) {
            return None;
        }

        self.issued += 1;
        let token = RequestToken(self.issued);
        self.current = Some(token);
        self.last_trigger = Some(search.clone());
        self.notice = None;
        self.state = RequestResult::Loading;
        Some(FetchTicket {
            token,
            params: build_query(search, now),
        })
    }

    pub fn resolve<E>(&mut self, token: RequestToken, outcome: Result<NewsEnvelope, E>) -> bool
    where
        E: fmt::Display,
    {
        if self.current != Some(token) {
            return false;
        }
        self.current = None;

        match outcome {
            Ok(NewsEnvelope::Ok {
                total_results,
                articles,
            }) => {
                self.notice = articles.is_empty().then_some(Notice::NoResults);
                self.state = RequestResult::Success {
                    articles,
                    total_results,
                };
            }
            Ok(NewsEnvelope::Error { error, code }) => {
                let message = if error.trim().is_empty() {
                    code.fixed_message().unwrap_or(UPSTREAM_ERROR_MESSAGE).to_string()
                } else {
                    error
                };
                self.notice = None;
                self.state = RequestResult::Failure(Failure::new(code, message));
            }
            Err(_) => {
                self.notice = None;
                self.state = RequestResult::Failure(Failure::connection_failed());
            }
        }
        true
    }
}
