use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::filters::SearchState;
use crate::types::language::ALL_LANGUAGES;
use crate::types::source_filter::ALL_SOURCES;

pub const PAGE_SIZE: u32 = 20;
pub const SORT_BY_PUBLISHED_AT: &str = "publishedAt";
pub const DEFAULT_COUNTRY: &str = "us";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    // Pinned by the backend; whatever a caller sends is ignored.
    #[serde(default = "default_page_size", skip_deserializing)]
    pub page_size: u32,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            q: None,
            language: None,
            from: None,
            sources: None,
            sort_by: default_sort_by(),
            page_size: PAGE_SIZE,
        }
    }
}

impl QueryParams {
    pub fn normalized(self) -> Self {
        let sort_by = non_blank(Some(self.sort_by)).unwrap_or_else(default_sort_by);
        Self {
            q: non_blank(self.q),
            language: non_sentinel(self.language, ALL_LANGUAGES),
            from: non_blank(self.from),
            sources: non_sentinel(self.sources, ALL_SOURCES),
            sort_by,
            page_size: PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl HeadlinesParams {
    pub fn normalized(self) -> Self {
        Self {
            country: non_blank(self.country).or_else(|| Some(DEFAULT_COUNTRY.to_string())),
            category: non_blank(self.category),
            q: non_blank(self.q),
            page_size: Some(PAGE_SIZE),
        }
    }
}

pub fn build_query(search: &SearchState, now: DateTime<Utc>) -> QueryParams {
    let filters = &search.filters;
    QueryParams {
        q: search.trimmed_query().map(str::to_string),
        language: non_sentinel(Some(filters.language.clone()), ALL_LANGUAGES),
        from: Some(filters.date_range.from_param(now)),
        sources: non_sentinel(Some(filters.source.clone()), ALL_SOURCES),
        sort_by: default_sort_by(),
        page_size: PAGE_SIZE,
    }
}

fn default_sort_by() -> String {
    SORT_BY_PUBLISHED_AT.to_string()
}

fn default_page_size() -> u32 {
    PAGE_SIZE
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn non_sentinel(value: Option<String>, sentinel: &str) -> Option<String> {
    non_blank(value).filter(|value| value != sentinel)
}
