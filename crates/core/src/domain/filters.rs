use serde::{Deserialize, Serialize};

use crate::types::date_range::DateRange;
use crate::types::language::DEFAULT_LANGUAGE;
use crate::types::source_filter::ALL_SOURCES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub language: String,
    pub date_range: DateRange,
    pub source: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            date_range: DateRange::default(),
            source: ALL_SOURCES.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchState {
    pub query: String,
    pub filters: FilterState,
}

impl SearchState {
    pub fn new(query: impl Into<String>, filters: FilterState) -> Self {
        Self {
            query: query.into(),
            filters,
        }
    }

    pub fn trimmed_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_initial_state() {
        let filters = FilterState::default();
        assert_eq!(filters.language, "en");
        assert_eq!(filters.date_range, DateRange::Week);
        assert_eq!(filters.source, "all");
    }

    #[test]
    fn trimmed_query_treats_whitespace_as_empty() {
        assert_eq!(SearchState::new("  ", FilterState::default()).trimmed_query(), None);
        assert_eq!(
            SearchState::new(" rust ", FilterState::default()).trimmed_query(),
            Some("rust")
        );
    }

    #[test]
    fn filter_state_decodes_partial_json() {
        let filters: FilterState = serde_json::from_str(r#"{"dateRange":"decade"}"#).unwrap();
        assert_eq!(filters.date_range, DateRange::Week);
        assert_eq!(filters.language, "en");
        assert_eq!(filters.source, "all");
    }
}
