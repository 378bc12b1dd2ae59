use crate::error::CoreError;

pub const ALL_SOURCES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFilter(String);

impl SourceFilter {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for SourceFilter {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSource("empty source".to_string()));
        }
        let valid = trimmed.split(',').all(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '.')
        });
        if !valid {
            return Err(CoreError::InvalidSource(trimmed.to_string()));
        }
        Ok(SourceFilter(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_source_ids() {
        assert_eq!(SourceFilter::try_from("bbc-news").unwrap().into_string(), "bbc-news");
        assert_eq!(
            SourceFilter::try_from("abc-news,the-verge").unwrap().into_string(),
            "abc-news,the-verge"
        );
        assert_eq!(SourceFilter::try_from("all").unwrap().into_string(), ALL_SOURCES);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(SourceFilter::try_from(" ").is_err());
        assert!(SourceFilter::try_from("BBC News").is_err());
        assert!(SourceFilter::try_from("bbc-news,").is_err());
    }
}
