use crate::error::CoreError;

pub const ALL_LANGUAGES: &str = "all";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let code = value.trim().to_ascii_lowercase();
        if code == ALL_LANGUAGES {
            return Ok(LanguageCode(code));
        }
        if code.len() != 2 || !code.chars().all(|ch| ch.is_ascii_lowercase()) {
            return Err(CoreError::InvalidLanguage(value.trim().to_string()));
        }
        Ok(LanguageCode(code))
    }
}
