use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemePreference {
    pub dark: bool,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }
}
