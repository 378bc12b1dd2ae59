use std::io::ErrorKind;
use std::path::PathBuf;

use newsdesk_core::domain::prefs::{THEME_KEY, ThemePreference};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid stored value: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PrefsError> {
        let contents = match std::fs::read_to_string(self.path(key)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PrefsError> {
        std::fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string(value)?;
        std::fs::write(self.path(key), contents)?;
        Ok(())
    }

    pub fn load_theme(&self) -> Result<ThemePreference, PrefsError> {
        Ok(self.load(THEME_KEY)?.unwrap_or_default())
    }

    pub fn store_theme(&self, theme: ThemePreference) -> Result<(), PrefsError> {
        self.store(THEME_KEY, &theme)
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
