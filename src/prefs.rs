use crate::theme::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const STATE_FILE_NAME: &str = "state.json";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to access preferences: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid preferences file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Choices remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Option<Theme>,
}

pub fn default_state_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "osint-map").map(|dirs| dirs.data_dir().join(STATE_FILE_NAME))
}

impl Preferences {
    /// A missing file is the same as no saved preferences.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }
}

/// Theme to start with: the saved one if readable, otherwise `fallback`.
pub fn saved_theme(path: Option<&Path>, fallback: Theme) -> Theme {
    let Some(path) = path else {
        return fallback;
    };

    match Preferences::load(path) {
        Ok(prefs) => prefs.theme.unwrap_or(fallback),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring preferences");
            fallback
        }
    }
}

/// Records the theme, keeping any other saved choices.
pub fn save_theme(path: &Path, theme: Theme) -> Result<(), PrefsError> {
    let mut prefs = Preferences::load(path).unwrap_or_default();
    prefs.theme = Some(theme);
    prefs.save(path)
}
