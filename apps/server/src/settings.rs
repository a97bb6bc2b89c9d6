//! Persisted plugin settings.

use async_trait::async_trait;
use flashcard_core::Settings;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store holding the settings document.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load settings, falling back to defaults when nothing was saved yet.
    async fn load(&self) -> Result<Settings, SettingsError>;

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
