//! Common test utilities for integration tests.
//!
//! Provides a TestContext that backs the settings store with a temporary
//! JSON file, so every test starts from a clean configuration.

pub mod fixtures;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use simple_flashcards_server::settings::{JsonFileStore, SettingsStore};
use simple_flashcards_server::{build_router, AppState};

/// Test context holding a router and its settings file.
pub struct TestContext {
    // Keeps the directory alive for the duration of the test.
    _dir: TempDir,
    pub settings_path: PathBuf,
    app: Router,
}

impl TestContext {
    /// Create a context with default settings.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self::with_dir(dir).await
    }

    /// Create a context whose settings file already holds `content`.
    pub async fn with_settings_file(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("settings.json"), content)
            .expect("Failed to write settings file");
        Self::with_dir(dir).await
    }

    async fn with_dir(dir: TempDir) -> Self {
        let settings_path = dir.path().join("settings.json");
        let store: Arc<dyn SettingsStore> = Arc::new(JsonFileStore::new(settings_path.clone()));
        let state = AppState::load(store).await;

        Self {
            _dir: dir,
            settings_path,
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Read the persisted settings file as JSON.
    pub fn persisted_settings(&self) -> serde_json::Value {
        let content =
            std::fs::read_to_string(&self.settings_path).expect("Failed to read settings file");
        serde_json::from_str(&content).expect("Settings file is not JSON")
    }
}
