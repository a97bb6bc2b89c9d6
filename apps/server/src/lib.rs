pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod settings;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use flashcard_core::Settings;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::settings::{JsonFileStore, SettingsStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<RwLock<Settings>>,
    pub store: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Load the current settings from `store`.
    ///
    /// An unreadable or invalid settings file is logged and replaced by the
    /// defaults; the next successful update overwrites it.
    pub async fn load(store: Arc<dyn SettingsStore>) -> Self {
        let settings = match store.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
        };
        Self {
            settings: Arc::new(RwLock::new(settings)),
            store,
        }
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/settings",
            get(routes::settings::get).put(routes::settings::update),
        )
        .route("/api/parse", post(routes::cards::parse))
        .route("/api/render", post(routes::cards::render))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let file_store = JsonFileStore::new(config.settings_path.clone());
    tracing::info!("Loading settings from {}", file_store.path().display());
    let store: Arc<dyn SettingsStore> = Arc::new(file_store);
    let state = AppState::load(store).await;
    let reveal_mode = state.settings.read().await.reveal_mode;
    tracing::info!("Reveal mode: {}", reveal_mode);

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
