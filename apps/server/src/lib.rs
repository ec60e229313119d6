pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use asma_core::TranscriptBuffer;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::services::progress::ProgressService;
use crate::services::recitation::RecitationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub progress: Arc<ProgressService>,
    pub recitation: Arc<RecitationService>,
    pub listen: Arc<Mutex<TranscriptBuffer>>,
}

impl AppState {
    /// Load persisted state from a migrated database.
    pub async fn new(db: Database, config: &Config) -> error::Result<Self> {
        let db = Arc::new(db);
        let progress = ProgressService::load(db.clone()).await?;
        let recitation = RecitationService::new(db.clone(), config.recitation.clone());

        Ok(Self {
            db,
            progress: Arc::new(progress),
            recitation: Arc::new(recitation),
            listen: Arc::new(Mutex::new(TranscriptBuffer::new())),
        })
    }
}

/// Build the router with every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog routes
        .route("/api/names", get(routes::catalog::list))
        .route("/api/names/:index", get(routes::catalog::get))
        .route("/api/score", post(routes::score::score))
        // Practice routes
        .route("/api/practice/attempts", post(routes::practice::record_attempt))
        .route("/api/practice/errors", post(routes::practice::report_error))
        .route("/api/practice/stats", get(routes::practice::stats))
        .route("/api/practice/progress", get(routes::practice::progress))
        .route("/api/practice/achievements", get(routes::practice::achievements))
        .route("/api/practice/reset", post(routes::practice::reset))
        // Recitation routes
        .route("/api/recitation", get(routes::recitation::snapshot))
        .route("/api/recitation/start", post(routes::recitation::start))
        .route("/api/recitation/pause", post(routes::recitation::pause))
        .route("/api/recitation/skip", post(routes::recitation::skip))
        .route("/api/recitation/reset", post(routes::recitation::reset))
        .route("/api/recitation/result", post(routes::recitation::result))
        .route("/api/recitation/error", post(routes::recitation::error))
        .route("/api/recitation/end", post(routes::recitation::end))
        .route("/api/recitation/records", get(routes::recitation::records))
        // Free listening routes
        .route("/api/listen/results", post(routes::listen::results))
        .route("/api/listen", delete(routes::listen::clear))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState::new(db, &config).await?;
    let app = router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
