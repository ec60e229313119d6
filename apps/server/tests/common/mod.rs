//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the app over an in-memory SQLite database
//! - Helpers for driving the recitation listen cycle

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use serde_json::Value;

use asma_server::config::Config;
use asma_server::db::Database;
use asma_server::{router, AppState};

/// Test context containing the database and the router built over it.
pub struct TestContext {
    pub db: Database,
    pub config: Config,
    app: Router,
}

impl TestContext {
    /// Create a new test context with a fresh in-memory database.
    ///
    /// # Panics
    /// Panics if the database cannot be opened or migrated.
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self::with_database(db).await
    }

    /// Build a context over an existing database, loading whatever it stores.
    pub async fn with_database(db: Database) -> Self {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };

        let state = AppState::new(db.clone(), &config)
            .await
            .expect("Failed to load application state");

        Self {
            db,
            config,
            app: router(state),
        }
    }

    /// Rebuild the app over the same database, as after a restart.
    pub async fn restart(&self) -> Self {
        Self::with_database(self.db.clone()).await
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// The token of the first listen effect in a recitation response.
pub fn listen_token(body: &Value) -> Option<Value> {
    body["effects"]
        .as_array()?
        .iter()
        .find(|effect| effect["type"] == "listen")
        .map(|effect| effect["token"].clone())
}

/// The delay of the first listen effect in a recitation response.
pub fn listen_delay(body: &Value) -> Option<u64> {
    body["effects"]
        .as_array()?
        .iter()
        .find(|effect| effect["type"] == "listen")
        .and_then(|effect| effect["delay_ms"].as_u64())
}
