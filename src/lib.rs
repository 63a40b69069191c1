//! Library Catalog
//!
//! A REST JSON API over the readers, books, genres and authors of a
//! library, backed by PostgreSQL.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repository and services over a database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        let repository = repository::Repository::new(pool);
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
