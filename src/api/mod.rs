//! API handlers for the library catalog REST endpoints

pub mod authors;
pub mod books;
pub mod genres;
pub mod health;
pub mod openapi;
pub mod readers;

use std::{marker::PhantomData, num::IntErrorKind};

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    models::Resource,
    AppState,
};

/// Extractor for the `:id` path segment of a resource.
///
/// Integers outside the id range name no record and are rejected as not found;
/// anything that is not an integer is a bad request.
pub struct RecordId<R>(pub i32, pub PhantomData<R>);

#[async_trait]
impl<R, S> FromRequestParts<S> for RecordId<R>
where
    R: Resource + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        let id = parse_record_id(&raw, R::NAME)?;
        Ok(RecordId(id, PhantomData))
    }
}

fn parse_record_id(raw: &str, resource: &str) -> AppResult<i32> {
    match raw.parse::<i32>() {
        Ok(id) => Ok(id),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(AppError::not_found(resource))
        }
        Err(_) => Err(AppError::BadRequest(format!("Invalid {} id: {}", resource, raw))),
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Readers
        .route("/readers", get(readers::list_readers).post(readers::create_reader))
        .route(
            "/readers/:id",
            get(readers::get_reader)
                .patch(readers::update_reader)
                .delete(readers::delete_reader),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/genres/:id",
            get(genres::get_genre)
                .patch(genres::update_genre)
                .delete(genres::delete_genre),
        )
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .patch(authors::update_author)
                .delete(authors::delete_author),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
