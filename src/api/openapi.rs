//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, genres, health, readers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "Readers, books, genres and authors of a library catalog"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Readers
        readers::list_readers,
        readers::create_reader,
        readers::get_reader,
        readers::update_reader,
        readers::delete_reader,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        // Genres
        genres::list_genres,
        genres::create_genre,
        genres::get_genre,
        genres::update_genre,
        genres::delete_genre,
        // Authors
        authors::list_authors,
        authors::create_author,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
    ),
    components(
        schemas(
            crate::models::reader::Reader,
            crate::models::reader::CreateReader,
            crate::models::reader::UpdateReader,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::genre::Genre,
            crate::models::genre::CreateGenre,
            crate::models::genre::UpdateGenre,
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ValidationErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "readers", description = "Library readers"),
        (name = "books", description = "Catalog books"),
        (name = "genres", description = "Book genres"),
        (name = "authors", description = "Book authors")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
