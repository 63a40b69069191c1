//! Author endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult, ErrorResponse, ValidationErrorResponse},
    models::author::{Author, CreateAuthor, UpdateAuthor},
    AppState,
};

use super::RecordId;

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateAuthor>, AppError>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.authors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Author>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_by_id(id).await?;
    Ok(Json(author))
}

/// Update author fields
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Author>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateAuthor>, AppError>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.update(id, &data).await?;
    Ok(Json(author))
}

/// Delete a author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Author>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
