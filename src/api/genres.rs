//! Genre endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult, ErrorResponse, ValidationErrorResponse},
    models::genre::{CreateGenre, Genre, UpdateGenre},
    AppState,
};

use super::RecordId;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<Genre>)
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.services.genres.list().await?;
    Ok(Json(genres))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    request_body = CreateGenre,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse)
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateGenre>, AppError>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let genre = state.services.genres.create(&data).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    )
)]
pub async fn get_genre(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Genre>,
) -> AppResult<Json<Genre>> {
    let genre = state.services.genres.get_by_id(id).await?;
    Ok(Json(genre))
}

/// Update genre fields
#[utoipa::path(
    patch,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = UpdateGenre,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Genre>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateGenre>, AppError>,
) -> AppResult<Json<Genre>> {
    let genre = state.services.genres.update(id, &data).await?;
    Ok(Json(genre))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    )
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Genre>,
) -> AppResult<StatusCode> {
    state.services.genres.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
