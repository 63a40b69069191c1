//! Reader endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult, ErrorResponse, ValidationErrorResponse},
    models::reader::{CreateReader, Reader, UpdateReader},
    AppState,
};

use super::RecordId;

/// List all readers (passwords are never returned)
#[utoipa::path(
    get,
    path = "/readers",
    tag = "readers",
    responses(
        (status = 200, description = "List of readers", body = Vec<Reader>)
    )
)]
pub async fn list_readers(State(state): State<AppState>) -> AppResult<Json<Vec<Reader>>> {
    let readers = state.services.readers.list().await?;
    Ok(Json(readers))
}

/// Create a new reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateReader>, AppError>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let reader = state.services.readers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(reader)))
}

/// Get reader by ID
#[utoipa::path(
    get,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i32, Path, description = "Reader ID")),
    responses(
        (status = 200, description = "Reader details", body = Reader),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn get_reader(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Reader>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.readers.get_by_id(id).await?;
    Ok(Json(reader))
}

/// Update reader fields
#[utoipa::path(
    patch,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i32, Path, description = "Reader ID")),
    request_body = UpdateReader,
    responses(
        (status = 200, description = "Reader updated", body = Reader),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn update_reader(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Reader>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateReader>, AppError>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.readers.update(id, &data).await?;
    Ok(Json(reader))
}

/// Delete a reader
#[utoipa::path(
    delete,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i32, Path, description = "Reader ID")),
    responses(
        (status = 204, description = "Reader deleted"),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn delete_reader(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Reader>,
) -> AppResult<StatusCode> {
    state.services.readers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
