//! User REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateUserRequest, DeleteResponse};

use usync_core::NewUser;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use serde_json::Value;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(req) = body?;
    let new_user = NewUser::from(req);

    let payload = state.sync_service().create(&new_user).await?;

    Ok((StatusCode::CREATED, Json(payload)))
}

/// GET /api/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_user_id(&id)?;

    let payload = state.sync_service().read(id).await?;

    Ok(Json(payload))
}

/// DELETE /api/user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_user_id(&id)?;

    let record = state.sync_service().delete(id).await?;
    log::debug!("Removed local record {} for user {}", record.id, id);

    Ok(Json(DeleteResponse::user_deleted()))
}

fn parse_user_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::BadRequest {
        message: format!("Invalid user id: {}", raw),
        location: ErrorLocation::from(Location::caller()),
    })
}
