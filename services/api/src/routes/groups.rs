//! Group directory routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateGroupRequest, JoinGroupRequest},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/:id/join", post(join_group))
}

/// List every group with its members
pub async fn list_groups(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let groups = state
        .group_repository
        .list_with_members()
        .await
        .map_err(|e| {
            error!("Failed to list groups: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(groups))
}

/// Create a new group
pub async fn create_group(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateGroupRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let new_group = payload.validate().map_err(ApiError::BadRequest)?;

    let group = state
        .group_repository
        .create(&new_group)
        .await
        .map_err(|e| {
            error!("Failed to create group: {}", e);
            ApiError::from(e)
        })?;

    info!(group_id = group.id, "group created");
    Ok((StatusCode::CREATED, Json(group)))
}

/// Add a user to a group
pub async fn join_group(
    State(state): State<AppState>,
    WithRejection(Path(group_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<JoinGroupRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let group = state
        .group_repository
        .add_member(group_id, payload.user_id)
        .await
        .map_err(|e| {
            error!("Failed to add user {} to group {}: {}", payload.user_id, group_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(group))
}
