//! Traveller routes

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use tracing::{debug, error, info};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateUserRequest, NearbyQuery},
    nearby::{NEARBY_RADIUS_KM, within_radius},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/nearby", get(nearby_users))
}

/// List every user with their groups
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state
        .user_repository
        .list_with_groups()
        .await
        .map_err(|e| {
            error!("Failed to list users: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(users))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let new_user = payload.validate().map_err(ApiError::BadRequest)?;

    let user = state.user_repository.create(&new_user).await.map_err(|e| {
        error!("Failed to create user: {}", e);
        ApiError::from(e)
    })?;

    info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Users within the fixed radius of `lat`/`lng`
pub async fn nearby_users(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<NearbyQuery>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let origin = query.origin().map_err(ApiError::BadRequest)?;

    let located = state
        .user_repository
        .list_located_with_groups()
        .await
        .map_err(|e| {
            error!("Failed to load located users: {}", e);
            ApiError::from(e)
        })?;

    let nearby = within_radius(located, &origin, NEARBY_RADIUS_KM);
    debug!(
        latitude = origin.latitude(),
        longitude = origin.longitude(),
        found = nearby.len(),
        "nearby search"
    );

    Ok(Json(nearby))
}
