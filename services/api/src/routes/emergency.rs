//! Emergency contact route

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/emergency", get(emergency_contacts))
}

/// Static emergency numbers
pub async fn emergency_contacts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.emergency.as_ref().clone())
}
