use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::responses::HealthResponse;
use crate::state::AppState;
use std::sync::Arc;

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        database: state.database.is_available().await,
    })
}
