use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{deleted_or_missing, error_response, AppState};
use crate::domain::MatchDraft;

pub async fn list_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.snapshot() {
        Ok(matches) => Json(matches).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_match(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<MatchDraft>,
) -> impl IntoResponse {
    match state.store.record_match(draft, &state.config.roster) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.remove(&id) {
        Ok(deleted) => deleted_or_missing(deleted),
        Err(e) => error_response(e),
    }
}
