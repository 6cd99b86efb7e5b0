use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::LineupRequest;

pub async fn get_lineup(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.current_lineup() {
        Ok(lineup) => Json(lineup).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn put_lineup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LineupRequest>,
) -> impl IntoResponse {
    match state.store.save_current_lineup(request.white, request.black) {
        Ok(lineup) => Json(lineup).into_response(),
        Err(e) => error_response(e),
    }
}
