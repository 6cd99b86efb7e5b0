use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::domain::NewScheduledMatch;
use crate::services::calendar::CalendarService;

pub async fn list_scheduled(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.scheduled() {
        Ok(scheduled) => Json(scheduled).into_response(),
        Err(e) => error_response(e),
    }
}

/// Schedule the given match, or the next regular one when the body is empty
pub async fn create_scheduled(
    State(state): State<Arc<AppState>>,
    body: Option<Json<NewScheduledMatch>>,
) -> impl IntoResponse {
    let result = match body {
        Some(Json(new)) => state.store.schedule(new),
        None => state.calendar.schedule_next_match(CalendarService::now()),
    };

    match result {
        Ok(scheduled) => (StatusCode::CREATED, Json(scheduled)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_upcoming(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.calendar.upcoming(CalendarService::now()) {
        Ok(upcoming) => Json(upcoming).into_response(),
        Err(e) => error_response(e),
    }
}
