use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{deleted_or_missing, error_response, AppState};
use crate::api::models::TemplateRequest;
use crate::domain::TeamPair;

pub async fn list_templates(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.templates() {
        Ok(templates) => Json(templates).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_template(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TemplateRequest>,
) -> impl IntoResponse {
    let rosters = TeamPair::new(request.white, request.black);
    match state.store.save_template(&request.name, rosters, &state.config.roster) {
        Ok(template) => (StatusCode::CREATED, Json(template)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete_template(&id) {
        Ok(deleted) => deleted_or_missing(deleted),
        Err(e) => error_response(e),
    }
}
