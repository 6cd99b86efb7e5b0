use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::BackupResponse;
use crate::backup::BackupData;

pub async fn create_backup(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.backups.create_backup().and_then(|backup| {
        let path = state.backups.save(&backup)?;
        Ok(BackupResponse {
            path: path.display().to_string(),
            matches: backup.matches.len(),
            templates: backup.templates.len(),
            checksum: backup.checksum,
        })
    });

    match result {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn restore_backup(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.backups.restore_local() {
        Ok(Some(summary)) => Json(summary).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "No local backup").into_response(),
        Err(e) => error_response(e),
    }
}

/// Restore from a backup document sent by a client
pub async fn import_backup(
    State(state): State<Arc<AppState>>,
    Json(backup): Json<BackupData>,
) -> impl IntoResponse {
    match state.backups.restore(&backup) {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response(e),
    }
}
