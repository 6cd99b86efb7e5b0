use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use std::sync::Arc;

use super::{error_response, AppState};
use crate::export::{self, ExportKind};

pub async fn get_export(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    let kind: ExportKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    };

    let snapshot = state.store.snapshot().and_then(|matches| {
        state.store.templates().map(|templates| (matches, templates))
    });
    let (matches, templates) = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => return error_response(e),
    };

    let now = Utc::now();
    match export::render(kind, &matches, &templates, &state.config.export, now) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, kind.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", kind.file_name(now)),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
