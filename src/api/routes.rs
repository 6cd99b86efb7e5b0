use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    backup::{create_backup, import_backup, restore_backup},
    export::get_export,
    lineup::{get_lineup, put_lineup},
    matches::{create_match, delete_match, list_matches},
    roster::parse_roster,
    schedule::{create_scheduled, list_scheduled, list_upcoming},
    stats::{get_stats, get_summary},
    templates::{create_template, delete_template, list_templates},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/stats", get(get_stats))
        .route("/api/summary", get(get_summary))
        .route("/api/roster/parse", post(parse_roster))
        .route("/api/matches", get(list_matches).post(create_match))
        .route("/api/matches/:id", delete(delete_match))
        .route("/api/templates", get(list_templates).post(create_template))
        .route("/api/templates/:id", delete(delete_template))
        .route("/api/lineup", get(get_lineup).put(put_lineup))
        .route("/api/schedule", get(list_scheduled).post(create_scheduled))
        .route("/api/schedule/upcoming", get(list_upcoming))
        .route("/api/export/:kind", get(get_export))
        .route("/api/backup", post(create_backup))
        .route("/api/backup/restore", post(restore_backup))
        .route("/api/backup/import", post(import_backup))
        .with_state(state)
}
