use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};

use crate::config::settings::AppConfig;
use crate::backup::BackupError;
use crate::domain::ValidationError;
use crate::roster::RosterParser;
use crate::services::backup::BackupService;
use crate::services::calendar::CalendarService;
use crate::services::store::MatchStore;

pub mod backup;
pub mod export;
pub mod lineup;
pub mod matches;
pub mod roster;
pub mod schedule;
pub mod stats;
pub mod templates;

pub struct AppState {
    pub store: MatchStore,
    pub config: AppConfig,
    pub parser: RosterParser,
    pub backups: BackupService,
    pub calendar: CalendarService,
}

impl AppState {
    pub fn new(store: MatchStore, config: AppConfig) -> Result<Self> {
        Ok(Self {
            parser: RosterParser::new(&config.roster.ignore_words)?,
            backups: BackupService::new(store.clone(), &config)?,
            calendar: CalendarService::new(store.clone(), config.calendar.clone()),
            store,
            config,
        })
    }
}

/// Rule violations and corrupt backups become 422, everything else 500
pub fn error_response(e: anyhow::Error) -> Response {
    if let Some(rule) = e.downcast_ref::<ValidationError>() {
        warn!("Rejected request: {rule}");
        return (StatusCode::UNPROCESSABLE_ENTITY, rule.to_string()).into_response();
    }
    if let Some(corrupt) = e.downcast_ref::<BackupError>() {
        warn!("Rejected backup: {corrupt}");
        return (StatusCode::UNPROCESSABLE_ENTITY, corrupt.to_string()).into_response();
    }

    error!("Request failed: {e:#}");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage Error: {e}")).into_response()
}

pub fn deleted_or_missing(deleted: bool) -> Response {
    if deleted {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
