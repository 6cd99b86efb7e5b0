use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::HomeSummary;
use crate::services::calendar::CalendarService;

pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.statistics() {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = match state.store.statistics() {
        Ok(stats) => stats,
        Err(e) => return error_response(e),
    };

    let now = CalendarService::now();
    let next_match = match state.calendar.upcoming(now) {
        Ok(upcoming) => upcoming.into_iter().next(),
        Err(e) => return error_response(e),
    };

    Json(HomeSummary {
        total_matches: stats.total_matches,
        white_wins: stats.white_wins,
        black_wins: stats.black_wins,
        draws: stats.draws,
        total_goals: stats.total_goals(),
        top_scorer: stats.top_scorers.first().cloned(),
        top_motm: stats.motm_awards.first().cloned(),
        best_rating: stats.average_ratings.first().cloned(),
        next_match,
        next_match_day: state.calendar.next_match_day(now),
    })
    .into_response()
}
