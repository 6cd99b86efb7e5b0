use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{ParseRosterRequest, ParseRosterResponse};

pub async fn parse_roster(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ParseRosterRequest>,
) -> impl IntoResponse {
    let players = state.parser.parse(&request.text);
    Json(ParseRosterResponse {
        count: players.len(),
        players,
    })
}
