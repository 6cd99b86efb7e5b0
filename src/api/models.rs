use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ScheduledMatch;
use crate::stats::{MotmStanding, RatingStanding, ScorerStanding};

#[derive(Deserialize)]
pub struct ParseRosterRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRosterResponse {
    pub players: Vec<String>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct TemplateRequest {
    pub name: String,
    pub white: Vec<String>,
    pub black: Vec<String>,
}

#[derive(Deserialize)]
pub struct LineupRequest {
    #[serde(default)]
    pub white: Vec<String>,
    #[serde(default)]
    pub black: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupResponse {
    pub path: String,
    pub matches: usize,
    pub templates: usize,
    pub checksum: String,
}

/// Numbers shown on the home screen
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    pub total_matches: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub total_goals: u64,
    pub top_scorer: Option<ScorerStanding>,
    pub top_motm: Option<MotmStanding>,
    pub best_rating: Option<RatingStanding>,
    pub next_match: Option<ScheduledMatch>,
    /// Regular match day to show when nothing is scheduled
    pub next_match_day: NaiveDate,
}
