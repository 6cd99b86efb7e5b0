use serde::{Deserialize, Serialize};

use crate::domain::Team;

pub type PlayerName = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerStanding {
    pub name: PlayerName,
    pub goals: u64,
    /// Team of the most recent match in which the player scored
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotmStanding {
    pub name: PlayerName,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStanding {
    pub name: PlayerName,
    pub average: f64,
    pub matches: u32,
}

/// Win/draw/loss record of one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
}

/// Everything derived from the match history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatistics {
    pub total_matches: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub white_goals_for: u64,
    pub white_goals_against: u64,
    pub black_goals_for: u64,
    pub black_goals_against: u64,
    pub top_scorers: Vec<ScorerStanding>,
    pub motm_awards: Vec<MotmStanding>,
    pub average_ratings: Vec<RatingStanding>,
}

impl AggregateStatistics {
    pub fn wins(&self, team: Team) -> u32 {
        match team {
            Team::White => self.white_wins,
            Team::Black => self.black_wins,
        }
    }

    pub fn goals_for(&self, team: Team) -> u64 {
        match team {
            Team::White => self.white_goals_for,
            Team::Black => self.black_goals_for,
        }
    }

    pub fn goals_against(&self, team: Team) -> u64 {
        match team {
            Team::White => self.white_goals_against,
            Team::Black => self.black_goals_against,
        }
    }

    pub fn total_goals(&self) -> u64 {
        self.white_goals_for.saturating_add(self.black_goals_for)
    }

    pub fn team_record(&self, team: Team) -> TeamRecord {
        TeamRecord {
            played: self.total_matches,
            wins: self.wins(team),
            draws: self.draws,
            losses: self.wins(team.opponent()),
            goals_for: self.goals_for(team),
            goals_against: self.goals_against(team),
        }
    }
}
