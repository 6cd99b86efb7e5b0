use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed sides of the weekly game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value held once per team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPair<T> {
    pub white: T,
    pub black: T,
}

impl<T> TeamPair<T> {
    pub fn new(white: T, black: T) -> Self {
        Self { white, black }
    }

    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::White => &self.white,
            Team::Black => &self.black,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::White => &mut self.white,
            Team::Black => &mut self.black,
        }
    }

    /// White first, then black
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::ALL.into_iter().map(move |team| (team, self.get(team)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    pub player: String,
    pub goals: u32,
}

impl Scorer {
    pub fn new(player: impl Into<String>, goals: u32) -> Self {
        Self {
            player: player.into(),
            goals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub player: String,
    pub rating: f64,
}

impl PlayerRating {
    pub fn new(player: impl Into<String>, rating: f64) -> Self {
        Self {
            player: player.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Team),
    Draw,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win(Team::White) => "White win",
            Outcome::Win(Team::Black) => "Black win",
            Outcome::Draw => "Draw",
        }
    }
}

/// A completed match as stored in the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub date: NaiveDate,
    pub rosters: TeamPair<Vec<String>>,
    pub score: TeamPair<u32>,
    pub scorers: TeamPair<Vec<Scorer>>,
    #[serde(default)]
    pub motm: String,
    /// Ordered player -> rating entries
    #[serde(default)]
    pub ratings: Vec<PlayerRating>,
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn outcome(&self) -> Outcome {
        match self.score.white.cmp(&self.score.black) {
            std::cmp::Ordering::Greater => Outcome::Win(Team::White),
            std::cmp::Ordering::Less => Outcome::Win(Team::Black),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Match result as entered by the organizer, before it gets an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    pub date: NaiveDate,
    pub rosters: TeamPair<Vec<String>>,
    pub score: TeamPair<u32>,
    #[serde(default)]
    pub scorers: TeamPair<Vec<Scorer>>,
    #[serde(default)]
    pub motm: String,
    #[serde(default)]
    pub ratings: Vec<PlayerRating>,
}

impl MatchDraft {
    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> MatchRecord {
        MatchRecord {
            id,
            date: self.date,
            rosters: self.rosters,
            score: self.score,
            scorers: self.scorers,
            motm: self.motm,
            ratings: self.ratings,
            created_at,
        }
    }
}

/// Saved pair of rosters for reuse across matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterTemplate {
    pub id: String,
    pub name: String,
    pub white: Vec<String>,
    pub black: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The alignment currently being prepared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    pub white: Vec<String>,
    pub black: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_pair_iterates_white_first() {
        let pair = TeamPair::new(1, 2);
        let items: Vec<_> = pair.iter().map(|(team, v)| (team, *v)).collect();
        assert_eq!(items, vec![(Team::White, 1), (Team::Black, 2)]);
    }

    #[test]
    fn test_match_record_json_uses_camel_case_and_team_names() {
        let record = MatchDraft {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            rosters: TeamPair::new(vec!["Ana".into()], vec!["Beto".into()]),
            score: TeamPair::new(1, 0),
            scorers: TeamPair::new(vec![Scorer::new("Ana", 1)], vec![]),
            motm: "Ana".into(),
            ratings: vec![PlayerRating::new("Ana", 8.5)],
        }
        .into_record("m1".into(), Utc::now());

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["score"]["white"], 1);
        assert_eq!(json["date"], "2024-05-02");
        assert_eq!(record.outcome(), Outcome::Win(Team::White));
    }

    #[test]
    fn test_outcome_draw() {
        let mut record = MatchDraft {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            rosters: TeamPair::default(),
            score: TeamPair::new(2, 2),
            scorers: TeamPair::default(),
            motm: String::new(),
            ratings: vec![],
        }
        .into_record("m1".into(), Utc::now());
        assert_eq!(record.outcome().label(), "Draw");

        record.score.black = 3;
        assert_eq!(record.outcome(), Outcome::Win(Team::Black));
    }
}
