use std::collections::HashSet;
use thiserror::Error;

use super::models::{MatchDraft, Team, TeamPair};
use crate::config::settings::RosterSettings;

/// Reasons a match or template is refused before it reaches the store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("team {team} needs {expected} players, got {found}")]
    IncompleteTeam {
        team: Team,
        expected: usize,
        found: usize,
    },
    #[error("player {0} is listed more than once")]
    DuplicatePlayer(String),
    #[error("man of the match is missing")]
    MissingMotm,
    #[error("every {0} goal needs a scorer")]
    UnassignedScorer(Team),
    #[error("team {team} scored {score} but scorers add up to {scored}")]
    ScorerTotalMismatch { team: Team, score: u32, scored: u64 },
    #[error("rating {rating} for {player} is outside {min}..={max}")]
    RatingOutOfRange {
        player: String,
        rating: f64,
        min: f64,
        max: f64,
    },
    #[error("player {0} is rated more than once")]
    DuplicateRating(String),
    #[error("template name is empty")]
    EmptyTemplateName,
}

pub fn validate_match(draft: &MatchDraft, rules: &RosterSettings) -> Result<(), ValidationError> {
    validate_rosters(&draft.rosters, rules)?;
    validate_unique_players(&draft.rosters)?;

    if draft.motm.trim().is_empty() {
        return Err(ValidationError::MissingMotm);
    }

    for (team, scorers) in draft.scorers.iter() {
        if scorers.iter().any(|s| s.player.trim().is_empty()) {
            return Err(ValidationError::UnassignedScorer(team));
        }

        let scored: u64 = scorers.iter().map(|s| u64::from(s.goals)).sum();
        let score = *draft.score.get(team);
        if scored != u64::from(score) {
            return Err(ValidationError::ScorerTotalMismatch { team, score, scored });
        }
    }

    let mut rated = HashSet::new();
    for entry in &draft.ratings {
        if !rated.insert(entry.player.as_str()) {
            return Err(ValidationError::DuplicateRating(entry.player.clone()));
        }
        if !(rules.min_rating..=rules.max_rating).contains(&entry.rating) {
            return Err(ValidationError::RatingOutOfRange {
                player: entry.player.clone(),
                rating: entry.rating,
                min: rules.min_rating,
                max: rules.max_rating,
            });
        }
    }

    Ok(())
}

pub fn validate_template(
    name: &str,
    rosters: &TeamPair<Vec<String>>,
    rules: &RosterSettings,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyTemplateName);
    }
    validate_rosters(rosters, rules)
}

fn validate_rosters(
    rosters: &TeamPair<Vec<String>>,
    rules: &RosterSettings,
) -> Result<(), ValidationError> {
    for (team, roster) in rosters.iter() {
        let found = count_named(roster);
        if found != rules.team_size {
            return Err(ValidationError::IncompleteTeam {
                team,
                expected: rules.team_size,
                found,
            });
        }
    }
    Ok(())
}

fn validate_unique_players(rosters: &TeamPair<Vec<String>>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    let named = rosters
        .white
        .iter()
        .chain(rosters.black.iter())
        .filter(|name| !name.trim().is_empty());
    for name in named {
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::DuplicatePlayer(name.clone()));
        }
    }
    Ok(())
}

fn count_named(roster: &[String]) -> usize {
    roster.iter().filter(|name| !name.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PlayerRating, Scorer};
    use chrono::NaiveDate;

    fn team(prefix: &str) -> Vec<String> {
        (1..=8).map(|i| format!("{prefix}{i}")).collect()
    }

    fn valid_draft() -> MatchDraft {
        MatchDraft {
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            rosters: TeamPair::new(team("W"), team("B")),
            score: TeamPair::new(2, 1),
            scorers: TeamPair::new(
                vec![Scorer::new("W1", 1), Scorer::new("W2", 1)],
                vec![Scorer::new("B5", 1)],
            ),
            motm: "W1".into(),
            ratings: vec![PlayerRating::new("W1", 9.0), PlayerRating::new("B5", 6.5)],
        }
    }

    #[test]
    fn test_valid_match_passes() {
        assert_eq!(validate_match(&valid_draft(), &RosterSettings::default()), Ok(()));
    }

    #[test]
    fn test_short_team_is_rejected() {
        let mut draft = valid_draft();
        draft.rosters.black.pop();
        draft.rosters.black.push(String::new());

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::IncompleteTeam {
                team: Team::Black,
                expected: 8,
                found: 7
            }
        );
    }

    #[test]
    fn test_player_on_both_teams_is_rejected() {
        let mut draft = valid_draft();
        draft.rosters.black[0] = "W3".into();

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(err, ValidationError::DuplicatePlayer("W3".into()));
    }

    #[test]
    fn test_missing_motm_is_rejected() {
        let mut draft = valid_draft();
        draft.motm = "  ".into();

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingMotm);
    }

    #[test]
    fn test_unassigned_scorer_is_rejected() {
        let mut draft = valid_draft();
        draft.scorers.white[1].player = String::new();

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(err, ValidationError::UnassignedScorer(Team::White));
    }

    #[test]
    fn test_scorer_total_must_match_score() {
        let mut draft = valid_draft();
        draft.score.black = 3;

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ScorerTotalMismatch {
                team: Team::Black,
                score: 3,
                scored: 1
            }
        );
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut draft = valid_draft();
        draft.ratings.push(PlayerRating::new("B2", 10.5));

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert!(matches!(err, ValidationError::RatingOutOfRange { ref player, .. } if player == "B2"));
    }

    #[test]
    fn test_scorer_total_beyond_u32_is_a_mismatch() {
        let mut draft = valid_draft();
        draft.scorers.white = vec![Scorer::new("W1", u32::MAX), Scorer::new("W2", 2)];

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ScorerTotalMismatch {
                team: Team::White,
                score: 2,
                scored: u64::from(u32::MAX) + 2
            }
        );
    }

    #[test]
    fn test_player_rated_twice_is_rejected() {
        let mut draft = valid_draft();
        draft.ratings.push(PlayerRating::new("W1", 6.0));

        let err = validate_match(&draft, &RosterSettings::default()).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateRating("W1".into()));
    }

    #[test]
    fn test_template_needs_name_and_full_teams() {
        let rules = RosterSettings::default();
        let rosters = TeamPair::new(team("W"), team("B"));

        assert_eq!(
            validate_template(" ", &rosters, &rules),
            Err(ValidationError::EmptyTemplateName)
        );
        assert_eq!(validate_template("Usual", &rosters, &rules), Ok(()));

        let short = TeamPair::new(team("W"), vec!["B1".to_string()]);
        assert!(validate_template("Usual", &short, &rules).is_err());
    }
}
