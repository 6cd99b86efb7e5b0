use log::debug;
use std::cmp::Ordering;

use super::tally::OrderedTally;
use super::types::{AggregateStatistics, MotmStanding, RatingStanding, ScorerStanding};
use crate::domain::{MatchRecord, Outcome, Team};

#[derive(Debug, Default)]
struct ScorerTotal {
    goals: u64,
    team: Option<Team>,
}

#[derive(Debug, Default)]
struct RatingTotal {
    sum: f64,
    count: u32,
}

#[derive(Default)]
struct Accumulators {
    scorers: OrderedTally<ScorerTotal>,
    motm: OrderedTally<u32>,
    ratings: OrderedTally<RatingTotal>,
}

/// Fold the match history into standings and leaderboards.
///
/// Leaderboards are sorted with a stable sort, so equal values keep the order
/// in which players first appeared.
pub fn compute_statistics(matches: &[MatchRecord]) -> AggregateStatistics {
    debug!("Computing statistics over {} matches", matches.len());

    let mut stats = AggregateStatistics {
        total_matches: matches.len() as u32,
        ..AggregateStatistics::default()
    };
    let mut acc = Accumulators::default();

    for record in matches {
        add_result(&mut stats, record);
        add_scorers(&mut acc.scorers, record);
        add_motm(&mut acc.motm, record);
        add_ratings(&mut acc.ratings, record);
    }

    stats.top_scorers = build_scorer_board(acc.scorers);
    stats.motm_awards = build_motm_board(acc.motm);
    stats.average_ratings = build_rating_board(acc.ratings);
    stats
}

fn add_result(stats: &mut AggregateStatistics, record: &MatchRecord) {
    let (white, black) = (u64::from(record.score.white), u64::from(record.score.black));

    // Goal totals saturate instead of overflowing on absurd scores
    stats.white_goals_for = stats.white_goals_for.saturating_add(white);
    stats.white_goals_against = stats.white_goals_against.saturating_add(black);
    stats.black_goals_for = stats.black_goals_for.saturating_add(black);
    stats.black_goals_against = stats.black_goals_against.saturating_add(white);

    match record.outcome() {
        Outcome::Win(Team::White) => stats.white_wins += 1,
        Outcome::Win(Team::Black) => stats.black_wins += 1,
        Outcome::Draw => stats.draws += 1,
    }
}

fn add_scorers(scorers: &mut OrderedTally<ScorerTotal>, record: &MatchRecord) {
    for (team, entries) in record.scorers.iter() {
        for scorer in entries {
            let total = scorers.entry(&scorer.player);
            total.goals = total.goals.saturating_add(u64::from(scorer.goals));
            // Last team seen wins
            total.team = Some(team);
        }
    }
}

fn add_motm(motm: &mut OrderedTally<u32>, record: &MatchRecord) {
    if !record.motm.is_empty() {
        *motm.entry(&record.motm) += 1;
    }
}

fn add_ratings(ratings: &mut OrderedTally<RatingTotal>, record: &MatchRecord) {
    for entry in &record.ratings {
        let total = ratings.entry(&entry.player);
        total.sum += entry.rating;
        total.count += 1;
    }
}

fn build_scorer_board(scorers: OrderedTally<ScorerTotal>) -> Vec<ScorerStanding> {
    let mut board: Vec<ScorerStanding> = scorers
        .into_entries()
        .into_iter()
        .map(|(name, total)| ScorerStanding {
            name,
            goals: total.goals,
            team: total.team.unwrap_or(Team::White),
        })
        .collect();

    board.sort_by(|a, b| b.goals.cmp(&a.goals));
    board
}

fn build_motm_board(motm: OrderedTally<u32>) -> Vec<MotmStanding> {
    let mut board: Vec<MotmStanding> = motm
        .into_entries()
        .into_iter()
        .map(|(name, count)| MotmStanding { name, count })
        .collect();

    board.sort_by(|a, b| b.count.cmp(&a.count));
    board
}

fn build_rating_board(ratings: OrderedTally<RatingTotal>) -> Vec<RatingStanding> {
    let mut board: Vec<RatingStanding> = ratings
        .into_entries()
        .into_iter()
        .map(|(name, total)| RatingStanding {
            name,
            average: total.sum / total.count as f64,
            matches: total.count,
        })
        .collect();

    // NaN averages compare equal and keep their place
    board.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal));
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerRating, Scorer, TeamPair};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record(id: &str, white: u32, black: u32) -> MatchRecord {
        MatchRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            rosters: TeamPair::default(),
            score: TeamPair::new(white, black),
            scorers: TeamPair::default(),
            motm: String::new(),
            ratings: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 22, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats, AggregateStatistics::default());
        assert_eq!(stats.total_matches, 0);
        assert!(stats.top_scorers.is_empty());
        assert!(stats.motm_awards.is_empty());
        assert!(stats.average_ratings.is_empty());
    }

    #[test]
    fn test_single_white_win() {
        let stats = compute_statistics(&[record("m1", 3, 1)]);

        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.white_wins, 1);
        assert_eq!(stats.black_wins, 0);
        assert_eq!(stats.draws, 0);
        assert_eq!(stats.white_goals_for, 3);
        assert_eq!(stats.white_goals_against, 1);
        assert_eq!(stats.black_goals_for, 1);
        assert_eq!(stats.black_goals_against, 3);
    }

    #[test]
    fn test_results_across_matches() {
        let stats = compute_statistics(&[record("a", 0, 2), record("b", 1, 1), record("c", 4, 3)]);

        assert_eq!(stats.white_wins, 1);
        assert_eq!(stats.black_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.total_goals(), 11);

        let white = stats.team_record(Team::White);
        assert_eq!(white.played, 3);
        assert_eq!(white.losses, 1);
        assert_eq!(white.goals_for, 5);
        assert_eq!(white.goals_against, 6);
    }

    #[test]
    fn test_recomputing_is_identical() {
        let mut first = record("m1", 2, 2);
        first.scorers = TeamPair::new(vec![Scorer::new("Ana", 2)], vec![Scorer::new("Beto", 2)]);
        first.motm = "Ana".into();
        first.ratings = vec![PlayerRating::new("Ana", 8.3), PlayerRating::new("Beto", 7.1)];
        let history = vec![first, record("m2", 1, 0)];

        assert_eq!(compute_statistics(&history), compute_statistics(&history));
    }

    #[test]
    fn test_top_scorer_ranks_first_regardless_of_order() {
        let mut early = record("m1", 3, 0);
        early.scorers.white = vec![Scorer::new("Tres", 3)];
        let mut late = record("m2", 0, 5);
        late.scorers.black = vec![Scorer::new("Cinco", 5)];

        for history in [vec![early.clone(), late.clone()], vec![late, early]] {
            let stats = compute_statistics(&history);
            assert_eq!(stats.top_scorers[0].name, "Cinco");
            assert_eq!(stats.top_scorers[0].goals, 5);
            assert_eq!(stats.top_scorers[1].name, "Tres");
        }
    }

    #[test]
    fn test_scorer_ties_keep_first_seen_order() {
        let mut m1 = record("m1", 1, 1);
        m1.scorers = TeamPair::new(vec![Scorer::new("Zoe", 1)], vec![Scorer::new("Abel", 1)]);
        let mut m2 = record("m2", 1, 0);
        m2.scorers.white = vec![Scorer::new("Mia", 1)];

        let names: Vec<String> = compute_statistics(&[m1, m2])
            .top_scorers
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Zoe", "Abel", "Mia"]);
    }

    #[test]
    fn test_scorer_team_is_last_team_seen() {
        let mut m1 = record("m1", 2, 0);
        m1.scorers.white = vec![Scorer::new("Nomad", 2)];
        let mut m2 = record("m2", 0, 1);
        m2.scorers.black = vec![Scorer::new("Nomad", 1)];

        let stats = compute_statistics(&[m1, m2]);
        assert_eq!(stats.top_scorers.len(), 1);
        assert_eq!(stats.top_scorers[0].goals, 3);
        assert_eq!(stats.top_scorers[0].team, Team::Black);
    }

    #[test]
    fn test_empty_motm_is_ignored() {
        let mut m1 = record("m1", 1, 0);
        m1.motm = "Ana".into();
        let m2 = record("m2", 0, 0);

        let with_empty = compute_statistics(&[m1.clone(), m2]);
        let without = compute_statistics(&[m1]);

        assert_eq!(with_empty.motm_awards, without.motm_awards);
        assert_eq!(
            with_empty.motm_awards,
            vec![MotmStanding { name: "Ana".into(), count: 1 }]
        );
    }

    #[test]
    fn test_motm_counts_sorted_descending() {
        let mut m1 = record("m1", 1, 0);
        m1.motm = "Ana".into();
        let mut m2 = record("m2", 1, 0);
        m2.motm = "Beto".into();
        let mut m3 = record("m3", 1, 0);
        m3.motm = "Beto".into();

        let board = compute_statistics(&[m1, m2, m3]).motm_awards;
        assert_eq!(board[0], MotmStanding { name: "Beto".into(), count: 2 });
        assert_eq!(board[1], MotmStanding { name: "Ana".into(), count: 1 });
    }

    #[test]
    fn test_rating_mean() {
        let mut m1 = record("m1", 1, 0);
        m1.ratings = vec![PlayerRating::new("Ana", 8.0)];
        let mut m2 = record("m2", 0, 1);
        m2.ratings = vec![PlayerRating::new("Ana", 6.0), PlayerRating::new("Beto", 9.5)];

        let board = compute_statistics(&[m1, m2]).average_ratings;
        assert_eq!(board[0].name, "Beto");
        assert_eq!(board[1].name, "Ana");
        assert_eq!(board[1].average, 7.0);
        assert_eq!(board[1].matches, 2);
    }

    #[test]
    fn test_malformed_records_are_tolerated() {
        // Scorers claim more goals than the score shows
        let mut m1 = record("m1", 1, 0);
        m1.scorers.white = vec![Scorer::new("Ana", 4)];

        let stats = compute_statistics(&[m1]);
        assert_eq!(stats.white_goals_for, 1);
        assert_eq!(stats.top_scorers[0].goals, 4);
    }

    #[test]
    fn test_huge_scores_do_not_overflow() {
        let mut m1 = record("m1", 3_000_000_000, 0);
        m1.scorers.white = vec![Scorer::new("Ana", 3_000_000_000)];
        let m2 = m1.clone();

        let stats = compute_statistics(&[m1, m2]);
        assert_eq!(stats.white_goals_for, 6_000_000_000);
        assert_eq!(stats.black_goals_against, 6_000_000_000);
        assert_eq!(stats.total_goals(), 6_000_000_000);
        assert_eq!(stats.top_scorers[0].goals, 6_000_000_000);
    }
}
