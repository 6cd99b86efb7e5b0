use anyhow::{Context, Result};

use crate::domain::MatchRecord;
use crate::stats::AggregateStatistics;

const MATCH_HEADERS: [&str; 9] = [
    "Date",
    "White Goals",
    "Black Goals",
    "Result",
    "MOTM",
    "White Scorers",
    "Black Scorers",
    "White Team",
    "Black Team",
];

/// One row per match. An empty history renders as an empty string.
pub fn matches_csv(matches: &[MatchRecord]) -> Result<String> {
    let rows: Vec<Vec<String>> = matches.iter().map(match_row).collect();
    write_table(&MATCH_HEADERS, &rows)
}

fn match_row(record: &MatchRecord) -> Vec<String> {
    let scorers = |list: &[crate::domain::Scorer]| {
        list.iter().map(|s| s.player.as_str()).collect::<Vec<_>>().join("; ")
    };

    vec![
        record.date.to_string(),
        record.score.white.to_string(),
        record.score.black.to_string(),
        record.outcome().label().to_string(),
        record.motm.clone(),
        scorers(&record.scorers.white),
        scorers(&record.scorers.black),
        record.rosters.white.join("; "),
        record.rosters.black.join("; "),
    ]
}

/// Titled sections separated by blank lines
pub fn statistics_csv(stats: &AggregateStatistics) -> Result<String> {
    let summary = write_table(
        &["Total Matches", "White Wins", "Black Wins", "Draws", "White Goals", "Black Goals"],
        &[vec![
            stats.total_matches.to_string(),
            stats.white_wins.to_string(),
            stats.black_wins.to_string(),
            stats.draws.to_string(),
            stats.white_goals_for.to_string(),
            stats.black_goals_for.to_string(),
        ]],
    )?;

    let scorers: Vec<Vec<String>> = stats
        .top_scorers
        .iter()
        .enumerate()
        .map(|(i, s)| vec![(i + 1).to_string(), s.name.clone(), s.goals.to_string(), s.team.to_string()])
        .collect();

    let motm: Vec<Vec<String>> = stats
        .motm_awards
        .iter()
        .enumerate()
        .map(|(i, m)| vec![(i + 1).to_string(), m.name.clone(), m.count.to_string()])
        .collect();

    let ratings: Vec<Vec<String>> = stats
        .average_ratings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.name.clone(),
                format!("{:.2}", r.average),
                r.matches.to_string(),
            ]
        })
        .collect();

    let sections = [
        "SUMMARY".to_string(),
        summary,
        String::new(),
        "TOP SCORERS".to_string(),
        write_table(&["Position", "Player", "Goals", "Team"], &scorers)?,
        String::new(),
        "MAN OF THE MATCH".to_string(),
        write_table(&["Position", "Player", "Count"], &motm)?,
        String::new(),
        "AVERAGE RATINGS".to_string(),
        write_table(&["Position", "Player", "Average", "Matches"], &ratings)?,
    ];
    Ok(sections.join("\n"))
}

/// Header plus rows without a trailing newline; no rows means no output at all
fn write_table(headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers).context("Failed to write CSV header")?;
    for row in rows {
        writer.write_record(row).context("Failed to write CSV row")?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV writer")?;
    let text = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;
    Ok(text.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchDraft, Scorer, TeamPair};
    use crate::stats::compute_statistics;
    use chrono::{NaiveDate, Utc};

    fn record() -> MatchRecord {
        MatchDraft {
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            rosters: TeamPair::new(vec!["Ana".into(), "Ciro".into()], vec!["Beto, Jr".into()]),
            score: TeamPair::new(2, 1),
            scorers: TeamPair::new(
                vec![Scorer::new("Ana", 1), Scorer::new("Ciro", 1)],
                vec![Scorer::new("Beto, Jr", 1)],
            ),
            motm: "Ana".into(),
            ratings: vec![crate::domain::PlayerRating::new("Ana", 7.0)],
        }
        .into_record("m1".into(), Utc::now())
    }

    #[test]
    fn test_empty_history_renders_nothing() {
        assert_eq!(matches_csv(&[]).unwrap(), "");
    }

    #[test]
    fn test_matches_csv_rows() {
        let csv = matches_csv(&[record()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Date,White Goals,Black Goals,Result,MOTM,White Scorers,Black Scorers,White Team,Black Team"
        );
        assert_eq!(
            lines[1],
            "2024-03-07,2,1,White win,Ana,Ana; Ciro,\"Beto, Jr\",Ana; Ciro,\"Beto, Jr\""
        );
    }

    #[test]
    fn test_statistics_csv_sections() {
        let stats = compute_statistics(&[record()]);
        let csv = statistics_csv(&stats).unwrap();

        assert!(csv.starts_with("SUMMARY\nTotal Matches,White Wins,Black Wins,Draws,White Goals,Black Goals\n1,1,0,0,2,1\n\nTOP SCORERS\n"));
        assert!(csv.contains("1,Ana,1,white"));
        assert!(csv.contains("MAN OF THE MATCH\nPosition,Player,Count\n1,Ana,1"));
        assert!(csv.ends_with("AVERAGE RATINGS\nPosition,Player,Average,Matches\n1,Ana,7.00,1"));
    }

    #[test]
    fn test_statistics_csv_with_empty_tables() {
        let csv = statistics_csv(&AggregateStatistics::default()).unwrap();
        assert!(csv.contains("TOP SCORERS\n\n\nMAN OF THE MATCH"));
        assert!(csv.ends_with("AVERAGE RATINGS\n"));
    }
}
