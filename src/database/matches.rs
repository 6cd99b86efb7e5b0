use anyhow::{Context, Result};
use rusqlite::params;

use super::columns::{json_column, to_json};
use super::connection::DbConn;
use crate::domain::{MatchRecord, TeamPair};

const SELECT_COLUMNS: &str = "id, date, white_roster, black_roster, white_score, black_score, white_scorers, black_scorers, motm, ratings, created_at";

/// Insert a match unless one with the same id is already stored.
///
/// Returns whether a row was written.
pub fn insert_match(conn: &mut DbConn, record: &MatchRecord) -> Result<bool> {
    let sql = "INSERT OR IGNORE INTO matches (id, date, white_roster, black_roster, white_score, black_score, white_scorers, black_scorers, motm, ratings, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

    let written = conn
        .execute(
            sql,
            params![
                record.id,
                record.date,
                to_json(&record.rosters.white)?,
                to_json(&record.rosters.black)?,
                record.score.white,
                record.score.black,
                to_json(&record.scorers.white)?,
                to_json(&record.scorers.black)?,
                record.motm,
                to_json(&record.ratings)?,
                record.created_at,
            ],
        )
        .with_context(|| format!("Failed to insert match {}", record.id))?;

    Ok(written == 1)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        rosters: TeamPair::new(json_column(row, 2)?, json_column(row, 3)?),
        score: TeamPair::new(row.get(4)?, row.get(5)?),
        scorers: TeamPair::new(json_column(row, 6)?, json_column(row, 7)?),
        motm: row.get(8)?,
        ratings: json_column(row, 9)?,
        created_at: row.get(10)?,
    })
}

/// All matches in insertion order
pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchRecord>> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM matches ORDER BY seq");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load matches")?;

    Ok(rows)
}

pub fn delete_by_id(conn: &mut DbConn, id: &str) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM matches WHERE id = ?1", params![id])
        .with_context(|| format!("Failed to delete match {id}"))?;
    Ok(deleted > 0)
}
