use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::ScheduledMatch;

pub fn insert_scheduled(conn: &mut DbConn, scheduled: &ScheduledMatch) -> Result<()> {
    let sql = "INSERT INTO scheduled_matches (id, date, kickoff, venue, description, reminder, notified, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

    conn.execute(
        sql,
        params![
            scheduled.id,
            scheduled.date,
            scheduled.kickoff,
            scheduled.venue,
            scheduled.description,
            scheduled.reminder,
            scheduled.notified,
            scheduled.created_at,
        ],
    )
    .with_context(|| format!("Failed to schedule match on {}", scheduled.date))?;

    Ok(())
}

fn parse_scheduled_row(row: &rusqlite::Row) -> rusqlite::Result<ScheduledMatch> {
    Ok(ScheduledMatch {
        id: row.get(0)?,
        date: row.get(1)?,
        kickoff: row.get(2)?,
        venue: row.get(3)?,
        description: row.get(4)?,
        reminder: row.get(5)?,
        notified: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<ScheduledMatch>> {
    let sql = "SELECT id, date, kickoff, venue, description, reminder, notified, created_at FROM scheduled_matches ORDER BY date, kickoff";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_scheduled_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load scheduled matches")?;

    Ok(rows)
}

pub fn mark_notified(conn: &mut DbConn, id: &str) -> Result<bool> {
    let updated = conn
        .execute(
            "UPDATE scheduled_matches SET notified = 1 WHERE id = ?1",
            params![id],
        )
        .with_context(|| format!("Failed to mark scheduled match {id} as notified"))?;
    Ok(updated > 0)
}

pub fn delete_by_id(conn: &mut DbConn, id: &str) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM scheduled_matches WHERE id = ?1", params![id])
        .with_context(|| format!("Failed to delete scheduled match {id}"))?;
    Ok(deleted > 0)
}
