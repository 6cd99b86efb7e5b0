use anyhow::{Context, Result};
use rusqlite::params;

use super::columns::{json_column, to_json};
use super::connection::DbConn;
use crate::domain::RosterTemplate;

pub fn insert_template(conn: &mut DbConn, template: &RosterTemplate) -> Result<bool> {
    let sql = "INSERT OR IGNORE INTO roster_templates (id, name, white_roster, black_roster, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";

    let written = conn
        .execute(
            sql,
            params![
                template.id,
                template.name,
                to_json(&template.white)?,
                to_json(&template.black)?,
                template.created_at,
            ],
        )
        .with_context(|| format!("Failed to insert template {}", template.name))?;

    Ok(written == 1)
}

fn parse_template_row(row: &rusqlite::Row) -> rusqlite::Result<RosterTemplate> {
    Ok(RosterTemplate {
        id: row.get(0)?,
        name: row.get(1)?,
        white: json_column(row, 2)?,
        black: json_column(row, 3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<RosterTemplate>> {
    let sql = "SELECT id, name, white_roster, black_roster, created_at FROM roster_templates ORDER BY seq";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_template_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load roster templates")?;

    Ok(rows)
}

pub fn delete_by_id(conn: &mut DbConn, id: &str) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM roster_templates WHERE id = ?1", params![id])
        .with_context(|| format!("Failed to delete template {id}"))?;
    Ok(deleted > 0)
}
