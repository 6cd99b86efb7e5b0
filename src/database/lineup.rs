use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::columns::{json_column, to_json};
use super::connection::DbConn;
use crate::domain::Lineup;

/// Replace the single stored lineup
pub fn save_lineup(conn: &mut DbConn, lineup: &Lineup) -> Result<()> {
    let sql = "INSERT INTO current_lineup (id, white_roster, black_roster, created_at) VALUES (1, ?1, ?2, ?3) ON CONFLICT(id) DO UPDATE SET white_roster = excluded.white_roster, black_roster = excluded.black_roster, created_at = excluded.created_at";

    conn.execute(
        sql,
        params![to_json(&lineup.white)?, to_json(&lineup.black)?, lineup.created_at],
    )
    .context("Failed to save current lineup")?;

    Ok(())
}

pub fn load_lineup(conn: &mut DbConn) -> Result<Option<Lineup>> {
    let sql = "SELECT white_roster, black_roster, created_at FROM current_lineup WHERE id = 1";

    conn.query_row(sql, [], |row| {
        Ok(Lineup {
            white: json_column(row, 0)?,
            black: json_column(row, 1)?,
            created_at: row.get(2)?,
        })
    })
    .optional()
    .context("Failed to load current lineup")
}
