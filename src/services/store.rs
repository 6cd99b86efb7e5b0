use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::settings::RosterSettings;
use crate::database::{self, DbPool};
use crate::domain::{
    validate_match, validate_template, Lineup, MatchDraft, MatchRecord, NewScheduledMatch,
    RosterTemplate, ScheduledMatch, TeamPair,
};
use crate::stats::{compute_statistics, AggregateStatistics};

/// Persistent home of the match history, roster templates, the lineup being
/// prepared and the calendar.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct MatchStore {
    pool: DbPool,
}

impl MatchStore {
    pub fn open(database_path: &str) -> Result<Self> {
        info!("Opening match store at {}", database_path);
        Self::with_pool(database::create_pool(database_path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::with_pool(database::create_memory_pool()?)
    }

    fn with_pool(pool: DbPool) -> Result<Self> {
        let mut conn = database::get_connection(&pool)?;
        database::initialize_database(&mut conn)?;
        drop(conn);
        Ok(Self { pool })
    }

    fn conn(&self) -> Result<database::DbConn> {
        database::get_connection(&self.pool)
    }

    // --- Matches ---

    /// Every stored match in insertion order
    pub fn snapshot(&self) -> Result<Vec<MatchRecord>> {
        let matches = database::matches::list_all(&mut self.conn()?)?;
        debug!("Loaded snapshot of {} matches", matches.len());
        Ok(matches)
    }

    pub fn statistics(&self) -> Result<AggregateStatistics> {
        Ok(compute_statistics(&self.snapshot()?))
    }

    /// Validate a finished match, give it an identity and persist it.
    ///
    /// A rule violation comes back as a [`crate::domain::ValidationError`]
    /// inside the returned error.
    pub fn record_match(&self, draft: MatchDraft, rules: &RosterSettings) -> Result<MatchRecord> {
        if let Err(e) = validate_match(&draft, rules) {
            warn!("Rejected match of {}: {}", draft.date, e);
            return Err(e.into());
        }

        let record = draft.into_record(Uuid::new_v4().to_string(), Utc::now());
        database::matches::insert_match(&mut self.conn()?, &record)?;
        info!("Match of {} saved ({} - {})", record.date, record.score.white, record.score.black);
        Ok(record)
    }

    /// Store an already identified match. Returns false when the id exists.
    pub fn append(&self, record: &MatchRecord) -> Result<bool> {
        database::matches::insert_match(&mut self.conn()?, record)
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        let removed = database::matches::delete_by_id(&mut self.conn()?, id)?;
        if removed {
            info!("Match {} removed", id);
        }
        Ok(removed)
    }

    // --- Templates ---

    pub fn templates(&self) -> Result<Vec<RosterTemplate>> {
        database::templates::list_all(&mut self.conn()?)
    }

    pub fn save_template(
        &self,
        name: &str,
        rosters: TeamPair<Vec<String>>,
        rules: &RosterSettings,
    ) -> Result<RosterTemplate> {
        validate_template(name, &rosters, rules)?;

        let template = RosterTemplate {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            white: rosters.white,
            black: rosters.black,
            created_at: Utc::now(),
        };
        database::templates::insert_template(&mut self.conn()?, &template)?;
        info!("Template '{}' saved", template.name);
        Ok(template)
    }

    pub fn append_template(&self, template: &RosterTemplate) -> Result<bool> {
        database::templates::insert_template(&mut self.conn()?, template)
    }

    pub fn delete_template(&self, id: &str) -> Result<bool> {
        database::templates::delete_by_id(&mut self.conn()?, id)
    }

    // --- Current lineup ---

    pub fn current_lineup(&self) -> Result<Option<Lineup>> {
        database::lineup::load_lineup(&mut self.conn()?)
    }

    /// Replace the lineup being prepared; blank names are dropped
    pub fn save_current_lineup(&self, white: Vec<String>, black: Vec<String>) -> Result<Lineup> {
        let lineup = Lineup {
            white: non_blank(white),
            black: non_blank(black),
            created_at: Utc::now(),
        };
        database::lineup::save_lineup(&mut self.conn()?, &lineup)?;
        debug!(
            "Current lineup saved ({} white, {} black)",
            lineup.white.len(),
            lineup.black.len()
        );
        Ok(lineup)
    }

    // --- Calendar ---

    pub fn scheduled(&self) -> Result<Vec<ScheduledMatch>> {
        database::schedule::list_all(&mut self.conn()?)
    }

    pub fn schedule(&self, new: NewScheduledMatch) -> Result<ScheduledMatch> {
        let scheduled = ScheduledMatch {
            id: Uuid::new_v4().to_string(),
            date: new.date,
            kickoff: new.kickoff,
            venue: new.venue,
            description: new.description,
            reminder: new.reminder,
            notified: false,
            created_at: Utc::now(),
        };
        database::schedule::insert_scheduled(&mut self.conn()?, &scheduled)?;
        info!("Match scheduled for {} {} at {}", scheduled.date, scheduled.kickoff, scheduled.venue);
        Ok(scheduled)
    }

    pub fn remove_scheduled(&self, id: &str) -> Result<bool> {
        database::schedule::delete_by_id(&mut self.conn()?, id)
    }

    pub fn mark_notified(&self, id: &str) -> Result<bool> {
        database::schedule::mark_notified(&mut self.conn()?, id)
    }
}

fn non_blank(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
