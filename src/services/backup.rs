use anyhow::{Context, Result};
use chrono::Utc;
use log::{error, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backup::{archive, BackupArchive, BackupData};
use crate::config::settings::{AppConfig, BackupSettings};
use crate::services::store::MatchStore;

/// What a restore actually wrote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSummary {
    pub matches_added: usize,
    pub matches_skipped: usize,
    pub templates_added: usize,
    pub templates_skipped: usize,
}

pub struct BackupService {
    store: MatchStore,
    archive: BackupArchive,
    settings: BackupSettings,
}

impl BackupService {
    pub fn new(store: MatchStore, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            store,
            archive: BackupArchive::new(&config.storage.backup_dir)?,
            settings: config.backup.clone(),
        })
    }

    pub fn create_backup(&self) -> Result<BackupData> {
        BackupData::new(
            self.store.snapshot()?,
            self.store.templates()?,
            self.settings.version,
            Utc::now(),
        )
    }

    /// Overwrite the local backup file with the current data
    pub fn save_local(&self) -> Result<PathBuf> {
        self.save(&self.create_backup()?)
    }

    /// Write an already built backup as the local backup file
    pub fn save(&self, backup: &BackupData) -> Result<PathBuf> {
        self.archive.save(self.settings.file_name, backup)
    }

    /// Restore from the local backup file. `None` when there is no backup yet.
    pub fn restore_local(&self) -> Result<Option<RestoreSummary>> {
        match self.archive.load(self.settings.file_name)? {
            Some(backup) => self.restore(&backup).map(Some),
            None => {
                warn!("No local backup at {}", self.archive.path_of(self.settings.file_name).display());
                Ok(None)
            }
        }
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        let backup = self.create_backup()?;
        archive::write_json(path, &backup)?;
        info!(
            "Exported backup of {} matches and {} templates to {}",
            backup.matches.len(),
            backup.templates.len(),
            path.display()
        );
        Ok(())
    }

    /// Restore from an exported file, then refresh the local backup
    pub fn import_from(&self, path: &Path) -> Result<RestoreSummary> {
        let backup = archive::read_json_opt(path)?
            .with_context(|| format!("Backup file {} not found", path.display()))?;
        let summary = self.restore(&backup)?;
        self.save_local()?;
        Ok(summary)
    }

    /// Verify a backup and add every record whose id is not stored yet.
    ///
    /// Nothing is written when the checksum does not match.
    pub fn restore(&self, backup: &BackupData) -> Result<RestoreSummary> {
        backup.verify()?;

        let mut summary = RestoreSummary::default();
        for record in &backup.matches {
            if self.store.append(record)? {
                summary.matches_added += 1;
            } else {
                summary.matches_skipped += 1;
            }
        }
        for template in &backup.templates {
            if self.store.append_template(template)? {
                summary.templates_added += 1;
            } else {
                summary.templates_skipped += 1;
            }
        }

        info!(
            "Restored backup from {}: {} matches added ({} already present), {} templates added",
            backup.timestamp, summary.matches_added, summary.matches_skipped, summary.templates_added
        );
        Ok(summary)
    }

    /// Save the local backup on a fixed interval until the task is dropped
    pub async fn run_auto_backup(self) {
        let period = Duration::from_secs(self.settings.interval_secs);
        info!("Auto-backup every {}s", period.as_secs());

        let mut ticker = tokio::time::interval(period);
        // The first tick fires immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = self.save_local() {
                error!("Auto-backup failed: {e:#}");
            }
        }
    }
}
