use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::checksum::checksum;
use crate::domain::{MatchRecord, RosterTemplate};

/// Serialized snapshot of the match history and templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub matches: Vec<MatchRecord>,
    pub templates: Vec<RosterTemplate>,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub checksum: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackupError {
    #[error("backup is corrupt: checksum {found} does not match content ({expected})")]
    ChecksumMismatch { expected: String, found: String },
}

/// The part of a backup the checksum covers, in field order
#[derive(Serialize)]
struct Payload<'a> {
    matches: &'a [MatchRecord],
    templates: &'a [RosterTemplate],
}

impl BackupData {
    pub fn new(
        matches: Vec<MatchRecord>,
        templates: Vec<RosterTemplate>,
        version: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let checksum = payload_checksum(&matches, &templates)?;
        Ok(Self {
            matches,
            templates,
            version: version.to_string(),
            timestamp,
            checksum,
        })
    }

    /// Fail unless the stored checksum matches the content
    pub fn verify(&self) -> Result<()> {
        let expected = payload_checksum(&self.matches, &self.templates)?;
        if expected != self.checksum {
            return Err(BackupError::ChecksumMismatch {
                expected,
                found: self.checksum.clone(),
            }
            .into());
        }
        Ok(())
    }
}

fn payload_checksum(matches: &[MatchRecord], templates: &[RosterTemplate]) -> Result<String> {
    let json = serde_json::to_string(&Payload { matches, templates })
        .context("Failed to serialize backup payload")?;
    Ok(checksum(&json))
}
