use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::models::BackupData;

/// Directory of JSON backup files
pub struct BackupArchive {
    dir: PathBuf,
}

impl BackupArchive {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create backup directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Write a backup into the archive under `file_name`
    pub fn save(&self, file_name: &str, backup: &BackupData) -> Result<PathBuf> {
        let path = self.path_of(file_name);
        write_json(&path, backup)?;
        info!("Backup written to {}", path.display());
        Ok(path)
    }

    pub fn load(&self, file_name: &str) -> Result<Option<BackupData>> {
        read_json_opt(&self.path_of(file_name))
    }
}

pub fn write_json(path: &Path, backup: &BackupData) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(backup).context("Failed to serialize backup")?;
    fs::write(path, json).with_context(|| format!("Failed to write backup file {}", path.display()))
}

pub fn read_json_opt(path: &Path) -> Result<Option<BackupData>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read backup file {}", path.display()))?;
    let data = serde_json::from_str(&json).with_context(|| {
        format!(
            "Failed to parse backup from {:?}. First 200 chars: {}",
            path,
            json.chars().take(200).collect::<String>()
        )
    })?;
    Ok(Some(data))
}
