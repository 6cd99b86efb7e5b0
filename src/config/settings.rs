use chrono::Weekday;

use crate::config::ignore_words::IGNORE_WORDS;

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
    pub backup_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "futbol8.db".to_string()),
            backup_dir: std::env::var("BACKUP_DIR").unwrap_or_else(|_| "backups".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackupSettings {
    pub interval_secs: u64,
    pub file_name: &'static str,
    pub version: &'static str,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            interval_secs: 5 * 60,
            file_name: "futbol-backup.json",
            version: "1.0.0",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub match_day: Weekday,
    pub kickoff_hour: u32,
    pub default_venue: &'static str,
    pub default_description: &'static str,
    pub reminder_lead_minutes: i64,
    pub reminder_check_secs: u64,
    pub upcoming_limit: usize,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            match_day: Weekday::Thu,
            kickoff_hour: 20,
            default_venue: "SB5, Parque Sarmiento",
            default_description: "Weekly 8-a-side match",
            reminder_lead_minutes: 60,
            reminder_check_secs: 60,
            upcoming_limit: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RosterSettings {
    pub team_size: usize,
    pub min_rating: f64,
    pub max_rating: f64,
    pub ignore_words: Vec<String>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            team_size: 8,
            min_rating: 1.0,
            max_rating: 10.0,
            ignore_words: IGNORE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub report_rows: usize,
    pub version: &'static str,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            report_rows: 10,
            version: "1.0.0",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub backup: BackupSettings,
    pub calendar: CalendarSettings,
    pub roster: RosterSettings,
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            storage: StorageSettings::default(),
            backup: BackupSettings::default(),
            calendar: CalendarSettings::default(),
            roster: RosterSettings::default(),
            export: ExportSettings::default(),
        }
    }
}
