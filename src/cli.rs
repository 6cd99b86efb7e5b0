use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::export::ExportKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Roster parsing and statistics for the weekly 8-a-side game")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server with auto-backup and match reminders
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Work with pasted roster text
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
    /// Prepare the White and Black lineup for the next match
    Lineup {
        #[command(subcommand)]
        action: LineupAction,
    },
    /// Record, list and remove played matches
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },
    /// Show standings and leaderboards
    Stats {
        /// Print the raw statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export matches, statistics or a report
    Export {
        #[arg(value_enum)]
        kind: ExportKind,
        /// Output file (defaults to a dated file name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Save, restore, export and import backups
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },
    /// Manage saved roster templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
    /// Manage the match calendar
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum RosterAction {
    /// Extract player names from roster text (stdin when no file is given)
    Parse {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum LineupAction {
    /// Set the lineup from explicit names or from roster text
    Set {
        /// Roster text to split into teams (stdin when no names are given)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// White players, comma separated
        #[arg(long, value_delimiter = ',')]
        white: Vec<String>,
        /// Black players, comma separated
        #[arg(long, value_delimiter = ',')]
        black: Vec<String>,
    },
    /// Show the current lineup
    Show,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum MatchAction {
    /// Record a finished match from a JSON file (stdin when no file is given)
    Record {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List every recorded match
    List,
    /// Remove a match by id
    Remove { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum BackupAction {
    /// Write the local backup file
    Save,
    /// Restore from the local backup file
    Restore,
    /// Write a backup to the given path
    Export { path: PathBuf },
    /// Restore from a backup file
    Import { path: PathBuf },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TemplateAction {
    /// Save rosters as a template (the current lineup when no names are given)
    Save {
        name: String,
        #[arg(long, value_delimiter = ',')]
        white: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        black: Vec<String>,
    },
    /// List saved templates
    List,
    /// Delete a template by id
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ScheduleAction {
    /// Schedule a match (the next regular match day when no date is given)
    Add {
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Kick-off time, HH:MM:SS
        #[arg(long)]
        time: Option<NaiveTime>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Do not send a reminder before kick-off
        #[arg(long)]
        no_reminder: bool,
    },
    /// Show the next regular match day
    Next,
    /// List upcoming scheduled matches
    Upcoming,
    /// List matches scheduled for today
    Today,
    /// Remove a scheduled match by id
    Remove { id: String },
}
