pub mod csv_tables;
pub mod json;
pub mod report;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::config::settings::ExportSettings;
use crate::domain::{MatchRecord, RosterTemplate};
use crate::stats::compute_statistics;

pub use csv_tables::{matches_csv, statistics_csv};
pub use json::full_json;
pub use report::html_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportKind {
    Matches,
    Statistics,
    Json,
    Report,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Matches => "matches",
            ExportKind::Statistics => "statistics",
            ExportKind::Json => "json",
            ExportKind::Report => "report",
        }
    }

    /// Default file name for an export produced on `date`
    pub fn file_name(&self, date: DateTime<Utc>) -> String {
        let date = date.format("%Y-%m-%d");
        match self {
            ExportKind::Matches => format!("matches-{date}.csv"),
            ExportKind::Statistics => format!("statistics-{date}.csv"),
            ExportKind::Json => format!("futbol8-complete-{date}.json"),
            ExportKind::Report => format!("futbol8-report-{date}.html"),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportKind::Matches | ExportKind::Statistics => "text/csv; charset=utf-8",
            ExportKind::Json => "application/json",
            ExportKind::Report => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "matches" => Ok(ExportKind::Matches),
            "statistics" | "stats" => Ok(ExportKind::Statistics),
            "json" => Ok(ExportKind::Json),
            "report" | "html" => Ok(ExportKind::Report),
            other => bail!("Unknown export kind: {other}"),
        }
    }
}

/// Render one export from a snapshot. Statistics are recomputed here.
pub fn render(
    kind: ExportKind,
    matches: &[MatchRecord],
    templates: &[RosterTemplate],
    settings: &ExportSettings,
    now: DateTime<Utc>,
) -> Result<String> {
    match kind {
        ExportKind::Matches => matches_csv(matches),
        ExportKind::Statistics => statistics_csv(&compute_statistics(matches)),
        ExportKind::Json => full_json(
            matches,
            templates,
            &compute_statistics(matches),
            settings.version,
            now,
        ),
        ExportKind::Report => Ok(html_report(
            matches,
            &compute_statistics(matches),
            settings.report_rows,
            now,
        )),
    }
}
