pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod database;
pub mod display;
pub mod domain;
pub mod export;
pub mod roster;
pub mod services;
pub mod stats;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use cli::Cli;
use log::{info, warn};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::{BackupAction, Command, LineupAction, MatchAction, RosterAction, ScheduleAction, TemplateAction};
use crate::config::settings::AppConfig;
use crate::domain::{LineupBuilder, MatchDraft, NewScheduledMatch, Team, TeamPair};
use crate::export::ExportKind;
use crate::roster::RosterParser;
use crate::services::backup::BackupService;
use crate::services::calendar::CalendarService;
use crate::services::server::ServerService;
use crate::services::store::MatchStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_store(config: &AppConfig) -> Result<MatchStore> {
    MatchStore::open(&config.storage.database_path)
}

/// Contents of `file`, or all of stdin when no file is given
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_roster(action: &RosterAction) -> Result<()> {
    let config = AppConfig::new();
    match action {
        RosterAction::Parse { file } => {
            let parser = RosterParser::new(&config.roster.ignore_words)?;
            let players = parser.parse(&read_input(file.as_deref())?);
            display::print_players(&players);
            Ok(())
        }
    }
}

/// Split a roster into teams: the first players in order go to White and
/// the rest fill Black when exactly a team's worth remains.
pub fn split_into_teams(players: Vec<String>) -> LineupBuilder {
    let mut builder = LineupBuilder::new(players.clone());
    fill_team(&mut builder, Team::White, &players);

    if !builder.auto_complete() {
        let free: Vec<String> = builder.free_players().into_iter().map(String::from).collect();
        fill_team(&mut builder, Team::Black, &free);
    }
    builder
}

/// Place players into consecutive positions, skipping any the builder refuses
fn fill_team(builder: &mut LineupBuilder, team: Team, players: &[String]) {
    let mut position = 0;
    for player in players {
        if position == domain::POSITIONS.len() {
            break;
        }
        match builder.assign(team, position, player) {
            Ok(()) => position += 1,
            Err(e) => warn!("Skipping {player} for {team}: {e}"),
        }
    }
}

pub fn handle_lineup(action: &LineupAction) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;

    match action {
        LineupAction::Set { file, white, black } => {
            let rosters = if white.is_empty() && black.is_empty() {
                let parser = RosterParser::new(&config.roster.ignore_words)?;
                let players = parser.parse(&read_input(file.as_deref())?);
                if players.is_empty() {
                    bail!("No players found in roster text");
                }
                let builder = split_into_teams(players);
                display::print_bench(&builder.free_players());
                builder.rosters()
            } else {
                TeamPair::new(white.clone(), black.clone())
            };

            let lineup = store.save_current_lineup(rosters.white, rosters.black)?;
            display::print_lineup(&lineup);
            Ok(())
        }
        LineupAction::Show => {
            match store.current_lineup()? {
                Some(lineup) => display::print_lineup(&lineup),
                None => display::warning("No lineup saved yet"),
            }
            Ok(())
        }
    }
}

pub fn handle_match(action: &MatchAction) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;

    match action {
        MatchAction::Record { file } => {
            let draft: MatchDraft = serde_json::from_str(&read_input(file.as_deref())?)
                .context("Failed to parse match JSON")?;
            let record = store.record_match(draft, &config.roster)?;
            display::success(&format!(
                "Match of {} saved ({} - {}), id {}",
                record.date, record.score.white, record.score.black, record.id
            ));
            Ok(())
        }
        MatchAction::List => {
            display::print_matches(&store.snapshot()?);
            Ok(())
        }
        MatchAction::Remove { id } => {
            if !store.remove(id)? {
                bail!("No match with id {id}");
            }
            display::success(&format!("Match {id} removed"));
            Ok(())
        }
    }
}

pub fn handle_stats(json: bool) -> Result<()> {
    let config = AppConfig::new();
    let stats = open_store(&config)?.statistics()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_statistics(&stats);
    }
    Ok(())
}

pub fn handle_export(kind: ExportKind, output: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;
    let now = Utc::now();

    let content = export::render(kind, &store.snapshot()?, &store.templates()?, &config.export, now)?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(kind.file_name(now)));

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("{} export written to {}", kind, path.display());
    display::success(&format!("Exported {} to {}", kind, path.display()));
    Ok(())
}

pub fn handle_backup(action: &BackupAction) -> Result<()> {
    let config = AppConfig::new();
    let service = BackupService::new(open_store(&config)?, &config)?;

    match action {
        BackupAction::Save => {
            let path = service.save_local()?;
            display::success(&format!("Backup saved to {}", path.display()));
        }
        BackupAction::Restore => match service.restore_local()? {
            Some(summary) => display::print_restore_summary(&summary),
            None => display::warning("No local backup found"),
        },
        BackupAction::Export { path } => {
            service.export_to(path)?;
            display::success(&format!("Backup exported to {}", path.display()));
        }
        BackupAction::Import { path } => {
            let summary = service.import_from(path)?;
            display::print_restore_summary(&summary);
        }
    }
    Ok(())
}

pub fn handle_template(action: &TemplateAction) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;

    match action {
        TemplateAction::Save { name, white, black } => {
            let rosters = if white.is_empty() && black.is_empty() {
                let lineup = store
                    .current_lineup()?
                    .context("No names given and no current lineup to save")?;
                TeamPair::new(lineup.white, lineup.black)
            } else {
                TeamPair::new(white.clone(), black.clone())
            };

            let template = store.save_template(name, rosters, &config.roster)?;
            display::success(&format!("Template '{}' saved, id {}", template.name, template.id));
        }
        TemplateAction::List => display::print_templates(&store.templates()?),
        TemplateAction::Delete { id } => {
            if !store.delete_template(id)? {
                bail!("No template with id {id}");
            }
            display::success(&format!("Template {id} deleted"));
        }
    }
    Ok(())
}

pub fn handle_schedule(action: &ScheduleAction) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;
    let calendar = CalendarService::new(store.clone(), config.calendar.clone());
    let now = CalendarService::now();

    match action {
        ScheduleAction::Add { date, time, venue, description, no_reminder } => {
            let scheduled = store.schedule(NewScheduledMatch {
                date: date.unwrap_or_else(|| calendar.next_match_day(now)),
                kickoff: time.unwrap_or_else(|| calendar.default_kickoff()),
                venue: venue
                    .clone()
                    .unwrap_or_else(|| config.calendar.default_venue.to_string()),
                description: description
                    .clone()
                    .or_else(|| Some(config.calendar.default_description.to_string())),
                reminder: !no_reminder,
            })?;
            display::print_scheduled(&[scheduled]);
        }
        ScheduleAction::Next => {
            println!("Next match day: {}", calendar.next_match_day(now));
        }
        ScheduleAction::Upcoming => display::print_scheduled(&calendar.upcoming(now)?),
        ScheduleAction::Today => display::print_scheduled(&calendar.today(now)?),
        ScheduleAction::Remove { id } => {
            if !store.remove_scheduled(id)? {
                bail!("No scheduled match with id {id}");
            }
            display::success(&format!("Scheduled match {id} removed"));
        }
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_split_full_roster() {
        let builder = split_into_teams(players(16));
        let rosters = builder.rosters();

        assert_eq!(rosters.white, players(8));
        assert_eq!(rosters.black, players(16)[8..].to_vec());
        assert!(builder.free_players().is_empty());
    }

    #[test]
    fn test_split_short_roster() {
        let builder = split_into_teams(players(11));
        let rosters = builder.rosters();

        assert_eq!(rosters.white.len(), 8);
        assert_eq!(rosters.black, vec!["P9", "P10", "P11"]);
    }

    #[test]
    fn test_split_long_roster_leaves_bench() {
        let builder = split_into_teams(players(18));

        assert_eq!(builder.rosters().black.len(), 8);
        assert_eq!(builder.free_players(), vec!["P17", "P18"]);
    }

    #[test]
    fn test_split_skips_repeated_names_without_gaps() {
        let mut roster = players(9);
        roster.insert(1, "P1".to_string());

        let builder = split_into_teams(roster);
        let rosters = builder.rosters();

        assert_eq!(rosters.white, players(8));
        assert_eq!(rosters.black, vec!["P9"]);
    }
}
