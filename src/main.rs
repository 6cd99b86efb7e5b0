use anyhow::Result;

use futbol8::cli::Command;
use futbol8::{
    handle_backup, handle_completions, handle_export, handle_lineup, handle_match, handle_roster,
    handle_schedule, handle_serve, handle_stats, handle_template, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Roster { action } => handle_roster(action),
        Command::Lineup { action } => handle_lineup(action),
        Command::Match { action } => handle_match(action),
        Command::Stats { json } => handle_stats(*json),
        Command::Export { kind, output } => handle_export(*kind, output.as_deref()),
        Command::Backup { action } => handle_backup(action),
        Command::Template { action } => handle_template(action),
        Command::Schedule { action } => handle_schedule(action),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
