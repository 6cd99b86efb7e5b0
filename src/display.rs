use colored::{ColoredString, Colorize};

use crate::domain::{Lineup, MatchRecord, Outcome, RosterTemplate, ScheduledMatch, Team, POSITIONS};
use crate::services::backup::RestoreSummary;
use crate::stats::AggregateStatistics;

fn team_label(team: Team) -> ColoredString {
    match team {
        Team::White => "White".bold(),
        Team::Black => "Black".bold().dimmed(),
    }
}

fn heading(text: &str) -> ColoredString {
    text.bold().underline()
}

pub fn print_players(players: &[String]) {
    if players.is_empty() {
        println!("{}", "No players found".yellow());
        return;
    }
    for (i, player) in players.iter().enumerate() {
        println!("{:>3}. {}", i + 1, player);
    }
    println!("{}", format!("{} players", players.len()).dimmed());
}

pub fn print_lineup(lineup: &Lineup) {
    println!("{}", heading("Current lineup"));
    let rows = lineup.white.len().max(lineup.black.len()).max(POSITIONS.len());
    println!("{:<14} {:<22} {:<22}", "", team_label(Team::White), team_label(Team::Black));
    for i in 0..rows {
        let position = POSITIONS.get(i).copied().unwrap_or("Bench");
        let white = lineup.white.get(i).map(String::as_str).unwrap_or("-");
        let black = lineup.black.get(i).map(String::as_str).unwrap_or("-");
        println!("{:<14} {:<22} {:<22}", position.dimmed(), white, black);
    }
}

pub fn print_bench(players: &[&str]) {
    if !players.is_empty() {
        println!("{} {}", "Unassigned:".yellow(), players.join(", "));
    }
}

pub fn print_matches(matches: &[MatchRecord]) {
    if matches.is_empty() {
        println!("{}", "No matches recorded yet".yellow());
        return;
    }
    for record in matches {
        let result = match record.outcome() {
            Outcome::Win(team) => format!("{} win", team_label(team)),
            Outcome::Draw => "Draw".cyan().to_string(),
        };
        println!(
            "{}  {} {} - {} {}  {:<12} MOTM: {}  {}",
            record.date,
            "White".bold(),
            record.score.white,
            record.score.black,
            "Black".bold().dimmed(),
            result,
            record.motm.green(),
            record.id.dimmed()
        );
    }
}

pub fn print_statistics(stats: &AggregateStatistics) {
    println!("{}", heading("Summary"));
    println!("  Matches played: {}", stats.total_matches.to_string().bold());
    for team in Team::ALL {
        let record = stats.team_record(team);
        println!(
            "  {:<6} W {}  D {}  L {}  GF {}  GA {}",
            team_label(team),
            record.wins.to_string().green(),
            record.draws,
            record.losses.to_string().red(),
            record.goals_for,
            record.goals_against
        );
    }

    println!("\n{}", heading("Top scorers"));
    if stats.top_scorers.is_empty() {
        println!("  {}", "-".dimmed());
    }
    for (i, scorer) in stats.top_scorers.iter().enumerate() {
        println!("  {:>3}. {:<24} {:>3}  {}", i + 1, scorer.name, scorer.goals, team_label(scorer.team));
    }

    println!("\n{}", heading("Man of the match"));
    if stats.motm_awards.is_empty() {
        println!("  {}", "-".dimmed());
    }
    for (i, award) in stats.motm_awards.iter().enumerate() {
        println!("  {:>3}. {:<24} {:>3}", i + 1, award.name, award.count);
    }

    println!("\n{}", heading("Average ratings"));
    if stats.average_ratings.is_empty() {
        println!("  {}", "-".dimmed());
    }
    for (i, rating) in stats.average_ratings.iter().enumerate() {
        println!(
            "  {:>3}. {:<24} {:>5.2}  ({} matches)",
            i + 1,
            rating.name,
            rating.average,
            rating.matches
        );
    }
}

pub fn print_templates(templates: &[RosterTemplate]) {
    if templates.is_empty() {
        println!("{}", "No templates saved".yellow());
        return;
    }
    for template in templates {
        println!("{}  {}", template.name.bold(), template.id.dimmed());
        println!("  {}: {}", team_label(Team::White), template.white.join(", "));
        println!("  {}: {}", team_label(Team::Black), template.black.join(", "));
    }
}

pub fn print_scheduled(matches: &[ScheduledMatch]) {
    if matches.is_empty() {
        println!("{}", "Nothing scheduled".yellow());
        return;
    }
    for scheduled in matches {
        let reminder = if scheduled.notified {
            "notified".dimmed()
        } else if scheduled.reminder {
            "reminder on".green()
        } else {
            "no reminder".dimmed()
        };
        println!(
            "{} {}  {}  {}  {}",
            scheduled.date.to_string().bold(),
            scheduled.kickoff.format("%H:%M"),
            scheduled.venue,
            reminder,
            scheduled.id.dimmed()
        );
        if let Some(description) = &scheduled.description {
            println!("  {}", description.dimmed());
        }
    }
}

pub fn print_restore_summary(summary: &RestoreSummary) {
    println!(
        "{} {} matches added, {} already present; {} templates added, {} already present",
        "Restored:".green().bold(),
        summary.matches_added,
        summary.matches_skipped,
        summary.templates_added,
        summary.templates_skipped
    );
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}
