use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::domain::{MatchRecord, Team};
use crate::stats::AggregateStatistics;

const STYLE: &str = "body { font-family: Arial, sans-serif; margin: 20px; }
        .header { text-align: center; margin-bottom: 30px; }
        .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin-bottom: 30px; }
        .stat-card { border: 1px solid #ddd; padding: 15px; border-radius: 8px; text-align: center; }
        .stat-number { font-size: 2em; font-weight: bold; color: #2563eb; }
        table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .team-white { background-color: #f8f9fa; }
        .team-black { background-color: #343a40; color: white; }";

/// Printable HTML summary: headline numbers, the top `rows` of each
/// leaderboard and the last `rows` matches, newest first.
pub fn html_report(
    matches: &[MatchRecord],
    stats: &AggregateStatistics,
    rows: usize,
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = String::new();
    let generated = generated_at.format("%Y-%m-%d %H:%M UTC");

    // Writing into a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Futbol 8 Report - {date}</title>
    <style>
        {STYLE}
    </style>
</head>
<body>
    <div class=\"header\">
        <h1>Futbol 8 Report</h1>
        <p>Generated {generated}</p>
    </div>
",
        date = generated_at.format("%Y-%m-%d"),
    );

    html.push_str("    <div class=\"stats-grid\">\n");
    for (value, label) in [
        (u64::from(stats.total_matches), "Matches Played"),
        (u64::from(stats.white_wins), "White Wins"),
        (u64::from(stats.black_wins), "Black Wins"),
        (stats.total_goals(), "Total Goals"),
    ] {
        let _ = writeln!(
            html,
            "        <div class=\"stat-card\"><div class=\"stat-number\">{value}</div><div>{label}</div></div>"
        );
    }
    html.push_str("    </div>\n");

    html.push_str("    <h2>Top Scorers</h2>\n");
    open_table(&mut html, &["Pos", "Player", "Goals", "Team"]);
    for (i, scorer) in stats.top_scorers.iter().take(rows).enumerate() {
        let _ = writeln!(
            html,
            "            <tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            team_class(scorer.team),
            i + 1,
            escape_html(&scorer.name),
            scorer.goals,
            scorer.team
        );
    }
    close_table(&mut html);

    html.push_str("    <h2>Man of the Match</h2>\n");
    open_table(&mut html, &["Pos", "Player", "Awards"]);
    for (i, award) in stats.motm_awards.iter().take(rows).enumerate() {
        let _ = writeln!(
            html,
            "            <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1,
            escape_html(&award.name),
            award.count
        );
    }
    close_table(&mut html);

    html.push_str("    <h2>Match History</h2>\n");
    open_table(&mut html, &["Date", "Result", "MOTM"]);
    for record in matches.iter().rev().take(rows) {
        let _ = writeln!(
            html,
            "            <tr><td>{}</td><td>{} - {}</td><td>{}</td></tr>",
            record.date,
            record.score.white,
            record.score.black,
            escape_html(&record.motm)
        );
    }
    close_table(&mut html);

    html.push_str("</body>\n</html>\n");
    html
}

fn open_table(html: &mut String, headers: &[&str]) {
    html.push_str("    <table>\n        <thead>\n            <tr>");
    for header in headers {
        let _ = write!(html, "<th>{header}</th>");
    }
    html.push_str("</tr>\n        </thead>\n        <tbody>\n");
}

fn close_table(html: &mut String) {
    html.push_str("        </tbody>\n    </table>\n");
}

fn team_class(team: Team) -> &'static str {
    match team {
        Team::White => "team-white",
        Team::Black => "team-black",
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
