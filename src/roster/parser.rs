use anyhow::{bail, Context, Result};
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::IGNORE_WORDS;

static DEFAULT_PARSER: LazyLock<RosterParser> = LazyLock::new(RosterParser::default);

/// Extract player names from pasted text using the built-in ignore words
pub fn parse_roster(text: &str) -> Vec<String> {
    DEFAULT_PARSER.parse(text)
}

/// Best-effort extraction of player names from chat-style roster text
pub struct RosterParser {
    ignore_words: Vec<IgnoreWord>,
    digits_only: Regex,
    numbered_line: Regex,
}

struct IgnoreWord {
    word: String,
    /// Whole-word matcher with ASCII word boundaries
    pattern: regex::bytes::Regex,
}

impl RosterParser {
    /// Ignore words must be ASCII; they are matched with ASCII word boundaries.
    pub fn new<S: AsRef<str>>(ignore_words: &[S]) -> Result<Self> {
        let ignore_words = ignore_words
            .iter()
            .map(|w| Self::compile_ignore_word(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ignore_words,
            digits_only: Self::compile_regex(r"^[0-9]+$")?,
            numbered_line: Self::compile_regex(r"^[0-9]+\s*(.+)")?,
        })
    }

    pub fn parse(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut players: Vec<String> = Vec::new();

        for line in text.split('\n') {
            let clean = line.trim().to_lowercase();

            if self.should_skip(&clean) {
                continue;
            }

            match self.numbered_line.captures(&clean) {
                Some(captures) => {
                    let raw = captures.get(1).map_or("", |m| m.as_str());
                    if let Some(name) = self.clean_name(raw) {
                        players.push(name);
                    }
                }
                None => {
                    if let Some(name) = self.clean_name(&clean) {
                        if !players.contains(&name) {
                            players.push(name);
                        }
                    }
                }
            }
        }

        let players = dedup_preserving_order(players);
        debug!("Parsed {} players from roster text", players.len());
        players
    }

    fn should_skip(&self, clean: &str) -> bool {
        clean.is_empty()
            || self.digits_only.is_match(clean)
            || self.ignore_words.iter().any(|w| clean.starts_with(&w.word))
    }

    fn clean_name(&self, raw: &str) -> Option<String> {
        let mut name = raw.trim().to_string();
        for ignore in &self.ignore_words {
            name = ignore.strip(&name);
        }

        let name = title_case(&name);
        // Length in UTF-16 units, so a lone emoji still counts as a name
        (name.encode_utf16().count() > 1).then_some(name)
    }

    fn compile_ignore_word(word: &str) -> Result<IgnoreWord> {
        let word = word.to_lowercase();
        if !word.is_ascii() {
            bail!("Ignore word {word:?} is not ASCII");
        }
        let pattern = regex::bytes::Regex::new(&format!(r"(?i-u)\b{}\b", regex::escape(&word)))
            .with_context(|| format!("Failed to compile ignore word pattern for {word:?}"))?;

        Ok(IgnoreWord {
            word,
            pattern,
        })
    }

    fn compile_regex(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).with_context(|| format!("Failed to compile roster regex {pattern}"))
    }
}

impl Default for RosterParser {
    fn default() -> Self {
        Self::new(IGNORE_WORDS).expect("Failed to compile built-in ignore words")
    }
}

impl IgnoreWord {
    /// Remove every whole-word occurrence, then trim
    fn strip(&self, name: &str) -> String {
        let stripped = self.pattern.replace_all(name.as_bytes(), &b""[..]);
        // Ignore words are ASCII, so the remaining bytes stay valid UTF-8
        String::from_utf8_lossy(&stripped).trim().to_string()
    }
}

/// Upper-case the first character of every space-separated token
fn title_case(name: &str) -> String {
    name.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
