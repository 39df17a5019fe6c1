//! Attraction extraction: capitalised phrases that look like place names.
//!
//! This is deliberately shallow. A line that opens with a capitalised phrase
//! followed by `:`, `-`, `—`, `(` or the end of the line is taken as a
//! candidate; so is any line made of exactly two capitalised words.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `Om Beach - sunset`, `Mirjan Fort (16th c.)`, `Kudle Beach: swim`
static RE_LEADING_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Za-z0-9 &'\-.:]+?)(?::|-|—|\(|$)").unwrap());

/// `Om Beach`
static RE_TWO_WORD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+$").unwrap());

/// Phrases that match the shape but are never places.
const REJECTED_PREFIXES: [&str; 2] = ["hotel name", "breakfast"];

/// Collect up to `cap` distinct candidates from the plan sections and intro.
pub fn extract_attractions(
    generic_plan: &str,
    offbeat_plan: &str,
    intro: &str,
    cap: usize,
) -> Vec<String> {
    let candidate_text = [generic_plan, offbeat_plan, intro].join("\n");
    let mut found: Vec<String> = Vec::new();

    for line in candidate_text.lines() {
        let line = line.trim();
        if line.chars().count() < 3 {
            continue;
        }
        if let Some(name) = leading_phrase(line) {
            push_unique(&mut found, name);
        }
        if is_two_word_name(line) {
            push_unique(&mut found, line.to_string());
        }
    }

    found.truncate(cap);
    debug!("Attraction candidates: {}", found.len());
    found
}

/// The capitalised phrase opening `line`, unless it is a rejected prefix.
pub fn leading_phrase(line: &str) -> Option<String> {
    let caps = RE_LEADING_PHRASE.captures(line)?;
    let name = caps[1].trim().trim_end_matches(':').to_string();
    let lower = name.to_lowercase();
    if REJECTED_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return None;
    }
    Some(name)
}

/// True when `line` is exactly two capitalised words.
pub fn is_two_word_name(line: &str) -> bool {
    RE_TWO_WORD_NAME.is_match(line)
}

fn push_unique(found: &mut Vec<String>, name: String) {
    if !found.contains(&name) {
        found.push(name);
    }
}
