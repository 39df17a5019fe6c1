//! Tool-mention extraction: cut the trailing "Tools Used" block.
//!
//! Agents often close with a debug list of the capabilities they invoked.
//! Everything from the first "Tools Used" to the end of the text is removed
//! from the working copy; the short lines inside it become tool names.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::word_count;

static RE_TOOLS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bTools Used\b").unwrap());

static RE_INVOCATION_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:call|use|invoke)\b").unwrap());

/// Remove the "Tools Used" trailer from `text`.
///
/// Returns the remaining text (right-trimmed) and the deduplicated tool names
/// in first-seen order. Without a trailer the text is returned unchanged.
pub fn extract_tools(text: &str, max_words: usize) -> (String, Vec<String>) {
    let Some(m) = RE_TOOLS_HEADING.find(text) else {
        return (text.to_string(), Vec::new());
    };

    let remaining = text[..m.start()].trim_end().to_string();
    let block = &text[m.start()..];

    let mut tools: Vec<String> = Vec::new();
    for line in block.lines().skip(1) {
        let line = line.trim();
        if !is_tool_candidate(line, max_words) {
            continue;
        }
        if !tools.iter().any(|t| t == line) {
            tools.push(line.to_string());
        }
    }

    debug!("Tools block at byte {}: {} tool(s)", m.start(), tools.len());
    (remaining, tools)
}

/// A trimmed line under "Tools Used" names a tool when it is short, has no
/// `label: value` shape, and does not narrate an invocation.
pub fn is_tool_candidate(line: &str, max_words: usize) -> bool {
    if line.is_empty() || line.contains(':') {
        return false;
    }
    if RE_INVOCATION_VERB.is_match(line) {
        return false;
    }
    word_count(line) <= max_words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tools_block_passthrough() {
        let (rest, tools) = extract_tools("Day 1\nBeach", 4);
        assert_eq!(rest, "Day 1\nBeach");
        assert!(tools.is_empty());
    }

    #[test]
    fn test_tools_block_removed() {
        let input = "Plan: visit X.\nTools Used\nWeb Search\nCall the search function";
        let (rest, tools) = extract_tools(input, 4);
        assert_eq!(rest, "Plan: visit X.");
        assert_eq!(tools, vec!["Web Search"]);
    }

    #[test]
    fn test_heading_case_insensitive() {
        let (rest, tools) = extract_tools("Intro\n\ntools used:\nWeather API\n", 4);
        assert_eq!(rest, "Intro");
        assert_eq!(tools, vec!["Weather API"]);
    }

    #[test]
    fn test_dedupe_preserves_order() {
        let input = "x\nTools Used\nSearch\nMaps\nSearch\n  Maps  \nCurrency";
        let (_, tools) = extract_tools(input, 4);
        assert_eq!(tools, vec!["Search", "Maps", "Currency"]);
    }

    #[test]
    fn test_long_and_colon_lines_skipped() {
        let input = "Tools Used\nthis line has far too many words\nsource: web\nGeo";
        let (rest, tools) = extract_tools(input, 4);
        assert_eq!(rest, "");
        assert_eq!(tools, vec!["Geo"]);
    }

    #[test]
    fn test_candidate_rejects_invocation_words() {
        assert!(!is_tool_candidate("Use maps", 4));
        assert!(!is_tool_candidate("INVOKE search", 4));
        assert!(is_tool_candidate("User Reviews", 4));
    }
}
