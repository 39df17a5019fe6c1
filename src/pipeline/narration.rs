//! Narration stripping: drop lines that describe tool calls.
//!
//! Agents leak scaffolding such as "Call the get_weather function" into their
//! answers. Those lines carry no itinerary content and would otherwise be
//! picked up as attractions or break day grouping.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{join_lines, word_count};

static RE_CALL_THE_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)call the [a-zA-Z0-9_]+ function").unwrap());

// Case-sensitive: "use" in running prose is common, "Use" opening a short
// instruction is not.
static RE_IMPERATIVE_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:Call|Use|Invoke)\b").unwrap());

/// Remove narration lines and trim the result. Line order is preserved.
pub fn strip_narration(text: &str, word_limit: usize) -> String {
    join_lines(
        text.lines()
            .filter(|line| !is_tool_narration_line(line.trim(), word_limit)),
    )
    .trim()
    .to_string()
}

/// True when a trimmed line narrates a tool invocation rather than the trip.
pub fn is_tool_narration_line(line: &str, word_limit: usize) -> bool {
    if RE_CALL_THE_FUNCTION.is_match(line) {
        return true;
    }
    RE_IMPERATIVE_VERB.is_match(line) && word_count(line) < word_limit
}
