//! Day-by-day splitting: group plan lines under "Day N" markers.
//!
//! The primary pass walks the plan sections and intro line by line. When it
//! finds nothing, a fallback looks for a "Day-by-Day" label in the intro and
//! splits the intro at multiline day markers instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::join_lines;
use crate::output::DayEntry;

/// "Day 1", "day 02:", "D3 -", "Day5" …
static RE_DAY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:Day|D)\s*0*\d+\b").unwrap());

static RE_DAY_BY_DAY_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Day-?by-?Day|Day by Day|Day-by Day").unwrap());

/// Line starts where the fallback splits the intro. Only the long "Day" form
/// counts here.
static RE_DAY_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*Day\s*0*\d+\b").unwrap());

/// True when `line` opens a new itinerary day.
pub fn is_day_marker_line(line: &str) -> bool {
    RE_DAY_MARKER.is_match(line)
}

/// Build the day list from the plan sections and intro.
pub fn split_days(generic_plan: &str, offbeat_plan: &str, intro: &str) -> Vec<DayEntry> {
    let combined = format!("{generic_plan}\n{offbeat_plan}\n{intro}");
    let days = group_by_markers(&combined);
    if !days.is_empty() {
        debug!("Day markers: {} day(s)", days.len());
        return days;
    }

    let days = split_labelled_intro(intro);
    debug!("Day-by-Day fallback: {} day(s)", days.len());
    days
}

/// Primary strategy: every marker line closes the previous day and opens a
/// new one. Lines before the first marker are dropped.
fn group_by_markers(text: &str) -> Vec<DayEntry> {
    let mut days = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if is_day_marker_line(line) {
            if let Some((label, body)) = current.take() {
                days.push(DayEntry::new(label, join_lines(body).trim()));
            }
            current = Some((line.trim().to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((label, body)) = current {
        days.push(DayEntry::new(label, join_lines(body).trim()));
    }
    days
}

/// Fallback strategy for intros that announce a "Day-by-Day" plan.
fn split_labelled_intro(intro: &str) -> Vec<DayEntry> {
    if !RE_DAY_BY_DAY_LABEL.is_match(intro) {
        return Vec::new();
    }

    let mut cuts: Vec<usize> = vec![0];
    cuts.extend(RE_DAY_SPLIT.find_iter(intro).map(|m| m.start()));
    cuts.push(intro.len());
    cuts.dedup();

    cuts.windows(2)
        .filter_map(|w| {
            let part = intro[w[0]..w[1]].trim();
            let mut lines = part.lines();
            let first = lines.next()?.trim();
            if !is_day_marker_line(first) {
                return None;
            }
            Some(DayEntry::new(first, join_lines(lines).trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_variants() {
        assert!(is_day_marker_line("Day 1"));
        assert!(is_day_marker_line("  day 02: Arrival"));
        assert!(is_day_marker_line("D3 - Hills"));
        assert!(is_day_marker_line("Day5"));
        assert!(!is_day_marker_line("Dinner 2 people"));
        assert!(!is_day_marker_line("Day 12am start"));
        assert!(!is_day_marker_line("Today 1"));
    }

    #[test]
    fn test_grouping_and_order() {
        let days = split_days("", "", "Day 1\nA\nB\nDay 2\nC");
        assert_eq!(
            days,
            vec![DayEntry::new("Day 1", "A\nB"), DayEntry::new("Day 2", "C")]
        );
    }

    #[test]
    fn test_lines_before_first_marker_dropped() {
        let days = split_days("Generic Tourist Plan\nOverview\nDay 1: Fort\nWalk", "", "");
        assert_eq!(days, vec![DayEntry::new("Day 1: Fort", "Walk")]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let days = split_days("Day 1\nA", "Day 1\nB", "");
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].text, "A");
        assert_eq!(days[1].text, "B");
    }

    #[test]
    fn test_empty_day_body() {
        let days = split_days("", "", "Day 1\nDay 2\nC");
        assert_eq!(days[0], DayEntry::new("Day 1", ""));
    }

    #[test]
    fn test_fallback_requires_label() {
        assert!(split_labelled_intro("no plan here").is_empty());
    }

    #[test]
    fn test_fallback_splits_intro() {
        let intro = "Day-by-Day itinerary\nDay 1\nFort\nDay 2\nMarket";
        let days = split_labelled_intro(intro);
        assert_eq!(
            days,
            vec![DayEntry::new("Day 1", "Fort"), DayEntry::new("Day 2", "Market")]
        );
    }
}
