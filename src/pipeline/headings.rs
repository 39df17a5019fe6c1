//! Heading segmentation: slice the working text at the canonical headings.
//!
//! Only the first occurrence of each heading counts. Sections are contiguous:
//! each runs from its own heading up to the next heading found, so the
//! heading text stays at the top of its section body.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The four section titles the segmenter recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    GenericTouristPlan,
    OffBeatPlan,
    CostBreakdown,
    DailyExpenseBudget,
}

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::GenericTouristPlan,
        Heading::OffBeatPlan,
        Heading::CostBreakdown,
        Heading::DailyExpenseBudget,
    ];

    /// The heading as it appears in itinerary text.
    pub fn title(self) -> &'static str {
        match self {
            Heading::GenericTouristPlan => "Generic Tourist Plan",
            Heading::OffBeatPlan => "Off-Beat Plan",
            Heading::CostBreakdown => "Cost Breakdown",
            Heading::DailyExpenseBudget => "Daily Expense Budget",
        }
    }

    fn pattern(self) -> &'static Regex {
        &RE_HEADINGS[self as usize]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// Matching on the original text (not a lowercased copy) keeps byte offsets
// valid even when lowercasing would change the length of non-ASCII text.
static RE_HEADINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    Heading::ALL
        .iter()
        .map(|h| Regex::new(&format!("(?i){}", regex::escape(h.title()))).unwrap())
        .collect()
});

/// One sliced section of the working text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Heading,
    /// Byte offset of the heading in the segmented text.
    pub offset: usize,
    /// Heading plus everything up to the next heading, trimmed.
    pub body: String,
}

/// The result of heading segmentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Text before the first heading (all of it when no heading matched).
    pub intro: String,
    /// Sections in order of appearance.
    pub sections: Vec<Section>,
}

impl Segments {
    /// Body of the given section, or `""` when the heading was not found.
    pub fn body(&self, heading: Heading) -> &str {
        self.sections
            .iter()
            .find(|s| s.heading == heading)
            .map(|s| s.body.as_str())
            .unwrap_or("")
    }
}

/// Slice `text` at the first occurrence of each canonical heading.
pub fn segment_headings(text: &str) -> Segments {
    let mut found: Vec<(Heading, usize)> = Heading::ALL
        .iter()
        .filter_map(|&h| h.pattern().find(text).map(|m| (h, m.start())))
        .collect();

    if found.is_empty() {
        debug!("No headings found; whole text is intro");
        return Segments {
            intro: text.trim().to_string(),
            sections: Vec::new(),
        };
    }

    found.sort_by_key(|&(_, offset)| offset);

    let sections: Vec<Section> = found
        .iter()
        .enumerate()
        .map(|(i, &(heading, offset))| {
            let end = found.get(i + 1).map(|&(_, o)| o).unwrap_or(text.len());
            Section {
                heading,
                offset,
                body: text[offset..end].trim().to_string(),
            }
        })
        .collect();

    let first = found[0].1;
    let intro = if first > 0 {
        text[..first].trim().to_string()
    } else {
        String::new()
    };

    debug!(
        "Headings found: {}",
        sections
            .iter()
            .map(|s| s.heading.title())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Segments { intro, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headings_all_intro() {
        let seg = segment_headings("Just some notes");
        assert_eq!(seg.intro, "Just some notes");
        assert!(seg.sections.is_empty());
        assert_eq!(seg.body(Heading::CostBreakdown), "");
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let text = "Hello\nOff-Beat Plan\nCaves\nGeneric Tourist Plan\nFort\nCost Breakdown\nHotel: ₹1";
        let seg = segment_headings(text);
        assert_eq!(seg.intro, "Hello");
        let order: Vec<Heading> = seg.sections.iter().map(|s| s.heading).collect();
        assert_eq!(
            order,
            vec![
                Heading::OffBeatPlan,
                Heading::GenericTouristPlan,
                Heading::CostBreakdown
            ]
        );
        assert_eq!(seg.body(Heading::OffBeatPlan), "Off-Beat Plan\nCaves");
        assert_eq!(seg.body(Heading::GenericTouristPlan), "Generic Tourist Plan\nFort");
        assert_eq!(seg.body(Heading::CostBreakdown), "Cost Breakdown\nHotel: ₹1");
    }

    #[test]
    fn test_heading_at_start_gives_empty_intro() {
        let seg = segment_headings("generic tourist plan\nDay 1");
        assert_eq!(seg.intro, "");
        assert_eq!(seg.body(Heading::GenericTouristPlan), "generic tourist plan\nDay 1");
    }

    #[test]
    fn test_only_first_occurrence_counts() {
        let seg = segment_headings("Cost Breakdown\nA\nCost Breakdown\nB");
        assert_eq!(seg.sections.len(), 1);
        assert_eq!(seg.body(Heading::CostBreakdown), "Cost Breakdown\nA\nCost Breakdown\nB");
    }

    #[test]
    fn test_heading_phrase_in_prose_still_splits() {
        let seg = segment_headings("We skip the generic tourist plan this time.\nCaves");
        assert_eq!(seg.intro, "We skip the");
        assert_eq!(
            seg.body(Heading::GenericTouristPlan),
            "generic tourist plan this time.\nCaves"
        );
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(Heading::DailyExpenseBudget.to_string(), "Daily Expense Budget");
    }
}
