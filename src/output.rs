//! Output types produced by the segmentation engine.
//!
//! [`ParsedItinerary`] serialises to a flat JSON object whose field names are
//! part of the public contract with downstream renderers, so they are never
//! renamed even where Rust naming would prefer otherwise.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label → amount mapping extracted from the cost section.
///
/// Insertion-ordered so renderers list costs in the order the plan gave them.
/// The reserved key [`TOTAL_KEY`] holds the stated total when one was found.
pub type CostLedger = IndexMap<String, u64>;

/// Reserved ledger key for the stated trip total.
pub const TOTAL_KEY: &str = "Total";

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The full marker line, e.g. `"Day 1: Arrival"`.
    pub day: String,
    /// Everything between this marker and the next one, trimmed.
    pub text: String,
}

impl DayEntry {
    pub fn new(day: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            text: text.into(),
        }
    }
}

/// The structured record extracted from one free-form itinerary.
///
/// Every field defaults to empty when nothing was detected; `raw` always holds
/// the input exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItinerary {
    /// Text preceding the first recognised heading.
    pub intro: String,
    /// "Generic Tourist Plan" section, heading included.
    pub generic_plan: String,
    /// "Off-Beat Plan" section, heading included.
    pub offbeat_plan: String,
    /// "Cost Breakdown" section, heading included.
    pub cost_breakdown_text: String,
    /// Amounts parsed out of `cost_breakdown_text`.
    pub costs: CostLedger,
    /// Isolated weather/forecast block.
    pub weather: String,
    /// "Daily Expense Budget" section, heading included.
    pub daily_budget: String,
    /// Day-by-day breakdown in source order.
    pub day_by_day: Vec<DayEntry>,
    /// Candidate places of interest, deduplicated and capped.
    pub attractions_list: Vec<String>,
    /// The unmodified input.
    pub raw: String,
    /// Tool names listed under "Tools Used".
    pub tools_used: Vec<String>,
}

impl ParsedItinerary {
    /// The stated total, or the sum of all itemised amounts when no total was
    /// given. `None` when the ledger is empty.
    pub fn estimated_total(&self) -> Option<u64> {
        if self.costs.is_empty() {
            return None;
        }
        if let Some(&total) = self.costs.get(TOTAL_KEY) {
            if total > 0 {
                return Some(total);
            }
        }
        Some(
            self.costs
                .iter()
                .filter(|(label, _)| label.as_str() != TOTAL_KEY)
                .fold(0u64, |acc, (_, &v)| acc.saturating_add(v)),
        )
    }

    /// True when no heading, weather, day, cost, attraction or tool was found.
    pub fn is_empty_structure(&self) -> bool {
        self.generic_plan.is_empty()
            && self.offbeat_plan.is_empty()
            && self.cost_breakdown_text.is_empty()
            && self.daily_budget.is_empty()
            && self.weather.is_empty()
            && self.day_by_day.is_empty()
            && self.costs.is_empty()
            && self.attractions_list.is_empty()
            && self.tools_used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_total_prefers_stated_total() {
        let mut it = ParsedItinerary::default();
        it.costs.insert("Hotel".into(), 2000);
        it.costs.insert(TOTAL_KEY.into(), 9999);
        assert_eq!(it.estimated_total(), Some(9999));
    }

    #[test]
    fn estimated_total_sums_items() {
        let mut it = ParsedItinerary::default();
        it.costs.insert("Hotel".into(), 2000);
        it.costs.insert("Food".into(), 500);
        assert_eq!(it.estimated_total(), Some(2500));
    }

    #[test]
    fn estimated_total_none_when_empty() {
        assert_eq!(ParsedItinerary::default().estimated_total(), None);
    }

    #[test]
    fn default_is_empty_structure() {
        assert!(ParsedItinerary::default().is_empty_structure());
    }

    #[test]
    fn json_field_names() {
        let it = ParsedItinerary {
            day_by_day: vec![DayEntry::new("Day 1", "Beach")],
            ..Default::default()
        };
        let v = serde_json::to_value(&it).unwrap();
        for key in [
            "intro",
            "generic_plan",
            "offbeat_plan",
            "cost_breakdown_text",
            "costs",
            "weather",
            "daily_budget",
            "day_by_day",
            "attractions_list",
            "raw",
            "tools_used",
        ] {
            assert!(v.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(v["day_by_day"][0]["day"], "Day 1");
        assert_eq!(v["day_by_day"][0]["text"], "Beach");
    }
}
