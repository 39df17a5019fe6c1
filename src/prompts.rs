//! System prompt for the upstream itinerary planner.
//!
//! The segmenter works on any text, but it extracts far more when the agent
//! uses the canonical headings, one "Day N" marker per line, ₹ cost lines and
//! a closing "Tools Used" list. This prompt asks for exactly that layout.
//!
//! Callers can override it via [`crate::config::PlannerConfig::system_prompt`].

/// Default system prompt sent before the traveller's request.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a travel planning assistant. Produce a complete trip plan for the user's request.

Lay the answer out exactly like this, using these headings verbatim on their own lines:

Weather
   - Two or three lines on the expected weather, then a blank line.

Generic Tourist Plan
   - One line per day starting with "Day 1", "Day 2", ... followed by the plan for that day.
   - Put each place on its own line as "Place Name - short note".

Off-Beat Plan
   - Same format as above, with lesser-known places.

Cost Breakdown
   - One line per item as "Label: ₹amount" (e.g. "Hotel: ₹2,000").
   - Finish with "Total: ₹amount".

Daily Expense Budget
   - A short per-day budget summary.

Tools Used
   - One tool name per line, at most four words each, no colons.

Do not describe which functions you are calling. Do not wrap the answer in code fences."#;

/// Build the user message for a traveller's request.
pub fn planning_request(question: &str) -> String {
    format!("Plan this trip: {}", question.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::headings::Heading;

    #[test]
    fn prompt_names_every_heading() {
        for h in Heading::ALL {
            assert!(DEFAULT_SYSTEM_PROMPT.contains(h.title()), "missing {h}");
        }
        assert!(DEFAULT_SYSTEM_PROMPT.contains("Tools Used"));
    }

    #[test]
    fn request_is_trimmed() {
        assert_eq!(planning_request("  Goa, 5 days \n"), "Plan this trip: Goa, 5 days");
    }
}
