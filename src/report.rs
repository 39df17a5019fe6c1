//! Markdown summary of a [`ParsedItinerary`].
//!
//! Mirrors what a front end shows: weather first, then the day-by-day plan
//! (falling back to the plan sections, then the raw text), a cost summary
//! with an estimated total, the tools the agent reported, and the full raw
//! text last.

use crate::output::{ParsedItinerary, TOTAL_KEY};
use std::fmt::Write;

/// Render `parsed` as a Markdown document ending with a newline.
pub fn render_markdown(parsed: &ParsedItinerary) -> String {
    let mut md = String::from("# Itinerary\n");
    let mut raw_shown = false;

    if !parsed.weather.is_empty() {
        push_section(&mut md, "Weather", &parsed.weather);
    }

    if !parsed.day_by_day.is_empty() {
        md.push_str("\n## Day-by-day itinerary\n");
        for day in &parsed.day_by_day {
            let body: &str = if day.text.is_empty() { "—" } else { &day.text };
            let _ = write!(md, "\n### {}\n\n{}\n", day.day, body);
        }
    } else if parsed.generic_plan.is_empty() && parsed.offbeat_plan.is_empty() {
        push_section(&mut md, "Full Plan (raw)", &parsed.raw);
        raw_shown = true;
    } else {
        if !parsed.generic_plan.is_empty() {
            push_section(&mut md, "Generic Tourist Plan", &parsed.generic_plan);
        }
        if !parsed.offbeat_plan.is_empty() {
            push_section(&mut md, "Off-Beat Plan", &parsed.offbeat_plan);
        }
    }

    if let Some(total) = parsed.estimated_total() {
        md.push_str("\n## Cost summary\n\n");
        let _ = writeln!(md, "**Estimated total:** {}\n", format_rupees(total));
        for (label, amount) in parsed.costs.iter().filter(|(l, _)| l.as_str() != TOTAL_KEY) {
            let _ = writeln!(md, "- {}: {}", label, format_rupees(*amount));
        }
    }

    if !parsed.tools_used.is_empty() {
        push_section(&mut md, "Tools used", &parsed.tools_used.join(", "));
    }

    if !raw_shown && !parsed.raw.trim().is_empty() {
        push_section(&mut md, "Full raw text", &parsed.raw);
    }

    md
}

fn push_section(md: &mut String, title: &str, body: &str) {
    let _ = write!(md, "\n## {}\n\n{}\n", title, body.trim());
}

/// Format an amount with a rupee sign and comma thousands separators.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}
