//! Pipeline stages for itinerary segmentation.
//!
//! Each submodule implements exactly one extraction step as a pure function
//! over an immutable `&str`, returning the remaining text and/or the artefact
//! it extracted. Keeping stages separate makes each independently testable
//! against literal fixtures.
//!
//! ## Data Flow
//!
//! ```text
//! raw ──▶ tools ──▶ narration ──▶ weather ──▶ headings ──┬─▶ days
//!        (strip     (drop "Call    (isolate     (slice     ├─▶ costs
//!         trailer)   the X fn")     forecast)    sections) └─▶ attractions
//! ```
//!
//! 0. [`input`]       — pull text out of whatever the upstream agent returned
//! 1. [`tools`]       — cut the trailing "Tools Used" block, collect tool names
//! 2. [`narration`]   — drop short lines narrating tool invocations
//! 3. [`weather`]     — cut the weather/forecast block
//! 4. [`headings`]    — slice the rest at the four canonical headings
//! 5. [`days`]        — group plan lines under "Day N" markers
//! 6. [`costs`]       — read ₹ amounts from the cost section
//! 7. [`attractions`] — collect capitalised place-name candidates
//!
//! Order matters: narration lines inside the tools trailer must not survive
//! into the weather search, and the weather block must be gone before
//! heading offsets are computed.

pub mod attractions;
pub mod costs;
pub mod days;
pub mod headings;
pub mod input;
pub mod narration;
pub mod tools;
pub mod weather;

/// Join lines with `\n`.
pub(crate) fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines.into_iter().collect::<Vec<_>>().join("\n")
}

/// Count whitespace-separated tokens.
pub(crate) fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}
