//! # itinerary-segmenter
//!
//! Turn free-form travel itineraries written by an LLM agent into structured
//! records: named sections, a day-by-day plan, a cost ledger, a weather block,
//! candidate attractions and the tools the agent says it used.
//!
//! ## Why this crate?
//!
//! Agents are asked for a fixed layout and rarely deliver it. Headings drift
//! in case, days appear as "Day 1", "day 01:" or "D1", currency figures hide
//! in prose, and debugging scaffolding ("Call the weather function") leaks
//! into the answer. This crate applies a fixed, deterministic sequence of
//! heuristics so downstream renderers get the same fields every time and
//! never lose text: the raw input is always carried along.
//!
//! ## Pipeline Overview
//!
//! ```text
//! agent reply
//!  │
//!  ├─ 1. Tools      cut the trailing "Tools Used" block
//!  ├─ 2. Narration  drop "Call the X function" lines
//!  ├─ 3. Weather    isolate the forecast block
//!  ├─ 4. Headings   slice Generic / Off-Beat / Cost / Daily Budget sections
//!  ├─ 5. Days       group lines under "Day N" markers
//!  ├─ 6. Costs      ₹ amounts → ledger (+ Total)
//!  ├─ 7. Places     capitalised phrases → attractions (≤ 40)
//!  └─ 8. Output     ParsedItinerary (+ raw text)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use itinerary_segmenter::segment;
//!
//! let parsed = segment("Weather\nSunny, 28C\n\nDay 1\nVisit beach");
//! assert_eq!(parsed.weather, "Weather\nSunny, 28C");
//! assert_eq!(parsed.day_by_day[0].day, "Day 1");
//! assert_eq!(parsed.day_by_day[0].text, "Visit beach");
//! ```
//!
//! Asking an LLM first (provider auto-detected from `OPENAI_API_KEY` etc.):
//!
//! ```rust,no_run
//! use itinerary_segmenter::{plan_itinerary, PlannerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlannerConfig::default();
//!     let parsed = plan_itinerary("Gokarna, 3 days", &config).await?;
//!     println!("{}", serde_json::to_string_pretty(&parsed)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `itinerary-seg` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod agent;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod planner;
pub mod prompts;
pub mod report;
pub mod segment;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PlannerConfig, PlannerConfigBuilder, SegmenterConfig, SegmenterConfigBuilder};
pub use error::{ExtractionIssue, SegmentError};
pub use output::{CostLedger, DayEntry, ParsedItinerary, TOTAL_KEY};
pub use pipeline::headings::Heading;
pub use pipeline::input::TextContent;
pub use planner::{plan_itinerary, plan_itinerary_sync};
pub use report::render_markdown;
pub use segment::{segment, segment_file, segment_reply, segment_to_file, segment_with};
