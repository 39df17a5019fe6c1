//! Segmentation entry points.
//!
//! [`segment`] is the whole engine: a synchronous, infallible function from
//! text to [`ParsedItinerary`]. The remaining functions wrap it with file
//! input, file output, or duck-typed agent replies.

use crate::config::SegmenterConfig;
use crate::error::SegmentError;
use crate::output::ParsedItinerary;
use crate::pipeline::headings::{segment_headings, Heading};
use crate::pipeline::input::{read_itinerary_file, TextContent};
use crate::pipeline::{attractions, costs, days, narration, tools, weather};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Segment an itinerary with the default configuration.
///
/// # Example
/// ```rust
/// use itinerary_segmenter::segment;
///
/// let parsed = segment("Day 1\nA\nB\nDay 2\nC");
/// assert_eq!(parsed.day_by_day.len(), 2);
/// assert_eq!(parsed.day_by_day[0].text, "A\nB");
/// ```
pub fn segment(raw: &str) -> ParsedItinerary {
    segment_with(raw, &SegmenterConfig::default())
}

/// Segment an itinerary.
///
/// Never fails: anything not detected is left empty and `raw` always holds
/// the input unchanged.
pub fn segment_with(raw: &str, config: &SegmenterConfig) -> ParsedItinerary {
    // ── Step 1: Tools Used trailer ───────────────────────────────────────
    let (working, tools_used) = tools::extract_tools(raw, config.max_tool_words);

    // ── Step 2: Tool narration ───────────────────────────────────────────
    let working = narration::strip_narration(&working, config.narration_word_limit);

    // ── Step 3: Weather block ────────────────────────────────────────────
    let (working, weather) = weather::isolate_weather(&working);

    // ── Step 4: Headings ─────────────────────────────────────────────────
    let segments = segment_headings(&working);
    let generic_plan = segments.body(Heading::GenericTouristPlan);
    let offbeat_plan = segments.body(Heading::OffBeatPlan);
    let cost_breakdown_text = segments.body(Heading::CostBreakdown);

    // ── Step 5: Day by day ───────────────────────────────────────────────
    let day_by_day = days::split_days(generic_plan, offbeat_plan, &segments.intro);

    // ── Step 6: Costs ────────────────────────────────────────────────────
    let costs = costs::parse_costs(cost_breakdown_text);

    // ── Step 7: Attractions ──────────────────────────────────────────────
    let attractions_list = attractions::extract_attractions(
        generic_plan,
        offbeat_plan,
        &segments.intro,
        config.max_attractions,
    );

    info!(
        "Segmented {} bytes: {} section(s), {} day(s), {} cost(s), {} attraction(s), {} tool(s)",
        raw.len(),
        segments.sections.len(),
        day_by_day.len(),
        costs.len(),
        attractions_list.len(),
        tools_used.len()
    );

    // ── Step 8: Assemble ─────────────────────────────────────────────────
    ParsedItinerary {
        generic_plan: generic_plan.to_string(),
        offbeat_plan: offbeat_plan.to_string(),
        cost_breakdown_text: cost_breakdown_text.to_string(),
        daily_budget: segments.body(Heading::DailyExpenseBudget).to_string(),
        intro: segments.intro.clone(),
        costs,
        weather,
        day_by_day,
        attractions_list,
        raw: raw.to_string(),
        tools_used,
    }
}

/// Segment an agent reply of any supported shape (string, optional string,
/// JSON message or conversation).
///
/// # Example
/// ```rust
/// use itinerary_segmenter::{segment_reply, SegmenterConfig};
///
/// let reply = serde_json::json!({"messages": [{"content": "Weather\nSunny"}]});
/// let parsed = segment_reply(&reply, &SegmenterConfig::default());
/// assert_eq!(parsed.weather, "Weather\nSunny");
/// ```
pub fn segment_reply<T: TextContent + ?Sized>(
    reply: &T,
    config: &SegmenterConfig,
) -> ParsedItinerary {
    segment_with(&reply.extract_text(), config)
}

/// Read a UTF-8 text file and segment its contents.
pub fn segment_file(
    path: impl AsRef<Path>,
    config: &SegmenterConfig,
) -> Result<ParsedItinerary, SegmentError> {
    let text = read_itinerary_file(path)?;
    Ok(segment_with(&text, config))
}

/// Segment `raw` and write the JSON record to `output_path`.
///
/// Uses atomic write (temp file in the target directory + rename) so readers
/// never observe a half-written file.
pub fn segment_to_file(
    raw: &str,
    output_path: impl AsRef<Path>,
    config: &SegmenterConfig,
) -> Result<ParsedItinerary, SegmentError> {
    let parsed = segment_with(raw, config);
    write_json_atomic(&parsed, output_path.as_ref())?;
    Ok(parsed)
}

/// Serialise `parsed` as pretty JSON and atomically replace `path` with it.
pub fn write_json_atomic(parsed: &ParsedItinerary, path: &Path) -> Result<(), SegmentError> {
    let write_err = |source: std::io::Error| SegmentError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(parsed)
        .map_err(|e| SegmentError::Internal(format!("JSON serialisation: {e}")))?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!("Wrote {}", path.display());
    Ok(())
}
