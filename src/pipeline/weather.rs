//! Weather isolation: cut the forecast block out of the working text.
//!
//! The block starts at the first weather keyword and runs until the first
//! line break that opens a blank line or a new heading. Removing it before
//! heading segmentation keeps forecasts out of plan sections and day bodies.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Weather keywords in priority order. The first keyword found anywhere wins.
static RE_WEATHER_STARTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bWeather\b",
        r"(?i)\bWeather Details\b",
        r"(?i)\bWeather Overview\b",
        r"(?i)\bForecast\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A line break followed by a blank line or a heading token.
///
/// Only the match start is used, so the heading is consumed here instead of
/// being asserted with a lookahead.
static RE_BLOCK_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\n(?:\s*\n|Day\s*\d|\bCost\b|Generic Tourist Plan|Off-Beat Plan|Daily Expense Budget)",
    )
    .unwrap()
});

/// Split `text` into (text without weather, weather block).
///
/// Both parts are trimmed. Without a weather keyword the text is returned
/// unchanged and the block is empty.
pub fn isolate_weather(text: &str) -> (String, String) {
    let Some(start) = find_weather_start(text) else {
        return (text.to_string(), String::new());
    };

    let end = RE_BLOCK_END
        .find(&text[start..])
        .map(|m| start + m.start())
        .unwrap_or(text.len());

    let weather = text[start..end].trim().to_string();
    let mut remaining = String::with_capacity(text.len() - (end - start));
    remaining.push_str(&text[..start]);
    remaining.push_str(&text[end..]);

    debug!("Weather block at bytes {}..{} ({} chars)", start, end, weather.len());
    (remaining.trim().to_string(), weather)
}

/// Byte offset where the weather block begins, if any keyword matches.
pub fn find_weather_start(text: &str) -> Option<usize> {
    RE_WEATHER_STARTS
        .iter()
        .find_map(|re| re.find(text).map(|m| m.start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_weather_passthrough() {
        let (rest, weather) = isolate_weather("Day 1\nBeach");
        assert_eq!(rest, "Day 1\nBeach");
        assert_eq!(weather, "");
    }

    #[test]
    fn test_block_ends_at_blank_line() {
        let (rest, weather) = isolate_weather("Weather\nSunny, 28C\n\nDay 1\nVisit beach");
        assert_eq!(weather, "Weather\nSunny, 28C");
        assert_eq!(rest, "Day 1\nVisit beach");
    }

    #[test]
    fn test_block_ends_at_heading() {
        let input = "Intro line\nWeather Overview\nRain likely\nCost Breakdown\nHotel: ₹100";
        let (rest, weather) = isolate_weather(input);
        assert_eq!(weather, "Weather Overview\nRain likely");
        assert_eq!(rest, "Intro line\n\nCost Breakdown\nHotel: ₹100");
    }

    #[test]
    fn test_block_runs_to_end() {
        let (rest, weather) = isolate_weather("Trip to Goa\nForecast: humid all week");
        assert_eq!(weather, "Forecast: humid all week");
        assert_eq!(rest, "Trip to Goa");
    }

    #[test]
    fn test_weather_keyword_wins_over_forecast() {
        let input = "Forecast first\nthen Weather later";
        assert_eq!(find_weather_start(input), Some(input.find("Weather").unwrap()));
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(find_weather_start("Weatherproof jackets"), None);
    }
}
