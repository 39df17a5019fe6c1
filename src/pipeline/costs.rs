//! Cost parsing: read labelled ₹ amounts into a [`CostLedger`].
//!
//! A bad amount never aborts the ledger; the single match is skipped and the
//! reason logged as an [`ExtractionIssue`].

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ExtractionIssue;
use crate::output::{CostLedger, TOTAL_KEY};

/// `Hotel: ₹2,000`, `Food - ₹500`, `Local Travel & Tips ₹1,200`.
/// Amounts are ASCII digits; other scripts' numerals are not read.
static RE_COST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z \-:&]+)[:\-]?\s*₹\s*([0-9,]+)").unwrap());

static RE_TOTAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bTotal\b\s*[:\-]?\s*₹\s*([0-9,]+)").unwrap());

/// Parse every labelled amount in `block`, then the stated total.
///
/// An empty block yields an empty ledger.
pub fn parse_costs(block: &str) -> CostLedger {
    let mut ledger = CostLedger::new();
    if block.is_empty() {
        return ledger;
    }

    for caps in RE_COST_LINE.captures_iter(block) {
        match ledger_entry(&caps[1], &caps[2]) {
            Ok((label, amount)) => {
                ledger.insert(label, amount);
            }
            Err(issue) => debug!("Skipping cost match: {}", issue),
        }
    }

    if let Some(caps) = RE_TOTAL.captures(block) {
        match parse_amount(TOTAL_KEY, &caps[1]) {
            Ok(total) => {
                ledger.insert(TOTAL_KEY.to_string(), total);
            }
            Err(issue) => debug!("Skipping total: {}", issue),
        }
    }

    debug!("Cost ledger: {} entr(ies)", ledger.len());
    ledger
}

fn ledger_entry(raw_label: &str, raw_amount: &str) -> Result<(String, u64), ExtractionIssue> {
    let label = clean_label(raw_label);
    if label.is_empty() {
        return Err(ExtractionIssue::EmptyLabel {
            raw: raw_label.to_string(),
        });
    }
    let amount = parse_amount(&label, raw_amount)?;
    Ok((label, amount))
}

/// Trim the label and drop the `:` / `-` separator the pattern lets it swallow.
pub fn clean_label(raw: &str) -> String {
    raw.trim()
        .trim_end_matches([':', '-'])
        .trim_end()
        .to_string()
}

/// Parse a comma-grouped integer such as `12,500`.
pub fn parse_amount(label: &str, raw: &str) -> Result<u64, ExtractionIssue> {
    raw.replace(',', "")
        .parse::<u64>()
        .map_err(|_| ExtractionIssue::MalformedAmount {
            label: label.to_string(),
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(pairs: &[(&str, u64)]) -> CostLedger {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_labelled_amounts_and_total() {
        let got = parse_costs("Hotel: ₹2,000\nFood - ₹500\nTotal: ₹2,500");
        assert_eq!(got, ledger(&[("Hotel", 2000), ("Food", 500), ("Total", 2500)]));
    }

    #[test]
    fn test_insertion_order_kept() {
        let got = parse_costs("Stay: ₹3\nAir: ₹1\nBus: ₹2");
        let keys: Vec<&str> = got.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Stay", "Air", "Bus"]);
    }

    #[test]
    fn test_malformed_amount_skipped() {
        let got = parse_costs("Misc: ₹abc\nHotel: ₹1,000");
        assert_eq!(got, ledger(&[("Hotel", 1000)]));
    }

    #[test]
    fn test_comma_only_amount_skipped() {
        let got = parse_costs("Tips: ₹,,\nFood: ₹10");
        assert_eq!(got, ledger(&[("Food", 10)]));
    }

    #[test]
    fn test_overflow_skipped() {
        let got = parse_costs("Yacht: ₹99999999999999999999999");
        assert!(got.is_empty());
    }

    #[test]
    fn test_total_overrides_generic_capture() {
        // The generic pass keeps the last "Total", the total pass the first.
        let got = parse_costs("Total: ₹500\nTotal: ₹700");
        assert_eq!(got, ledger(&[("Total", 500)]));
    }

    #[test]
    fn test_total_matches_inside_longer_label() {
        let got = parse_costs("Hotel: ₹100\nTrip Total: ₹900");
        assert_eq!(got.get("Trip Total"), Some(&900));
        assert_eq!(got.get("Total"), Some(&900));
    }

    #[test]
    fn test_ampersand_label_and_spacing() {
        let got = parse_costs("Local Travel & Tips ₹ 1,200");
        assert_eq!(got.get("Local Travel & Tips"), Some(&1200));
    }

    #[test]
    fn test_only_ascii_digits_are_amounts() {
        let got = parse_costs("Hotel: ₹२०००\nFood: ₹5\nTotal: ₹٣");
        assert_eq!(got, ledger(&[("Food", 5)]));
    }

    #[test]
    fn test_empty_block() {
        assert!(parse_costs("").is_empty());
    }

    #[test]
    fn test_parse_amount_error_variant() {
        let err = parse_amount("Misc", "").unwrap_err();
        assert!(matches!(err, ExtractionIssue::MalformedAmount { .. }));
    }
}
