//! Error types for the itinerary-segmenter library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`SegmentError`] — **Fatal**: the request cannot be served at all
//!   (input file unreadable, upstream planner failed, bad configuration).
//!   Returned as `Err(SegmentError)` from the I/O and planner entry points.
//!
//! * [`ExtractionIssue`] — **Non-fatal**: one heuristic match inside the text
//!   could not be used (e.g. a cost amount that does not parse). The stage
//!   skips that match, logs the issue, and carries on with the rest.
//!
//! The segmentation engine itself never fails: every field of
//! [`crate::output::ParsedItinerary`] falls back to its empty default.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the itinerary-segmenter library.
#[derive(Debug, Error)]
pub enum SegmentError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Itinerary file not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read itinerary file '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Upstream planner errors ───────────────────────────────────────────
    /// The configured provider is not initialised (missing API key etc.).
    #[error("LLM provider '{provider}' is not configured.\n{hint}")]
    ProviderNotConfigured { provider: String, hint: String },

    /// The text-generating agent failed after all retries.
    #[error("Upstream planner failed: {message}")]
    UpstreamFailure { message: String },

    /// The text-generating agent did not answer in time.
    #[error("Upstream planner timed out after {secs}s")]
    UpstreamTimeout { secs: u64 },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output JSON file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal problem with a single heuristic match.
///
/// Never surfaced to callers of [`crate::segment()`]; stages log it at
/// debug level and drop the offending match.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum ExtractionIssue {
    /// A currency figure matched the cost pattern but is not a usable integer.
    #[error("Cost line '{label}': amount '{raw}' is not a valid integer")]
    MalformedAmount { label: String, raw: String },

    /// A cost figure had no usable label once separators were removed.
    #[error("Cost amount '{raw}' has an empty label")]
    EmptyLabel { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failure_display() {
        let e = SegmentError::UpstreamFailure {
            message: "rate limited".into(),
        };
        assert!(e.to_string().contains("rate limited"), "got: {e}");
    }

    #[test]
    fn upstream_timeout_display() {
        let e = SegmentError::UpstreamTimeout { secs: 60 };
        assert!(e.to_string().contains("60s"));
    }

    #[test]
    fn input_not_found_display() {
        let e = SegmentError::InputNotFound {
            path: PathBuf::from("/tmp/nope.txt"),
        };
        assert!(e.to_string().contains("/tmp/nope.txt"));
    }

    #[test]
    fn malformed_amount_display() {
        let e = ExtractionIssue::MalformedAmount {
            label: "Misc".into(),
            raw: ",,".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Misc"));
        assert!(msg.contains("',,'"));
    }
}
