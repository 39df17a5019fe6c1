//! Configuration types for itinerary segmentation and planning.
//!
//! Two structs cover the two halves of the crate:
//!
//! * [`SegmenterConfig`] — knobs for the offline segmentation engine
//!   (attraction cap, tool-name length, narration threshold).
//! * [`PlannerConfig`] — everything needed to ask an LLM for an itinerary
//!   before segmenting it (provider, model, retries, timeout).
//!
//! Both are built through a builder so callers only set what they care about
//! and rely on documented defaults for the rest.

use crate::error::SegmentError;
use edgequake_llm::LLMProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Tuning for the segmentation engine.
///
/// The defaults reproduce the reference heuristics exactly; changing them is
/// only useful when an upstream agent formats its output unusually.
///
/// # Example
/// ```rust
/// use itinerary_segmenter::SegmenterConfig;
///
/// let config = SegmenterConfig::builder()
///     .max_attractions(10)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_attractions, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Maximum number of attraction candidates kept. Default: 40.
    pub max_attractions: usize,

    /// Maximum whitespace-separated tokens in a tool name. Default: 4.
    ///
    /// Longer lines under "Tools Used" are prose, not tool names.
    pub max_tool_words: usize,

    /// Lines mentioning Call/Use/Invoke with fewer tokens than this are
    /// treated as tool narration and dropped. Default: 8.
    pub narration_word_limit: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_attractions: 40,
            max_tool_words: 4,
            narration_word_limit: 8,
        }
    }
}

impl SegmenterConfig {
    /// Create a new builder for `SegmenterConfig`.
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`SegmenterConfig`].
#[derive(Debug)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    pub fn max_attractions(mut self, n: usize) -> Self {
        self.config.max_attractions = n;
        self
    }

    pub fn max_tool_words(mut self, n: usize) -> Self {
        self.config.max_tool_words = n;
        self
    }

    pub fn narration_word_limit(mut self, n: usize) -> Self {
        self.config.narration_word_limit = n;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<SegmenterConfig, SegmentError> {
        let c = &self.config;
        if c.max_attractions == 0 {
            return Err(SegmentError::InvalidConfig(
                "max_attractions must be ≥ 1".into(),
            ));
        }
        if c.max_tool_words == 0 {
            return Err(SegmentError::InvalidConfig(
                "max_tool_words must be ≥ 1".into(),
            ));
        }
        if c.narration_word_limit == 0 {
            return Err(SegmentError::InvalidConfig(
                "narration_word_limit must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

/// Configuration for generating an itinerary with an LLM and segmenting it.
///
/// # Example
/// ```rust
/// use itinerary_segmenter::PlannerConfig;
///
/// let config = PlannerConfig::builder()
///     .model("gpt-4.1-mini")
///     .max_retries(1)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_retries, 1);
/// ```
#[derive(Clone)]
pub struct PlannerConfig {
    /// LLM model identifier. If None, named and OpenAI providers use
    /// "gpt-4.1-mini" and auto-detected providers keep their own default.
    pub model: Option<String>,

    /// LLM provider name (e.g. "openai", "anthropic", "ollama").
    /// If None along with `provider`, the provider is detected from the environment.
    pub provider_name: Option<String>,

    /// Pre-constructed LLM provider. Takes precedence over `provider_name`.
    pub provider: Option<Arc<dyn LLMProvider>>,

    /// Sampling temperature. Default: 0.3.
    pub temperature: f32,

    /// Maximum tokens the LLM may generate. Default: 4096.
    ///
    /// A five-day plan with costs and weather runs to roughly 1 500 tokens.
    pub max_tokens: usize,

    /// Maximum retry attempts on a failed planner call. Default: 2.
    pub max_retries: u32,

    /// Initial retry delay in milliseconds, doubled after each attempt. Default: 500.
    pub retry_backoff_ms: u64,

    /// Per-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Custom system prompt. If None, uses the built-in travel planner prompt.
    pub system_prompt: Option<String>,

    /// Segmentation settings applied to the planner's reply.
    pub segmenter: SegmenterConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            model: None,
            provider_name: None,
            provider: None,
            temperature: 0.3,
            max_tokens: 4096,
            max_retries: 2,
            retry_backoff_ms: 500,
            api_timeout_secs: 60,
            system_prompt: None,
            segmenter: SegmenterConfig::default(),
        }
    }
}

impl fmt::Debug for PlannerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlannerConfig")
            .field("model", &self.model)
            .field("provider_name", &self.provider_name)
            .field("provider", &self.provider.as_ref().map(|_| "<dyn LLMProvider>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("segmenter", &self.segmenter)
            .finish()
    }
}

impl PlannerConfig {
    /// Create a new builder for `PlannerConfig`.
    pub fn builder() -> PlannerConfigBuilder {
        PlannerConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PlannerConfig`].
#[derive(Debug)]
pub struct PlannerConfigBuilder {
    config: PlannerConfig,
}

impl PlannerConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = Some(model.into());
        self
    }

    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.config.provider_name = Some(name.into());
        self
    }

    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.config.max_retries = n;
        self
    }

    pub fn retry_backoff_ms(mut self, ms: u64) -> Self {
        self.config.retry_backoff_ms = ms;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    pub fn segmenter(mut self, segmenter: SegmenterConfig) -> Self {
        self.config.segmenter = segmenter;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PlannerConfig, SegmentError> {
        let c = &self.config;
        if c.max_tokens == 0 {
            return Err(SegmentError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }
        if c.api_timeout_secs == 0 {
            return Err(SegmentError::InvalidConfig(
                "api_timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
