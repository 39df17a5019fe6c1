//! Plan-then-segment entry points.
//!
//! These functions cover the full request flow: a traveller's question goes
//! to the upstream LLM, the free-form answer comes back, and the segmenter
//! turns it into a [`ParsedItinerary`]. A failure of the LLM call is the only
//! way this flow can fail; the segmentation step itself cannot.

use crate::agent::request_itinerary;
use crate::config::PlannerConfig;
use crate::error::SegmentError;
use crate::output::ParsedItinerary;
use crate::segment::segment_with;
use edgequake_llm::{LLMProvider, ProviderFactory};
use std::sync::Arc;
use tracing::info;

const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Ask the configured LLM to plan a trip and segment its answer.
///
/// # Errors
/// - [`SegmentError::ProviderNotConfigured`] when no provider can be built
/// - [`SegmentError::UpstreamFailure`] / [`SegmentError::UpstreamTimeout`]
///   when every attempt failed
pub async fn plan_itinerary(
    question: impl AsRef<str>,
    config: &PlannerConfig,
) -> Result<ParsedItinerary, SegmentError> {
    let question = question.as_ref();
    info!("Planning itinerary for: {}", question);

    let provider = resolve_provider(config)?;
    let reply = request_itinerary(&provider, question, config).await?;
    info!("Planner replied with {} bytes", reply.len());

    Ok(segment_with(&reply, &config.segmenter))
}

/// Synchronous wrapper around [`plan_itinerary`].
///
/// Creates a temporary tokio runtime internally.
pub fn plan_itinerary_sync(
    question: impl AsRef<str>,
    config: &PlannerConfig,
) -> Result<ParsedItinerary, SegmentError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| SegmentError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(plan_itinerary(question, config))
}

fn create_provider(provider_name: &str, model: &str) -> Result<Arc<dyn LLMProvider>, SegmentError> {
    ProviderFactory::create_llm_provider(provider_name, model).map_err(|e| {
        SegmentError::ProviderNotConfigured {
            provider: provider_name.to_string(),
            hint: format!("{e}"),
        }
    })
}

/// Resolve the LLM provider, from most-specific to least-specific:
///
/// 1. **Pre-built provider** (`config.provider`), used as-is.
/// 2. **Named provider + model** (`config.provider_name`).
/// 3. **Environment pair** (`ITINERARY_LLM_PROVIDER` + `ITINERARY_MODEL`).
/// 4. **OpenAI** when `OPENAI_API_KEY` is set, with `config.model`.
/// 5. **Full auto-detection** (`ProviderFactory::from_env`); a configured
///    `config.model` replaces the detected provider's default model.
pub fn resolve_provider(config: &PlannerConfig) -> Result<Arc<dyn LLMProvider>, SegmentError> {
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }

    if let Some(ref name) = config.provider_name {
        let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
        return create_provider(name, model);
    }

    if let (Ok(prov), Ok(model)) = (
        std::env::var("ITINERARY_LLM_PROVIDER"),
        std::env::var("ITINERARY_MODEL"),
    ) {
        if !prov.is_empty() && !model.is_empty() {
            return create_provider(&prov, &model);
        }
    }

    if let Ok(openai_key) = std::env::var("OPENAI_API_KEY") {
        if !openai_key.is_empty() {
            let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
            return create_provider("openai", model);
        }
    }

    let (llm_provider, _embedding) =
        ProviderFactory::from_env().map_err(|e| SegmentError::ProviderNotConfigured {
            provider: "auto".to_string(),
            hint: format!(
                "No LLM provider could be auto-detected from environment.\n\
                Set OPENAI_API_KEY, ANTHROPIC_API_KEY, or configure a provider.\n\
                Error: {}",
                e
            ),
        })?;

    match config.model.as_deref() {
        Some(model) if model != llm_provider.model() => {
            create_provider(llm_provider.name(), model)
        }
        _ => Ok(llm_provider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgequake_llm::MockProvider;

    fn unknown_provider_config() -> PlannerConfig {
        PlannerConfig::builder()
            .provider_name("definitely-not-a-provider")
            .build()
            .unwrap()
    }

    #[test]
    fn test_named_provider_failure_is_typed() {
        match resolve_provider(&unknown_provider_config()) {
            Err(SegmentError::ProviderNotConfigured { provider, .. }) => {
                assert_eq!(provider, "definitely-not-a-provider")
            }
            other => panic!("expected ProviderNotConfigured, got {:?}", other.err()),
        }
    }

    // Only test in this binary that touches provider environment variables.
    #[test]
    fn test_configured_model_survives_auto_detection() {
        for var in [
            "ITINERARY_LLM_PROVIDER",
            "ITINERARY_MODEL",
            "EDGEQUAKE_LLM_PROVIDER",
            "OLLAMA_HOST",
            "OLLAMA_MODEL",
            "LMSTUDIO_HOST",
            "LMSTUDIO_MODEL",
        ] {
            std::env::remove_var(var);
        }
        std::env::set_var("OPENAI_API_KEY", "sk-fake");
        std::env::set_var("ANTHROPIC_API_KEY", "sk-ant-fake");

        let config = PlannerConfig::builder().model("gpt-4o").build().unwrap();
        let provider = resolve_provider(&config).unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model(), "gpt-4o");

        std::env::remove_var("OPENAI_API_KEY");
        let config = PlannerConfig::builder()
            .model("claude-3-5-haiku-latest")
            .build()
            .unwrap();
        let provider = resolve_provider(&config).unwrap();
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.model(), "claude-3-5-haiku-latest");

        std::env::remove_var("ANTHROPIC_API_KEY");
    }

    #[tokio::test]
    async fn test_plan_segments_the_reply() {
        let mock = MockProvider::new();
        mock.add_response(
            "Weather\nSunny\n\nGeneric Tourist Plan\nDay 1\nFort Aguada\n\
             Cost Breakdown\nHotel: ₹2,000\nTools Used\nWeather API",
        )
        .await;
        let config = PlannerConfig::builder()
            .provider(Arc::new(mock))
            .build()
            .unwrap();

        let parsed = plan_itinerary("Goa, 1 day", &config).await.unwrap();
        assert_eq!(parsed.weather, "Weather\nSunny");
        assert_eq!(parsed.day_by_day.len(), 1);
        assert_eq!(parsed.day_by_day[0].text, "Fort Aguada");
        assert_eq!(parsed.costs.get("Hotel"), Some(&2000));
        assert_eq!(parsed.tools_used, vec!["Weather API"]);
    }

    #[test]
    fn test_plan_fails_before_any_request() {
        let result = tokio_test::block_on(plan_itinerary("Goa", &unknown_provider_config()));
        assert!(matches!(
            result,
            Err(SegmentError::ProviderNotConfigured { .. })
        ));
    }
}
