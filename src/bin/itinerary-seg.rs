//! CLI binary for itinerary-segmenter.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `SegmenterConfig` / `PlannerConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use itinerary_segmenter::segment::write_json_atomic;
use itinerary_segmenter::{
    plan_itinerary, render_markdown, segment_reply, segment_with, ParsedItinerary, PlannerConfig,
    SegmenterConfig,
};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Segment a saved agent answer (JSON on stdout)
  itinerary-seg answer.txt

  # Read from stdin, print a Markdown summary
  cat answer.txt | itinerary-seg - --format markdown

  # Agent framework dumped its whole state as JSON
  itinerary-seg --from-json state.json -o parsed.json

  # Ask an LLM for a plan, then segment it
  itinerary-seg --ask "Gokarna for 3 days" --format markdown

ENVIRONMENT VARIABLES:
  OPENAI_API_KEY          OpenAI API key
  ANTHROPIC_API_KEY       Anthropic API key
  GEMINI_API_KEY          Google Gemini API key
  ITINERARY_LLM_PROVIDER  Override provider (openai, anthropic, gemini, ollama)
  ITINERARY_MODEL         Override model ID
  RUST_LOG                Override log filter (e.g. itinerary_segmenter=debug)
"#;

/// Segment free-form travel itineraries into structured JSON.
#[derive(Parser, Debug)]
#[command(
    name = "itinerary-seg",
    version,
    about = "Segment free-form travel itineraries into structured JSON",
    long_about = "Split an LLM-written travel itinerary into weather, plan sections, \
day-by-day entries, a ₹ cost ledger, attractions and the tools the agent used. \
Input comes from a file, stdin, or a live LLM request (--ask).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Itinerary text file, or "-" for stdin.
    #[arg(required_unless_present = "ask", conflicts_with = "ask")]
    input: Option<String>,

    /// Ask the LLM planner for an itinerary instead of reading input.
    #[arg(long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Treat input as a JSON agent reply (string, message or conversation).
    #[arg(long, env = "ITINERARY_FROM_JSON")]
    from_json: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long, env = "ITINERARY_OUTPUT")]
    output: Option<PathBuf>,

    /// Output format for stdout.
    #[arg(long, env = "ITINERARY_FORMAT", value_enum, default_value = "json")]
    format: FormatArg,

    /// Maximum number of attractions kept.
    #[arg(long, env = "ITINERARY_MAX_ATTRACTIONS", default_value_t = 40)]
    max_attractions: usize,

    /// LLM model ID for --ask.
    #[arg(long, env = "ITINERARY_MODEL")]
    model: Option<String>,

    /// LLM provider for --ask: openai, anthropic, gemini, ollama, azure.
    #[arg(long, env = "ITINERARY_PROVIDER")]
    provider: Option<String>,

    /// LLM temperature (0.0–2.0).
    #[arg(long, env = "ITINERARY_TEMPERATURE", default_value_t = 0.3)]
    temperature: f32,

    /// Max LLM output tokens.
    #[arg(long, env = "ITINERARY_MAX_TOKENS", default_value_t = 4096)]
    max_tokens: usize,

    /// Retries on LLM failure.
    #[arg(long, env = "ITINERARY_MAX_RETRIES", default_value_t = 2)]
    max_retries: u32,

    /// Per-call LLM timeout in seconds.
    #[arg(long, env = "ITINERARY_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Path to a text file containing a custom system prompt.
    #[arg(long, env = "ITINERARY_SYSTEM_PROMPT")]
    system_prompt: Option<PathBuf>,

    /// Disable the spinner shown while waiting for the LLM.
    #[arg(long, env = "ITINERARY_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "ITINERARY_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "ITINERARY_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum FormatArg {
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let segmenter = SegmenterConfig::builder()
        .max_attractions(cli.max_attractions)
        .build()
        .context("Invalid configuration")?;

    // ── Obtain and segment the itinerary ─────────────────────────────────
    let parsed = if let Some(ref question) = cli.ask {
        let config = build_planner_config(&cli, segmenter).await?;
        let spinner = (!cli.quiet && !cli.no_progress).then(new_spinner);
        let result = plan_itinerary(question, &config).await;
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }
        result.context("Planning failed")?
    } else {
        let text = read_input(cli.input.as_deref().unwrap_or("-"))?;
        if cli.from_json {
            let reply: serde_json::Value =
                serde_json::from_str(&text).context("Input is not valid JSON")?;
            segment_reply(&reply, &segmenter)
        } else {
            segment_with(&text, &segmenter)
        }
    };

    // ── Emit ─────────────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        write_json_atomic(&parsed, output_path).context("Failed to write output")?;
        if !cli.quiet {
            eprintln!(
                "{}  {} day(s)  {} cost(s)  {} attraction(s)  →  {}",
                green("✔"),
                parsed.day_by_day.len(),
                parsed.costs.len(),
                parsed.attractions_list.len(),
                bold(&output_path.display().to_string()),
            );
        }
    } else {
        emit_stdout(&parsed, &cli.format)?;
        if !cli.quiet && parsed.is_empty_structure() {
            eprintln!("{}", dim("No structure detected; see `intro` / `raw`."));
        }
    }

    Ok(())
}

fn emit_stdout(parsed: &ParsedItinerary, format: &FormatArg) -> Result<()> {
    let rendered = match format {
        FormatArg::Json => {
            serde_json::to_string_pretty(parsed).context("Failed to serialise output")?
        }
        FormatArg::Markdown => render_markdown(parsed),
    };
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .context("Failed to write to stdout")?;
    if !rendered.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}

/// Read the itinerary from a path, or stdin for "-".
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    itinerary_segmenter::pipeline::input::read_itinerary_file(input)
        .with_context(|| format!("Failed to read {input}"))
}

fn new_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  ⏱ {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_prefix("Planning");
    bar.set_message("waiting for the LLM…");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Map CLI args to `PlannerConfig`.
async fn build_planner_config(cli: &Cli, segmenter: SegmenterConfig) -> Result<PlannerConfig> {
    let mut builder = PlannerConfig::builder()
        .temperature(cli.temperature)
        .max_tokens(cli.max_tokens)
        .max_retries(cli.max_retries)
        .api_timeout_secs(cli.api_timeout)
        .segmenter(segmenter);

    if let Some(ref path) = cli.system_prompt {
        let prompt = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read system prompt from {:?}", path))?;
        builder = builder.system_prompt(prompt);
    }
    if let Some(ref model) = cli.model {
        builder = builder.model(model.clone());
    }
    if let Some(ref provider) = cli.provider {
        builder = builder.provider_name(provider.clone());
    }

    builder.build().context("Invalid configuration")
}
