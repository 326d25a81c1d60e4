// Triage CLI Entry Point
// Reads a task dump, runs the brain and prints JSON to stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use triage_core::brain::{keyword_hints, KeywordHint, EXAMPLE_CONTENT, INPUT_TEMPLATE};
use triage_core::config::AppConfig;
use triage_core::text_extract::read_task_file;
use triage_core::{logging, AiAnalysis, AppError, BasicAnalysis, TaskAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Classify a task dump and suggest next steps")]
struct Args {
    /// Plain-text (.txt) task file, one task per line
    #[arg(conflicts_with_all = ["example", "stdin"])]
    file: Option<PathBuf>,

    /// Analyze the built-in example dataset
    #[arg(long, conflicts_with = "stdin")]
    example: bool,

    /// Read the task dump from standard input
    #[arg(long)]
    stdin: bool,

    /// Skip the advisor view
    #[arg(long)]
    basic_only: bool,

    /// Single-line JSON (overrides TRIAGE_PRETTY)
    #[arg(long)]
    compact: bool,

    /// Print keyword hints and the input template instead of analyzing
    #[arg(long)]
    hints: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    source: String,
    generated_at: DateTime<Utc>,
    basic: BasicAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai: Option<AiAnalysis>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Hints {
    keywords: &'static [KeywordHint],
    input_template: &'static [&'static str],
}

fn read_input(args: &Args) -> Result<(String, String)> {
    if let Some(path) = &args.file {
        let text = read_task_file(path)
            .with_context(|| format!("Failed to read task file {}", path.display()))?;
        return Ok((path.display().to_string(), text));
    }

    if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(("stdin".to_string(), text));
    }

    if !args.example {
        info!("No input given, falling back to the example dataset");
    }
    Ok(("example".to_string(), EXAMPLE_CONTENT.to_string()))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    logging::init(&config).context("Failed to initialize logging")?;
    let pretty = config.pretty_output && !args.compact;

    if args.hints {
        let hints = Hints {
            keywords: keyword_hints(),
            input_template: INPUT_TEMPLATE,
        };
        println!(
            "{}",
            to_json(&hints, pretty).context("Failed to serialize keyword hints")?
        );
        return Ok(());
    }

    let (source, text) = read_input(&args)?;
    let analyzer = TaskAnalyzer::new();
    let basic = analyzer.analyze(&text);
    let ai = (!args.basic_only).then(|| analyzer.ai_analysis(&basic));

    info!(
        "Analyzed {} items from {} ({} uncategorized)",
        basic.insights.total_items,
        source,
        basic.categorization_feedback.uncategorized.len()
    );

    let report = Report {
        source,
        generated_at: Utc::now(),
        basic,
        ai,
    };
    println!(
        "{}",
        to_json(&report, pretty).context("Failed to serialize analysis report")?
    );
    Ok(())
}
