// ReflectAI analytics entry point
// Reads a conversation from a file or stdin and prints the analysis as JSON.

use anyhow::Context;
use clap::{Parser, ValueHint};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reflect_core::analytics::{AnalysisReport, AnalyzeOptions, EngineInput};
use reflect_core::privacy::{content_hash, sanitize_for_log};
use reflect_core::{EngineConfig, SentimentEngine};

/// Rule-based sentiment, clarity and behavioral analysis for conversations
#[derive(Debug, Parser)]
#[command(name = "reflect-core", version, about)]
struct Cli {
    /// Treat the input as a JSON request: {"text", "segments"?, "options"?}
    #[arg(long)]
    json: bool,

    /// Print the reduced report instead of the full result
    #[arg(long)]
    report: bool,

    /// Conversation file to analyze; reads stdin when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,
}

/// Request envelope accepted with `--json`
#[derive(Debug, Deserialize)]
struct Request {
    #[serde(flatten)]
    input: EngineInput,
    #[serde(default)]
    options: AnalyzeOptions,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("REFLECT_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = EngineConfig::from_env()?;
    let engine = SentimentEngine::with_config(config);

    let raw = read_input(cli.file.as_deref())?;
    let request = if cli.json {
        let value: serde_json::Value = serde_json::from_str(&raw).context("invalid JSON request")?;
        info!(request = %sanitize_for_log(value.clone()), "request received");
        serde_json::from_value::<Request>(value).context("invalid JSON request")?
    } else {
        Request {
            input: EngineInput::text(raw),
            options: AnalyzeOptions::default(),
        }
    };

    info!(content_hash = %content_hash(&request.input.text), "analyzing conversation");
    let result = engine.analyze(&request.input, &request.options);

    let output = if cli.report {
        let report = AnalysisReport::from_result(&result, &engine.config().model_version);
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", output);

    info!(
        segment_count = result.segment_count,
        clarity_score = result.clarity_score.score,
        summaries = result.insight_summaries.len(),
        "analysis finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags_and_file() {
        let cli = Cli::try_parse_from(["reflect-core", "--json", "--report", "chat.txt"]).unwrap();
        assert!(cli.json);
        assert!(cli.report);
        assert_eq!(cli.file, Some(PathBuf::from("chat.txt")));

        let cli = Cli::try_parse_from(["reflect-core"]).unwrap();
        assert!(!cli.json && !cli.report);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_flag_and_extra_file() {
        assert!(Cli::try_parse_from(["reflect-core", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["reflect-core", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_help_is_reported_not_exited() {
        let err = Cli::try_parse_from(["reflect-core", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_request_envelope_defaults_options() {
        let req: Request = serde_json::from_str(r#"{ "text": "hi there" }"#).unwrap();
        assert_eq!(req.input.text, "hi there");
        assert_eq!(req.options, AnalyzeOptions::default());
    }
}
