//! CLI command implementations

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_extractor, MeetingExtractor};
use crate::meeting::{write_report, SAMPLE_TRANSCRIPT};

/// Run extraction on the built-in sample transcript
pub async fn run_demo(settings: &Settings) -> Result<()> {
    let extractor = build_extractor(settings)?;
    let mut stdout = io::stdout();
    extract_and_print(extractor.as_ref(), SAMPLE_TRANSCRIPT, false, &mut stdout).await
}

/// Extract meeting info from a transcript file or stdin
pub async fn extract_transcript(settings: &Settings, path: Option<PathBuf>, json: bool) -> Result<()> {
    let transcript = read_transcript(path.as_deref())?;
    let extractor = build_extractor(settings)?;
    let mut stdout = io::stdout();
    extract_and_print(extractor.as_ref(), &transcript, json, &mut stdout).await
}

/// Run one extraction and print the result.
///
/// Nothing is written to `out` unless the whole response parsed.
pub async fn extract_and_print<W: Write>(
    extractor: &dyn MeetingExtractor,
    transcript: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    info!("Running extraction with {}...", extractor.model());

    let meeting = extractor
        .extract(transcript)
        .await
        .context("Extraction failed")?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&meeting)?)?;
    } else {
        write_report(out, &meeting)?;
    }
    out.flush()?;

    Ok(())
}

fn read_transcript(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("Failed to read transcript from stdin"),
    }
}

/// Run the HTTP API server
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::run(&settings).await
}

/// Configuration management commands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
