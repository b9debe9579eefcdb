//! meeting-assistant - Meeting summaries and action items from transcripts
//!
//! Entry point for the meeting-assistant CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meeting_assistant::cli::{Cli, Commands};
use meeting_assistant::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        meeting_assistant::cli::completions::print(shell);
        return Ok(());
    }

    // Credentials may live in a local .env file; it must be read before settings
    let dotenv = dotenvy::dotenv();

    // Load configuration only for runtime commands.
    let settings = Settings::load()?;

    // Initialize logging: RUST_LOG, then --verbose, then general.log_level
    let directive = settings.log_directive(cli.verbose);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!("Failed to load .env file: {}", e);
        }
    }

    match cli.command {
        Commands::Demo => {
            meeting_assistant::cli::commands::run_demo(&settings).await?;
        }
        Commands::Extract { path, json } => {
            meeting_assistant::cli::commands::extract_transcript(&settings, path, json).await?;
        }
        Commands::Serve { host, port } => {
            meeting_assistant::cli::commands::serve(&settings, host, port).await?;
        }
        Commands::Config(config_cmd) => {
            meeting_assistant::cli::commands::config_command(&settings, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
