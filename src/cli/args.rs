//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// meeting-assistant - Meeting summaries and action items from transcripts
#[derive(Parser, Debug)]
#[command(name = "meeting-assistant")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run extraction on the built-in sample transcript
    Demo,

    /// Extract a summary and action items from a transcript
    Extract {
        /// Transcript file (reads stdin when omitted or "-")
        path: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
