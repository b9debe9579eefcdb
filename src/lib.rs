//! meeting-assistant - Meeting summaries and action items extracted by an LLM
//!
//! Sends a transcript to Gemini with a response schema and turns the structured
//! answer into a [`meeting::MeetingInfo`].

pub mod cli;
pub mod config;
pub mod llm;
pub mod meeting;
pub mod server;

use thiserror::Error;

/// Main error type for meeting-assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AssistantError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "meeting-assistant";
