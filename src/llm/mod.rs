//! LLM module for meeting-assistant
//!
//! Structured extraction of meeting info through the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_extractor, MeetingExtractor};
pub use gemini::GeminiClient;
pub use prompts::SYSTEM_PROMPT;
