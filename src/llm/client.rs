use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::meeting::MeetingInfo;
use crate::{AssistantError, Result};

/// Turns a transcript into structured meeting info.
#[async_trait]
pub trait MeetingExtractor: Send + Sync {
    async fn extract(&self, transcript: &str) -> Result<MeetingInfo>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// Build an extractor from runtime settings.
pub fn build_extractor(settings: &Settings) -> Result<Box<dyn MeetingExtractor>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(AssistantError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ))),
    }
}
