use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::Settings;
use crate::llm::client::MeetingExtractor;
use crate::llm::prompts::SYSTEM_PROMPT;
use crate::meeting::MeetingInfo;
use crate::{AssistantError, Result};

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
    temperature: f32,
    timeout: Option<Duration>,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(AssistantError::Config(
                "Gemini API key is missing. Set llm.api_key in config or GOOGLE_API_KEY."
                    .to_string(),
            ));
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        // 0 disables the request timeout
        let timeout = match settings.llm.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_key,
            model,
            endpoint,
            temperature: settings.llm.temperature,
            timeout,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn build_request(&self, transcript: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: transcript.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json",
                response_json_schema: MeetingInfo::response_schema(),
            },
        }
    }
}

#[async_trait]
impl MeetingExtractor for GeminiClient {
    async fn extract(&self, transcript: &str) -> Result<MeetingInfo> {
        let body = self.build_request(transcript);

        debug!(
            model = %self.model,
            transcript_len = transcript.len(),
            timeout = ?self.timeout,
            "Sending extraction request"
        );

        let response = self
            .http
            .post(self.request_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(AssistantError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;

        let text = payload
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .find(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                AssistantError::MalformedResponse(
                    "Gemini response did not contain any text".to_string(),
                )
            })?;

        MeetingInfo::from_model_text(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
    response_json_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
