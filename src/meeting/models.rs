//! Structured extraction output.
//!
//! The field doc comments double as the schema descriptions the model sees.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AssistantError, Result};

/// A task pulled out of the meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionItem {
    /// The specific task that needs to be done.
    pub task: String,
    /// The person assigned to the task.
    pub owner: String,
    /// The deadline for the task, if mentioned.
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Summary and action items extracted from one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MeetingInfo {
    /// A concise, 3-4 sentence summary of the meeting's key points.
    pub summary: String,
    /// Action items in the order they were discussed.
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}

impl MeetingInfo {
    /// JSON schema handed to the model as its response schema.
    pub fn response_schema() -> serde_json::Value {
        let mut schema = schemars::schema_for!(MeetingInfo).to_value();
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
        }
        schema
    }

    /// Parse the text part of a structured-output response.
    pub fn from_model_text(text: &str) -> Result<Self> {
        let cleaned = strip_code_fence(text);
        serde_json::from_str(cleaned)
            .map_err(|e| AssistantError::MalformedResponse(format!("{}: {}", e, cleaned)))
    }
}

/// Strip a ```json ... ``` wrapper if the model added one anyway.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);

    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => trimmed,
    }
}
