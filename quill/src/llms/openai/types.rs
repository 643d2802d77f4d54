//! OpenAI wire types.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::usage::Usage;

/// OpenAI chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OpenAIChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// OpenAI chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<OpenAIChoice>,
    pub usage: Option<Usage>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
    pub finish_reason: Option<String>,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIResponseMessage {
    pub content: Option<String>,
}

/// OpenAI error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIErrorResponse {
    pub error: OpenAIApiError,
}

/// OpenAI error details.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIApiError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: Option<String>,
}
