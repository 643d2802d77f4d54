//! Chat types and the provider trait for LLM operations.
//!
//! This module provides:
//! - [`ChatRequest`]: Request parameters for chat completions
//! - [`ChatResponse`]: Response from chat completions
//! - [`ChatProvider`]: Core trait that all LLM backends implement
//!
//! # Example
//!
//! ```rust,ignore
//! use quill::prelude::*;
//!
//! let request = ChatRequest::new("gpt-4")
//!     .system("You are a blog content planner.")
//!     .user("Plan an article about Rust.")
//!     .temperature(0.7);
//!
//! let response = provider.chat(&request).await?;
//! println!("{}", response.text());
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;
use crate::usage::Usage;

/// A chat completion request to an LLM.
///
/// # OpenAI API Alignment
/// Fields align with OpenAI's Chat Completions API parameters. An empty
/// `model` means "use the provider's default model".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier (e.g., "gpt-4", "gpt-4o").
    #[serde(default)]
    pub model: String,

    /// Conversation messages.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 to 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl ChatRequest {
    /// Creates a new request with the specified model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Adds a system message.
    #[must_use]
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Adds a user message.
    #[must_use]
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Adds an assistant message.
    #[must_use]
    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::assistant(content));
        self
    }

    /// Sets max tokens.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets temperature.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets top_p.
    #[must_use]
    pub const fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Model completed normally.
    #[default]
    Stop,
    /// Output was truncated at the token limit.
    Length,
    /// Content was filtered by the provider.
    ContentFilter,
    /// Any other provider-specific reason.
    #[serde(other)]
    Other,
}

impl StopReason {
    /// Returns `true` if the model completed normally.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Returns `true` if the response was truncated due to length.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::Length)
    }
}

/// A chat completion response from an LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated message.
    pub message: Message,

    /// Why the model stopped generating.
    pub stop_reason: StopReason,

    /// Token usage statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    /// Model identifier used for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Unique completion ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ChatResponse {
    /// Creates a new response with a message.
    #[must_use]
    pub const fn new(message: Message) -> Self {
        Self {
            message,
            stop_reason: StopReason::Stop,
            usage: None,
            model: None,
            id: None,
        }
    }

    /// Creates a response from text content.
    #[must_use]
    pub fn from_text(content: impl Into<String>) -> Self {
        Self::new(Message::assistant(content))
    }

    /// Sets the stop reason.
    #[must_use]
    pub const fn with_stop_reason(mut self, reason: StopReason) -> Self {
        self.stop_reason = reason;
        self
    }

    /// Sets usage statistics.
    #[must_use]
    pub const fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the completion ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the text content of the response.
    #[must_use]
    pub fn text(&self) -> &str {
        self.message.text()
    }

    /// Returns `true` if the model completed normally.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stop_reason.is_complete()
    }
}

/// Trait for providers that support chat completions.
///
/// This is the trait every LLM backend implements. Crew execution only needs
/// one complete request/response round trip per task, so the surface is a
/// single [`ChatProvider::chat`] call plus identity accessors.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a chat completion request and receive a complete response.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;

    /// Get the name of this provider.
    ///
    /// Used for error messages and logging.
    fn provider_name(&self) -> &'static str;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;
}

/// Extension trait for [`ChatProvider`] with convenience methods.
#[async_trait]
pub trait ChatProviderExt: ChatProvider {
    /// Send a simple text message and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(self.default_model()).user(prompt);
        let response = self.chat(&request).await?;
        Ok(response.text().to_owned())
    }

    /// Send a message with a system prompt.
    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(self.default_model())
            .system(system)
            .user(prompt);
        let response = self.chat(&request).await?;
        Ok(response.text().to_owned())
    }
}

// Blanket implementation for all ChatProviders
impl<T: ChatProvider> ChatProviderExt for T {}

/// Type alias for an Arc-wrapped ChatProvider.
pub type SharedChatProvider = std::sync::Arc<dyn ChatProvider>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod chat_request {
        use super::*;

        #[test]
        fn new_creates_with_model() {
            let req = ChatRequest::new("gpt-4");
            assert_eq!(req.model, "gpt-4");
            assert!(req.messages.is_empty());
        }

        #[test]
        fn builder_chain() {
            let req = ChatRequest::new("gpt-4")
                .system("Be helpful")
                .user("Hello")
                .assistant("Hi, how can I help?")
                .max_tokens(100)
                .temperature(0.7)
                .top_p(0.9);

            assert_eq!(req.messages.len(), 3);
            assert_eq!(req.messages[0].role.as_str(), "system");
            assert_eq!(req.messages[1].role.as_str(), "user");
            assert_eq!(req.messages[2].role.as_str(), "assistant");
            assert_eq!(req.max_tokens, Some(100));
            assert_eq!(req.temperature, Some(0.7));
            assert_eq!(req.top_p, Some(0.9));
        }

        #[test]
        fn serde_skips_none_values() {
            let req = ChatRequest::new("gpt-4").user("Hello");
            let json = serde_json::to_string(&req).unwrap();

            assert!(json.contains("model"));
            assert!(json.contains("messages"));
            assert!(!json.contains("max_tokens"));
            assert!(!json.contains("temperature"));
        }
    }

    mod stop_reason {
        use super::*;

        #[test]
        fn completion_checks() {
            assert!(StopReason::Stop.is_complete());
            assert!(!StopReason::Length.is_complete());
            assert!(StopReason::Length.is_truncated());
        }

        #[test]
        fn unknown_values_deserialize_to_other() {
            let reason: StopReason = serde_json::from_str("\"tool_calls\"").unwrap();
            assert_eq!(reason, StopReason::Other);
        }
    }

    mod chat_response {
        use super::*;

        #[test]
        fn from_text_creates_assistant_message() {
            let resp = ChatResponse::from_text("Hello world");
            assert_eq!(resp.message.role.as_str(), "assistant");
            assert_eq!(resp.text(), "Hello world");
        }

        #[test]
        fn builder_chain() {
            let resp = ChatResponse::from_text("Hello")
                .with_stop_reason(StopReason::Stop)
                .with_model("gpt-4")
                .with_id("chatcmpl-123")
                .with_usage(Usage::new(5, 10));

            assert!(resp.is_complete());
            assert_eq!(resp.model.as_deref(), Some("gpt-4"));
            assert_eq!(resp.id.as_deref(), Some("chatcmpl-123"));
            assert_eq!(resp.usage.unwrap().total(), 15);
        }
    }
}
