//! OpenAI `ChatProvider` implementation.

use async_trait::async_trait;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse, StopReason};
use crate::error::{LlmError, Result};
use crate::message::Message;

use super::client::OpenAI;
use super::types::OpenAIChatResponse;

impl OpenAI {
    /// Parse the wire response into a [`ChatResponse`].
    pub(crate) fn parse_response(response: OpenAIChatResponse) -> Result<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::response_format("at least one choice", "empty choices"))?;

        let stop_reason = match choice.finish_reason.as_deref() {
            Some("length") => StopReason::Length,
            Some("content_filter") => StopReason::ContentFilter,
            // "stop", None, and any other value defaults to Stop
            _ => StopReason::Stop,
        };

        let message = Message::assistant(choice.message.content.unwrap_or_default());

        let mut parsed = ChatResponse::new(message)
            .with_stop_reason(stop_reason)
            .with_model(response.model)
            .with_id(response.id);
        parsed.usage = response.usage;
        Ok(parsed)
    }
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url();
        let body = self.build_body(request);

        tracing::debug!(model = %body.model, messages = body.messages.len(), "Sending chat completion request");
        let response = self.build_request(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &error_text).into());
        }

        let response_text = response.text().await?;
        let parsed: OpenAIChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            LlmError::response_format(
                "valid OpenAI response",
                format!("parse error: {e}, response: {response_text}"),
            )
        })?;

        Self::parse_response(parsed)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        self.model()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wire_response(json: &str) -> OpenAIChatResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_text_and_usage() {
        let response = wire_response(
            r#"{
                "id": "chatcmpl-1",
                "model": "gpt-4",
                "choices": [{
                    "message": {"role": "assistant", "content": "An outline."},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
            }"#,
        );

        let parsed = OpenAI::parse_response(response).unwrap();
        assert_eq!(parsed.text(), "An outline.");
        assert!(parsed.is_complete());
        assert_eq!(parsed.usage.unwrap().total(), 19);
        assert_eq!(parsed.model.as_deref(), Some("gpt-4"));
        assert_eq!(parsed.id.as_deref(), Some("chatcmpl-1"));
    }

    #[test]
    fn maps_length_finish_reason() {
        let response = wire_response(
            r#"{
                "id": "chatcmpl-2",
                "model": "gpt-4",
                "choices": [{
                    "message": {"role": "assistant", "content": "Truncated"},
                    "finish_reason": "length"
                }],
                "usage": null
            }"#,
        );

        let parsed = OpenAI::parse_response(response).unwrap();
        assert_eq!(parsed.stop_reason, StopReason::Length);
    }

    #[test]
    fn empty_choices_is_a_format_error() {
        let response = wire_response(
            r#"{"id": "chatcmpl-3", "model": "gpt-4", "choices": [], "usage": null}"#,
        );
        assert!(OpenAI::parse_response(response).is_err());
    }
}
