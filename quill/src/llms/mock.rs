//! Mock provider implementation for testing.
//!
//! Returns predefined responses in sequence and records every request it
//! receives, so tests can assert on prompt construction without making real
//! API calls.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse};
use crate::error::{LlmError, Result};
use crate::usage::Usage;

/// A scripted chat provider for tests.
///
/// Responses are returned in sequence, cycling when exhausted. Each call
/// reports a fixed usage of 10 input / 5 output tokens so aggregation is
/// deterministic.
///
/// # Example
///
/// ```rust,ignore
/// use quill::llms::MockProvider;
///
/// let provider = MockProvider::new(vec!["Hello!".to_string(), "Goodbye!".to_string()]);
/// // First call returns "Hello!", second "Goodbye!", third "Hello!" again...
/// ```
#[derive(Debug)]
pub struct MockProvider {
    model: String,
    responses: Vec<String>,
    response_index: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    /// Creates a mock provider with predefined responses.
    #[must_use]
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            model: "mock-model".to_owned(),
            responses,
            response_index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sets a custom default model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns a copy of every request received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal request log mutex is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests
            .lock()
            .map_err(|_| LlmError::internal("mock request log poisoned"))?
            .push(request.clone());

        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        let text = self
            .responses
            .get(index % self.responses.len().max(1))
            .cloned()
            .unwrap_or_default();

        Ok(ChatResponse::from_text(text)
            .with_model(&self.model)
            .with_usage(Usage::new(10, 5)))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cycles_responses() {
        let provider = MockProvider::new(vec!["first".to_owned(), "second".to_owned()]);
        let request = ChatRequest::new("mock-model").user("hi");

        let r1 = provider.chat(&request).await.unwrap();
        let r2 = provider.chat(&request).await.unwrap();
        let r3 = provider.chat(&request).await.unwrap();

        assert_eq!(r1.text(), "first");
        assert_eq!(r2.text(), "second");
        assert_eq!(r3.text(), "first");
    }

    #[tokio::test]
    async fn records_requests() {
        let provider = MockProvider::new(vec!["ok".to_owned()]);
        let request = ChatRequest::new("mock-model").system("sys").user("hi");

        provider.chat(&request).await.unwrap();

        let seen = provider.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages.len(), 2);
    }

    #[tokio::test]
    async fn empty_script_yields_empty_text() {
        let provider = MockProvider::new(Vec::new());
        let response = provider.chat(&ChatRequest::new("m")).await.unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn custom_model_id() {
        let provider = MockProvider::new(vec!["x".to_owned()]).with_model("custom-mock");
        assert_eq!(provider.default_model(), "custom-mock");
    }
}
