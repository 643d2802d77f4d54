//! Unified error types for the quill framework.
//!
//! This module provides the error hierarchy covering:
//! - LLM provider errors (authentication, rate limiting, etc.)
//! - Crew construction and execution errors
//! - Prompt rendering errors
//! - Credential resolution errors

use std::fmt;

/// Result type alias for quill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the quill framework.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// LLM provider error.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Crew construction or execution error.
    #[error("Crew error: {0}")]
    Crew(#[from] CrewError),

    /// Prompt template rendering error.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Credential resolution error.
    ///
    /// Carries prompt I/O failures via [`CredentialError::Prompt`].
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error type for LLM provider operations.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LlmError {
    /// The error kind.
    pub kind: LlmErrorKind,
    /// The provider name (e.g., "openai", "mock").
    pub provider: Option<String>,
    /// Additional error message.
    pub message: String,
    /// Optional error code from the provider.
    pub code: Option<String>,
}

/// Categories of LLM errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LlmErrorKind {
    /// Authentication or authorization failure.
    Auth,
    /// Rate limit exceeded.
    RateLimited,
    /// Invalid request parameters.
    InvalidRequest,
    /// Response format error.
    ResponseFormat,
    /// Network or connection error.
    Network,
    /// HTTP status error.
    HttpStatus,
    /// Provider-specific error.
    Provider,
    /// Internal error.
    Internal,
}

impl LlmError {
    /// Create an authentication error.
    #[must_use]
    pub fn auth(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Auth,
            provider: Some(provider.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Create a rate limit error.
    #[must_use]
    pub fn rate_limited(provider: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::RateLimited,
            provider: Some(provider.into()),
            message: "Rate limit exceeded. Please retry after some time.".into(),
            code: None,
        }
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::InvalidRequest,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Create a response format error.
    #[must_use]
    pub fn response_format(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::ResponseFormat,
            provider: None,
            message: format!("Expected {}, got {}", expected.into(), got.into()),
            code: None,
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Network,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Create an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::HttpStatus,
            provider: None,
            message: format!("HTTP {status}: {}", body.into()),
            code: Some(status.to_string()),
        }
    }

    /// Create a provider-specific error.
    #[must_use]
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Provider,
            provider: Some(provider.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Create a provider error with an error code.
    #[must_use]
    pub fn provider_code(
        provider: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: LlmErrorKind::Provider,
            provider: Some(provider.into()),
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Internal,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Check if this is a retryable error.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind, LlmErrorKind::RateLimited | LlmErrorKind::Network)
    }
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(provider) = &self.provider {
            write!(f, "[{provider}] ")?;
        }
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network(format!("Connection failed: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}

/// Error type for crew construction and execution.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum CrewError {
    /// The crew was built without any tasks.
    #[error("Crew has no tasks")]
    NoTasks,

    /// The crew was built without any agents.
    #[error("Crew has no agents")]
    NoAgents,

    /// Two agents share the same role.
    #[error("Duplicate agent role: '{0}'")]
    DuplicateAgent(String),

    /// Two tasks share the same name.
    #[error("Duplicate task name: '{0}'")]
    DuplicateTask(String),

    /// A task references an agent role that is not part of the crew.
    #[error("Task '{task}' references unknown agent '{agent}'")]
    UnknownAgent {
        /// The referencing task name.
        task: String,
        /// The missing agent role.
        agent: String,
    },

    /// A task's context references a task that is not declared before it.
    ///
    /// Context may only name strictly earlier tasks, which keeps the
    /// dependency chain acyclic by construction.
    #[error("Task '{task}' references context '{context}' which is not an earlier task")]
    UnknownContext {
        /// The referencing task name.
        task: String,
        /// The missing or forward context task name.
        context: String,
    },

    /// An agent was declared without an LLM provider.
    #[error("Agent '{0}' has no provider configured")]
    MissingProvider(String),
}

/// Error type for prompt template rendering.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum PromptError {
    /// A template placeholder has no matching input.
    #[error("No input provided for placeholder '{{{name}}}'")]
    MissingInput {
        /// The placeholder name.
        name: String,
    },
}

impl PromptError {
    /// Create a missing input error.
    #[must_use]
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput { name: name.into() }
    }
}

/// Error type for API key resolution.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialError {
    /// No source yielded an API key.
    #[error("No API key found in the environment, dotenv file, or interactive prompt")]
    Unavailable,

    /// The interactive prompt could not be read.
    #[error("Interactive prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}
