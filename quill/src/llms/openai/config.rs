//! OpenAI provider configuration.
//!
//! A configuration is an API key plus connection settings. The key is an
//! explicit value supplied by the caller, typically through
//! [`ApiKeyResolver`]; the client never reads it back out of the process
//! environment on its own.

use crate::credentials::{ApiKeyResolver, DEFAULT_ENV_VAR};
use crate::error::{CredentialError, LlmError, Result};

/// Connection settings for the OpenAI provider.
///
/// Any OpenAI-compatible endpoint works via [`OpenAIConfig::with_base_url`].
///
/// # Example
///
/// ```rust,ignore
/// use quill::prelude::*;
///
/// let config = OpenAIConfig::from_resolver(&ApiKeyResolver::new())?
///     .with_model(BLOG_MODEL);
/// let provider = OpenAI::new(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key sent as the bearer token.
    pub api_key: String,
    /// API base URL.
    pub base_url: String,
    /// Model used when a request does not name one.
    pub model: String,
    /// Organization ID, sent as the `OpenAI-Organization` header when set.
    pub organization: Option<String>,
    /// Request timeout in seconds. `None` disables the timeout.
    pub timeout_secs: Option<u64>,
}

impl OpenAIConfig {
    /// Default OpenAI API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    /// Model used when neither the configuration nor the request names one.
    pub const DEFAULT_MODEL: &'static str = "gpt-4o";
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Creates a configuration with the given API key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration by resolving the API key through `resolver`.
    ///
    /// This is the usual entry point for binaries: the resolver checks the
    /// environment and a dotenv file before falling back to an interactive
    /// prompt, and the resulting key lands here by value.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's [`CredentialError`] when no source yields
    /// a key.
    pub fn from_resolver(
        resolver: &ApiKeyResolver,
    ) -> std::result::Result<Self, CredentialError> {
        Ok(Self::new(resolver.resolve()?))
    }

    /// Creates a configuration from environment variables only.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL`, `OPENAI_MODEL`, and
    /// `OPENAI_ORGANIZATION` override the defaults when set. Unlike
    /// [`OpenAIConfig::from_resolver`], this never prompts.
    ///
    /// # Errors
    ///
    /// Returns an authentication error when `OPENAI_API_KEY` is unset or
    /// empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(DEFAULT_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                LlmError::auth(
                    "openai",
                    format!("{DEFAULT_ENV_VAR} environment variable not set"),
                )
            })?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config = config.with_model(model);
        }
        if let Ok(org) = std::env::var("OPENAI_ORGANIZATION") {
            config = config.with_organization(org);
        }
        Ok(config)
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the default model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the organization ID.
    #[must_use]
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            organization: None,
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}
