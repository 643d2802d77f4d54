//! API key resolution.
//!
//! Resolution order: process environment, then a dotenv file loaded into the
//! environment, then an interactive hidden prompt. The resolved key is
//! returned by value and passed explicitly into provider configuration; it is
//! never written back into the process environment.

use std::path::PathBuf;

use crate::error::CredentialError;

/// Environment variable consulted by the default resolver.
pub const DEFAULT_ENV_VAR: &str = "OPENAI_API_KEY";

/// Resolves an API key from the environment, a dotenv file, or a prompt.
///
/// # Example
///
/// ```rust,ignore
/// use quill::credentials::ApiKeyResolver;
///
/// let api_key = ApiKeyResolver::new().resolve()?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiKeyResolver {
    env_var: String,
    dotenv_path: Option<PathBuf>,
}

impl ApiKeyResolver {
    /// Creates a resolver for [`DEFAULT_ENV_VAR`] with default dotenv
    /// discovery (a `.env` file in the current directory or its ancestors).
    #[must_use]
    pub fn new() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_owned(),
            dotenv_path: None,
        }
    }

    /// Sets the environment variable to consult.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Sets an explicit dotenv file path instead of default discovery.
    #[must_use]
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Resolves the API key, prompting on the terminal as a last resort.
    ///
    /// The interactive prompt does not echo input.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Unavailable`] when no source yields a
    /// non-empty value, or [`CredentialError::Prompt`] when the prompt
    /// cannot be read (e.g. no TTY).
    pub fn resolve(&self) -> Result<String, CredentialError> {
        self.resolve_with(|| rpassword::prompt_password("Enter your OpenAI API key: "))
    }

    /// Resolves the API key using a caller-supplied interactive prompt.
    ///
    /// The prompt is invoked at most once, and only after both the
    /// environment variable and the dotenv file fail to yield a value.
    ///
    /// # Errors
    ///
    /// See [`ApiKeyResolver::resolve`].
    pub fn resolve_with<F>(&self, prompt: F) -> Result<String, CredentialError>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        if let Some(key) = self.from_env() {
            return Ok(key);
        }

        // Loading the dotenv file populates the process environment, so a
        // re-check picks up any value it defined.
        self.load_dotenv();
        if let Some(key) = self.from_env() {
            return Ok(key);
        }

        tracing::debug!(env_var = %self.env_var, "API key not found, prompting interactively");
        let entered = prompt()?;
        let entered = entered.trim();
        if entered.is_empty() {
            return Err(CredentialError::Unavailable);
        }
        Ok(entered.to_owned())
    }

    fn from_env(&self) -> Option<String> {
        std::env::var(&self.env_var).ok().filter(|v| !v.is_empty())
    }

    fn load_dotenv(&self) {
        // A missing dotenv file is not an error; the prompt is the fallback.
        let loaded = match &self.dotenv_path {
            Some(path) => dotenvy::from_path(path).is_ok(),
            None => dotenvy::dotenv().is_ok(),
        };
        if loaded {
            tracing::debug!("Loaded dotenv file into the environment");
        }
    }
}

impl Default for ApiKeyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Env mutation is process-global; each test uses its own variable name
    // so they stay independent under the parallel test harness.

    #[test]
    fn env_var_wins_without_prompting() {
        unsafe { std::env::set_var("QUILL_TEST_KEY_ENV", "sk-from-env") };
        let prompts = AtomicUsize::new(0);

        let key = ApiKeyResolver::new()
            .with_env_var("QUILL_TEST_KEY_ENV")
            .resolve_with(|| {
                prompts.fetch_add(1, Ordering::SeqCst);
                Ok("sk-from-prompt".to_owned())
            })
            .unwrap();

        assert_eq!(key, "sk-from-env");
        assert_eq!(prompts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dotenv_file_is_loaded_and_env_populated() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.child(".env");
        env_file
            .write_str("QUILL_TEST_KEY_DOTENV=sk-from-dotenv\n")
            .unwrap();

        let key = ApiKeyResolver::new()
            .with_env_var("QUILL_TEST_KEY_DOTENV")
            .with_dotenv_path(env_file.path())
            .resolve_with(|| Ok(String::new()))
            .unwrap();

        assert_eq!(key, "sk-from-dotenv");
        // dotenvy loads into the process environment as a side effect.
        assert_eq!(
            std::env::var("QUILL_TEST_KEY_DOTENV").unwrap(),
            "sk-from-dotenv"
        );
    }

    #[test]
    fn prompt_is_invoked_exactly_once_as_last_resort() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.child(".env");
        env_file.write_str("UNRELATED=1\n").unwrap();
        let prompts = AtomicUsize::new(0);

        let key = ApiKeyResolver::new()
            .with_env_var("QUILL_TEST_KEY_PROMPT")
            .with_dotenv_path(env_file.path())
            .resolve_with(|| {
                prompts.fetch_add(1, Ordering::SeqCst);
                Ok("  sk-from-prompt \n".to_owned())
            })
            .unwrap();

        assert_eq!(key, "sk-from-prompt");
        assert_eq!(prompts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_prompt_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.child(".env");
        env_file.write_str("").unwrap();

        let err = ApiKeyResolver::new()
            .with_env_var("QUILL_TEST_KEY_EMPTY")
            .with_dotenv_path(env_file.path())
            .resolve_with(|| Ok("   ".to_owned()))
            .unwrap_err();

        assert!(matches!(err, CredentialError::Unavailable));
    }

    #[test]
    fn prompt_io_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.child(".env");
        env_file.write_str("").unwrap();

        let err = ApiKeyResolver::new()
            .with_env_var("QUILL_TEST_KEY_IO")
            .with_dotenv_path(env_file.path())
            .resolve_with(|| {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    "no tty",
                ))
            })
            .unwrap_err();

        assert!(matches!(err, CredentialError::Prompt(_)));
    }
}
