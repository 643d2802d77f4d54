//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types and traits for easy access.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quill::prelude::*;
//! ```

pub use crate::agent::Agent;
pub use crate::chat::{
    ChatProvider, ChatProviderExt, ChatRequest, ChatResponse, SharedChatProvider, StopReason,
};
pub use crate::credentials::ApiKeyResolver;
pub use crate::crew::{Crew, CrewBuilder, CrewOutput};
pub use crate::error::{CredentialError, CrewError, Error, LlmError, PromptError, Result};
pub use crate::llms::{MockProvider, OpenAI, OpenAIConfig};
pub use crate::message::{Message, Role};
pub use crate::pipeline::{BLOG_MODEL, blog_crew, blog_inputs};
pub use crate::prompts::{Inputs, render};
pub use crate::task::{Task, TaskOutput};
pub use crate::usage::Usage;
