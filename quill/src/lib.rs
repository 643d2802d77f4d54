//! Quill - a sequential multi-agent content pipeline framework.
//!
//! Quill wires role-conditioned LLM agents into linearly-ordered crews: each
//! task in a crew is handled by one agent with a single chat-completion call,
//! and downstream tasks receive the outputs of the tasks they depend on as
//! additional context. The crate ships the canonical three-stage blog
//! pipeline (plan → write → edit) in [`pipeline`].

pub mod agent;
pub mod chat;
pub mod credentials;
pub mod crew;
pub mod error;
pub mod llms;
pub mod message;
pub mod pipeline;
pub mod prelude;
pub mod prompts;
pub mod task;
pub mod usage;

pub use error::{CredentialError, CrewError, Error, LlmError, PromptError, Result};
