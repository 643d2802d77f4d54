//! OpenAI provider.
//!
//! Implements [`ChatProvider`](crate::chat::ChatProvider) over the OpenAI
//! Chat Completions API (and any compatible endpoint via a custom base URL).

mod chat;
mod client;
mod config;
mod types;

pub use client::OpenAI;
pub use config::OpenAIConfig;
