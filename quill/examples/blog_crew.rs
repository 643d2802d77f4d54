//! Blog content pipeline: plan → write → edit.
//!
//! Resolves the API key (environment, `.env` file, or interactive prompt),
//! builds the three-agent blog crew, and runs it on a fixed topic.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example blog_crew
//! ```

#![allow(clippy::print_stdout)]

use quill::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const TOPIC: &str = "AI Engineering and the AI-first engineering approach";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = OpenAIConfig::from_resolver(&ApiKeyResolver::new())?.with_model(BLOG_MODEL);
    let provider: SharedChatProvider = Arc::new(OpenAI::new(config)?);

    let crew = blog_crew(provider)?;
    let output = crew.kickoff(&blog_inputs(TOPIC)).await?;

    println!("{}", output.raw);
    println!("\nCompleted {} task(s), {}", output.tasks.len(), output.usage);

    Ok(())
}
