//! Token usage tracking for LLM operations.
//!
//! # OpenAI API Alignment
//!
//! The [`Usage`] struct maps to OpenAI's usage object
//! (`prompt_tokens` / `completion_tokens` / `total_tokens`). Crew execution
//! sums per-task usage into a pipeline total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Token usage statistics from an LLM operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the input/prompt.
    #[serde(default, alias = "prompt_tokens")]
    pub input_tokens: u32,

    /// Number of tokens in the output/completion.
    #[serde(default, alias = "completion_tokens")]
    pub output_tokens: u32,

    /// Total tokens used (input + output).
    #[serde(default)]
    pub total_tokens: u32,
}

impl Usage {
    /// Create a new usage record.
    #[must_use]
    pub const fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }

    /// Create an empty usage record.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            input_tokens: 0,
            output_tokens: 0,
            total_tokens: 0,
        }
    }

    /// Total tokens, recomputed if the provider did not report it.
    #[must_use]
    pub const fn total(&self) -> u32 {
        if self.total_tokens > 0 {
            self.total_tokens
        } else {
            self.input_tokens + self.output_tokens
        }
    }
}

impl Add for Usage {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            input_tokens: self.input_tokens + other.input_tokens,
            output_tokens: self.output_tokens + other.output_tokens,
            total_tokens: self.total() + other.total(),
        }
    }
}

impl AddAssign for Usage {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tokens (in: {}, out: {})",
            self.total(),
            self.input_tokens,
            self.output_tokens
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_computes_total() {
        let usage = Usage::new(100, 50);
        assert_eq!(usage.total(), 150);
    }

    #[test]
    fn add_combines_counts() {
        let combined = Usage::new(100, 50) + Usage::new(200, 100);
        assert_eq!(combined.input_tokens, 300);
        assert_eq!(combined.output_tokens, 150);
        assert_eq!(combined.total(), 450);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Usage::zero();
        total += Usage::new(10, 5);
        total += Usage::new(20, 10);
        assert_eq!(total.total(), 45);
    }

    #[test]
    fn deserializes_openai_field_names() {
        let usage: Usage = serde_json::from_str(
            r#"{"prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46}"#,
        )
        .unwrap();
        assert_eq!(usage.input_tokens, 12);
        assert_eq!(usage.output_tokens, 34);
        assert_eq!(usage.total_tokens, 46);
    }

    #[test]
    fn total_falls_back_when_unreported() {
        let usage = Usage {
            input_tokens: 7,
            output_tokens: 3,
            total_tokens: 0,
        };
        assert_eq!(usage.total(), 10);
    }
}
