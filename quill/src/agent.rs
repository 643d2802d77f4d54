//! Worker (agent) descriptors.
//!
//! An [`Agent`] is a pure description of a role-conditioned worker: its role,
//! goal, and backstory condition the system prompt of every task it handles.
//! Agents are immutable once constructed; the builder methods consume and
//! return the value, and there are no mutators afterwards.

use std::fmt;

use crate::chat::SharedChatProvider;
use crate::error::PromptError;
use crate::prompts::{Inputs, render};

/// A role-conditioned worker descriptor.
///
/// # Example
///
/// ```rust,ignore
/// use quill::agent::Agent;
///
/// let planner = Agent::new("Blog content planner")
///     .goal("Plan engaging and factually accurate content on {topic}.")
///     .backstory("You are planning a blog article about: {topic}.")
///     .provider(provider.clone());
/// ```
#[derive(Clone)]
pub struct Agent {
    role: String,
    goal: String,
    backstory: String,
    allow_delegation: bool,
    verbose: bool,
    model: Option<String>,
    provider: Option<SharedChatProvider>,
}

impl Agent {
    /// Creates a new agent with the given role.
    ///
    /// The role doubles as the agent's identity inside a crew: tasks
    /// reference their agent by role string.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            goal: String::new(),
            backstory: String::new(),
            allow_delegation: false,
            verbose: false,
            model: None,
            provider: None,
        }
    }

    /// Sets the agent's goal (may contain `{placeholder}` templates).
    #[must_use]
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Sets the agent's backstory (may contain `{placeholder}` templates).
    #[must_use]
    pub fn backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    /// Sets whether the agent may delegate work.
    ///
    /// Carried as a descriptor field; the sequential executor never
    /// delegates, so this defaults to and should stay `false`.
    #[must_use]
    pub const fn allow_delegation(mut self, allow: bool) -> Self {
        self.allow_delegation = allow;
        self
    }

    /// Sets verbose logging for this agent's task executions.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the model identifier, overriding the provider's default.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the LLM provider this agent runs on.
    #[must_use]
    pub fn provider(mut self, provider: SharedChatProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Returns the agent's role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the agent's goal template.
    #[must_use]
    pub fn goal_template(&self) -> &str {
        &self.goal
    }

    /// Returns the agent's backstory template.
    #[must_use]
    pub fn backstory_template(&self) -> &str {
        &self.backstory
    }

    /// Returns whether delegation is allowed.
    #[must_use]
    pub const fn delegation_allowed(&self) -> bool {
        self.allow_delegation
    }

    /// Returns whether verbose logging is enabled.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the model override, if any.
    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns the configured provider, if any.
    #[must_use]
    pub fn chat_provider(&self) -> Option<&SharedChatProvider> {
        self.provider.as_ref()
    }

    /// Renders the system prompt for this agent with the given inputs.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingInput`] when the role, goal, or
    /// backstory references a placeholder absent from `inputs`.
    pub fn system_prompt(&self, inputs: &Inputs) -> Result<String, PromptError> {
        let role = render(&self.role, inputs)?;
        let backstory = render(&self.backstory, inputs)?;
        let goal = render(&self.goal, inputs)?;

        let mut prompt = format!("You are {role}.");
        if !backstory.is_empty() {
            prompt.push(' ');
            prompt.push_str(&backstory);
        }
        if !goal.is_empty() {
            prompt.push_str("\n\nYour personal goal is: ");
            prompt.push_str(&goal);
        }
        Ok(prompt)
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("role", &self.role)
            .field("goal", &self.goal)
            .field("backstory", &self.backstory)
            .field("allow_delegation", &self.allow_delegation)
            .field("verbose", &self.verbose)
            .field("model", &self.model)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}
