//! Task descriptors and task outputs.
//!
//! A [`Task`] is a unit of work: a description, an expected output, an
//! assigned agent (referenced by role), and the names of upstream tasks whose
//! outputs feed into its prompt as context.

use std::fmt::Write as _;

use crate::error::PromptError;
use crate::prompts::{Inputs, render};

/// A unit of work handled by one agent with a single completion call.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    description: String,
    expected_output: String,
    agent: String,
    context: Vec<String>,
}

impl Task {
    /// Creates a new task with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            expected_output: String::new(),
            agent: String::new(),
            context: Vec::new(),
        }
    }

    /// Sets the task description (may contain `{placeholder}` templates).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the expected output description.
    #[must_use]
    pub fn expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = expected.into();
        self
    }

    /// Assigns the task to an agent by role.
    #[must_use]
    pub fn agent(mut self, role: impl Into<String>) -> Self {
        self.agent = role.into();
        self
    }

    /// Declares upstream tasks whose outputs become context for this task.
    ///
    /// Context may only name tasks declared earlier in the crew; the crew
    /// builder enforces this.
    #[must_use]
    pub fn context<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description template.
    #[must_use]
    pub fn description_template(&self) -> &str {
        &self.description
    }

    /// Returns the expected output description.
    #[must_use]
    pub fn expected_output_description(&self) -> &str {
        &self.expected_output
    }

    /// Returns the assigned agent role.
    #[must_use]
    pub fn agent_role(&self) -> &str {
        &self.agent
    }

    /// Returns the upstream task names.
    #[must_use]
    pub fn context_names(&self) -> &[String] {
        &self.context
    }

    /// Renders the user prompt for this task.
    ///
    /// The prompt is the rendered description, the expected output, and a
    /// section per upstream output in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingInput`] when the description or expected
    /// output references a placeholder absent from `inputs`.
    pub fn user_prompt(
        &self,
        inputs: &Inputs,
        context_outputs: &[&TaskOutput],
    ) -> Result<String, PromptError> {
        let mut prompt = render(&self.description, inputs)?;

        let expected = render(&self.expected_output, inputs)?;
        if !expected.is_empty() {
            let _ = write!(prompt, "\n\nThis is the expected output:\n{expected}");
        }

        if !context_outputs.is_empty() {
            prompt.push_str("\n\nThis is the context you are working with:");
            for output in context_outputs {
                let _ = write!(prompt, "\n\n### Output of task '{}'\n{}", output.name, output.raw);
            }
        }

        Ok(prompt)
    }
}

/// The output produced by one task during a crew run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutput {
    /// The task name.
    pub name: String,
    /// The role of the agent that produced the output.
    pub agent: String,
    /// The raw text artifact.
    pub raw: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn topic_inputs() -> Inputs {
        let mut inputs = Inputs::new();
        inputs.insert("topic".to_owned(), "Rust".to_owned());
        inputs
    }

    #[test]
    fn builder_collects_fields() {
        let task = Task::new("write")
            .description("Write the article.")
            .expected_output("A complete article.")
            .agent("writer")
            .context(["plan"]);

        assert_eq!(task.name(), "write");
        assert_eq!(task.agent_role(), "writer");
        assert_eq!(task.context_names(), ["plan"]);
    }

    #[test]
    fn user_prompt_renders_description_and_expected_output() {
        let task = Task::new("plan")
            .description("Outline an article on {topic}.")
            .expected_output("A content plan for {topic}.");

        let prompt = task.user_prompt(&topic_inputs(), &[]).unwrap();
        assert!(prompt.starts_with("Outline an article on Rust."));
        assert!(prompt.contains("This is the expected output:\nA content plan for Rust."));
        assert!(!prompt.contains("context you are working with"));
    }

    #[test]
    fn user_prompt_appends_context_sections_in_order() {
        let task = Task::new("edit").description("Edit the article.");
        let first = TaskOutput {
            name: "plan".to_owned(),
            agent: "planner".to_owned(),
            raw: "the outline".to_owned(),
        };
        let second = TaskOutput {
            name: "write".to_owned(),
            agent: "writer".to_owned(),
            raw: "the draft".to_owned(),
        };

        let prompt = task
            .user_prompt(&Inputs::new(), &[&first, &second])
            .unwrap();

        let plan_at = prompt.find("### Output of task 'plan'\nthe outline").unwrap();
        let write_at = prompt.find("### Output of task 'write'\nthe draft").unwrap();
        assert!(plan_at < write_at);
    }

    #[test]
    fn user_prompt_surfaces_missing_inputs() {
        let task = Task::new("plan").description("Outline {topic}.");
        let err = task.user_prompt(&Inputs::new(), &[]).unwrap_err();
        assert!(matches!(err, PromptError::MissingInput { .. }));
    }
}
