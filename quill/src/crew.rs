//! Crew assembly and sequential execution.
//!
//! A [`Crew`] is an ordered collection of agents and tasks submitted together
//! for execution. [`Crew::kickoff`] runs the tasks strictly in declaration
//! order: each task gets one chat-completion call on its agent's provider,
//! and the outputs of its context tasks are threaded into its prompt. The
//! final task's output is the pipeline result.
//!
//! Dependency validation happens at build time. Context may only reference
//! earlier tasks, so the chain is a topological order by construction and
//! cycles are impossible.

use crate::agent::Agent;
use crate::chat::{ChatProvider as _, ChatRequest};
use crate::error::{CrewError, Result};
use crate::prompts::Inputs;
use crate::task::{Task, TaskOutput};
use crate::usage::Usage;

/// An ordered collection of agents and tasks.
///
/// # Example
///
/// ```rust,ignore
/// use quill::prelude::*;
///
/// let crew = Crew::builder()
///     .agent(planner)
///     .agent(writer)
///     .task(Task::new("plan").description("...").agent("planner"))
///     .task(Task::new("write").description("...").agent("writer").context(["plan"]))
///     .build()?;
///
/// let output = crew.kickoff(&inputs).await?;
/// println!("{}", output.raw);
/// ```
#[derive(Debug, Clone)]
pub struct Crew {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
    verbose: bool,
}

impl Crew {
    /// Creates a new crew builder.
    #[must_use]
    pub fn builder() -> CrewBuilder {
        CrewBuilder::new()
    }

    /// Returns the agents in declaration order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Returns the tasks in declaration order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns whether crew-level verbose logging is enabled.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Runs all tasks in order and returns the final artifact.
    ///
    /// Provider failures propagate unmodified; there is no retry or
    /// partial-result recovery.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by prompt rendering or a provider
    /// call. Construction invariants make agent and context lookups
    /// infallible at this point.
    pub async fn kickoff(&self, inputs: &Inputs) -> Result<CrewOutput> {
        let mut outputs: Vec<TaskOutput> = Vec::with_capacity(self.tasks.len());
        let mut usage = Usage::zero();

        for task in &self.tasks {
            let agent = self.agent_for(task)?;
            let provider = agent
                .chat_provider()
                .ok_or_else(|| CrewError::MissingProvider(agent.role().to_owned()))?;

            let system = agent.system_prompt(inputs)?;
            let context: Vec<&TaskOutput> = task
                .context_names()
                .iter()
                .filter_map(|name| outputs.iter().find(|o| &o.name == name))
                .collect();
            let user = task.user_prompt(inputs, &context)?;

            if self.verbose || agent.is_verbose() {
                tracing::info!(
                    task = task.name(),
                    agent = agent.role(),
                    context = context.len(),
                    "Dispatching task"
                );
                tracing::debug!(%system, %user, "Task prompts");
            }

            let request = ChatRequest::new(agent.model_name().unwrap_or_default())
                .system(system)
                .user(user);
            let response = provider.chat(&request).await?;

            if let Some(task_usage) = response.usage {
                usage += task_usage;
            }

            let raw = response.text().to_owned();
            if self.verbose || agent.is_verbose() {
                tracing::info!(
                    task = task.name(),
                    chars = raw.len(),
                    complete = response.is_complete(),
                    "Task finished"
                );
            }

            outputs.push(TaskOutput {
                name: task.name().to_owned(),
                agent: agent.role().to_owned(),
                raw,
            });
        }

        let raw = outputs.last().map(|o| o.raw.clone()).unwrap_or_default();
        Ok(CrewOutput {
            raw,
            tasks: outputs,
            usage,
        })
    }

    fn agent_for(&self, task: &Task) -> Result<&Agent> {
        self.agents
            .iter()
            .find(|a| a.role() == task.agent_role())
            .ok_or_else(|| {
                CrewError::UnknownAgent {
                    task: task.name().to_owned(),
                    agent: task.agent_role().to_owned(),
                }
                .into()
            })
    }
}

/// The result of a crew run.
#[derive(Debug, Clone)]
pub struct CrewOutput {
    /// The final task's text artifact.
    pub raw: String,
    /// Per-task outputs in execution order.
    pub tasks: Vec<TaskOutput>,
    /// Aggregate token usage across all tasks.
    pub usage: Usage,
}

impl CrewOutput {
    /// Looks up the output of a task by name.
    #[must_use]
    pub fn task_output(&self, name: &str) -> Option<&TaskOutput> {
        self.tasks.iter().find(|o| o.name == name)
    }
}

/// Builder for [`Crew`], validating the dependency chain at build time.
#[derive(Debug, Default)]
pub struct CrewBuilder {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
    verbose: bool,
}

impl CrewBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an agent.
    #[must_use]
    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// Adds a task. Declaration order is execution order.
    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Enables crew-level verbose logging.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates and builds the crew.
    ///
    /// # Errors
    ///
    /// - [`CrewError::NoAgents`] / [`CrewError::NoTasks`] for an empty crew
    /// - [`CrewError::DuplicateAgent`] / [`CrewError::DuplicateTask`] for
    ///   ambiguous references
    /// - [`CrewError::UnknownAgent`] when a task names an absent agent
    /// - [`CrewError::UnknownContext`] when a context entry is not a
    ///   strictly earlier task
    /// - [`CrewError::MissingProvider`] when an agent has no provider
    pub fn build(self) -> std::result::Result<Crew, CrewError> {
        if self.agents.is_empty() {
            return Err(CrewError::NoAgents);
        }
        if self.tasks.is_empty() {
            return Err(CrewError::NoTasks);
        }

        for (i, agent) in self.agents.iter().enumerate() {
            if self.agents[..i].iter().any(|a| a.role() == agent.role()) {
                return Err(CrewError::DuplicateAgent(agent.role().to_owned()));
            }
            if agent.chat_provider().is_none() {
                return Err(CrewError::MissingProvider(agent.role().to_owned()));
            }
        }

        for (i, task) in self.tasks.iter().enumerate() {
            if self.tasks[..i].iter().any(|t| t.name() == task.name()) {
                return Err(CrewError::DuplicateTask(task.name().to_owned()));
            }
            if !self.agents.iter().any(|a| a.role() == task.agent_role()) {
                return Err(CrewError::UnknownAgent {
                    task: task.name().to_owned(),
                    agent: task.agent_role().to_owned(),
                });
            }
            for context in task.context_names() {
                // Only strictly earlier tasks are visible, which rules out
                // self-references and forward references.
                if !self.tasks[..i].iter().any(|t| t.name() == context) {
                    return Err(CrewError::UnknownContext {
                        task: task.name().to_owned(),
                        context: context.clone(),
                    });
                }
            }
        }

        Ok(Crew {
            agents: self.agents,
            tasks: self.tasks,
            verbose: self.verbose,
        })
    }
}
