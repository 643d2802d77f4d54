//! The canonical blog content pipeline.
//!
//! Three agents, three tasks, one linear dependency chain:
//! plan → write → edit. The only runtime input is `{topic}`.

use crate::agent::Agent;
use crate::chat::SharedChatProvider;
use crate::crew::Crew;
use crate::error::CrewError;
use crate::prompts::Inputs;
use crate::task::Task;

/// Model identifier used by the blog pipeline.
pub const BLOG_MODEL: &str = "gpt-4";

/// Builds the runtime inputs for a blog crew run.
#[must_use]
pub fn blog_inputs(topic: &str) -> Inputs {
    let mut inputs = Inputs::new();
    inputs.insert("topic".to_owned(), topic.to_owned());
    inputs
}

/// Builds the blog content crew on the given provider.
///
/// All three agents share the provider and the [`BLOG_MODEL`] identifier;
/// delegation stays disabled throughout.
///
/// # Errors
///
/// Construction is static, so this only fails if the declared chain is
/// inconsistent, which the tests below pin down.
pub fn blog_crew(provider: SharedChatProvider) -> Result<Crew, CrewError> {
    let planner = Agent::new("Blog content planner")
        .goal(
            "Plan engaging and factually accurate content on {topic} for a \
             compelling story-telling blog article.",
        )
        .backstory(
            "You are working on planning a blog article about the topic: {topic}. \
             You collect information and organize it in a well structured format \
             that helps the audience consume it easily, learn something, and make \
             informed decisions. Your work is the basis for the content writer to \
             write the article on this topic.",
        )
        .allow_delegation(false)
        .verbose(true)
        .model(BLOG_MODEL)
        .provider(std::sync::Arc::clone(&provider));

    let writer = Agent::new("Blog content writer")
        .goal(
            "Write an insightful and factually accurate opinion piece about \
             {topic}, in a compelling story-telling format.",
        )
        .backstory(
            "You are working on writing a new opinion piece about the topic: \
             {topic}. You base your writing on the work of the content planner, \
             who provides an outline and relevant context about the topic. You \
             follow the main objectives and direction of the outline, provide \
             objective and impartial insights backed by the planner's \
             information, and make clear to the reader when a statement is an \
             opinion rather than an objective one.",
        )
        .allow_delegation(false)
        .verbose(true)
        .model(BLOG_MODEL)
        .provider(std::sync::Arc::clone(&provider));

    let editor = Agent::new("Blog content editor")
        .goal(
            "Edit the blog article for clarity, coherence, grammar, and factual \
             accuracy, so the content flows well and engages the target audience.",
        )
        .backstory("You are working on editing a blog article about the topic: {topic}.")
        .allow_delegation(false)
        .verbose(true)
        .model(BLOG_MODEL)
        .provider(provider);

    let plan = Task::new("plan")
        .description(
            "Create a detailed outline for a blog article on the topic: {topic}, \
             with a call to action. Prioritize the latest trends, key players, \
             and noteworthy news on {topic}. Identify the audience's pain points \
             and how to hook them. Include SEO keywords and relevant data or \
             sources.",
        )
        .expected_output(
            "A comprehensive content plan document with an outline, audience \
             analysis, SEO keywords, and resources.",
        )
        .agent("Blog content planner");

    let write = Task::new("write")
        .description("Write the blog article based on the outline created in the planning phase.")
        .expected_output("A comprehensive blog article based on the plan provided.")
        .agent("Blog content writer")
        .context(["plan"]);

    let edit = Task::new("edit")
        .description(
            "Edit the blog article for clarity, coherence, grammar, and factual accuracy.",
        )
        .expected_output("A polished and refined blog article ready for publication.")
        .agent("Blog content editor")
        .context(["write"]);

    Crew::builder()
        .agent(planner)
        .agent(writer)
        .agent(editor)
        .task(plan)
        .task(write)
        .task(edit)
        .verbose(true)
        .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::llms::MockProvider;
    use std::sync::Arc;

    fn crew() -> Crew {
        let provider: SharedChatProvider = Arc::new(MockProvider::new(vec![
            "outline".to_owned(),
            "draft".to_owned(),
            "final".to_owned(),
        ]));
        blog_crew(provider).unwrap()
    }

    #[test]
    fn contains_all_agents_and_tasks() {
        let crew = crew();
        assert_eq!(crew.agents().len(), 3);
        assert_eq!(crew.tasks().len(), 3);

        let roles: Vec<&str> = crew.agents().iter().map(|a| a.role()).collect();
        assert_eq!(
            roles,
            [
                "Blog content planner",
                "Blog content writer",
                "Blog content editor"
            ]
        );
    }

    #[test]
    fn chain_is_strictly_linear() {
        let crew = crew();
        let tasks = crew.tasks();

        assert_eq!(tasks[0].name(), "plan");
        assert!(tasks[0].context_names().is_empty());

        assert_eq!(tasks[1].name(), "write");
        assert_eq!(tasks[1].context_names(), ["plan"]);

        assert_eq!(tasks[2].name(), "edit");
        assert_eq!(tasks[2].context_names(), ["write"]);
    }

    #[test]
    fn delegation_stays_disabled() {
        let crew = crew();
        assert!(crew.agents().iter().all(|a| !a.delegation_allowed()));
        assert!(crew.agents().iter().all(|a| a.is_verbose()));
    }

    #[test]
    fn all_agents_pin_the_blog_model() {
        let crew = crew();
        assert!(
            crew.agents()
                .iter()
                .all(|a| a.model_name() == Some(BLOG_MODEL))
        );
    }

    #[tokio::test]
    async fn runs_end_to_end_regardless_of_topic() {
        for topic in ["AI Engineering", "Sourdough baking"] {
            let output = crew().kickoff(&blog_inputs(topic)).await.unwrap();
            assert_eq!(output.raw, "final");
            assert_eq!(output.tasks.len(), 3);
        }
    }
}
