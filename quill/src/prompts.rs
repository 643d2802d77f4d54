//! Prompt template rendering.
//!
//! Agent goals, backstories, and task descriptions are templates with
//! `{name}` placeholders that are substituted from the crew's runtime inputs
//! at kickoff time (e.g. `{topic}` in the blog pipeline).

use std::collections::HashMap;

use crate::error::PromptError;

/// Runtime inputs for a crew run, keyed by placeholder name.
pub type Inputs = HashMap<String, String>;

/// Render a template by substituting `{name}` placeholders from `inputs`.
///
/// Placeholder names are ASCII alphanumerics and underscores. A `{{` escape
/// produces a literal `{`, and brace sequences that do not form a valid
/// placeholder pass through verbatim.
///
/// # Errors
///
/// Returns [`PromptError::MissingInput`] when a placeholder has no matching
/// input. Every occurrence of a placeholder must be resolvable.
pub fn render(template: &str, inputs: &Inputs) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        if let Some(tail) = after.strip_prefix('{') {
            out.push('{');
            rest = tail;
            continue;
        }

        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                let value = inputs
                    .get(name)
                    .ok_or_else(|| PromptError::missing_input(name))?;
                out.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                // Not a placeholder; keep the brace verbatim.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn topic_inputs() -> Inputs {
        let mut inputs = Inputs::new();
        inputs.insert("topic".to_owned(), "Rust async".to_owned());
        inputs
    }

    #[test]
    fn substitutes_placeholder() {
        let rendered = render("Plan content on {topic}.", &topic_inputs()).unwrap();
        assert_eq!(rendered, "Plan content on Rust async.");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let rendered = render("{topic} and {topic} again", &topic_inputs()).unwrap();
        assert_eq!(rendered, "Rust async and Rust async again");
    }

    #[test]
    fn missing_input_errors() {
        let err = render("Write about {subject}.", &topic_inputs()).unwrap_err();
        assert!(matches!(err, PromptError::MissingInput { name } if name == "subject"));
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let rendered = render("No placeholders here.", &Inputs::new()).unwrap();
        assert_eq!(rendered, "No placeholders here.");
    }

    #[test]
    fn double_brace_escapes() {
        let rendered = render("JSON: {{\"k\": 1}", &Inputs::new()).unwrap();
        assert_eq!(rendered, "JSON: {\"k\": 1}");
    }

    #[test]
    fn invalid_placeholder_is_literal() {
        let rendered = render("{not a placeholder}", &Inputs::new()).unwrap();
        assert_eq!(rendered, "{not a placeholder}");
    }

    #[test]
    fn unterminated_brace_is_literal() {
        let rendered = render("dangling {brace", &Inputs::new()).unwrap();
        assert_eq!(rendered, "dangling {brace");
    }
}
