use log::info;
use crate::config::{LauncherConfig, QueryMode};
use crate::error::LauncherError;
use crate::process::{Invocation, Runner};

/// The query a template's placeholder gets replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Literal text, subject to browser encoding.
    Text(String),
    /// Prompt command the target shell runs itself through `$(...)`.
    Deferred(String),
}

/// Picks the query for a template. A supplied segment, even an empty one,
/// is used as is. Only a template that needs a query and got no segment at
/// all falls through to the prompt.
pub fn acquire<R: Runner>(
    runner: &mut R,
    config: &LauncherConfig,
    supplied: Option<String>,
    needs_query: bool,
) -> Result<Query, LauncherError> {
    match (supplied, needs_query) {
        (Some(query), _) => Ok(Query::Text(query)),
        (None, false) => Ok(Query::Text(String::new())),
        (None, true) => match config.query_mode {
            QueryMode::Prompt => {
                info!("Prompting for query");
                let answer = runner
                    .run(&Invocation::shell(&config.shell, &config.prompt))
                    .map_err(LauncherError::PromptFailed)?;
                Ok(Query::Text(answer.trim().to_string()))
            }
            QueryMode::Subshell => Ok(Query::Deferred(config.prompt.clone())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::fake::FakeRunner;

    #[test]
    fn supplied_query_is_returned_unchanged() {
        let mut runner = FakeRunner::new();
        let config = LauncherConfig::default();
        let query = acquire(&mut runner, &config, Some("hello world".to_string()), true).unwrap();
        assert_eq!(query, Query::Text("hello world".to_string()));
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn explicitly_empty_query_does_not_prompt() {
        let mut runner = FakeRunner::new();
        let config = LauncherConfig::default();
        let query = acquire(&mut runner, &config, Some(String::new()), true).unwrap();
        assert_eq!(query, Query::Text(String::new()));
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn template_without_placeholder_never_prompts() {
        let mut runner = FakeRunner::new();
        let config = LauncherConfig::default();
        acquire(&mut runner, &config, None, false).unwrap();
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn missing_query_runs_prompt_and_trims() {
        let mut runner = FakeRunner::new().ok("  rust lifetimes \n");
        let config = LauncherConfig::default();
        let query = acquire(&mut runner, &config, None, true).unwrap();
        assert_eq!(query, Query::Text("rust lifetimes".to_string()));
        assert_eq!(runner.calls, vec![Invocation::shell("bash", &config.prompt)]);
    }

    #[test]
    fn prompt_failure_is_fatal() {
        let mut runner = FakeRunner::new().fail("bash", 1);
        let config = LauncherConfig::default();
        assert!(matches!(
            acquire(&mut runner, &config, None, true),
            Err(LauncherError::PromptFailed(_))
        ));
    }

    #[test]
    fn subshell_mode_defers_to_target_shell() {
        let mut runner = FakeRunner::new();
        let config = LauncherConfig {
            prompt: "rofi -dmenu -p 'Query:'".to_string(),
            query_mode: QueryMode::Subshell,
            ..LauncherConfig::default()
        };
        let query = acquire(&mut runner, &config, None, true).unwrap();
        assert_eq!(query, Query::Deferred("rofi -dmenu -p 'Query:'".to_string()));
        assert!(runner.calls.is_empty());
    }
}
