pub mod openai;
pub mod parse;
mod prompt_builder;
mod prompts;

use std::thread;

use crate::error::{PrbotError, Result};

/// Trait for talking to an LLM backend.
pub trait LlmClient: Send + Sync {
    /// Send a single prompt as one user message and return the raw
    /// completion text.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// The three generated values a pull request is built from. Always fully
/// populated; a partially generated set is an error, never a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFields {
    pub branch_name: String,
    pub title: String,
    pub description: String,
}

/// Issue three independent completion requests concurrently, one each for
/// branch name, PR title, and PR description.
///
/// All three workers run to completion before any result is read; failures
/// are collected per worker and combined into one aggregate error naming
/// every failed field, so no failure can shadow another.
pub fn request_triple(llm: &dyn LlmClient, diff: &str) -> Result<GeneratedFields> {
    let (branch, title, description) = thread::scope(|scope| {
        let branch = scope.spawn(|| {
            logged(llm.complete(&prompt_builder::branch_name_prompt(diff)), "branch name")
        });
        let title = scope.spawn(|| {
            logged(llm.complete(&prompt_builder::pr_title_prompt(diff)), "PR title")
        });
        let description = scope.spawn(|| {
            logged(llm.complete(&prompt_builder::pr_description_prompt(diff)), "PR description")
        });

        (
            join_worker(branch, "branch name"),
            join_worker(title, "PR title"),
            join_worker(description, "PR description"),
        )
    });

    match (branch, title, description) {
        (Ok(branch_text), Ok(title), Ok(description)) => Ok(GeneratedFields {
            branch_name: parse::extract_branch_name(&branch_text)?,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
        }),
        (branch, title, description) => {
            let mut failures = Vec::new();
            for (field, result) in [
                ("branch name", &branch),
                ("PR title", &title),
                ("PR description", &description),
            ] {
                if let Err(e) = result {
                    failures.push(format!("{field}: {e}"));
                }
            }
            Err(PrbotError::Completion(failures.join("; ")))
        }
    }
}

/// Issue a single completion request that asks for all three fields in one
/// fixed textual layout, then parse them out of the response.
pub fn request_combined(llm: &dyn LlmClient, diff: &str) -> Result<GeneratedFields> {
    let response = logged(
        llm.complete(&prompt_builder::combined_prompt(diff)),
        "combined PR details",
    )?;
    parse::extract_combined_fields(&response)
}

fn logged(result: Result<String>, field: &str) -> Result<String> {
    match &result {
        Ok(_) => log::info!("Successfully generated {field}."),
        Err(e) => log::error!("Error generating {field}: {e}"),
    }
    result
}

fn join_worker(handle: thread::ScopedJoinHandle<'_, Result<String>>, field: &str) -> Result<String> {
    handle
        .join()
        .unwrap_or_else(|_| Err(PrbotError::Completion(format!("{field} worker panicked"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted backend: answers each of the three triple-mode prompts from
    /// its own slot; `None` simulates a failed request.
    struct ScriptedClient {
        branch: Option<&'static str>,
        title: Option<&'static str>,
        description: Option<&'static str>,
    }

    impl LlmClient for ScriptedClient {
        fn complete(&self, prompt: &str) -> Result<String> {
            let slot = if prompt.contains("generate a branch name") {
                self.branch
            } else if prompt.contains("generate a PR title") {
                self.title
            } else {
                self.description
            };

            slot.map(str::to_string)
                .ok_or_else(|| PrbotError::Completion("scripted failure".into()))
        }
    }

    /// Backend that returns the same canned text for every prompt.
    struct CannedClient(&'static str);

    impl LlmClient for CannedClient {
        fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn triple_mode_populates_all_fields() {
        let client = ScriptedClient {
            branch: Some("Branch Name: feature/add-login"),
            title: Some("feat: add login"),
            description: Some("- Added a login form."),
        };

        let fields = request_triple(&client, "diff").unwrap();
        assert_eq!(
            fields,
            GeneratedFields {
                branch_name: "feature/add-login".into(),
                title: "feat: add login".into(),
                description: "- Added a login form.".into(),
            }
        );
    }

    #[test]
    fn triple_mode_fails_when_one_request_fails() {
        let client = ScriptedClient {
            branch: Some("Branch Name: feature/add-login"),
            title: None,
            description: Some("- Added a login form."),
        };

        let err = request_triple(&client, "diff").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PR title"));
        assert!(!message.contains("branch name:"));
    }

    #[test]
    fn triple_mode_aggregates_every_failure() {
        let client = ScriptedClient {
            branch: None,
            title: None,
            description: None,
        };

        let err = request_triple(&client, "diff").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("branch name"));
        assert!(message.contains("PR title"));
        assert!(message.contains("PR description"));
    }

    #[test]
    fn triple_mode_rejects_branch_response_without_token() {
        let client = ScriptedClient {
            branch: Some("I could not come up with anything."),
            title: Some("feat: add login"),
            description: Some("- Added a login form."),
        };

        let err = request_triple(&client, "diff").unwrap_err();
        assert!(matches!(err, PrbotError::BranchNotFound));
    }

    #[test]
    fn combined_mode_parses_the_single_response() {
        let client = CannedClient(
            "PR Title (Conventional Commit): feat: add login\n\
             Branch Name: feature/add-login\n\
             PR Description (in Markdown):\n\
             - Added a login form.",
        );

        let fields = request_combined(&client, "diff").unwrap();
        assert_eq!(fields.branch_name, "feature/add-login");
        assert_eq!(fields.title, "feat: add login");
        assert_eq!(fields.description, "- Added a login form.");
    }

    #[test]
    fn combined_mode_rejects_malformed_responses() {
        let client = CannedClient("not enough lines");
        let err = request_combined(&client, "diff").unwrap_err();
        assert!(matches!(err, PrbotError::MalformedResponse(_)));
    }
}
