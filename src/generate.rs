use crate::config::Config;
use crate::error::{PrbotError, Result};
use crate::llm::{self, LlmClient};
use crate::{git, github};

/// Fixed trailer appended to the description when --attribution is set.
const ATTRIBUTION_FOOTER: &str = "Created with [prbot](https://github.com/prbot-cli/prbot)";

/// Flags of the `generate` subcommand, resolved into an explicit structure
/// so nothing downstream reads ambient CLI state.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOpts {
    pub combined: bool,
    pub attribution: bool,
}

/// The generate pipeline, strictly ordered. Any failure halts the remaining
/// steps; side effects of completed steps (branch, commit, push) are left in
/// place for the user to reuse or clean up.
pub fn run(cfg: &Config, opts: GenerateOpts, llm: &dyn LlmClient) -> Result<()> {
    let diff = git::working_diff()?;
    if diff.trim().is_empty() {
        return Err(PrbotError::EmptyDiff);
    }

    let (owner, repo) = git::repo_owner_and_name()?;
    let base_branch = git::current_branch()?;

    let mut fields = if opts.combined {
        llm::request_combined(llm, &diff)?
    } else {
        llm::request_triple(llm, &diff)?
    };

    if opts.attribution {
        fields.description = apply_attribution(&fields.description);
    }

    log::info!("Generated values:");
    log::info!("Branch Name: {}", fields.branch_name);
    log::info!("PR Title: {}", fields.title);
    log::info!("PR Description:\n{}", fields.description);

    git::create_branch(&fields.branch_name)?;
    git::commit_all(&fields.title)?;
    git::push_branch(&fields.branch_name)?;

    let pr_url = match github::create_pull_request(
        cfg,
        &owner,
        &repo,
        &fields.branch_name,
        &base_branch,
        &fields.title,
        &fields.description,
    ) {
        Ok(url) => url,
        Err(e) => {
            log::warn!(
                "Branch {} was already created, committed, and pushed; retry opening the pull request manually.",
                fields.branch_name
            );
            return Err(e);
        }
    };

    println!("Pull request created successfully: {pr_url}");

    Ok(())
}

/// Append the attribution footer, exactly once.
fn apply_attribution(description: &str) -> String {
    let trimmed = description.trim_end();
    if trimmed.ends_with(ATTRIBUTION_FOOTER) {
        return trimmed.to_string();
    }
    format!("{trimmed}\n\n---\n{ATTRIBUTION_FOOTER}")
}
