use std::process::Command as GitCommand;

use crate::error::{PrbotError, Result};

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .map_err(|e| PrbotError::Git(format!("failed to run git {:?}: {}", args, e)))?;

    if !output.status.success() {
        return Err(PrbotError::Git(format!(
            "git {:?} exited with status {:?}: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the full unstaged working-tree diff.
pub fn working_diff() -> Result<String> {
    git_output(&["diff"])
}

/// Get the current branch name.
pub fn current_branch() -> Result<String> {
    let name = git_output(&["rev-parse", "--abbrev-ref", "HEAD"])?
        .trim()
        .to_string();
    Ok(name)
}

/// Resolve (owner, repo) from `remote.origin.url`.
pub fn repo_owner_and_name() -> Result<(String, String)> {
    let url = git_output(&["config", "--get", "remote.origin.url"])?;
    parse_owner_repo(&url)
}

/// Parse "owner" and "repo" out of a remote URL.
///
/// Accepts the SSH shape (`git@github.com:owner/repo.git`) and the
/// scheme-prefixed shape (`https://github.com/owner/repo`).
pub fn parse_owner_repo(url: &str) -> Result<(String, String)> {
    let trimmed = url.trim().trim_end_matches(".git");

    let path = if let Some(idx) = trimmed.find("://") {
        // Strip scheme and host, keep "owner/repo"
        let rest = &trimmed[idx + 3..];
        match rest.find('/') {
            Some(slash) => &rest[slash + 1..],
            None => "",
        }
    } else if let Some(idx) = trimmed.find(':') {
        // SSH-style: after ':' is "owner/repo"
        &trimmed[idx + 1..]
    } else {
        return Err(PrbotError::InvalidRemote(url.trim().to_string()));
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() != 2 {
        return Err(PrbotError::InvalidRemote(url.trim().to_string()));
    }

    Ok((segments[0].to_string(), segments[1].to_string()))
}

/// Create and check out a new branch.
pub fn create_branch(branch: &str) -> Result<()> {
    git_output(&["checkout", "-b", branch])?;
    Ok(())
}

/// Stage all changes and commit with the given message.
pub fn commit_all(message: &str) -> Result<()> {
    log::warn!("Staging all changes");
    git_output(&["add", "-A"])?;
    git_output(&["commit", "-m", message])?;
    Ok(())
}

/// Push the branch to origin with upstream tracking.
pub fn push_branch(branch: &str) -> Result<()> {
    git_output(&["push", "-u", "origin", branch])?;
    Ok(())
}
