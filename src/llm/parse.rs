use regex::Regex;

use crate::error::{PrbotError, Result};
use crate::llm::prompts;
use crate::llm::GeneratedFields;

/// Find the first substring shaped like `<type>/<short-description>`.
///
/// The model is told to answer with a bare branch name, but responses often
/// arrive wrapped in a label or stray prose; scanning for the first
/// `word-chars/word-chars` token recovers the usable part. No match is a
/// real failure, not a default.
pub fn extract_branch_name(text: &str) -> Result<String> {
    let pattern = Regex::new(r"\b[\w-]+/[\w-]+").unwrap();

    match pattern.find(text) {
        Some(m) => Ok(m.as_str().to_string()),
        None => Err(PrbotError::BranchNotFound),
    }
}

/// Recover the (title, branch, description) triple from a combined-mode
/// response.
///
/// The layout is a contract with the combined prompt template: line 0 carries
/// the title label, line 1 the branch label, line 2 the description label,
/// and lines 3+ form the description body. Label prefixes are stripped when
/// present and tolerated when absent, but the branch line must still contain
/// a well-formed branch token.
pub fn extract_combined_fields(text: &str) -> Result<GeneratedFields> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 4 {
        return Err(PrbotError::MalformedResponse(format!(
            "expected at least 4 lines (\"{}\", \"{}\", \"{}\", body), got {}",
            prompts::TITLE_LABEL,
            prompts::BRANCH_LABEL,
            prompts::DESCRIPTION_LABEL,
            lines.len()
        )));
    }

    let title = strip_label(lines[0], prompts::TITLE_LABEL);
    let branch_name = extract_branch_name(strip_label(lines[1], prompts::BRANCH_LABEL))?;
    let description = lines[3..]
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(GeneratedFields {
        branch_name,
        title: title.to_string(),
        description,
    })
}

fn strip_label<'a>(line: &'a str, label: &str) -> &'a str {
    line.strip_prefix(label).unwrap_or(line).trim()
}
