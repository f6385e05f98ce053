use crate::llm::prompts;

pub fn branch_name_prompt(diff: &str) -> String {
    format!(
        "Analyze the following git diff output from a code project and generate a branch name based on the changes made:\n\n\
         {diff}\n\n\
         {rules}",
        diff = diff,
        rules = prompts::BRANCH_NAME_RULES
    )
}

pub fn pr_title_prompt(diff: &str) -> String {
    format!(
        "Analyze the following git diff output from a code project and generate a PR title following the Conventional Commit format, based on the changes made:\n\n\
         {diff}\n\n\
         {rules}",
        diff = diff,
        rules = prompts::PR_TITLE_RULES
    )
}

pub fn pr_description_prompt(diff: &str) -> String {
    format!(
        "Analyze the following git diff output from a code project and generate a PR description in Markdown format, based on the changes made:\n\n\
         {diff}\n\n\
         {rules}",
        diff = diff,
        rules = prompts::PR_DESCRIPTION_RULES
    )
}

pub fn combined_prompt(diff: &str) -> String {
    format!(
        "I have the following git diff output from a code project:\n\n\
         {diff}\n\n\
         {rules}",
        diff = diff,
        rules = prompts::COMBINED_RULES
    )
}
