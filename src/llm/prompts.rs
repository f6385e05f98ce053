/// Label prefixes shared between the combined prompt template and the
/// response parser. Any wording change here changes the wire contract with
/// the model; the parser tests pin the two together.
pub const TITLE_LABEL: &str = "PR Title (Conventional Commit):";
pub const BRANCH_LABEL: &str = "Branch Name:";
pub const DESCRIPTION_LABEL: &str = "PR Description (in Markdown):";

pub const BRANCH_NAME_RULES: &str = r#"Ensure the branch name strictly follows the format: <type>/<short-description>
For example: feature/add-login

Your response should be a single line containing only the branch name. Do not include any other information or context.

IMPORTANT: Please begin your response with "Branch Name: " followed by the actual branch name."#;

pub const PR_TITLE_RULES: &str = r#"Ensure the PR title strictly follows the Conventional Commit format: <type>: <short-description>
For example: feat: add login functionality

Your response should be a single line containing only the PR title. Do not include any other information or context."#;

pub const PR_DESCRIPTION_RULES: &str = r#"Ensure the PR description includes a clear and concise summary of the changes made, formatted as a bullet-point list in Markdown. Focus on the analysis of the git diff and avoid any personal language in the response."#;

pub const COMBINED_RULES: &str = r#"Analyze the git diff and generate a suitable PR title following the Conventional Commit format, a branch name, and a PR description based on the changes made. Please strictly follow this format for the response:

PR Title (Conventional Commit): <PR title>
Branch Name: <branch name>
PR Description (in Markdown):
<PR description>

For example:

PR Title (Conventional Commit): feat: add generate command for PR title, branch name, and description
Branch Name: feature/generate-command
PR Description (in Markdown):
- Added a generate command that generates a PR title, branch name, and description.
- Implemented a completion client for generating responses.

Do not include any additional information or analysis of the git diff in the response. Ensure the response is formatted correctly."#;
