use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrbotError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no uncommitted changes found; make changes to your files before running generate")]
    EmptyDiff,

    #[error("git error: {0}")]
    Git(String),

    #[error("invalid remote URL format: {0}")]
    InvalidRemote(String),

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("no branch name found in response")]
    BranchNotFound,

    #[error("unable to parse combined response: {0}")]
    MalformedResponse(String),

    #[error("failed to send pull request to GitHub: {0}")]
    PublishRequest(String),

    #[error("failed to create pull request, status code: {status}, response: {body}")]
    Publish { status: u16, body: String },

    #[error("could not find PR URL in response: {0}")]
    PublishPayload(String),
}

pub type Result<T> = std::result::Result<T, PrbotError>;
