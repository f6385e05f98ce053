use clap::{ArgAction, Parser, Subcommand};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "prbot",
    version,
    about = "Turn your uncommitted changes into a pull request using an LLM"
)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Model name to use for completions (overrides the per-mode default)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API key for the completion service (otherwise uses OPENAI_API_KEY)
    #[arg(long, env = "OPENAI_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// GitHub access token (otherwise uses GITHUB_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", global = true)]
    pub github_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, e.g. `prbot generate`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a branch name, title, and description from the working diff,
    /// then branch, commit, push, and open a pull request
    Generate {
        /// Use a single combined completion instead of three parallel requests
        #[arg(long)]
        combined: bool,

        /// Append an attribution footer to the generated description
        #[arg(long)]
        attribution: bool,
    },
}
