use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::cli_args::Cli;
use crate::error::{PrbotError, Result};

/// Model used for the three-request mode when none is configured.
pub const DEFAULT_TRIPLE_MODEL: &str = "gpt-3.5-turbo";
/// Model used for the combined single-request mode when none is configured.
pub const DEFAULT_COMBINED_MODEL: &str = "gpt-4";

const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Final resolved configuration for prbot.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub github_token: String,
    /// Explicit model override; when absent each mode picks its default.
    pub model: Option<String>,
    pub api_base_url: String,
    pub github_api_url: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and
    /// defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-key`, `--github-token`)
    ///   2. Env vars (`PRBOT_MODEL`, `OPENAI_API_KEY`, `GITHUB_TOKEN`)
    ///   3. TOML `~/.config/prbot.toml`
    ///   4. Built-in defaults
    ///
    /// Both credentials are resolved here, before any git or network
    /// activity; a missing one is a fatal configuration error.
    pub fn from_sources(cli: &Cli) -> Result<Self> {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("PRBOT_MODEL").ok())
            .or(file_cfg.model);

        let openai_api_key = cli
            .api_key
            .clone()
            .or(file_cfg.openai_api_key)
            .ok_or_else(|| {
                PrbotError::Config(
                    "OPENAI_API_KEY must be set via environment, config file, or --api-key".into(),
                )
            })?;

        let github_token = cli
            .github_token
            .clone()
            .or(file_cfg.github_token)
            .ok_or_else(|| {
                PrbotError::Config(
                    "GITHUB_TOKEN must be set via environment, config file, or --github-token"
                        .into(),
                )
            })?;

        Ok(Config {
            openai_api_key,
            github_token,
            model,
            api_base_url: file_cfg
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            github_api_url: file_cfg
                .github_api_url
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    model: Option<String>,
    openai_api_key: Option<String>,
    github_token: Option<String>,
    /// Override for self-hosted OpenAI-compatible gateways.
    api_base_url: Option<String>,
    /// Override for GitHub Enterprise installs.
    github_api_url: Option<String>,
}

/// Return `~/.config/prbot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("prbot.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
