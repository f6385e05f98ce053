use log::debug;

use crate::config::{Config, DEFAULT_COMBINED_MODEL, DEFAULT_TRIPLE_MODEL};
use crate::llm::openai::OpenAiClient;
use crate::llm::LlmClient;

/// Build the LLM client for the selected completion mode.
pub fn build_llm_client(cfg: &Config, combined: bool) -> Box<dyn LlmClient> {
    let model = cfg.model.clone().unwrap_or_else(|| {
        if combined {
            DEFAULT_COMBINED_MODEL.to_string()
        } else {
            DEFAULT_TRIPLE_MODEL.to_string()
        }
    });

    debug!("Using OpenAiClient with model: {model}");

    Box::new(OpenAiClient::new(
        cfg.openai_api_key.clone(),
        model,
        cfg.api_base_url.clone(),
    ))
}
