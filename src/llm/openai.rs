use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{PrbotError, Result};
use crate::llm::LlmClient;

/// Minimal request/response structs for the OpenAI Chat Completions API.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// OpenAI-based implementation of LlmClient.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, api_base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build HTTP client");

        OpenAiClient {
            client,
            api_key,
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chat_url(&self) -> String {
        if self.api_base_url.ends_with("/v1") {
            format!("{}/chat/completions", self.api_base_url)
        } else {
            format!("{}/v1/chat/completions", self.api_base_url)
        }
    }
}

impl LlmClient for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
        };

        log::info!("Calling OpenAI model {:?}", &req.model);
        log::trace!("Prompt:\n{}", truncate(prompt, 3000));

        let resp = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .map_err(|e| PrbotError::Completion(format!("failed to send request to OpenAI: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(PrbotError::Completion(format!(
                "OpenAI API error: HTTP {} - {}",
                status.as_u16(),
                text
            )));
        }

        let chat_resp: ChatResponse = resp
            .json()
            .map_err(|e| PrbotError::Completion(format!("failed to parse OpenAI response: {e}")))?;

        if let Some(usage) = &chat_resp.usage {
            log::debug!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        chat_resp
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| PrbotError::Completion("no choices returned from OpenAI".into()))
    }
}

/// Truncate long strings for debug logging.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...\n[truncated {} chars]", &s[..max_len], s.len() - max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_handles_v1_suffix() {
        let client = OpenAiClient::new(
            "key".into(),
            "model".into(),
            "https://api.openai.com/v1/".into(),
        );
        assert_eq!(client.chat_url(), "https://api.openai.com/v1/chat/completions");

        let client = OpenAiClient::new("key".into(), "model".into(), "https://api.openai.com".into());
        assert_eq!(client.chat_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn truncate_marks_dropped_length() {
        assert_eq!(truncate("short", 10), "short");
        assert!(truncate(&"x".repeat(20), 10).contains("[truncated 10 chars]"));
    }
}
