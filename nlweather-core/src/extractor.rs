use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::{
    config::{Config, LlmConfig},
    http::{join_url, truncate_body},
    parser::parse_weather_input,
};

const SYSTEM_PROMPT: &str = "You extract locations from weather questions. \
Reply with only the name of the city, region or country the user asks about, \
with no punctuation or explanation. If no location is mentioned, reply with nothing.";

/// Pulls a raw place name out of free text. The result may still contain
/// filler and is sanitized by the handler.
#[async_trait]
pub trait LocationExtractor: Send + Sync + Debug {
    async fn extract(&self, text: &str) -> Result<String>;
}

/// Asks an OpenAI-compatible chat-completions endpoint (Groq by default).
#[derive(Clone)]
pub struct ChatExtractor {
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
    http: Client,
}

impl ChatExtractor {
    pub fn new(api_key: String, llm: &LlmConfig, http: Client) -> Self {
        Self {
            api_key,
            model: llm.model.clone(),
            temperature: llm.temperature,
            base_url: llm.base_url.clone(),
            http,
        }
    }
}

impl Debug for ChatExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatExtractor")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[async_trait]
impl LocationExtractor for ChatExtractor {
    async fn extract(&self, text: &str) -> Result<String> {
        let url = join_url(&self.base_url, "chat/completions");
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the location extraction model")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read location extraction response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Location extraction request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).context("Failed to parse location extraction JSON")?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Location extraction response contained no choices"))?
            .message
            .content
            .unwrap_or_default();

        Ok(content.trim().trim_matches(|c: char| c == '"' || c == '.').to_string())
    }
}

/// Offline fallback: the keyword parser's location guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

#[async_trait]
impl LocationExtractor for HeuristicExtractor {
    async fn extract(&self, text: &str) -> Result<String> {
        Ok(parse_weather_input(text).location_guess)
    }
}

/// Pick an extractor for `config`: the chat model when an API key is
/// available and `offline` is not requested, the heuristic one otherwise.
pub fn extractor_from_config(
    config: &Config,
    http: Client,
    offline: bool,
) -> Box<dyn LocationExtractor> {
    select_extractor(config.api_key(), &config.llm, http, offline)
}

fn select_extractor(
    api_key: Option<String>,
    llm: &LlmConfig,
    http: Client,
    offline: bool,
) -> Box<dyn LocationExtractor> {
    match api_key {
        Some(api_key) if !offline => Box::new(ChatExtractor::new(api_key, llm, http)),
        Some(_) => Box::new(HeuristicExtractor),
        None => {
            tracing::warn!(
                "No LLM API key configured; falling back to keyword-based location extraction.\n\
                 Hint: run `nlweather configure` or set {}.",
                crate::config::API_KEY_ENV
            );
            Box::new(HeuristicExtractor)
        }
    }
}
