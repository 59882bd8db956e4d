//! REST client for an OpenAI-compatible chat-completions endpoint.
//!
//! One `POST {base_url}/chat/completions` per prompt, no retries. The reply
//! text is handed to [`parse_generator_output`], so malformed model output
//! surfaces as a generation-output error rather than a transport error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use formgen_core::error::CoreError;
use formgen_core::generation::{
    parse_generator_output, FormGenerator, GeneratorOutput, SYSTEM_PROMPT,
};

use crate::config::LlmConfig;

/// Token ceiling for a single completion.
pub const MAX_TOKENS: u32 = 2048;

/// Errors from the chat-completions API layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered without any message content.
    #[error("Provider returned no message content")]
    EmptyResponse,
}

impl From<LlmError> for CoreError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyResponse => CoreError::GenerationOutput(err.to_string()),
            other => CoreError::Generation(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if any.
    fn into_content(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

/// Generator backed by a hosted chat model.
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsGenerator {
    /// Build a generator from config. Returns `Ok(None)` when no API key is
    /// configured.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>, LlmError> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Some(Self::with_client(
            client,
            &config.base_url,
            config.model.clone(),
            api_key,
        )))
    }

    /// Create a generator reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        model: String,
        api_key: String,
    ) -> Self {
        Self {
            client,
            endpoint: completions_endpoint(base_url),
            model,
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one chat completion and return the raw reply text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: ChatResponse = response.json().await?;
        parsed.into_content()
    }

    /// Ensure the response has a success status code, capturing the body
    /// text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl FormGenerator for ChatCompletionsGenerator {
    fn name(&self) -> &'static str {
        "chat-completions"
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratorOutput, CoreError> {
        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Requesting form generation",
        );

        let raw = self.complete(prompt).await.map_err(|e| {
            tracing::warn!(error = %e, "Form generation request failed");
            CoreError::from(e)
        })?;

        parse_generator_output(&raw)
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}
