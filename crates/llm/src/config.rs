use std::time::Duration;

/// Default OpenAI-compatible endpoint (Gemini).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Provider configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token. `None` means no provider is configured and callers
    /// should fall back to the offline stub.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Upper bound on a single generation call.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                  |
    /// |--------------------|--------------------------|
    /// | `LLM_API_KEY`      | `GEMINI_API_KEY`, unset  |
    /// | `LLM_BASE_URL`     | [`DEFAULT_BASE_URL`]     |
    /// | `LLM_MODEL`        | [`DEFAULT_MODEL`]        |
    /// | `LLM_TIMEOUT_SECS` | `60`                     |
    pub fn from_env() -> Self {
        let api_key = std::env::var("LLM_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let base_url = std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
