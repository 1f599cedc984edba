use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Model parameters and transport policy for chat completions.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
    /// Extra attempts after the first one, for transient failures only.
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for GroqSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout: None,
            max_retries: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Shared Groq HTTP client configuration.
pub struct GroqClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub settings: GroqSettings,
}

impl GroqClient {
    pub fn new(api_key: String, settings: GroqSettings) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            settings,
        }
    }

    /// Points the client at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
