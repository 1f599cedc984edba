use std::str::FromStr;
use std::time::Duration;

use groq::client::{DEFAULT_BASE_URL, GroqSettings};

/// Shown instead of the form, and returned by the API, when no key is set.
pub const MISSING_KEY_WARNING: &str = "GROQ_API_KEY is not set. Please configure it in a .env file.";

/// Configuration for Groq API access.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// `None` when GROQ_API_KEY is unset or blank.
    pub api_key: Option<String>,
    pub base_url: String,
    pub settings: GroqSettings,
}

impl GroqConfig {
    /// Load Groq configuration from environment variables
    ///
    /// Environment variables:
    /// - GROQ_API_KEY: API credential (required for humanizing)
    /// - GROQ_MODEL: model identifier (default: "llama-3.1-8b-instant")
    /// - GROQ_TEMPERATURE: sampling temperature (default: 0.7)
    /// - GROQ_MAX_TOKENS: max output tokens (default: 500)
    /// - GROQ_TIMEOUT_SECS: request timeout in seconds (default: none)
    /// - GROQ_MAX_RETRIES: retries after the first attempt (default: 2)
    /// - GROQ_BASE_URL: API base URL (default: "https://api.groq.com/openai/v1")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GroqSettings::default();
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let settings = GroqSettings {
            model: value("GROQ_MODEL").unwrap_or(defaults.model),
            temperature: parse_or(value("GROQ_TEMPERATURE"), "GROQ_TEMPERATURE", defaults.temperature),
            max_tokens: parse_or(value("GROQ_MAX_TOKENS"), "GROQ_MAX_TOKENS", defaults.max_tokens),
            timeout: value("GROQ_TIMEOUT_SECS")
                .map(|raw| parse_or(Some(raw), "GROQ_TIMEOUT_SECS", 0u64))
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            max_retries: parse_or(value("GROQ_MAX_RETRIES"), "GROQ_MAX_RETRIES", defaults.max_retries),
            retry_delay: defaults.retry_delay,
        };

        Self {
            api_key: value("GROQ_API_KEY"),
            base_url: value("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            settings,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, name: &str, default: T) -> T {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {name} value {raw:?}, using default");
            default
        }),
        None => default,
    }
}
