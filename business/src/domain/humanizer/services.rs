use async_trait::async_trait;

use super::errors::HumanizeError;
use super::model::{HumanizePrompt, HumanizedContent};

/// Service port for the remote model that rewrites text.
///
/// Implementations own their transport policy (timeouts, retries); callers
/// invoke `rewrite` once per user action.
#[async_trait]
pub trait ContentRewriterService: Send + Sync {
    async fn rewrite(&self, prompt: &HumanizePrompt) -> Result<HumanizedContent, HumanizeError>;
}
