use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::humanizer::errors::HumanizeError;
use business::domain::humanizer::model::{HumanizePrompt, HumanizedContent, Role};
use business::domain::humanizer::services::ContentRewriterService;
use business::domain::logger::Logger;

use crate::client::GroqClient;
use crate::errors::GroqError;
use crate::retry::with_retries;

pub struct ContentRewriterGroq {
    client: GroqClient,
    logger: Arc<dyn Logger>,
}

impl ContentRewriterGroq {
    pub fn new(client: GroqClient, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }

    fn wire_role(role: Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::Human => "user",
        }
    }

    fn build_request_body(&self, prompt: &HumanizePrompt) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = prompt
            .messages()
            .iter()
            .map(|m| json!({"role": Self::wire_role(m.role), "content": m.content}))
            .collect();

        json!({
            "model": self.client.settings.model,
            "messages": messages,
            "temperature": self.client.settings.temperature,
            "max_tokens": self.client.settings.max_tokens,
        })
    }

    fn extract_content(data: &serde_json::Value) -> Result<String, GroqError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(|content| content.to_string())
            .ok_or(GroqError::MalformedResponse)
    }

    async fn send_once(&self, body: &serde_json::Value) -> Result<String, GroqError> {
        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: serde_json::Value = response.json().await?;

        Self::extract_content(&data)
    }
}

#[async_trait]
impl ContentRewriterService for ContentRewriterGroq {
    async fn rewrite(&self, prompt: &HumanizePrompt) -> Result<HumanizedContent, HumanizeError> {
        let body = self.build_request_body(prompt);
        let settings = &self.client.settings;

        self.logger.debug(&format!(
            "Sending chat completion to model {}",
            settings.model
        ));

        let this = self;
        let body = &body;
        with_retries(
            settings.max_retries,
            settings.retry_delay,
            self.logger.as_ref(),
            move |_| this.send_once(body),
        )
        .await
        .map(HumanizedContent::new)
        .map_err(|err| HumanizeError::generation_failed(err.to_string()))
    }
}
