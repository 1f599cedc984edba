/// Author of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    Human,
}

/// A single (role, text) entry of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }
}

/// Ordered message list sent to the model: the system instruction first,
/// then the user's text exactly as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanizePrompt {
    messages: [PromptMessage; 2],
}

impl HumanizePrompt {
    pub(crate) fn new(system: PromptMessage, human: PromptMessage) -> Self {
        Self {
            messages: [system, human],
        }
    }

    pub fn messages(&self) -> &[PromptMessage] {
        &self.messages
    }

    pub fn system(&self) -> &PromptMessage {
        &self.messages[0]
    }

    pub fn human(&self) -> &PromptMessage {
        &self.messages[1]
    }
}

/// Rewritten text returned by the model, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanizedContent(String);

impl HumanizedContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
