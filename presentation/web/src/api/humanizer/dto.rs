use poem_openapi::Object;

use business::domain::humanizer::model::HumanizedContent;

#[derive(Debug, Clone, Object)]
pub struct HumanizeRequest {
    /// AI-generated text to rewrite, sent to the model verbatim
    pub text: String,
}

#[derive(Debug, Clone, Object)]
pub struct HumanizedContentResponse {
    /// Rewritten text, exactly as returned by the model
    pub content: String,
}

impl From<HumanizedContent> for HumanizedContentResponse {
    fn from(content: HumanizedContent) -> Self {
        Self {
            content: content.into_inner(),
        }
    }
}
