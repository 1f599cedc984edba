use async_trait::async_trait;

use crate::domain::humanizer::errors::HumanizeError;
use crate::domain::humanizer::model::HumanizedContent;

pub struct HumanizeContentParams {
    pub text: String,
}

#[async_trait]
pub trait HumanizeContentUseCase: Send + Sync {
    async fn execute(
        &self,
        params: HumanizeContentParams,
    ) -> Result<HumanizedContent, HumanizeError>;
}
