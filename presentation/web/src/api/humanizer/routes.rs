use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::humanizer::errors::HumanizeError;
use business::domain::humanizer::use_cases::humanize::{
    HumanizeContentParams, HumanizeContentUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::humanizer::dto::{HumanizeRequest, HumanizedContentResponse};
use crate::api::tags::ApiTags;

pub struct HumanizerApi {
    humanize_use_case: Arc<dyn HumanizeContentUseCase>,
}

impl HumanizerApi {
    pub fn new(humanize_use_case: Arc<dyn HumanizeContentUseCase>) -> Self {
        Self { humanize_use_case }
    }
}

/// Humanizer API
///
/// Rewrites AI-generated text in a natural, conversational style.
#[OpenApi]
impl HumanizerApi {
    /// Humanize content
    ///
    /// Sends the text, unmodified, to the language model together with the
    /// fixed rewriting instructions and returns the model's answer as is.
    /// Blank text is rejected without contacting the model.
    #[oai(path = "/humanize", method = "post", tag = "ApiTags::Humanizer")]
    async fn humanize(&self, body: Json<HumanizeRequest>) -> HumanizeResponse {
        let params = HumanizeContentParams { text: body.0.text };

        match self.humanize_use_case.execute(params).await {
            Ok(content) => HumanizeResponse::Ok(Json(content.into())),
            Err(err) => {
                let respond: fn(Json<ErrorResponse>) -> HumanizeResponse = match &err {
                    HumanizeError::EmptyInput => HumanizeResponse::BadRequest,
                    HumanizeError::MissingCredential => HumanizeResponse::ServiceUnavailable,
                    HumanizeError::GenerationFailed(_) => HumanizeResponse::BadGateway,
                };
                let (_, json) = err.into_error_response();
                respond(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum HumanizeResponse {
    #[oai(status = 200)]
    Ok(Json<HumanizedContentResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use business::domain::humanizer::model::HumanizedContent;

    use super::*;

    struct FailingHumanizer(HumanizeError);

    #[async_trait]
    impl HumanizeContentUseCase for FailingHumanizer {
        async fn execute(
            &self,
            _params: HumanizeContentParams,
        ) -> Result<HumanizedContent, HumanizeError> {
            Err(self.0.clone())
        }
    }

    async fn respond_to(err: HumanizeError) -> HumanizeResponse {
        let api = HumanizerApi::new(Arc::new(FailingHumanizer(err)));
        api.humanize(Json(HumanizeRequest {
            text: "Some text".to_string(),
        }))
        .await
    }

    #[tokio::test]
    async fn should_pick_response_from_error_variant() {
        assert!(matches!(
            respond_to(HumanizeError::EmptyInput).await,
            HumanizeResponse::BadRequest(_)
        ));
        assert!(matches!(
            respond_to(HumanizeError::MissingCredential).await,
            HumanizeResponse::ServiceUnavailable(_)
        ));
        assert!(matches!(
            respond_to(HumanizeError::generation_failed("timed out")).await,
            HumanizeResponse::BadGateway(_)
        ));
    }
}
