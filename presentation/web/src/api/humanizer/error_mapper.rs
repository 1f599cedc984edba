use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::humanizer::errors::HumanizeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::config::groq_config::MISSING_KEY_WARNING;

impl IntoErrorResponse for HumanizeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message, detail) = match &self {
            HumanizeError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "humanizer.empty_input",
                None,
            ),
            HumanizeError::MissingCredential => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ConfigurationError",
                "humanizer.missing_credential",
                Some(MISSING_KEY_WARNING.to_string()),
            ),
            HumanizeError::GenerationFailed(detail) => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "humanizer.generation_failed",
                Some(detail.clone()),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
                detail,
            }),
        )
    }
}
