use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    /// Code-style identifier, e.g. `humanizer.empty_input`
    pub message: String,
    /// Human readable description, when there is one to show
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
