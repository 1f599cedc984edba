/// Failures talking to the Groq API.
#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("request to Groq failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Groq returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Groq response did not contain message content")]
    MalformedResponse,
}

impl GroqError {
    /// Whether sending the same request again may succeed.
    ///
    /// Any connection-level failure counts, including a connection dropped
    /// after the request was sent.
    pub fn is_retryable(&self) -> bool {
        match self {
            GroqError::Request(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            GroqError::Status { status, .. } => is_retryable_status(*status),
            GroqError::MalformedResponse => false,
        }
    }
}

/// Request timeout, lock conflict, rate limit and server errors.
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 409 | 429) || (500..600).contains(&status)
}
