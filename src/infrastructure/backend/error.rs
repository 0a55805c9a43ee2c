use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// Non-2xx answer; `message` is the body's `message`/`error` field when present
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid backend response: {0}")]
    Decode(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

impl BackendError {
    /// Classify a non-success status and its raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => BackendError::Unauthorized,
            404 => BackendError::NotFound,
            _ => BackendError::Status { status, message: extract_message(body) },
        }
    }
}

/// `{"message": ".."}` or `{"error": ".."}`; raw body otherwise (truncated)
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().chars().take(200).collect())
}
