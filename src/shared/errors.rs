use thiserror::Error;

/// Startup failures (configuration, HTTP client construction)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Failure of a same-origin API call made from the browser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Missing or expired session; the UI sends the user to the login page
    #[error("Not authenticated")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// Error message returned by the API, shown inline as-is
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    /// Requests are only issued from the browser
    #[error("Not available during server rendering")]
    Unavailable,
}

impl ClientError {
    /// Build from a non-2xx status and its body (`{"error": "..."}` when present)
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ClientError::Unauthorized,
            404 => ClientError::NotFound,
            _ => {
                let message = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| {
                        v.get("error")
                            .or_else(|| v.get("message"))
                            .and_then(|m| m.as_str())
                            .map(str::to_string)
                    })
                    .unwrap_or_default();
                ClientError::Api { status, message }
            }
        }
    }

    /// Message to show the user, `None` when a generic localized one should be used
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
