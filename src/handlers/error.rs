use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::backend::BackendError;

/// Error returned by the `/api` routes as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing cookie or token rejected by the backend.
    /// `api_router` expires the cookie on the way out.
    #[error("Not authenticated")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    /// 4xx from the backend, forwarded with its status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Backend unreachable, 5xx or unreadable
    #[error("The service is temporarily unavailable")]
    BadGateway,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<BackendError> for ApiError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Unauthorized => ApiError::Unauthorized,
            BackendError::NotFound => ApiError::NotFound,
            BackendError::Status { status, message } if (400..500).contains(&status) => {
                ApiError::Upstream { status, message }
            }
            BackendError::Status { status, message } => {
                tracing::error!(status = status, "Backend server error: {}", message);
                ApiError::BadGateway
            }
            BackendError::Transport(e) | BackendError::Decode(e) => {
                tracing::error!("Backend unavailable: {}", e);
                ApiError::BadGateway
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody { error: self.to_string() });
        (self.status(), body).into_response()
    }
}
