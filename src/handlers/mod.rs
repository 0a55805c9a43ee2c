//! Same-origin JSON routes under `/api`
//!
//! The browser never sees the backend token: auth routes store it in an
//! HTTP-only cookie and every other route reads it back from there.

pub mod error;
pub mod session;
pub mod auth;
pub mod chats;
pub mod directory;
pub mod health;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::infrastructure::backend::{RestBackend, SharedBackend};
use crate::shared::errors::AppError;

pub use error::{ApiError, ApiResult};
pub use session::AuthToken;

pub use auth::{login_handler, logout_handler, me_handler, register_handler};
pub use chats::{
    create_chat_handler, delete_chat_handler, get_chat_handler, list_chats_handler,
    send_message_handler,
};
pub use directory::{list_appointments_handler, list_diagnoses_handler, list_doctors_handler};
pub use health::health_handler;

/// Shared state of the API handlers (passed as an Extension)
#[derive(Clone)]
pub struct ApiState {
    pub backend: SharedBackend,
    /// Add `Secure` to the auth cookie
    pub secure_cookies: bool,
}

impl ApiState {
    pub fn new(backend: SharedBackend, secure_cookies: bool) -> Self {
        Self { backend, secure_cookies }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let backend: SharedBackend = std::sync::Arc::new(RestBackend::new(config)?);
        Ok(Self::new(backend, config.cookie_secure))
    }
}

/// All `/api` routes with their state attached
pub fn api_router(state: ApiState) -> Router {
    let secure_cookies = state.secure_cookies;
    Router::new()
        .route("/api/health", get(health_handler))
        // Auth (cookie set/clear)
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/me", get(me_handler))
        // Chat proxy
        .route("/api/chats", get(list_chats_handler).post(create_chat_handler))
        .route("/api/chats/{chat_id}", get(get_chat_handler).delete(delete_chat_handler))
        .route("/api/chats/{chat_id}/messages", post(send_message_handler))
        // Directory & patient records
        .route("/api/doctors", get(list_doctors_handler))
        .route("/api/diagnoses", get(list_diagnoses_handler))
        .route("/api/appointments", get(list_appointments_handler))
        .layer(Extension(state))
        .layer(from_fn_with_state(secure_cookies, session::expire_cookie_on_unauthorized))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod client_contract;
