//! Port to the remote REST API and its reqwest adapter
//!
//! Handlers and server functions only see `dyn BackendApi`, so tests can
//! swap in an in-memory implementation.

pub mod error;
pub mod rest;

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::domain::models::{
    Appointment, AuthResponse, Chat, CreateChatRequest, Diagnosis, Doctor, LoginRequest,
    RegisterRequest, SendMessageResponse, User,
};

pub use error::{BackendError, BackendResult};
pub use rest::RestBackend;

#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> BackendResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> BackendResult<AuthResponse>;
    async fn current_user(&self, token: &str) -> BackendResult<User>;

    async fn list_chats(&self, token: &str) -> BackendResult<Vec<Chat>>;
    async fn create_chat(&self, token: &str, request: &CreateChatRequest) -> BackendResult<Chat>;
    async fn get_chat(&self, token: &str, chat_id: &str) -> BackendResult<Chat>;
    async fn delete_chat(&self, token: &str, chat_id: &str) -> BackendResult<()>;
    async fn send_message(&self, token: &str, chat_id: &str, content: &str) -> BackendResult<SendMessageResponse>;

    async fn list_doctors(&self, specialty: Option<&str>) -> BackendResult<Vec<Doctor>>;
    async fn list_diagnoses(&self, token: &str) -> BackendResult<Vec<Diagnosis>>;
    async fn list_appointments(&self, token: &str) -> BackendResult<Vec<Appointment>>;
}

pub type SharedBackend = Arc<dyn BackendApi>;

static BACKEND: OnceCell<SharedBackend> = OnceCell::new();

/// Register the process-wide backend used by server functions.
/// Returns false if one was already installed.
pub fn install_backend(backend: SharedBackend) -> bool {
    BACKEND.set(backend).is_ok()
}

/// Process-wide backend; built from the environment on first use if
/// `install_backend` was never called.
pub fn shared_backend() -> Result<SharedBackend, crate::shared::errors::AppError> {
    BACKEND
        .get_or_try_init(|| {
            let config = crate::config::AppConfig::from_env()?;
            let backend: SharedBackend = Arc::new(RestBackend::new(&config)?);
            Ok(backend)
        })
        .cloned()
}
