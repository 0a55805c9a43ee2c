use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{BackendApi, BackendError, BackendResult};
use crate::config::AppConfig;
use crate::domain::models::{
    Appointment, AuthResponse, Chat, CreateChatRequest, Diagnosis, Doctor, LoginRequest,
    RegisterRequest, SendMessageRequest, SendMessageResponse, User,
};
use crate::shared::errors::AppError;
use crate::shared::logging::{log_backend_call, log_backend_failure};

/// reqwest-backed client for the remote REST API
#[derive(Clone)]
pub struct RestBackend {
    base_url: String,
    client: Client,
}

impl RestBackend {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("medilink-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self::with_client(config.backend_api_url.clone(), client))
    }

    pub fn with_client(base_url: String, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and return the raw successful response
    async fn execute(&self, method: &Method, path: &str, builder: RequestBuilder) -> BackendResult<reqwest::Response> {
        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            log_backend_failure(method.as_str(), path, &e.to_string());
            BackendError::Transport(e.to_string())
        })?;

        let status = response.status();
        log_backend_call(method.as_str(), path, status.as_u16(), started.elapsed().as_millis());

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(BackendError::from_response(status.as_u16(), &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> BackendResult<T> {
        let builder = self.request(Method::GET, path, token);
        let response = self.execute(&Method::GET, path, builder).await?;
        response.json::<T>().await.map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> BackendResult<T> {
        let builder = self.request(Method::POST, path, token).json(body);
        let response = self.execute(&Method::POST, path, builder).await?;
        response.json::<T>().await.map_err(|e| BackendError::Decode(e.to_string()))
    }
}

fn chat_path(chat_id: &str) -> String {
    format!("chats/{}", urlencoding::encode(chat_id))
}

#[async_trait]
impl BackendApi for RestBackend {
    async fn login(&self, request: &LoginRequest) -> BackendResult<AuthResponse> {
        self.post_json("auth/login", None, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> BackendResult<AuthResponse> {
        self.post_json("auth/register", None, request).await
    }

    async fn current_user(&self, token: &str) -> BackendResult<User> {
        self.get_json("auth/me", Some(token)).await
    }

    async fn list_chats(&self, token: &str) -> BackendResult<Vec<Chat>> {
        self.get_json("chats", Some(token)).await
    }

    async fn create_chat(&self, token: &str, request: &CreateChatRequest) -> BackendResult<Chat> {
        self.post_json("chats", Some(token), request).await
    }

    async fn get_chat(&self, token: &str, chat_id: &str) -> BackendResult<Chat> {
        self.get_json(&chat_path(chat_id), Some(token)).await
    }

    async fn delete_chat(&self, token: &str, chat_id: &str) -> BackendResult<()> {
        let path = chat_path(chat_id);
        let builder = self.request(Method::DELETE, &path, Some(token));
        self.execute(&Method::DELETE, &path, builder).await.map(|_| ())
    }

    async fn send_message(&self, token: &str, chat_id: &str, content: &str) -> BackendResult<SendMessageResponse> {
        let path = format!("{}/messages", chat_path(chat_id));
        let body = SendMessageRequest { content: content.to_string() };
        self.post_json(&path, Some(token), &body).await
    }

    async fn list_doctors(&self, specialty: Option<&str>) -> BackendResult<Vec<Doctor>> {
        let mut builder = self.request(Method::GET, "doctors", None);
        if let Some(specialty) = specialty {
            builder = builder.query(&[("specialty", specialty)]);
        }
        let response = self.execute(&Method::GET, "doctors", builder).await?;
        response.json().await.map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn list_diagnoses(&self, token: &str) -> BackendResult<Vec<Diagnosis>> {
        self.get_json("diagnoses", Some(token)).await
    }

    async fn list_appointments(&self, token: &str) -> BackendResult<Vec<Appointment>> {
        self.get_json("appointments", Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let backend = RestBackend::with_client("https://api.example.com/v1/".to_string(), Client::new());
        assert_eq!(backend.url("auth/login"), "https://api.example.com/v1/auth/login");
        assert_eq!(backend.url("/chats"), "https://api.example.com/v1/chats");
    }

    #[test]
    fn test_chat_path_is_encoded() {
        assert_eq!(chat_path("abc-123"), "chats/abc-123");
        assert_eq!(chat_path("../admin"), "chats/..%2Fadmin");
    }

    #[tokio::test]
    async fn test_transport_error_on_unreachable_backend() {
        let backend = RestBackend::with_client("http://127.0.0.1:9".to_string(), Client::new());
        let result = backend.list_doctors(None).await;
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
