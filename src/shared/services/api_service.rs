#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::models::{CreateChatRequest, LoginRequest, RegisterRequest, SendMessageRequest};
use crate::shared::errors::ClientError;

type ClientResult<T> = Result<T, ClientError>;

/// Response bodies of the `/api` routes, as this client decodes them.
/// The handler tests decode server output with the same types.
pub mod bodies {
    use crate::domain::models::{Appointment, Chat, Diagnosis, SendMessageResponse, SessionUser, User};

    /// `POST /api/auth/login` and `/register`
    pub type Session = SessionUser;
    /// `GET /api/auth/me`
    pub type Me = User;
    pub type ChatList = Vec<Chat>;
    /// `POST /api/chats` and `GET /api/chats/{id}`
    pub type ChatDetail = Chat;
    pub type MessageSent = SendMessageResponse;
    pub type Diagnoses = Vec<Diagnosis>;
    pub type Appointments = Vec<Appointment>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

/// Client for the `/api` routes served next to the pages.
///
/// Requests are same-origin so the browser attaches the HttpOnly session
/// cookie; outside the browser every call fails with `Unavailable`.
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self { base_url: String::new() }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, method: Method, endpoint: &str, body: Option<String>) -> ClientResult<String> {
        let url = self.url(endpoint);
        let mut request = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        request = request.header("Accept", "application/json");
        if let Some(body) = body {
            request = request.header("Content-Type", "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            tracing::warn!(status = status, "{:?} {} failed", method, url);
            return Err(ClientError::from_status(status, &text));
        }
        Ok(text)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, _method: Method, _endpoint: &str, _body: Option<String>) -> ClientResult<String> {
        Err(ClientError::Unavailable)
    }

    pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
        serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn encode<B: Serialize>(body: &B) -> ClientResult<String> {
        serde_json::to_string(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        let text = self.send(Method::Get, endpoint, None).await?;
        Self::decode(&text)
    }

    // Generic POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ClientResult<T> {
        let text = self.send(Method::Post, endpoint, Some(Self::encode(body)?)).await?;
        Self::decode(&text)
    }

    // Generic DELETE request, the body (if any) is ignored
    pub async fn delete(&self, endpoint: &str) -> ClientResult<()> {
        self.send(Method::Delete, endpoint, None).await.map(|_| ())
    }

    // Auth
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<bodies::Session> {
        self.post("/api/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<bodies::Session> {
        self.post("/api/auth/register", request).await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.send(Method::Post, "/api/auth/logout", None).await.map(|_| ())
    }

    pub async fn me(&self) -> ClientResult<bodies::Me> {
        self.get("/api/auth/me").await
    }

    // Chats
    pub async fn list_chats(&self) -> ClientResult<bodies::ChatList> {
        self.get("/api/chats").await
    }

    pub async fn create_chat(&self, title: Option<String>) -> ClientResult<bodies::ChatDetail> {
        self.post("/api/chats", &CreateChatRequest { title }).await
    }

    pub async fn get_chat(&self, chat_id: &str) -> ClientResult<bodies::ChatDetail> {
        self.get(&chat_endpoint(chat_id)).await
    }

    pub async fn delete_chat(&self, chat_id: &str) -> ClientResult<()> {
        self.delete(&chat_endpoint(chat_id)).await
    }

    pub async fn send_message(&self, chat_id: &str, content: &str) -> ClientResult<bodies::MessageSent> {
        let body = SendMessageRequest { content: content.to_string() };
        self.post(&format!("{}/messages", chat_endpoint(chat_id)), &body).await
    }

    // Profile
    pub async fn list_diagnoses(&self) -> ClientResult<bodies::Diagnoses> {
        self.get("/api/diagnoses").await
    }

    pub async fn list_appointments(&self) -> ClientResult<bodies::Appointments> {
        self.get("/api/appointments").await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

fn chat_endpoint(chat_id: &str) -> String {
    format!("/api/chats/{}", urlencoding::encode(chat_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let api = ApiService::new();
        assert_eq!(api.url("/api/chats"), "/api/chats");

        let api = ApiService::with_base_url("http://localhost:3001/".to_string());
        assert_eq!(api.url("api/health"), "http://localhost:3001/api/health");
        assert_eq!(chat_endpoint("a b/c"), "/api/chats/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_native_calls_are_unavailable() {
        let api = ApiService::new();
        assert_eq!(api.list_chats().await, Err(ClientError::Unavailable));
        assert_eq!(api.logout().await, Err(ClientError::Unavailable));
    }
}
