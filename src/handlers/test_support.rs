//! In-memory backend and request helpers for handler tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{Duration, TimeZone, Utc};

use super::{api_router, ApiState};
use crate::domain::models::{
    Appointment, AppointmentStatus, AuthResponse, Chat, ChatMessage, ChatRole, CreateChatRequest,
    Diagnosis, Doctor, LoginRequest, RegisterRequest, SendMessageResponse, User,
};
use crate::infrastructure::backend::{BackendApi, BackendError, BackendResult};

pub const TOKEN: &str = "valid-token";

#[derive(Default, Clone)]
pub struct MockBackend {
    /// Every call fails with a transport error
    pub offline: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// A backend that cannot be reached
    pub fn offline() -> Self {
        Self { offline: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) -> BackendResult<()> {
        if self.offline {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        Ok(())
    }

    fn check(&self, token: &str) -> BackendResult<()> {
        if token == TOKEN { Ok(()) } else { Err(BackendError::Unauthorized) }
    }
}

pub fn user() -> User {
    User {
        id: "u1".to_string(),
        name: "Amina Benali".to_string(),
        email: "amina@example.com".to_string(),
        phone: None,
        created_at: None,
    }
}

fn chat(id: &str, hours_ago: i64) -> Chat {
    let base = Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap();
    Chat {
        id: id.to_string(),
        title: format!("Chat {}", id),
        created_at: base - Duration::hours(hours_ago + 1),
        updated_at: base - Duration::hours(hours_ago),
        messages: vec![],
        last_message: None,
    }
}

fn message(id: &str, role: ChatRole, content: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        chat_id: Some("c1".to_string()),
        role,
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

fn doctor(id: &str, specialty: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: format!("Dr {}", id),
        specialty: specialty.to_string(),
        bio: None,
        rating: Some(4.5),
        photo_url: None,
        languages: vec!["en".to_string()],
        available: true,
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn login(&self, request: &LoginRequest) -> BackendResult<AuthResponse> {
        self.record(format!("login:{}", request.email))?;
        if request.password == "secret123" {
            Ok(AuthResponse { token: TOKEN.to_string(), user: user() })
        } else {
            Err(BackendError::Unauthorized)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> BackendResult<AuthResponse> {
        self.record(format!("register:{}", request.email))?;
        if request.email.starts_with("taken") {
            Err(BackendError::Status { status: 409, message: "Email already registered".to_string() })
        } else {
            Ok(AuthResponse { token: TOKEN.to_string(), user: user() })
        }
    }

    async fn current_user(&self, token: &str) -> BackendResult<User> {
        self.check(token)?;
        self.record("current_user".to_string())?;
        Ok(user())
    }

    async fn list_chats(&self, token: &str) -> BackendResult<Vec<Chat>> {
        self.check(token)?;
        self.record("list_chats".to_string())?;
        Ok(vec![chat("c1", 5), chat("c2", 1)])
    }

    async fn create_chat(&self, token: &str, request: &CreateChatRequest) -> BackendResult<Chat> {
        self.check(token)?;
        let title = request.title.clone().unwrap_or_default();
        self.record(format!("create_chat:{}", title))?;
        Ok(Chat { title, ..chat("c3", 0) })
    }

    async fn get_chat(&self, token: &str, chat_id: &str) -> BackendResult<Chat> {
        self.check(token)?;
        self.record(format!("get_chat:{}", chat_id))?;
        match chat_id {
            "c1" | "c2" => Ok(chat(chat_id, 1)),
            _ => Err(BackendError::NotFound),
        }
    }

    async fn delete_chat(&self, token: &str, chat_id: &str) -> BackendResult<()> {
        self.check(token)?;
        self.record(format!("delete_chat:{}", chat_id))
    }

    async fn send_message(&self, token: &str, chat_id: &str, content: &str) -> BackendResult<SendMessageResponse> {
        self.check(token)?;
        self.record(format!("send_message:{}:{}", chat_id, content))?;
        Ok(SendMessageResponse {
            user_message: message("m1", ChatRole::User, content),
            assistant_message: message("m2", ChatRole::Assistant, "How long has it lasted?"),
            diagnosis: None,
        })
    }

    async fn list_doctors(&self, specialty: Option<&str>) -> BackendResult<Vec<Doctor>> {
        self.record(format!("list_doctors:{}", specialty.unwrap_or("*")))?;
        let all = vec![doctor("d1", "cardiology"), doctor("d2", "dermatology")];
        Ok(match specialty {
            Some(s) => all.into_iter().filter(|d| d.specialty == s).collect(),
            None => all,
        })
    }

    async fn list_diagnoses(&self, token: &str) -> BackendResult<Vec<Diagnosis>> {
        self.check(token)?;
        self.record("list_diagnoses".to_string())?;
        Ok(vec![Diagnosis {
            id: "dg1".to_string(),
            chat_id: Some("c1".to_string()),
            condition: "Tension headache".to_string(),
            confidence: 0.7,
            summary: String::new(),
            recommendations: vec![],
            created_at: Utc::now(),
        }])
    }

    async fn list_appointments(&self, token: &str) -> BackendResult<Vec<Appointment>> {
        self.check(token)?;
        self.record("list_appointments".to_string())?;
        Ok(vec![Appointment {
            id: "a1".to_string(),
            doctor_id: "d1".to_string(),
            doctor_name: Some("Dr d1".to_string()),
            scheduled_at: Utc::now() + Duration::days(1),
            status: AppointmentStatus::Confirmed,
            notes: None,
        }])
    }
}

/// API router over a mock backend; the mock is returned to inspect calls
pub fn router(backend: MockBackend) -> (Router, MockBackend) {
    let state = ApiState::new(Arc::new(backend.clone()), false);
    (api_router(state), backend)
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("auth_token={}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
