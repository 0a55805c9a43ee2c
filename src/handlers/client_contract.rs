//! Every `ApiService` method decodes what the matching handler sends.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::test_support::{body_text, request, router, user, MockBackend, TOKEN};
use crate::domain::models::ChatRole;
use crate::shared::errors::ClientError;
use crate::shared::services::api_service::{bodies, ApiService};

/// Run one request and return the body the browser would receive
async fn fetch(method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, String) {
    let (app, _) = router(MockBackend::default());
    let response = app.oneshot(request(method, uri, Some(TOKEN), body)).await.unwrap();
    (response.status(), body_text(response).await)
}

#[tokio::test]
async fn test_login_and_register_decode_as_session() {
    let (status, text) = fetch(
        "POST",
        "/api/auth/login",
        Some(json!({"email": "amina@example.com", "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let session: bodies::Session = ApiService::decode(&text).unwrap();
    assert_eq!(session.user, user());

    let (status, text) = fetch(
        "POST",
        "/api/auth/register",
        Some(json!({"name": "Amina", "email": "new@example.com", "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let session: bodies::Session = ApiService::decode(&text).unwrap();
    assert_eq!(session.user.id, "u1");
}

#[tokio::test]
async fn test_me_decodes_as_bare_user() {
    let (status, text) = fetch("GET", "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::OK);
    let me: bodies::Me = ApiService::decode(&text).unwrap();
    assert_eq!(me, user());
}

#[tokio::test]
async fn test_logout_is_success_without_body() {
    let (status, text) = fetch("POST", "/api/auth/logout", None).await;
    assert!(status.is_success());
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_chat_routes_decode() {
    let (status, text) = fetch("GET", "/api/chats", None).await;
    assert_eq!(status, StatusCode::OK);
    let chats: bodies::ChatList = ApiService::decode(&text).unwrap();
    assert_eq!(chats.len(), 2);

    let (status, text) = fetch("POST", "/api/chats", Some(json!({"title": "Headache"}))).await;
    assert!(status.is_success());
    let created: bodies::ChatDetail = ApiService::decode(&text).unwrap();
    assert_eq!(created.title, "Headache");

    let (status, text) = fetch("GET", "/api/chats/c1", None).await;
    assert_eq!(status, StatusCode::OK);
    let chat: bodies::ChatDetail = ApiService::decode(&text).unwrap();
    assert_eq!(chat.id, "c1");

    let (status, _) = fetch("DELETE", "/api/chats/c1", None).await;
    assert!(status.is_success());
}

#[tokio::test]
async fn test_send_message_decodes_both_messages() {
    let (status, text) =
        fetch("POST", "/api/chats/c1/messages", Some(json!({"content": "I have a headache"}))).await;
    assert_eq!(status, StatusCode::OK);
    let sent: bodies::MessageSent = ApiService::decode(&text).unwrap();
    assert_eq!(sent.user_message.role, ChatRole::User);
    assert_eq!(sent.user_message.content, "I have a headache");
    assert_eq!(sent.assistant_message.role, ChatRole::Assistant);
    assert!(sent.diagnosis.is_none());
}

#[tokio::test]
async fn test_profile_lists_decode() {
    let (status, text) = fetch("GET", "/api/diagnoses", None).await;
    assert_eq!(status, StatusCode::OK);
    let diagnoses: bodies::Diagnoses = ApiService::decode(&text).unwrap();
    assert_eq!(diagnoses[0].condition, "Tension headache");

    let (status, text) = fetch("GET", "/api/appointments", None).await;
    assert_eq!(status, StatusCode::OK);
    let appointments: bodies::Appointments = ApiService::decode(&text).unwrap();
    assert_eq!(appointments[0].doctor_id, "d1");
}

#[tokio::test]
async fn test_error_bodies_map_to_client_errors() {
    let (status, text) = fetch(
        "POST",
        "/api/auth/register",
        Some(json!({"name": "Amina", "email": "taken@example.com", "password": "secret123"})),
    )
    .await;
    assert_eq!(
        ClientError::from_status(status.as_u16(), &text),
        ClientError::Api { status: 409, message: "Email already registered".to_string() }
    );

    let (status, text) = fetch("GET", "/api/chats/missing", None).await;
    assert_eq!(ClientError::from_status(status.as_u16(), &text), ClientError::NotFound);
}
