//! Chat proxy: every call carries the cookie token as a bearer token

use axum::{
    extract::Path,
    http::StatusCode,
    Extension, Json,
};

use super::{ApiError, ApiResult, ApiState, AuthToken};
use crate::domain::models::{
    Chat, CreateChatRequest, SendMessageRequest, SendMessageResponse, MAX_MESSAGE_CHARS,
};

/// GET /api/chats
pub async fn list_chats_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Json<Vec<Chat>>> {
    let mut chats = state.backend.list_chats(&token).await?;
    chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(Json(chats))
}

/// POST /api/chats
pub async fn create_chat_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
    Json(request): Json<CreateChatRequest>,
) -> ApiResult<(StatusCode, Json<Chat>)> {
    let chat = state.backend.create_chat(&token, &request).await?;
    tracing::info!(chat_id = %chat.id, "Created chat");
    Ok((StatusCode::CREATED, Json(chat)))
}

/// GET /api/chats/{chat_id}
pub async fn get_chat_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
    Path(chat_id): Path<String>,
) -> ApiResult<Json<Chat>> {
    let chat = state.backend.get_chat(&token, &chat_id).await?;
    Ok(Json(chat))
}

/// DELETE /api/chats/{chat_id}
pub async fn delete_chat_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
    Path(chat_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.backend.delete_chat(&token, &chat_id).await?;
    tracing::info!(chat_id = %chat_id, "Deleted chat");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/chats/{chat_id}/messages
pub async fn send_message_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
    Path(chat_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<Json<SendMessageResponse>> {
    let content = request.content.trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest("chat.errors.empty".to_string()));
    }
    if content.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest("chat.errors.too_long".to_string()));
    }

    let reply = state.backend.send_message(&token, &chat_id, content).await?;
    Ok(Json(reply))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{body_json, request, router, MockBackend, TOKEN};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_chats_require_auth() {
        let (app, backend) = router(MockBackend::default());
        for (method, uri) in [
            ("GET", "/api/chats"),
            ("GET", "/api/chats/c1"),
            ("DELETE", "/api/chats/c1"),
        ] {
            let response = app.clone().oneshot(request(method, uri, None, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        }
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_chats_sorted_newest_first() {
        let (app, _) = router(MockBackend::default());
        let response = app.oneshot(request("GET", "/api/chats", Some(TOKEN), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let ids: Vec<&str> = body.as_array().unwrap().iter().map(|c| c["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["c2", "c1"]);
    }

    #[tokio::test]
    async fn test_create_chat() {
        let (app, backend) = router(MockBackend::default());
        let response = app
            .oneshot(request("POST", "/api/chats", Some(TOKEN), Some(json!({"title": "Back pain"}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["title"], "Back pain");
        assert_eq!(backend.calls(), vec!["create_chat:Back pain".to_string()]);
    }

    #[tokio::test]
    async fn test_get_missing_chat() {
        let (app, _) = router(MockBackend::default());
        let response = app.oneshot(request("GET", "/api/chats/missing", Some(TOKEN), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_chat() {
        let (app, backend) = router(MockBackend::default());
        let response = app.oneshot(request("DELETE", "/api/chats/c1", Some(TOKEN), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(backend.calls(), vec!["delete_chat:c1".to_string()]);
    }

    #[tokio::test]
    async fn test_send_message() {
        let (app, backend) = router(MockBackend::default());
        let response = app
            .oneshot(request(
                "POST",
                "/api/chats/c1/messages",
                Some(TOKEN),
                Some(json!({"content": "  I have a headache  "})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["userMessage"]["content"], "I have a headache");
        assert_eq!(body["assistantMessage"]["role"], "assistant");
        assert_eq!(backend.calls(), vec!["send_message:c1:I have a headache".to_string()]);
    }

    #[tokio::test]
    async fn test_send_message_validation() {
        let (app, backend) = router(MockBackend::default());
        let response = app
            .clone()
            .oneshot(request("POST", "/api/chats/c1/messages", Some(TOKEN), Some(json!({"content": "   "}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let long = "a".repeat(crate::domain::models::MAX_MESSAGE_CHARS + 1);
        let response = app
            .oneshot(request("POST", "/api/chats/c1/messages", Some(TOKEN), Some(json!({"content": long}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_outage_is_bad_gateway() {
        let (app, _) = router(MockBackend::offline());
        let response = app.oneshot(request("GET", "/api/chats", Some(TOKEN), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
