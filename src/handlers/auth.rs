//! Login/register/logout: forward credentials to the backend and keep the
//! returned token in an HTTP-only cookie.

use axum::{
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};

use super::{session::{clear_auth_cookie, set_auth_cookie}, ApiError, ApiResult, ApiState, AuthToken};
use crate::domain::models::{AuthResponse, LoginRequest, RegisterRequest, SessionUser, User};
use crate::domain::validation::{validate_email, validate_password};
use crate::shared::logging::log_auth_event;

fn session_response(state: &ApiState, auth: AuthResponse) -> Response {
    let cookie = set_auth_cookie(&auth.token, state.secure_cookies);
    (
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(SessionUser { user: auth.user }),
    )
        .into_response()
}

/// Reject obviously malformed input before it reaches the backend
fn check_credentials(email: &str, password: &str) -> ApiResult<()> {
    if let Some(error) = validate_email(email).or_else(|| validate_password(password, false)) {
        return Err(ApiError::BadRequest(error.key.to_string()));
    }
    Ok(())
}

/// POST /api/auth/login
pub async fn login_handler(
    Extension(state): Extension<ApiState>,
    Json(mut request): Json<LoginRequest>,
) -> ApiResult<Response> {
    request.email = request.email.trim().to_string();
    check_credentials(&request.email, &request.password)?;

    match state.backend.login(&request).await {
        Ok(auth) => {
            log_auth_event("login", true);
            Ok(session_response(&state, auth))
        }
        Err(e) => {
            log_auth_event("login", false);
            Err(e.into())
        }
    }
}

/// POST /api/auth/register
pub async fn register_handler(
    Extension(state): Extension<ApiState>,
    Json(mut request): Json<RegisterRequest>,
) -> ApiResult<Response> {
    request.email = request.email.trim().to_string();
    request.name = request.name.trim().to_string();
    request.phone = request.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
    check_credentials(&request.email, &request.password)?;
    if request.name.is_empty() {
        return Err(ApiError::BadRequest("validation.name_required".to_string()));
    }

    match state.backend.register(&request).await {
        Ok(auth) => {
            log_auth_event("register", true);
            Ok(session_response(&state, auth))
        }
        Err(e) => {
            log_auth_event("register", false);
            Err(e.into())
        }
    }
}

/// POST /api/auth/logout
/// Always succeeds; the backend keeps no session to revoke.
pub async fn logout_handler(Extension(state): Extension<ApiState>) -> Response {
    log_auth_event("logout", true);
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_auth_cookie(state.secure_cookies))],
    )
        .into_response()
}

/// GET /api/auth/me
pub async fn me_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Json<User>> {
    let user = state.backend.current_user(&token).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::test_support::{body_json, request, router, MockBackend, TOKEN};
    use super::super::{api_router, ApiState};
    use axum::http::{header::SET_COOKIE, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_login_sets_http_only_cookie() {
        let (app, _) = router(MockBackend::default());
        let response = app
            .oneshot(request("POST", "/api/auth/login", None, Some(json!({
                "email": " amina@example.com ",
                "password": "secret123"
            }))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().to_string();
        assert!(cookie.starts_with(&format!("auth_token={};", TOKEN)));
        assert!(cookie.contains("HttpOnly"));

        let body = body_json(response).await;
        assert_eq!(body["user"]["email"], "amina@example.com");
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn test_login_bad_credentials_forwarded() {
        let (app, _) = router(MockBackend::default());
        let response = app
            .oneshot(request("POST", "/api/auth/login", None, Some(json!({
                "email": "amina@example.com",
                "password": "wrong"
            }))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email() {
        let (app, backend) = router(MockBackend::default());
        let response = app
            .oneshot(request("POST", "/api/auth/login", None, Some(json!({
                "email": "not-an-email",
                "password": "x"
            }))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "validation.email_invalid");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_conflict_keeps_message() {
        let (app, _) = router(MockBackend::default());
        let response = app
            .oneshot(request("POST", "/api/auth/register", None, Some(json!({
                "name": "Amina",
                "email": "taken@example.com",
                "password": "secret123"
            }))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["error"], "Email already registered");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let (app, _) = router(MockBackend::default());
        let response = app.oneshot(request("POST", "/api/auth/logout", Some(TOKEN), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("auth_token=;"));
    }

    #[tokio::test]
    async fn test_me_requires_cookie() {
        let (app, _) = router(MockBackend::default());
        let response = app.clone().oneshot(request("GET", "/api/auth/me", None, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(request("GET", "/api/auth/me", Some(TOKEN), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Amina Benali");
    }

    #[tokio::test]
    async fn test_me_with_stale_token() {
        let (app, _) = router(MockBackend::default());
        let response = app.oneshot(request("GET", "/api/auth/me", Some("expired"), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("auth_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(!cookie.contains("Secure"));
    }

    #[tokio::test]
    async fn test_stale_token_expires_secure_cookie() {
        let state = ApiState::new(Arc::new(MockBackend::default()), true);
        let response = api_router(state)
            .oneshot(request("GET", "/api/auth/me", Some("expired"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("auth_token=;"));
        assert!(cookie.ends_with("; Secure"));
    }
}
