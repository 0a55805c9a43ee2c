//! Auth cookie handling for the API routes

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::{COOKIE, SET_COOKIE}, request::Parts, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};

use super::ApiError;
use crate::shared::utils::cookies::{cookie_value, CookieSpec, AUTH_COOKIE, AUTH_COOKIE_MAX_AGE_SECS};

/// Bearer token taken from the auth cookie; rejects with 401 when absent
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken(pub String);

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        token_from_parts(parts).map(AuthToken).ok_or(ApiError::Unauthorized)
    }
}

pub fn token_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|header| cookie_value(header, AUTH_COOKIE))
}

pub fn set_auth_cookie(token: &str, secure: bool) -> String {
    CookieSpec {
        name: AUTH_COOKIE,
        value: token,
        max_age_secs: AUTH_COOKIE_MAX_AGE_SECS,
        http_only: true,
        secure,
    }
    .to_header_value()
}

pub fn clear_auth_cookie(secure: bool) -> String {
    CookieSpec {
        name: AUTH_COOKIE,
        value: "",
        max_age_secs: 0,
        http_only: true,
        secure,
    }
    .to_header_value()
}

/// Expire the auth cookie on every 401 so a stale token is dropped.
/// The state is the `Secure` flag the cookie was issued with.
pub async fn expire_cookie_on_unauthorized(
    State(secure): State<bool>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if response.status() == StatusCode::UNAUTHORIZED && !response.headers().contains_key(SET_COOKIE) {
        if let Ok(value) = HeaderValue::from_str(&clear_auth_cookie(secure)) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}
