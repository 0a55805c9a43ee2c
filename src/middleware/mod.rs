//! Request guards applied in front of the rendered pages
//!
//! Both only act on page paths; `/api` and static assets pass through.

use axum::{
    extract::{Request, State},
    http::{
        header::{ACCEPT_LANGUAGE, COOKIE},
        Method,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::i18n::Locale;
use crate::shared::logging::{log_auth_redirect, log_locale_redirect};
use crate::shared::routing::{auth_redirect_target, is_page_path, locale_redirect_target};
use crate::shared::utils::cookies::{cookie_value, AUTH_COOKIE};

fn header_str<'a>(request: &'a Request, name: axum::http::HeaderName) -> Option<&'a str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Send unprefixed page requests (`/`, `/about`) to their localized path
pub async fn locale_redirect(
    State(default_locale): State<Locale>,
    request: Request,
    next: Next,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    let path = request.uri().path();
    let target = locale_redirect_target(
        path,
        request.uri().query(),
        header_str(&request, COOKIE),
        header_str(&request, ACCEPT_LANGUAGE),
        default_locale,
    );

    match target {
        Some(target) => {
            log_locale_redirect(path, &target);
            Redirect::temporary(&target).into_response()
        }
        None => next.run(request).await,
    }
}

/// Keep logged-out visitors off protected pages and logged-in ones off login/register
pub async fn auth_redirect(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if !matches!(*request.method(), Method::GET | Method::HEAD) || !is_page_path(path) {
        return next.run(request).await;
    }

    let has_session = header_str(&request, COOKIE)
        .and_then(|h| cookie_value(h, AUTH_COOKIE))
        .is_some();

    match auth_redirect_target(path, request.uri().query(), has_session) {
        Some(target) => {
            log_auth_redirect(path, &target);
            Redirect::to(&target).into_response()
        }
        None => next.run(request).await,
    }
}
