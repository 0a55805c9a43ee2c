//! Structured logging helpers for the web front-end
//!
//! Keeps field names consistent across handlers and middleware so request
//! logs can be filtered by `operation`.

/// Operation tag attached to every log line from this module
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Auth,
    BackendCall,
    LocaleRedirect,
    AuthRedirect,
    Cache,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Auth => "auth",
            LogOperation::BackendCall => "backend_call",
            LogOperation::LocaleRedirect => "locale_redirect",
            LogOperation::AuthRedirect => "auth_redirect",
            LogOperation::Cache => "cache",
        }
    }
}

/// Log a completed backend request
pub fn log_backend_call(method: &str, path: &str, status: u16, elapsed_ms: u128) {
    tracing::debug!(
        operation = LogOperation::BackendCall.as_str(),
        method = method,
        path = path,
        status = status,
        elapsed_ms = elapsed_ms as u64,
        "Backend request completed"
    );
}

/// Log a backend request that never got a response
pub fn log_backend_failure(method: &str, path: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::BackendCall.as_str(),
        method = method,
        path = path,
        error = error,
        "Backend request failed"
    );
}

/// Log a login/register/logout outcome (never the credentials)
pub fn log_auth_event(action: &str, success: bool) {
    if success {
        tracing::info!(operation = LogOperation::Auth.as_str(), action = action, "Auth succeeded");
    } else {
        tracing::warn!(operation = LogOperation::Auth.as_str(), action = action, "Auth failed");
    }
}

pub fn log_locale_redirect(path: &str, target: &str) {
    tracing::debug!(
        operation = LogOperation::LocaleRedirect.as_str(),
        path = path,
        target = target,
        "Redirecting to localized path"
    );
}

pub fn log_auth_redirect(path: &str, target: &str) {
    tracing::debug!(
        operation = LogOperation::AuthRedirect.as_str(),
        path = path,
        target = target,
        "Redirecting on auth state"
    );
}

pub fn log_cache_hit(key: &str, hit: bool) {
    tracing::trace!(
        operation = LogOperation::Cache.as_str(),
        key = key,
        hit = hit,
        "Doctor directory cache lookup"
    );
}
