use dioxus::prelude::*;

use crate::i18n::{t, Locale};
use crate::shared::errors::ClientError;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading", role: "status",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "⚠️" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default = "🩺".to_string())] icon: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "c-empty",
            span { class: "c-empty__icon", "{icon}" }
            h3 { class: "c-empty__title", "{title}" }
            if let Some(description) = description {
                p { class: "c-empty__description", "{description}" }
            }
            {children}
        }
    }
}

/// Message for a failed API call.
///
/// Server messages are either message keys (validation errors from the
/// `/api` routes) or free text from the backend; `t` passes the latter through.
pub fn error_text(locale: Locale, error: &ClientError, fallback_key: &str) -> String {
    match error {
        ClientError::Network(_) => t(locale, "errors.network"),
        ClientError::NotFound => t(locale, "errors.not_found"),
        _ => error
            .user_message()
            .map(|message| t(locale, message))
            .unwrap_or_else(|| t(locale, fallback_key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text() {
        let api = ClientError::Api { status: 409, message: "Email already registered".to_string() };
        assert_eq!(error_text(Locale::En, &api, "errors.generic"), "Email already registered");

        let key = ClientError::Api { status: 400, message: "validation.email_invalid".to_string() };
        assert_eq!(error_text(Locale::Fr, &key, "errors.generic"), t(Locale::Fr, "validation.email_invalid"));

        let bare = ClientError::Api { status: 500, message: String::new() };
        assert_eq!(error_text(Locale::En, &bare, "errors.generic"), t(Locale::En, "errors.generic"));
        assert_eq!(
            error_text(Locale::Fr, &ClientError::Network("offline".to_string()), "errors.generic"),
            t(Locale::Fr, "errors.network")
        );
    }
}
