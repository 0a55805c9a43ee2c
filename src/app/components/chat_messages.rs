use dioxus::prelude::*;

use crate::domain::models::ChatRole;
use crate::i18n::{t, Locale};
use crate::shared::state::{MessageStatus, ViewMessage};
use crate::shared::utils::render_markdown;

#[component]
fn MessageItem(
    locale: Locale,
    view: ViewMessage,
    on_retry: EventHandler<String>,
    on_discard: EventHandler<String>,
) -> Element {
    let message = &view.message;
    let role_class = match message.role {
        ChatRole::User => "c-message--user",
        ChatRole::Assistant => "c-message--assistant",
        ChatRole::System => "c-message--system",
    };
    let status_class = match view.status {
        MessageStatus::Sent => "",
        MessageStatus::Pending => "c-message--pending",
        MessageStatus::Failed => "c-message--failed",
    };
    let time = message.created_at.format("%H:%M").to_string();
    let retry_id = message.id.clone();
    let discard_id = message.id.clone();

    rsx! {
        div { class: "c-message {role_class} {status_class}",
            if message.role == ChatRole::Assistant {
                span { class: "c-message__avatar", "🩺" }
                // Raw HTML in the markdown is escaped by the renderer
                div {
                    class: "c-message__content c-markdown",
                    dangerous_inner_html: render_markdown(&message.content),
                }
            } else {
                div { class: "c-message__content", "{message.content}" }
            }
            div { class: "c-message__meta",
                {
                    match view.status {
                        MessageStatus::Pending => rsx! {
                            span { class: "c-message__status", {t(locale, "chat.sending")} }
                        },
                        MessageStatus::Failed => rsx! {
                            span { class: "c-message__status c-message__status--failed", {t(locale, "chat.failed")} }
                            button {
                                class: "c-message__action",
                                onclick: move |_| on_retry.call(retry_id.clone()),
                                {t(locale, "chat.retry")}
                            }
                            button {
                                class: "c-message__action",
                                onclick: move |_| on_discard.call(discard_id.clone()),
                                {t(locale, "chat.discard")}
                            }
                        },
                        MessageStatus::Sent => rsx! {
                            time { datetime: "{message.created_at.to_rfc3339()}", "{time}" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn ChatMessages(
    locale: Locale,
    messages: Vec<ViewMessage>,
    /// Assistant is working on an answer
    is_thinking: bool,
    on_retry: EventHandler<String>,
    on_discard: EventHandler<String>,
) -> Element {
    // Keep the latest message in view
    let message_count = messages.len();
    use_effect(use_reactive((&message_count,), move |(_count,)| {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = document::eval(
                r#"const el = document.getElementById('chat-messages'); if (el) el.scrollTop = el.scrollHeight;"#,
            );
        }
    }));

    rsx! {
        div { id: "chat-messages", class: "c-messages", aria_live: "polite",
            if messages.is_empty() && !is_thinking {
                div { class: "c-messages__intro",
                    h2 { {t(locale, "chat.intro_title")} }
                    p { {t(locale, "chat.intro_text")} }
                }
            }
            for view in messages {
                MessageItem {
                    key: "{view.message.id}",
                    locale,
                    view: view.clone(),
                    on_retry,
                    on_discard,
                }
            }
            if is_thinking {
                div { class: "c-message c-message--assistant c-message--typing",
                    span { class: "c-message__avatar", "🩺" }
                    div { class: "c-typing",
                        span {} span {} span {}
                    }
                    span { class: "u-sr-only", {t(locale, "chat.thinking")} }
                }
            }
        }
    }
}
