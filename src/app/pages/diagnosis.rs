use chrono::Utc;
use dioxus::prelude::*;

use crate::app::components::{
    error_text, Button, ChatInput, ChatMessages, DiagnosisCard, EmptyState, ErrorMessage,
    LoadingText, MedicalDisclaimer,
};
use crate::app::Route;
use crate::i18n::{t, Locale};
use crate::shared::errors::ClientError;
use crate::shared::hooks::{use_auth, use_chat_list, use_chat_state};
use crate::shared::state::chat_title;

/// No chat selected: invite to start one
#[component]
pub fn DiagnosisHome(locale: Locale) -> Element {
    let chat_list = use_chat_list();
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut creating = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let start = move |_: MouseEvent| {
        if creating() {
            return;
        }
        spawn(async move {
            creating.set(true);
            error.set(None);
            match chat_list.create().await {
                Ok(chat) => {
                    navigator.push(Route::DiagnosisChat { locale, chat_id: chat.id });
                }
                Err(ClientError::Unauthorized) => auth.sign_out(),
                Err(e) => error.set(Some(error_text(locale, &e, "chat.errors.create_failed"))),
            }
            creating.set(false);
        });
    };

    rsx! {
        div { class: "c-diagnosis-home",
            EmptyState {
                icon: "💬",
                title: t(locale, "diagnosis.empty.title"),
                description: t(locale, "diagnosis.empty.text"),
                Button { loading: creating(), onclick: start, {t(locale, "diagnosis.empty.start")} }
            }
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            MedicalDisclaimer { locale }
        }
    }
}

/// One conversation with optimistic sending
#[component]
pub fn DiagnosisChat(locale: Locale, chat_id: String) -> Element {
    let mut chat = use_chat_state();
    let mut chat_list = use_chat_list();
    let mut auth = use_auth();

    // Reload whenever another chat is selected
    use_effect(use_reactive((&chat_id,), move |(chat_id,)| {
        spawn(async move {
            chat.load(chat_id).await;
            if matches!(*chat.load_error.peek(), Some(ClientError::Unauthorized)) {
                auth.sign_out();
            }
        });
    }));

    let deliver = move |chat_id: String, pending_id: String, content: String| {
        spawn(async move {
            let sent_at = Utc::now();
            match chat.deliver(chat_id.clone(), pending_id, content.clone()).await {
                Ok(()) => chat_list.touch(&chat_id, &content, sent_at),
                Err(ClientError::Unauthorized) => auth.sign_out(),
                Err(e) => tracing::warn!(chat_id = %chat_id, "Message not delivered: {}", e),
            }
        });
    };

    let submit_chat_id = chat_id.clone();
    let on_submit = move |_: ()| {
        if let Some((pending_id, content)) = chat.stage_draft() {
            deliver(submit_chat_id.clone(), pending_id, content);
        }
    };

    let retry_chat_id = chat_id.clone();
    let on_retry = move |message_id: String| {
        if let Some(content) = chat.stage_retry(&message_id) {
            deliver(retry_chat_id.clone(), message_id, content);
        }
    };

    let on_discard = move |message_id: String| {
        chat.session.write().discard(&message_id);
    };

    let title = chat_list
        .chats
        .read()
        .iter()
        .find(|c| c.id == chat_id)
        .map(|c| chat_title(c, locale))
        .unwrap_or_else(|| t(locale, "chat.untitled"));
    let session = chat.session.read().clone();
    let is_sending = session.is_sending();
    let load_error = chat.load_error.read().clone();

    if (chat.is_loading)() {
        return rsx! {
            LoadingText { message: t(locale, "chat.loading") }
        };
    }

    if let Some(error) = load_error {
        return rsx! {
            if error == ClientError::NotFound {
                EmptyState {
                    icon: "🔍",
                    title: t(locale, "chat.errors.not_found"),
                    Link { to: Route::DiagnosisHome { locale }, class: "c-button c-button--secondary", {t(locale, "chat.back")} }
                }
            } else {
                ErrorMessage { message: error_text(locale, &error, "chat.errors.load_failed") }
            }
        };
    }

    rsx! {
        div { class: "c-chat",
            header { class: "c-chat__header",
                h1 { class: "c-chat__title", "{title}" }
            }

            ChatMessages {
                locale,
                messages: session.messages.clone(),
                is_thinking: is_sending,
                on_retry,
                on_discard,
            }

            if let Some(diagnosis) = session.diagnosis.clone() {
                div { class: "c-chat__diagnosis",
                    DiagnosisCard { diagnosis, locale }
                }
            }

            div { class: "c-chat__composer",
                if let Some(error) = session.error.clone() {
                    // Either a message key or the server's own text
                    ErrorMessage { message: t(locale, &error) }
                }
                MedicalDisclaimer { locale, compact: true }
                ChatInput {
                    locale,
                    input: chat.input,
                    is_sending,
                    on_submit,
                }
            }
        }
    }
}
