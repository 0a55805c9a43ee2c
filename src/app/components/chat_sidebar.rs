use chrono::Utc;
use dioxus::prelude::*;

use crate::app::components::{error_text, LoadingText};
use crate::app::Route;
use crate::i18n::{t, Locale};
use crate::shared::errors::ClientError;
use crate::shared::hooks::{use_auth, use_chat_list};
use crate::shared::state::{chat_title, group_chats};
use crate::shared::utils::format_relative_time;

#[component]
pub fn ChatSidebar(locale: Locale, active_chat_id: Option<String>) -> Element {
    let chat_list = use_chat_list();
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut confirming = use_signal(|| None::<String>);
    let mut creating = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    let new_chat = move |_: MouseEvent| {
        if creating() {
            return;
        }
        spawn(async move {
            creating.set(true);
            action_error.set(None);
            match chat_list.create().await {
                Ok(chat) => {
                    navigator.push(Route::DiagnosisChat { locale, chat_id: chat.id });
                }
                Err(ClientError::Unauthorized) => auth.sign_out(),
                Err(e) => action_error.set(Some(error_text(locale, &e, "chat.errors.create_failed"))),
            }
            creating.set(false);
        });
    };

    let now = Utc::now();
    let groups = group_chats(&chat_list.chats.read(), &now);
    let list_error = chat_list.error.read().clone();

    rsx! {
        aside { class: "c-chat-sidebar",
            button {
                class: "c-button c-button--primary c-chat-sidebar__new",
                disabled: creating(),
                onclick: new_chat,
                "＋ ", {t(locale, "chat.new")}
            }

            if let Some(message) = action_error() {
                p { class: "c-chat-sidebar__error", role: "alert", "{message}" }
            }

            if (chat_list.loading)() && groups.is_empty() {
                LoadingText { message: t(locale, "chat.loading_list") }
            } else if let Some(error) = list_error {
                p { class: "c-chat-sidebar__error", role: "alert",
                    {error_text(locale, &error, "chat.errors.list_failed")}
                }
            } else if groups.is_empty() {
                p { class: "c-chat-sidebar__empty", {t(locale, "chat.no_chats")} }
            }

            nav { class: "c-chat-sidebar__groups", aria_label: t(locale, "chat.history"),
                for group in groups {
                    section { key: "{group.bucket.label_key()}", class: "c-chat-sidebar__group",
                        h3 { class: "c-chat-sidebar__group-title", {t(locale, group.bucket.label_key())} }
                        ul {
                            for chat in group.chats {
                                ChatListItem {
                                    key: "{chat.id}",
                                    locale,
                                    title: chat_title(&chat, locale),
                                    when: format_relative_time(&chat.updated_at, &now, locale),
                                    active: active_chat_id.as_deref() == Some(chat.id.as_str()),
                                    confirming: confirming().as_deref() == Some(chat.id.as_str()),
                                    chat_id: chat.id.clone(),
                                    on_ask_delete: move |id: String| confirming.set(Some(id)),
                                    on_cancel_delete: move |_| confirming.set(None),
                                    on_delete: {
                                        let active_chat_id = active_chat_id.clone();
                                        move |id: String| {
                                            confirming.set(None);
                                            let was_active = active_chat_id.as_deref() == Some(id.as_str());
                                            spawn(async move {
                                                match chat_list.delete(id).await {
                                                    Ok(()) if was_active => {
                                                        navigator.replace(Route::DiagnosisHome { locale });
                                                    }
                                                    Ok(()) => {}
                                                    Err(ClientError::Unauthorized) => auth.sign_out(),
                                                    Err(e) => action_error.set(Some(error_text(locale, &e, "chat.errors.delete_failed"))),
                                                }
                                            });
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChatListItem(
    locale: Locale,
    chat_id: String,
    title: String,
    when: String,
    active: bool,
    confirming: bool,
    on_ask_delete: EventHandler<String>,
    on_cancel_delete: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    let item_class = if active { "c-chat-item c-chat-item--active" } else { "c-chat-item" };
    let ask_id = chat_id.clone();
    let delete_id = chat_id.clone();

    rsx! {
        li { class: "{item_class}",
            if confirming {
                div { class: "c-chat-item__confirm",
                    span { {t(locale, "chat.confirm_delete")} }
                    button {
                        class: "c-chat-item__confirm-yes",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        {t(locale, "common.delete")}
                    }
                    button {
                        class: "c-chat-item__confirm-no",
                        onclick: move |_| on_cancel_delete.call(()),
                        {t(locale, "common.cancel")}
                    }
                }
            } else {
                Link {
                    to: Route::DiagnosisChat { locale, chat_id: chat_id.clone() },
                    class: "c-chat-item__link",
                    span { class: "c-chat-item__title", "{title}" }
                    span { class: "c-chat-item__time", "{when}" }
                }
                button {
                    class: "c-chat-item__delete",
                    title: t(locale, "common.delete"),
                    aria_label: t(locale, "common.delete"),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_ask_delete.call(ask_id.clone());
                    },
                    "🗑"
                }
            }
        }
    }
}
