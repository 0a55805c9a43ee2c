//! Message composer: Enter sends, Shift+Enter inserts a newline

use dioxus::prelude::*;
use keyboard_types::Modifiers;

use crate::domain::models::MAX_MESSAGE_CHARS;
use crate::i18n::{t, t_args, Locale};

#[cfg(target_arch = "wasm32")]
fn focus_composer() {
    let _ = document::eval(
        r#"setTimeout(() => { const el = document.getElementById('chat-input'); if (el) el.focus(); }, 50);"#,
    );
}

#[component]
pub fn ChatInput(
    locale: Locale,
    input: Signal<String>,
    /// A message is in flight
    is_sending: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let mut input = input;
    let mut is_composing = use_signal(|| false);

    // Refocus once the previous message settled
    use_effect(use_reactive((&is_sending,), move |(is_sending,)| {
        if !is_sending {
            #[cfg(target_arch = "wasm32")]
            focus_composer();
        }
    }));

    // Handle keypress (Enter to send, Shift+Enter for newline)
    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter
            && !evt.modifiers().contains(Modifiers::SHIFT)
            && !*is_composing.read()
        {
            evt.prevent_default();
            if !input.read().trim().is_empty() && !is_sending {
                on_submit.call(());
            }
        }
    };

    let length = input.read().trim().chars().count();
    let too_long = length > MAX_MESSAGE_CHARS;
    let has_content = length > 0;
    let counter = t_args(
        locale,
        "chat.counter",
        &[("count", &length.to_string()), ("max", &MAX_MESSAGE_CHARS.to_string())],
    );
    let counter_class = if too_long { "chat-input__counter chat-input__counter--over" } else { "chat-input__counter" };

    rsx! {
        div {
            class: "chat-input",

            textarea {
                id: "chat-input",
                class: "chat-input__textarea",
                value: "{input}",
                placeholder: t(locale, "chat.placeholder"),
                aria_label: t(locale, "chat.placeholder"),
                disabled: is_sending,
                rows: "2",
                oninput: move |evt| input.set(evt.value()),
                onkeydown: handle_keydown,
                oncompositionstart: move |_| is_composing.set(true),
                oncompositionend: move |_| is_composing.set(false),
            }

            div { class: "chat-input__actions-row",
                span { class: "{counter_class}", "{counter}" }
                button {
                    class: "btn btn--send",
                    disabled: !has_content || too_long || is_sending,
                    title: t(locale, "chat.send"),
                    onclick: move |_| {
                        if has_content && !is_sending {
                            on_submit.call(());
                        }
                    },
                    if is_sending {
                        span { class: "btn__spinner" }
                    } else {
                        span { class: "btn__icon", "➤" }
                    }
                    span { class: "u-sr-only", {t(locale, "chat.send")} }
                }
            }
        }
    }
}
