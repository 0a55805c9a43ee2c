use dioxus::prelude::*;

use crate::i18n::{t, Locale};

/// Shown above the chat composer and on every diagnosis result
#[component]
pub fn MedicalDisclaimer(locale: Locale, #[props(default)] compact: bool) -> Element {
    let class = if compact { "c-disclaimer c-disclaimer--compact" } else { "c-disclaimer" };

    rsx! {
        aside { class: "{class}", role: "note",
            span { class: "c-disclaimer__icon", "ℹ️" }
            p { class: "c-disclaimer__text", {t(locale, "disclaimer.text")} }
        }
    }
}
