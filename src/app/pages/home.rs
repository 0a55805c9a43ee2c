use dioxus::prelude::*;

use crate::app::components::Card;
use crate::app::Route;
use crate::i18n::{t, Locale};
use crate::shared::hooks::use_auth;

const FEATURES: &[(&str, &str)] = &[
    ("💬", "chat"),
    ("👩‍⚕️", "doctors"),
    ("📚", "education"),
    ("🔒", "privacy"),
];

const STEPS: &[&str] = &["describe", "answer", "review"];

#[component]
pub fn Home(locale: Locale) -> Element {
    let auth = use_auth();
    // Logged-in visitors go straight to their chats
    let start = if auth.is_logged_in() {
        Route::DiagnosisHome { locale }
    } else {
        Route::Register { locale }
    };

    rsx! {
        section { class: "c-hero",
            div { class: "c-hero__content",
                h1 { class: "c-hero__title", {t(locale, "home.hero.title")} }
                p { class: "c-hero__subtitle", {t(locale, "home.hero.subtitle")} }
                div { class: "c-hero__actions",
                    Link { to: start.clone(), class: "c-button c-button--primary c-button--large", {t(locale, "home.hero.cta")} }
                    Link { to: Route::About { locale }, class: "c-button c-button--secondary c-button--large", {t(locale, "home.hero.secondary")} }
                }
            }
        }

        section { class: "c-section",
            h2 { class: "c-section__title", {t(locale, "home.features.title")} }
            div { class: "c-grid c-grid--4",
                for (icon, id) in FEATURES.iter().copied() {
                    Card {
                        key: "{id}",
                        icon: icon.to_string(),
                        title: t(locale, &format!("home.features.{}.title", id)),
                        p { {t(locale, &format!("home.features.{}.text", id))} }
                    }
                }
            }
        }

        section { class: "c-section c-section--muted",
            h2 { class: "c-section__title", {t(locale, "home.steps.title")} }
            ol { class: "c-steps",
                for (index, id) in STEPS.iter().enumerate() {
                    li { key: "{id}", class: "c-steps__item",
                        span { class: "c-steps__number", "{index + 1}" }
                        h3 { {t(locale, &format!("home.steps.{}.title", id))} }
                        p { {t(locale, &format!("home.steps.{}.text", id))} }
                    }
                }
            }
        }

        section { class: "c-cta",
            h2 { {t(locale, "home.cta.title")} }
            p { {t(locale, "home.cta.text")} }
            Link { to: start, class: "c-button c-button--primary c-button--large", {t(locale, "home.cta.button")} }
        }
    }
}
