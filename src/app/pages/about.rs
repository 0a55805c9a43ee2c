use dioxus::prelude::*;

use crate::app::components::Card;
use crate::app::Route;
use crate::i18n::{t, Locale};

const VALUES: &[(&str, &str)] = &[("🤝", "trust"), ("🎯", "accuracy"), ("🌍", "access")];

#[component]
pub fn About(locale: Locale) -> Element {
    rsx! {
        article { class: "c-page",
            header { class: "c-page__header",
                h1 { {t(locale, "about.title")} }
                p { class: "c-page__lead", {t(locale, "about.lead")} }
            }

            section { class: "c-section",
                h2 { {t(locale, "about.mission.title")} }
                p { {t(locale, "about.mission.text")} }
            }

            section { class: "c-section",
                h2 { {t(locale, "about.values.title")} }
                div { class: "c-grid c-grid--3",
                    for (icon, id) in VALUES.iter().copied() {
                        Card {
                            key: "{id}",
                            icon: icon.to_string(),
                            title: t(locale, &format!("about.values.{}.title", id)),
                            p { {t(locale, &format!("about.values.{}.text", id))} }
                        }
                    }
                }
            }

            section { class: "c-section c-section--muted",
                h2 { {t(locale, "about.team.title")} }
                p { {t(locale, "about.team.text")} }
                Link { to: Route::Doctors { locale }, class: "c-button c-button--secondary", {t(locale, "about.team.cta")} }
            }
        }
    }
}
