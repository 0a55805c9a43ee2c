use dioxus::prelude::*;

use crate::app::Route;
use crate::i18n::{t, Locale};

/// Body of the 404 page, also used for unknown article slugs
#[component]
pub fn NotFoundContent(locale: Locale) -> Element {
    rsx! {
        section { class: "c-not-found",
            span { class: "c-not-found__code", "404" }
            h1 { {t(locale, "not_found.title")} }
            p { {t(locale, "not_found.text")} }
            Link { to: Route::Home { locale }, class: "c-button c-button--primary", {t(locale, "not_found.home")} }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let locale = segments
        .first()
        .and_then(|segment| segment.parse::<Locale>().ok())
        .unwrap_or_default();

    let title = t(locale, "not_found.title");

    rsx! {
        document::Title { "{title}" }
        NotFoundContent { locale }
    }
}

/// `/` reached without the server redirect (client-side navigation)
#[component]
pub fn Root() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::Home { locale: Locale::default() });
    });

    rsx! {}
}
