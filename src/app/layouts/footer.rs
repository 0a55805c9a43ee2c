use dioxus::prelude::*;

use crate::app::Route;
use crate::i18n::{t, Locale};

#[component]
pub fn Footer(locale: Locale) -> Element {
    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__brand",
                span { class: "c-footer__logo", "🩺 Medilink" }
                p { class: "c-footer__tagline", {t(locale, "footer.tagline")} }
            }
            nav { class: "c-footer__links", aria_label: t(locale, "footer.links"),
                Link { to: Route::About { locale }, {t(locale, "nav.about")} }
                Link { to: Route::Faq { locale }, {t(locale, "nav.faq")} }
                Link { to: Route::Privacy { locale }, {t(locale, "footer.privacy")} }
                Link { to: Route::Terms { locale }, {t(locale, "footer.terms")} }
            }
            p { class: "c-footer__emergency", {t(locale, "footer.emergency")} }
            p { class: "c-footer__copyright", {t(locale, "footer.rights")} }
        }
    }
}
