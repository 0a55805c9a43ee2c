use dioxus::prelude::*;

use crate::app::layouts::LocaleSwitcher;
use crate::app::Route;
use crate::i18n::{t, Locale};
use crate::shared::hooks::use_auth;

/// Global navbar with logo, section links, locale switcher and account area
#[component]
pub fn Navbar(locale: Locale) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);

    let logout = move |_: MouseEvent| {
        spawn(async move {
            auth.logout().await;
            navigator.push(Route::Home { locale });
        });
    };

    let links_class = if menu_open() { "c-navbar__links c-navbar__links--open" } else { "c-navbar__links" };
    let user = (auth.user)();

    rsx! {
        header { class: "c-navbar",
            Link {
                to: Route::Home { locale },
                class: "c-navbar__logo",
                "🩺 Medilink"
            }

            button {
                class: "c-navbar__toggle",
                aria_label: t(locale, "nav.menu"),
                aria_expanded: menu_open(),
                onclick: move |_| menu_open.toggle(),
                "☰"
            }

            nav {
                class: "{links_class}",
                // Close the mobile menu after navigating
                onclick: move |_| menu_open.set(false),
                Link { to: Route::About { locale }, class: "c-navbar__link", active_class: "c-navbar__link--active", {t(locale, "nav.about")} }
                Link { to: Route::Education { locale }, class: "c-navbar__link", active_class: "c-navbar__link--active", {t(locale, "nav.education")} }
                Link { to: Route::Doctors { locale }, class: "c-navbar__link", active_class: "c-navbar__link--active", {t(locale, "nav.doctors")} }
                Link { to: Route::Faq { locale }, class: "c-navbar__link", active_class: "c-navbar__link--active", {t(locale, "nav.faq")} }
                if user.is_some() {
                    Link { to: Route::DiagnosisHome { locale }, class: "c-navbar__link c-navbar__link--accent", active_class: "c-navbar__link--active", {t(locale, "nav.diagnosis")} }
                }
            }

            div { class: "c-navbar__actions",
                LocaleSwitcher { locale }
                if let Some(user) = user {
                    Link {
                        to: Route::Profile { locale },
                        class: "c-navbar__avatar",
                        title: "{user.name}",
                        "{user.initials()}"
                    }
                    button { class: "c-button c-button--ghost", onclick: logout, {t(locale, "nav.logout")} }
                } else {
                    Link { to: Route::login(locale, None), class: "c-button c-button--ghost", {t(locale, "nav.login")} }
                    Link { to: Route::Register { locale }, class: "c-button c-button--primary", {t(locale, "nav.register")} }
                }
            }
        }
    }
}
