use dioxus::prelude::*;

use crate::app::Route;
use crate::i18n::{switch_locale_path, t, Locale, LOCALE_COOKIE};
use crate::shared::utils::cookies::CookieSpec;

const LOCALE_COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// Same page in `target`, the home page when the path does not survive the switch
pub fn localized_route(path: &str, target: Locale) -> Route {
    switch_locale_path(path, target)
        .parse::<Route>()
        .unwrap_or(Route::Home { locale: target })
}

fn locale_cookie(locale: Locale) -> String {
    CookieSpec {
        name: LOCALE_COOKIE,
        value: locale.as_str(),
        max_age_secs: LOCALE_COOKIE_MAX_AGE_SECS,
        http_only: false,
        secure: false,
    }
    .to_header_value()
}

/// Persist the explicit choice so unprefixed URLs land on it next time
fn remember_locale(locale: Locale) {
    let cookie = locale_cookie(locale);
    #[cfg(target_arch = "wasm32")]
    {
        let _ = document::eval(&format!("document.cookie = '{}';", cookie));
    }
    tracing::debug!(cookie = %cookie, "Locale preference saved");
}

#[component]
pub fn LocaleSwitcher(locale: Locale) -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        div { class: "c-locale-switcher", role: "group", aria_label: t(locale, "nav.language"),
            for target in Locale::ALL {
                Link {
                    key: "{target}",
                    to: localized_route(&current_path, target),
                    class: if target == locale { "c-locale-switcher__item c-locale-switcher__item--active" } else { "c-locale-switcher__item" },
                    onclick: move |_| remember_locale(target),
                    span { lang: "{target}", "{target.native_name()}" }
                }
            }
        }
    }
}
