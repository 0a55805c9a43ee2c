use dioxus::prelude::*;

use crate::app::components::LoadingText;
use crate::app::Route;
use crate::i18n::{t, Locale};
use crate::shared::hooks::use_auth;

/// Client-side guard for protected pages.
///
/// The server already redirects requests without the session cookie; this
/// covers client navigation and sessions that expired while the app was open.
#[component]
pub fn RequireAuth(locale: Locale, children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    use_effect(move || {
        if (auth.ready)() && !auth.is_logged_in() {
            let current = router().current::<Route>();
            let path = current.to_string();
            tracing::info!(path = %path, "No session, redirecting to login");
            navigator.replace(Route::login(current.locale(), Some(path)));
        }
    });

    if auth.is_logged_in() {
        rsx! { {children} }
    } else {
        rsx! {
            LoadingText { message: t(locale, "common.loading") }
        }
    }
}
