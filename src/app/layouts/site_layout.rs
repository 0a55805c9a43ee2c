use dioxus::prelude::*;

use crate::app::layouts::{Footer, Navbar};
use crate::app::Route;
use crate::i18n::t;
use crate::shared::hooks::use_locale;

#[component]
pub fn SiteLayout() -> Element {
    // Bundled by build.rs from assets/css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let locale = use_locale();

    // Keep <html lang/dir> in sync after client-side locale switches
    use_effect(use_reactive((&locale,), |(locale,)| {
        #[cfg(target_arch = "wasm32")]
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", locale.as_str());
            let _ = root.set_attribute("dir", locale.dir());
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = locale;
    }));

    let title = t(locale, "meta.title");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        document::Title { "{title}" }
        document::Meta { name: "description", content: t(locale, "meta.description") }

        div { class: "c-site", lang: "{locale}", dir: "{locale.dir()}",
            a { class: "u-skip-link", href: "#main", {t(locale, "nav.skip_to_content")} }
            Navbar { locale }
            main { id: "main", class: "c-site__main",
                Outlet::<Route> {}
            }
            Footer { locale }
        }
    }
}
