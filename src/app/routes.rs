use dioxus::prelude::*;

use crate::app::layouts::{DiagnosisLayout, SiteLayout};
use crate::app::pages::{
    About, DiagnosisChat, DiagnosisHome, Doctors, Education, EducationArticle, Faq, Home, Login,
    NotFound, Privacy, Profile, Register, Root, Terms,
};
use crate::i18n::{split_locale, Locale};
use crate::shared::hooks::use_auth_provider;
use crate::shared::routing::sanitize_next;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Unprefixed root; the server redirects it before it gets here
    #[route("/")]
    Root {},

    #[layout(SiteLayout)]
        #[route("/:locale")]
        Home { locale: Locale },
        #[route("/:locale/about")]
        About { locale: Locale },
        #[route("/:locale/faq")]
        Faq { locale: Locale },
        #[route("/:locale/privacy")]
        Privacy { locale: Locale },
        #[route("/:locale/terms")]
        Terms { locale: Locale },
        #[route("/:locale/education")]
        Education { locale: Locale },
        #[route("/:locale/education/:slug")]
        EducationArticle { locale: Locale, slug: String },
        #[route("/:locale/doctors")]
        Doctors { locale: Locale },

        // Guest-only
        #[route("/:locale/login?:next")]
        Login { locale: Locale, next: String },
        #[route("/:locale/register")]
        Register { locale: Locale },

        // Protected
        #[layout(DiagnosisLayout)]
            #[route("/:locale/diagnosis")]
            DiagnosisHome { locale: Locale },
            #[route("/:locale/diagnosis/:chat_id")]
            DiagnosisChat { locale: Locale, chat_id: String },
        #[end_layout]
        #[route("/:locale/profile")]
        Profile { locale: Locale },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Locale prefix of the route, `en` when there is none
    pub fn locale(&self) -> Locale {
        split_locale(&self.to_string()).0.unwrap_or_default()
    }

    pub fn login(locale: Locale, next: Option<String>) -> Route {
        Route::Login { locale, next: next.unwrap_or_default() }
    }

    /// Destination after a successful login or registration
    pub fn after_login(next: &str, locale: Locale) -> Route {
        sanitize_next(next, locale)
            .parse::<Route>()
            .unwrap_or(Route::DiagnosisHome { locale })
    }
}

#[component]
pub fn App() -> Element {
    use_auth_provider();

    use_effect(|| {
        tracing::info!("Medilink app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
