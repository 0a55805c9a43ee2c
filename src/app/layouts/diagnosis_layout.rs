use dioxus::prelude::*;

use crate::app::components::{ChatSidebar, RequireAuth};
use crate::app::Route;
use crate::i18n::Locale;
use crate::shared::errors::ClientError;
use crate::shared::hooks::{use_auth, use_chat_list_provider, use_locale};

/// Chat list on the side, the selected conversation (or the empty state) next to it
#[component]
pub fn DiagnosisLayout() -> Element {
    let locale = use_locale();

    rsx! {
        RequireAuth { locale,
            DiagnosisShell { locale }
        }
    }
}

#[component]
fn DiagnosisShell(locale: Locale) -> Element {
    let chat_list = use_chat_list_provider();
    let mut auth = use_auth();
    let active_chat_id = match use_route::<Route>() {
        Route::DiagnosisChat { chat_id, .. } => Some(chat_id),
        _ => None,
    };

    use_effect(move || {
        spawn(async move {
            chat_list.refresh().await;
            if matches!(*chat_list.error.peek(), Some(ClientError::Unauthorized)) {
                auth.sign_out();
            }
        });
    });

    rsx! {
        div { class: "c-diagnosis-layout",
            ChatSidebar { locale, active_chat_id }
            section { class: "c-diagnosis-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
