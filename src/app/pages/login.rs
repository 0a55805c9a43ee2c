use dioxus::prelude::*;

use crate::app::components::{error_text, Button, ErrorMessage, FormField};
use crate::app::Route;
use crate::domain::models::LoginRequest;
use crate::domain::validation::{error_for, validate_login, Field, FieldError, LoginForm};
use crate::i18n::{t, Locale};
use crate::shared::hooks::{use_auth, AuthState};
use crate::shared::services::ApiService;

fn field_error(locale: Locale, errors: &[FieldError], field: Field) -> Option<String> {
    error_for(errors, field).map(|key| t(locale, key))
}

/// Send visitors who already have a session away from login and register
pub(crate) fn use_guest_only(auth: AuthState, locale: Locale, skip: Signal<bool>) {
    let navigator = use_navigator();
    use_effect(move || {
        if (auth.ready)() && auth.is_logged_in() && !skip() {
            navigator.replace(Route::DiagnosisHome { locale });
        }
    });
}

#[component]
pub fn Login(locale: Locale, next: String) -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut server_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    // Set when this page logs the user in, so the guest guard does not race `next`
    let mut signed_in_here = use_signal(|| false);

    use_guest_only(auth, locale, signed_in_here);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let form = LoginForm { email: email(), password: password() };
        let found = validate_login(&form);
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        let next = next.clone();
        spawn(async move {
            submitting.set(true);
            server_error.set(None);
            let request = LoginRequest {
                email: form.email.trim().to_string(),
                password: form.password,
            };
            match ApiService::new().login(&request).await {
                Ok(session) => {
                    signed_in_here.set(true);
                    auth.sign_in(session.user);
                    navigator.replace(Route::after_login(&next, locale));
                }
                Err(e) => {
                    server_error.set(Some(error_text(locale, &e, "auth.errors.login_failed")));
                }
            }
            submitting.set(false);
        });
    };

    let errors_now = errors.read().clone();

    rsx! {
        section { class: "c-auth",
            div { class: "c-auth__card",
                h1 { class: "c-auth__title", {t(locale, "auth.login.title")} }
                p { class: "c-auth__subtitle", {t(locale, "auth.login.subtitle")} }

                if let Some(message) = server_error() {
                    ErrorMessage { message }
                }

                form { class: "c-auth__form", novalidate: true, onsubmit,
                    FormField {
                        label: t(locale, "auth.fields.email"),
                        name: "email",
                        input_type: "email",
                        autocomplete: "email",
                        value: email,
                        error: field_error(locale, &errors_now, Field::Email),
                    }
                    FormField {
                        label: t(locale, "auth.fields.password"),
                        name: "password",
                        input_type: "password",
                        autocomplete: "current-password",
                        value: password,
                        error: field_error(locale, &errors_now, Field::Password),
                    }
                    Button {
                        button_type: "submit",
                        loading: submitting(),
                        {t(locale, "auth.login.submit")}
                    }
                }

                p { class: "c-auth__switch",
                    {t(locale, "auth.login.no_account")}
                    " "
                    Link { to: Route::Register { locale }, {t(locale, "auth.login.register_link")} }
                }
            }
        }
    }
}
