use dioxus::prelude::*;

use crate::app::components::{error_text, Button, ErrorMessage, FormField};
use crate::app::pages::login::use_guest_only;
use crate::app::Route;
use crate::domain::models::RegisterRequest;
use crate::domain::validation::{error_for, validate_register, Field, FieldError, RegisterForm};
use crate::i18n::{t, Locale};
use crate::shared::hooks::use_auth;
use crate::shared::services::ApiService;

impl From<&RegisterForm> for RegisterRequest {
    fn from(form: &RegisterForm) -> Self {
        let phone = form.phone.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

#[component]
pub fn Register(locale: Locale) -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut accept_terms = use_signal(|| false);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut server_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut signed_in_here = use_signal(|| false);

    use_guest_only(auth, locale, signed_in_here);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let form = RegisterForm {
            name: name(),
            email: email(),
            phone: phone(),
            password: password(),
            confirm_password: confirm_password(),
            accept_terms: accept_terms(),
        };
        let found = validate_register(&form);
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        spawn(async move {
            submitting.set(true);
            server_error.set(None);
            match ApiService::new().register(&RegisterRequest::from(&form)).await {
                Ok(session) => {
                    signed_in_here.set(true);
                    auth.sign_in(session.user);
                    navigator.replace(Route::DiagnosisHome { locale });
                }
                Err(e) => {
                    server_error.set(Some(error_text(locale, &e, "auth.errors.register_failed")));
                }
            }
            submitting.set(false);
        });
    };

    let errors_now = errors.read().clone();
    let error = |field| error_for(&errors_now, field).map(|key| t(locale, key));

    rsx! {
        section { class: "c-auth",
            div { class: "c-auth__card",
                h1 { class: "c-auth__title", {t(locale, "auth.register.title")} }
                p { class: "c-auth__subtitle", {t(locale, "auth.register.subtitle")} }

                if let Some(message) = server_error() {
                    ErrorMessage { message }
                }

                form { class: "c-auth__form", novalidate: true, onsubmit,
                    FormField {
                        label: t(locale, "auth.fields.name"),
                        name: "name",
                        autocomplete: "name",
                        value: name,
                        error: error(Field::Name),
                    }
                    FormField {
                        label: t(locale, "auth.fields.email"),
                        name: "email",
                        input_type: "email",
                        autocomplete: "email",
                        value: email,
                        error: error(Field::Email),
                    }
                    FormField {
                        label: t(locale, "auth.fields.phone"),
                        name: "phone",
                        input_type: "tel",
                        autocomplete: "tel",
                        hint: t(locale, "auth.fields.optional"),
                        value: phone,
                        error: error(Field::Phone),
                    }
                    FormField {
                        label: t(locale, "auth.fields.password"),
                        name: "password",
                        input_type: "password",
                        autocomplete: "new-password",
                        hint: t(locale, "auth.fields.password_hint"),
                        value: password,
                        error: error(Field::Password),
                    }
                    FormField {
                        label: t(locale, "auth.fields.confirm_password"),
                        name: "confirm_password",
                        input_type: "password",
                        autocomplete: "new-password",
                        value: confirm_password,
                        error: error(Field::ConfirmPassword),
                    }

                    div { class: if error(Field::Terms).is_some() { "c-checkbox c-checkbox--invalid" } else { "c-checkbox" },
                        input {
                            id: "accept_terms",
                            r#type: "checkbox",
                            checked: accept_terms(),
                            onchange: move |evt| accept_terms.set(evt.checked()),
                        }
                        label { r#for: "accept_terms",
                            {t(locale, "auth.register.accept_terms")}
                            " "
                            Link { to: Route::Terms { locale }, {t(locale, "footer.terms")} }
                        }
                        if let Some(message) = error(Field::Terms) {
                            p { class: "c-field__error", "{message}" }
                        }
                    }

                    Button {
                        button_type: "submit",
                        loading: submitting(),
                        {t(locale, "auth.register.submit")}
                    }
                }

                p { class: "c-auth__switch",
                    {t(locale, "auth.register.have_account")}
                    " "
                    Link { to: Route::login(locale, None), {t(locale, "auth.register.login_link")} }
                }
            }
        }
    }
}
