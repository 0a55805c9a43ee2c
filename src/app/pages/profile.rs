use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::app::components::{error_text, Button, ButtonVariant, Card, DiagnosisCard, EmptyState, ErrorMessage, LoadingText, RequireAuth};
use crate::app::Route;
use crate::domain::models::{Appointment, Diagnosis};
use crate::i18n::{t, t_args, Locale};
use crate::shared::errors::ClientError;
use crate::shared::hooks::use_auth;
use crate::shared::services::ApiService;

type Section<T> = Signal<Option<Result<Vec<T>, ClientError>>>;

fn sort_diagnoses(diagnoses: &mut [Diagnosis]) {
    diagnoses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Upcoming soonest first, then past ones newest first
fn sort_appointments(appointments: &mut Vec<Appointment>, now: DateTime<Utc>) {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) =
        appointments.drain(..).partition(|a| a.is_upcoming(now));
    upcoming.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
    past.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
    appointments.extend(upcoming);
    appointments.extend(past);
}

#[component]
pub fn Profile(locale: Locale) -> Element {
    rsx! {
        RequireAuth { locale,
            ProfileContent { locale }
        }
    }
}

#[component]
fn ProfileContent(locale: Locale) -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut diagnoses: Section<Diagnosis> = use_signal(|| None);
    let mut appointments: Section<Appointment> = use_signal(|| None);

    use_effect(move || {
        spawn(async move {
            let api = ApiService::new();
            match api.me().await {
                Ok(user) => auth.sign_in(user),
                Err(ClientError::Unauthorized) => {
                    auth.sign_out();
                    return;
                }
                Err(e) => tracing::warn!("Profile refresh failed: {}", e),
            }

            // Each section fails on its own
            let (mut loaded_diagnoses, mut loaded_appointments) =
                futures::join!(api.list_diagnoses(), api.list_appointments());
            if let Ok(list) = &mut loaded_diagnoses {
                sort_diagnoses(list);
            }
            if let Ok(list) = &mut loaded_appointments {
                sort_appointments(list, Utc::now());
            }
            diagnoses.set(Some(loaded_diagnoses));
            appointments.set(Some(loaded_appointments));
        });
    });

    let logout = move |_: MouseEvent| {
        spawn(async move {
            auth.logout().await;
            navigator.push(Route::Home { locale });
        });
    };

    let Some(user) = (auth.user)() else {
        return rsx! { LoadingText { message: t(locale, "common.loading") } };
    };
    let greeting = t_args(locale, "profile.greeting", &[("name", user.first_name())]);
    let member_since = user.created_at.map(|d| d.format("%Y-%m-%d").to_string());

    rsx! {
        article { class: "c-page c-profile",
            header { class: "c-profile__header",
                span { class: "c-profile__avatar", "{user.initials()}" }
                div {
                    h1 { "{greeting}" }
                    p { class: "c-page__lead", {t(locale, "profile.lead")} }
                }
                Button { variant: ButtonVariant::Secondary, onclick: logout, {t(locale, "nav.logout")} }
            }

            Card { title: t(locale, "profile.info.title"),
                dl { class: "c-profile__info",
                    dt { {t(locale, "auth.fields.name")} }
                    dd { "{user.name}" }
                    dt { {t(locale, "auth.fields.email")} }
                    dd { "{user.email}" }
                    dt { {t(locale, "auth.fields.phone")} }
                    dd { {user.phone.clone().unwrap_or_else(|| "—".to_string())} }
                    if let Some(date) = member_since {
                        dt { {t(locale, "profile.info.member_since")} }
                        dd { "{date}" }
                    }
                }
            }

            section { class: "c-section",
                h2 { {t(locale, "profile.diagnoses.title")} }
                {
                    match &*diagnoses.read() {
                        None => rsx! { LoadingText { message: t(locale, "common.loading") } },
                        Some(Err(e)) => rsx! { ErrorMessage { message: error_text(locale, e, "profile.diagnoses.error") } },
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            EmptyState {
                                title: t(locale, "profile.diagnoses.empty"),
                                Link { to: Route::DiagnosisHome { locale }, class: "c-button c-button--primary", {t(locale, "profile.diagnoses.start")} }
                            }
                        },
                        Some(Ok(list)) => rsx! {
                            div { class: "c-grid c-grid--2",
                                for diagnosis in list.iter().cloned() {
                                    DiagnosisCard { key: "{diagnosis.id}", diagnosis, locale }
                                }
                            }
                        },
                    }
                }
            }

            section { class: "c-section",
                h2 { {t(locale, "profile.appointments.title")} }
                {
                    match &*appointments.read() {
                        None => rsx! { LoadingText { message: t(locale, "common.loading") } },
                        Some(Err(e)) => rsx! { ErrorMessage { message: error_text(locale, e, "profile.appointments.error") } },
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            EmptyState { icon: "📅", title: t(locale, "profile.appointments.empty") }
                        },
                        Some(Ok(list)) => rsx! {
                            ul { class: "c-appointments",
                                for appointment in list.iter().cloned() {
                                    AppointmentRow { key: "{appointment.id}", appointment, locale }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn AppointmentRow(appointment: Appointment, locale: Locale) -> Element {
    let upcoming = appointment.is_upcoming(Utc::now());
    let when = appointment.scheduled_at.format("%Y-%m-%d %H:%M").to_string();
    let doctor = appointment
        .doctor_name
        .clone()
        .unwrap_or_else(|| t(locale, "profile.appointments.unknown_doctor"));
    let status = appointment.status.as_str();
    let row_class = if upcoming { "c-appointment c-appointment--upcoming" } else { "c-appointment" };

    rsx! {
        li { class: "{row_class}",
            time { class: "c-appointment__when", datetime: "{appointment.scheduled_at.to_rfc3339()}", "{when}" }
            span { class: "c-appointment__doctor", "{doctor}" }
            span { class: "c-badge c-badge--{status}", {t(locale, &format!("profile.status.{}", status))} }
            if let Some(notes) = appointment.notes.clone() {
                p { class: "c-appointment__notes", "{notes}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AppointmentStatus;
    use chrono::Duration;

    fn appointment(id: &str, offset_hours: i64) -> Appointment {
        Appointment {
            id: id.to_string(),
            doctor_id: "d1".to_string(),
            doctor_name: None,
            scheduled_at: Utc::now() + Duration::hours(offset_hours),
            status: AppointmentStatus::Confirmed,
            notes: None,
        }
    }

    #[test]
    fn test_sort_appointments_upcoming_first() {
        let mut appointments = vec![
            appointment("past-old", -72),
            appointment("soon", 2),
            appointment("past-recent", -3),
            appointment("later", 48),
        ];
        sort_appointments(&mut appointments, Utc::now());
        let ids: Vec<&str> = appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "later", "past-recent", "past-old"]);
    }
}
