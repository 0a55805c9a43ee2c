use dioxus::prelude::*;

use crate::app::components::{DoctorCard, EmptyState, ErrorMessage, LoadingText, ResponsiveTabs, TabItem};
use crate::domain::models::SPECIALTIES;
use crate::i18n::{t, Locale};
use crate::server_fns::get_doctors;

const ALL_TAB: &str = "all";


fn specialty_tabs(locale: Locale) -> Vec<TabItem> {
    std::iter::once(ALL_TAB)
        .chain(SPECIALTIES.iter().copied())
        .map(|id| TabItem::new(id, t(locale, &format!("doctors.specialties.{}", id))))
        .collect()
}

fn specialty_filter(selected: &str) -> Option<String> {
    (selected != ALL_TAB).then(|| selected.to_string())
}

#[component]
pub fn Doctors(locale: Locale) -> Element {
    let mut selected = use_signal(|| ALL_TAB.to_string());

    // Rendered on the server, re-run on the client when the tab changes
    let doctors = use_server_future(move || {
        let specialty = specialty_filter(&selected());
        async move { get_doctors(specialty).await }
    })?;

    rsx! {
        article { class: "c-page",
            header { class: "c-page__header",
                h1 { {t(locale, "doctors.title")} }
                p { class: "c-page__lead", {t(locale, "doctors.lead")} }
            }

            ResponsiveTabs {
                tabs: specialty_tabs(locale),
                active: selected(),
                on_select: move |id: String| selected.set(id),
                more_label: t(locale, "common.more"),
                aria_label: t(locale, "doctors.filter"),
            }

            {
                match &*doctors.read() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        EmptyState { icon: "👩‍⚕️", title: t(locale, "doctors.empty") }
                    },
                    Some(Ok(list)) => rsx! {
                        div { class: "c-grid c-grid--3",
                            for doctor in list.iter().cloned() {
                                DoctorCard { key: "{doctor.id}", doctor, locale }
                            }
                        }
                    },
                    Some(Err(e)) => {
                        tracing::warn!("Doctor directory failed: {}", e);
                        rsx! { ErrorMessage { message: t(locale, "doctors.error") } }
                    },
                    None => rsx! {
                        LoadingText { message: t(locale, "common.loading") }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_filter() {
        assert_eq!(specialty_filter(ALL_TAB), None);
        assert_eq!(specialty_filter("cardiology").as_deref(), Some("cardiology"));
    }

    #[test]
    fn test_specialty_tabs_are_translated() {
        for locale in Locale::ALL {
            let tabs = specialty_tabs(locale);
            assert_eq!(tabs.len(), SPECIALTIES.len() + 1);
            assert!(tabs.iter().all(|tab| !tab.label.starts_with("doctors.")));
        }
    }
}
