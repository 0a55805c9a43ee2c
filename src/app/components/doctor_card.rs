use dioxus::prelude::*;

use crate::domain::models::Doctor;
use crate::i18n::{t, Locale};

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn DoctorCard(doctor: Doctor, locale: Locale) -> Element {
    let specialty_key = format!("doctors.specialties.{}", doctor.specialty.to_lowercase());
    let specialty = t(locale, &specialty_key);
    // Unknown specialties are shown as sent by the backend
    let specialty = if specialty == specialty_key { doctor.specialty.clone() } else { specialty };
    let availability = if doctor.available { "doctors.available" } else { "doctors.unavailable" };

    rsx! {
        article { class: "c-doctor",
            div { class: "c-doctor__header",
                if let Some(photo) = doctor.photo_url.clone() {
                    img { class: "c-doctor__photo", src: "{photo}", alt: "{doctor.name}", loading: "lazy" }
                } else {
                    span { class: "c-doctor__avatar", {initials(&doctor.name)} }
                }
                div {
                    h3 { class: "c-doctor__name", "{doctor.name}" }
                    p { class: "c-doctor__specialty", "{specialty}" }
                }
            }
            if let Some(bio) = doctor.bio.clone() {
                p { class: "c-doctor__bio", "{bio}" }
            }
            div { class: "c-doctor__meta",
                if let Some(rating) = doctor.rating_label() {
                    span { class: "c-doctor__rating", title: t(locale, "doctors.rating"), "★ {rating}" }
                }
                if !doctor.languages.is_empty() {
                    span { class: "c-doctor__languages", {doctor.languages.join(" · ")} }
                }
                span {
                    class: if doctor.available { "c-badge c-badge--success" } else { "c-badge" },
                    {t(locale, availability)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_skip_titles() {
        assert_eq!(initials("Dr. Sarah Haddad"), "SH");
        assert_eq!(initials("Karim"), "K");
    }
}
