//! Privacy policy and terms of service, both built from `<page>.sections`

use dioxus::prelude::*;

use crate::i18n::{t, t_list, Locale};

fn sections(locale: Locale, page: &str) -> Vec<(String, String)> {
    t_list(locale, &format!("{}.sections", page))
        .into_iter()
        .filter_map(|section| {
            Some((
                section.get("title")?.as_str()?.to_string(),
                section.get("body")?.as_str()?.to_string(),
            ))
        })
        .collect()
}

#[component]
fn LegalPage(locale: Locale, page: &'static str) -> Element {
    let sections = sections(locale, page);

    rsx! {
        article { class: "c-page c-page--legal",
            header { class: "c-page__header",
                h1 { {t(locale, &format!("{}.title", page))} }
                p { class: "c-page__meta", {t(locale, &format!("{}.updated", page))} }
            }
            for (index, (title, body)) in sections.into_iter().enumerate() {
                section { key: "{index}", class: "c-section",
                    h2 { "{title}" }
                    p { "{body}" }
                }
            }
        }
    }
}

#[component]
pub fn Privacy(locale: Locale) -> Element {
    rsx! { LegalPage { locale, page: "privacy" } }
}

#[component]
pub fn Terms(locale: Locale) -> Element {
    rsx! { LegalPage { locale, page: "terms" } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_sections_present() {
        for page in ["privacy", "terms"] {
            for locale in Locale::ALL {
                assert!(!sections(locale, page).is_empty(), "{} {} has no sections", locale, page);
            }
        }
    }
}
