use dioxus::prelude::*;

use crate::i18n::{t, t_list, Locale};

#[derive(Debug, Clone, PartialEq)]
struct FaqItem {
    question: String,
    answer: String,
}

/// `faq.items` entries with both a question and an answer
fn faq_items(locale: Locale) -> Vec<FaqItem> {
    t_list(locale, "faq.items")
        .into_iter()
        .filter_map(|item| {
            let question = item.get("q")?.as_str()?.to_string();
            let answer = item.get("a")?.as_str()?.to_string();
            Some(FaqItem { question, answer })
        })
        .collect()
}

#[component]
pub fn Faq(locale: Locale) -> Element {
    let mut open = use_signal(|| None::<usize>);
    let items = faq_items(locale);

    rsx! {
        article { class: "c-page",
            header { class: "c-page__header",
                h1 { {t(locale, "faq.title")} }
                p { class: "c-page__lead", {t(locale, "faq.lead")} }
            }

            div { class: "c-accordion",
                for (index, item) in items.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if open() == Some(index) { "c-accordion__item c-accordion__item--open" } else { "c-accordion__item" },
                        button {
                            class: "c-accordion__question",
                            id: "faq-q-{index}",
                            aria_expanded: open() == Some(index),
                            aria_controls: "faq-a-{index}",
                            onclick: move |_| {
                                let next = if open() == Some(index) { None } else { Some(index) };
                                open.set(next);
                            },
                            span { "{item.question}" }
                            span { class: "c-accordion__chevron", "▾" }
                        }
                        if open() == Some(index) {
                            div {
                                class: "c-accordion__answer",
                                id: "faq-a-{index}",
                                role: "region",
                                aria_labelledby: "faq-q-{index}",
                                p { "{item.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_items_in_every_locale() {
        let en = faq_items(Locale::En);
        assert!(!en.is_empty());
        for locale in [Locale::Fr, Locale::Ar] {
            assert_eq!(faq_items(locale).len(), en.len(), "{} FAQ size differs", locale);
        }
    }
}
