use dioxus::prelude::*;

use crate::app::components::{EmptyState, MedicalDisclaimer, ResponsiveTabs, TabItem};
use crate::app::pages::not_found::NotFoundContent;
use crate::app::Route;
use crate::domain::content::{find_article, list_articles, Category};
use crate::i18n::{t, t_args, Locale};
use crate::shared::utils::render_markdown;

const ALL_TAB: &str = "all";

fn category_tabs(locale: Locale) -> Vec<TabItem> {
    std::iter::once(TabItem::new(ALL_TAB, t(locale, "education.categories.all")))
        .chain(Category::ALL.into_iter().map(|category| {
            TabItem::new(
                category.as_str(),
                t(locale, &format!("education.categories.{}", category.as_str())),
            )
        }))
        .collect()
}

#[component]
pub fn Education(locale: Locale) -> Element {
    let mut selected = use_signal(|| ALL_TAB.to_string());
    let category = Category::from_id(&selected());
    let articles = list_articles(locale, category);

    rsx! {
        article { class: "c-page",
            header { class: "c-page__header",
                h1 { {t(locale, "education.title")} }
                p { class: "c-page__lead", {t(locale, "education.lead")} }
            }

            ResponsiveTabs {
                tabs: category_tabs(locale),
                active: selected(),
                on_select: move |id: String| selected.set(id),
                more_label: t(locale, "common.more"),
                aria_label: t(locale, "education.filter"),
            }

            if articles.is_empty() {
                EmptyState { icon: "📚", title: t(locale, "education.empty") }
            }

            div { class: "c-grid c-grid--3",
                for article in articles {
                    Link {
                        key: "{article.slug}",
                        to: Route::EducationArticle { locale, slug: article.slug.to_string() },
                        class: "c-article-card",
                        span { class: "c-article-card__category",
                            {t(locale, &format!("education.categories.{}", article.category.as_str()))}
                        }
                        h2 { class: "c-article-card__title", "{article.title}" }
                        p { class: "c-article-card__excerpt", "{article.excerpt}" }
                        span { class: "c-article-card__meta",
                            {t_args(locale, "education.reading_time", &[("minutes", &article.reading_minutes.to_string())])}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EducationArticle(locale: Locale, slug: String) -> Element {
    let Some(article) = find_article(locale, &slug) else {
        return rsx! { NotFoundContent { locale } };
    };

    let html = render_markdown(article.body);
    let fallback = article.locale != locale;

    rsx! {
        document::Title { "{article.title} · Medilink" }
        article { class: "c-page c-page--article",
            Link { to: Route::Education { locale }, class: "c-page__back", "← ", {t(locale, "education.back")} }

            div { class: "c-article__meta",
                span { class: "c-article-card__category",
                    {t(locale, &format!("education.categories.{}", article.category.as_str()))}
                }
                span { {t_args(locale, "education.reading_time", &[("minutes", &article.reading_minutes.to_string())])} }
            }

            if fallback {
                p { class: "c-notice", {t(locale, "education.fallback_notice")} }
            }

            // English body keeps its own direction inside an RTL page
            div {
                class: "c-markdown c-article__body",
                lang: "{article.locale}",
                dir: "{article.locale.dir()}",
                dangerous_inner_html: html,
            }

            MedicalDisclaimer { locale, compact: true }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tabs() {
        let tabs = category_tabs(Locale::En);
        assert_eq!(tabs.len(), Category::ALL.len() + 1);
        assert_eq!(tabs[0].id, ALL_TAB);
        assert!(tabs.iter().all(|tab| !tab.label.starts_with("education.")));
    }
}
