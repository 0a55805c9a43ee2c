use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    icon: Option<String>,
    featured: Option<bool>,
    children: Element,
) -> Element {
    let featured = featured.unwrap_or(false);
    let featured_class = if featured { "c-card--featured" } else { "" };

    rsx! {
        div {
            class: "c-card {featured_class}",
            if title.is_some() || icon.is_some() {
                div {
                    class: "c-card__header",
                    if let Some(icon) = icon {
                        span { class: "c-card__icon", "{icon}" }
                    }
                    if let Some(title) = title {
                        h3 { class: "c-card__title", "{title}" }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
