//! Tab bar that folds the tabs which do not fit into a "More" dropdown
//!
//! Widths are estimated from the label length so the server render and the
//! first client render agree; the container is measured once mounted and
//! again on every window resize.

use std::rc::Rc;

use dioxus::prelude::*;

/// Average glyph width of the tab font
const CHAR_PX: f64 = 8.0;
/// Horizontal padding plus gap of one tab
const PAD_PX: f64 = 32.0;
/// Space reserved for the "More" toggle
const MORE_PX: f64 = 88.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

/// Indices of the tabs shown inline and of those in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayout {
    pub visible: Vec<usize>,
    pub overflow: Vec<usize>,
}

impl TabLayout {
    pub fn all(count: usize) -> Self {
        Self { visible: (0..count).collect(), overflow: Vec::new() }
    }
}

pub fn estimate_tab_width(label: &str) -> f64 {
    label.chars().count() as f64 * CHAR_PX + PAD_PX
}

/// Keep tabs inline in order while they fit next to the "More" toggle.
///
/// At least one tab stays inline. An active tab that would overflow takes
/// the place of the last inline tab, which becomes the first overflow entry.
pub fn collapse_tabs(widths: &[f64], available: f64, more_width: f64, active: Option<usize>) -> TabLayout {
    let count = widths.len();
    if widths.iter().sum::<f64>() <= available {
        return TabLayout::all(count);
    }

    let budget = available - more_width;
    let mut used = 0.0;
    let mut visible = Vec::new();
    for (index, width) in widths.iter().enumerate() {
        if used + width > budget {
            break;
        }
        used += width;
        visible.push(index);
    }
    if visible.is_empty() && count > 0 {
        visible.push(0);
    }

    let mut overflow: Vec<usize> = (visible.len()..count).collect();

    if let Some(active) = active {
        if let Some(position) = overflow.iter().position(|&i| i == active) {
            overflow.remove(position);
            if let Some(displaced) = visible.pop() {
                overflow.insert(0, displaced);
            }
            visible.push(active);
        }
    }

    TabLayout { visible, overflow }
}

#[component]
pub fn ResponsiveTabs(
    tabs: Vec<TabItem>,
    active: String,
    on_select: EventHandler<String>,
    more_label: String,
    #[props(default)] aria_label: Option<String>,
) -> Element {
    let mut container_width = use_signal(|| None::<f64>);
    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let mut menu_open = use_signal(|| false);

    // Re-measure on window resize
    use_future(move || async move {
        #[cfg(target_arch = "wasm32")]
        {
            let mut resize = document::eval(
                r#"window.addEventListener('resize', () => dioxus.send(window.innerWidth));"#,
            );
            while resize.recv::<f64>().await.is_ok() {
                let element = container.peek().clone();
                if let Some(element) = element {
                    if let Ok(rect) = element.get_client_rect().await {
                        container_width.set(Some(rect.size.width));
                    }
                }
            }
        }
    });

    let widths: Vec<f64> = tabs.iter().map(|tab| estimate_tab_width(&tab.label)).collect();
    let active_index = tabs.iter().position(|tab| tab.id == active);
    let layout = match container_width() {
        Some(width) => collapse_tabs(&widths, width, MORE_PX, active_index),
        None => TabLayout::all(tabs.len()),
    };

    let entry = |index: usize| {
        let tab = &tabs[index];
        (tab.id.clone(), tab.label.clone(), tab.id == active)
    };
    let visible: Vec<(String, String, bool)> = layout.visible.iter().map(|&i| entry(i)).collect();
    let overflow: Vec<(String, String, bool)> = layout.overflow.iter().map(|&i| entry(i)).collect();
    let overflow_active = overflow.iter().any(|(_, _, is_active)| *is_active);
    let more_class = if overflow_active { "c-tabs__more-toggle c-tabs__tab--active" } else { "c-tabs__more-toggle" };

    rsx! {
        div {
            class: "c-tabs",
            role: "tablist",
            aria_label: aria_label.unwrap_or_default(),
            onmounted: move |evt: MountedEvent| async move {
                let element = evt.data();
                if let Ok(rect) = element.get_client_rect().await {
                    container_width.set(Some(rect.size.width));
                }
                container.set(Some(element));
            },

            for (id, label, is_active) in visible {
                button {
                    key: "{id}",
                    class: if is_active { "c-tabs__tab c-tabs__tab--active" } else { "c-tabs__tab" },
                    role: "tab",
                    aria_selected: is_active,
                    onclick: {
                        let id = id.clone();
                        move |_| {
                            menu_open.set(false);
                            on_select.call(id.clone());
                        }
                    },
                    "{label}"
                }
            }

            if !overflow.is_empty() {
                div { class: "c-tabs__more",
                    button {
                        class: "{more_class}",
                        aria_haspopup: "true",
                        aria_expanded: menu_open(),
                        onclick: move |_| menu_open.toggle(),
                        "{more_label} ▾"
                    }
                    if menu_open() {
                        ul { class: "c-tabs__menu", role: "menu",
                            for (id, label, is_active) in overflow {
                                li { key: "{id}",
                                    button {
                                        class: if is_active { "c-tabs__menu-item c-tabs__menu-item--active" } else { "c-tabs__menu-item" },
                                        role: "menuitem",
                                        onclick: {
                                            let id = id.clone();
                                            move |_| {
                                                menu_open.set(false);
                                                on_select.call(id.clone());
                                            }
                                        },
                                        "{label}"
                                    }
                                }
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
    fn test_everything_fits() {
        let layout = collapse_tabs(&[50.0, 60.0, 70.0], 180.0, 40.0, Some(2));
        assert_eq!(layout, TabLayout::all(3));
    }

    #[test]
    fn test_overflow_keeps_order() {
        // 50 + 60 fit in 200 - 80, 70 does not
        let layout = collapse_tabs(&[50.0, 60.0, 70.0, 30.0], 200.0, 80.0, Some(0));
        assert_eq!(layout.visible, vec![0, 1]);
        assert_eq!(layout.overflow, vec![2, 3]);
    }

    #[test]
    fn test_active_tab_swaps_in() {
        let layout = collapse_tabs(&[50.0, 60.0, 70.0, 30.0], 200.0, 80.0, Some(3));
        assert_eq!(layout.visible, vec![0, 3]);
        assert_eq!(layout.overflow, vec![1, 2]);
    }

    #[test]
    fn test_at_least_one_tab_visible() {
        let layout = collapse_tabs(&[120.0, 60.0], 100.0, 80.0, None);
        assert_eq!(layout.visible, vec![0]);
        assert_eq!(layout.overflow, vec![1]);

        let layout = collapse_tabs(&[120.0, 60.0], 100.0, 80.0, Some(1));
        assert_eq!(layout.visible, vec![1]);
        assert_eq!(layout.overflow, vec![0]);
    }

    #[test]
    fn test_no_tabs() {
        assert_eq!(collapse_tabs(&[], 10.0, 80.0, None), TabLayout::all(0));
    }

    #[test]
    fn test_estimate_tab_width() {
        assert_eq!(estimate_tab_width("All"), 3.0 * CHAR_PX + PAD_PX);
        // Counted in chars, not bytes
        assert_eq!(estimate_tab_width("الكل"), estimate_tab_width("abcd"));
    }
}
