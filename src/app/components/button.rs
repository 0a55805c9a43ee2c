use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
    Danger,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    /// Shows a spinner and disables the button
    loading: Option<bool>,
    /// `submit` inside forms
    button_type: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let loading = loading.unwrap_or(false);
    let disabled = disabled.unwrap_or(false) || loading;
    let button_type = button_type.unwrap_or_else(|| "button".to_string());

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Secondary => "c-button--secondary",
        ButtonVariant::Ghost => "c-button--ghost",
        ButtonVariant::Danger => "c-button--danger",
    };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: "{button_type}",
            disabled: disabled,
            aria_busy: loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "c-button__spinner" }
            }
            {children}
        }
    }
}
