use dioxus::prelude::*;

/// Labelled input bound to a signal, with its localized error below
#[component]
pub fn FormField(
    label: String,
    name: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut value = value;
    let invalid = error.is_some();
    let field_class = if invalid { "c-field c-field--invalid" } else { "c-field" };
    let error_id = format!("{}-error", name);

    rsx! {
        div { class: "{field_class}",
            label { class: "c-field__label", r#for: "{name}", "{label}" }
            input {
                class: "c-field__input",
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: "{value}",
                autocomplete: autocomplete.unwrap_or_default(),
                placeholder: placeholder.unwrap_or_default(),
                disabled: disabled,
                aria_invalid: invalid,
                aria_describedby: if invalid { error_id.clone() } else { String::new() },
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(hint) = hint {
                if !invalid {
                    p { class: "c-field__hint", "{hint}" }
                }
            }
            if let Some(error) = error {
                p { class: "c-field__error", id: "{error_id}", "{error}" }
            }
        }
    }
}
