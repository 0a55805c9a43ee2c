use dioxus::prelude::*;

use crate::domain::models::Diagnosis;
use crate::i18n::{t, t_args, Locale};

#[component]
pub fn DiagnosisCard(diagnosis: Diagnosis, locale: Locale) -> Element {
    let percent = diagnosis.confidence_percent();
    let confidence = t_args(locale, "diagnosis.confidence", &[("percent", &percent.to_string())]);
    let level = match percent {
        70..=100 => "high",
        40..=69 => "medium",
        _ => "low",
    };
    let date = diagnosis.created_at.format("%Y-%m-%d").to_string();

    rsx! {
        article { class: "c-diagnosis c-diagnosis--{level}",
            header { class: "c-diagnosis__header",
                span { class: "c-diagnosis__label", {t(locale, "diagnosis.result_title")} }
                time { class: "c-diagnosis__date", datetime: "{diagnosis.created_at.to_rfc3339()}", "{date}" }
            }
            h3 { class: "c-diagnosis__condition", "{diagnosis.condition}" }
            div { class: "c-diagnosis__confidence",
                div { class: "c-diagnosis__bar",
                    div { class: "c-diagnosis__bar-fill", style: "width: {percent}%" }
                }
                span { "{confidence}" }
            }
            if !diagnosis.summary.is_empty() {
                p { class: "c-diagnosis__summary", "{diagnosis.summary}" }
            }
            if !diagnosis.recommendations.is_empty() {
                h4 { class: "c-diagnosis__subtitle", {t(locale, "diagnosis.recommendations")} }
                ul { class: "c-diagnosis__recommendations",
                    for (index, recommendation) in diagnosis.recommendations.iter().enumerate() {
                        li { key: "{index}", "{recommendation}" }
                    }
                }
            }
        }
    }
}
