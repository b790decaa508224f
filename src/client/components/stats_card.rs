use dioxus::prelude::*;

#[component]
pub fn StatsCard(label: String, value: String, description: Option<String>) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value", "{value}" }
            if let Some(description) = description {
                div { class: "stat-desc", "{description}" }
            }
        }
    )
}
