use dioxus::prelude::*;

/// Select over `(value, label)` options with a leading "all" entry
///
/// The empty string is forwarded when the "all" entry is chosen.
#[component]
pub fn FilterSelect(
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
    #[props(default = "All categories".to_string())] all_label: String,
) -> Element {
    rsx!(
        select {
            class: "select select-bordered",
            value: "{value}",
            onchange: move |event| on_change.call(event.value()),
            option { value: "", selected: value.is_empty(), "{all_label}" }
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    )
}
