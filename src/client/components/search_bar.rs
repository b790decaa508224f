use dioxus::prelude::*;

#[component]
pub fn SearchBar(
    value: String,
    on_change: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    rsx!(
        label { class: "input input-bordered flex items-center gap-2 w-full",
            input {
                r#type: "search",
                class: "grow",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event| on_change.call(event.value()),
            }
        }
    )
}
