use dioxus::prelude::*;

/// Page body offset below the fixed navbar, with an optional heading
#[component]
pub fn Page(class: Option<&'static str>, heading: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[80px] p-4 {class}",
            if let Some(heading) = heading {
                h1 { class: "text-3xl font-bold mb-4", "{heading}" }
            }
            {children}
        }
    )
}
