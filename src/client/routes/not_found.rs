use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not found | Coparent" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back home" }
        }
    )
}
