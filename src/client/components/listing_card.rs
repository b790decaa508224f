use coparent::model::marketplace::{format_price, MarketplaceItemDto, CATEGORIES};
use dioxus::prelude::*;

fn category_label(category: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(value, _)| *value == category)
        .map(|(_, label)| *label)
        .unwrap_or(category)
}

#[component]
pub fn ListingCard(item: MarketplaceItemDto) -> Element {
    let price = format_price(item.price_cents);
    let category = category_label(&item.category).to_string();

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-center justify-between gap-2",
                    h2 { class: "card-title", "{item.title}" }
                    if item.featured {
                        span { class: "badge badge-primary", "Featured" }
                    }
                }
                span { class: "badge badge-outline", "{category}" }
                p { "{item.description}" }
                div { class: "card-actions items-center justify-between",
                    span { class: "font-semibold", "{price}" }
                    if let Some(url) = item.url.clone() {
                        a { href: "{url}", target: "_blank", rel: "noopener noreferrer",
                            button { class: "btn btn-sm btn-outline", "Learn more" }
                        }
                    }
                }
            }
        }
    )
}
