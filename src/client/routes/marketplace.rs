use coparent::model::marketplace::{MarketplaceItemDto, MarketplaceStats, CATEGORIES};
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{FilterSelect, ListingCard, Page, SearchBar, StatsCard};

#[component]
pub fn Marketplace() -> Element {
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    #[allow(unused_mut)]
    let mut items = use_signal(Vec::<MarketplaceItemDto>::new);
    #[allow(unused_mut)]
    let mut loading = use_signal(|| true);

    // Category filtering happens on the server, search on the fetched listings
    #[cfg(feature = "web")]
    {
        use crate::client::{components::use_toast, util::api::get_marketplace_items};

        let mut toasts = use_toast();

        let _ = use_resource(move || {
            let selected = category();
            async move {
                loading.set(true);
                let filter = (!selected.is_empty()).then_some(selected);

                match get_marketplace_items(filter).await {
                    Ok(fetched) => items.set(fetched),
                    Err(err) => {
                        toasts.error(err);
                        items.set(Vec::new());
                    }
                }
                loading.set(false);
            }
        });
    }

    let query = search();
    let visible: Vec<MarketplaceItemDto> = items
        .read()
        .iter()
        .filter(|item| item.matches_search(&query))
        .cloned()
        .collect();
    let stats = MarketplaceStats::from_items(&visible);

    let options: Vec<(String, String)> = CATEGORIES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    rsx!(
        Title { "Marketplace | Coparent" }
        Meta {
            name: "description",
            content: "Services and products for co-parenting families."
        }
        Page { heading: "Marketplace".to_string(),
            div { class: "flex flex-col gap-4 max-w-[1440px] mx-auto",
                div { class: "flex flex-col sm:flex-row gap-2",
                    SearchBar {
                        value: query.clone(),
                        placeholder: "Search listings...".to_string(),
                        on_change: move |value| search.set(value),
                    }
                    FilterSelect {
                        value: category(),
                        options,
                        on_change: move |value| category.set(value),
                    }
                }
                div { class: "stats stats-vertical sm:stats-horizontal shadow",
                    StatsCard { label: "Listings".to_string(), value: stats.total.to_string() }
                    StatsCard {
                        label: "Featured".to_string(),
                        value: stats.featured.to_string(),
                        description: "Highlighted by our team".to_string(),
                    }
                    StatsCard { label: "Categories".to_string(), value: stats.categories.to_string() }
                }
                if loading() {
                    div { class: "flex justify-center p-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                } else if visible.is_empty() {
                    p { class: "text-center p-8", "No listings match your search." }
                } else {
                    div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                        for item in visible {
                            ListingCard { key: "{item.id}", item }
                        }
                    }
                }
            }
        }
    )
}
