use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarDays, FaStore, FaUsers};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route, store::user::UserState};

#[component]
fn Feature(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "card bg-base-200 w-72",
            div { class: "card-body items-center text-center",
                {children}
                h2 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let state = user_store.read();

    rsx!(
        Title { "Coparent" }
        Meta {
            name: "description",
            content: "Co-parenting management: shared schedules, trusted services and one place to organise family life."
        }
        Page { class: "flex flex-col items-center justify-center gap-8",
            div { class: "flex flex-col items-center gap-2 text-center",
                h1 { class: "text-4xl font-bold", "Coparent" }
                p { class: "max-w-xl",
                    "Organise life across two homes. Find trusted mediators, childcare and family services, and keep everything in one place."
                }
            }
            div { class: "flex gap-2",
                if state.user.is_some() {
                    Link { to: Route::Dashboard {}, class: "btn btn-primary w-40", "Go to dashboard" }
                } else if state.fetched {
                    a { href: "/api/auth/login",
                        button { class: "btn btn-primary w-40", "Get started" }
                    }
                }
                Link { to: Route::Marketplace {}, class: "btn btn-outline w-40", "Browse services" }
            }
            div { class: "flex flex-wrap justify-center gap-4",
                Feature {
                    title: "Shared schedule",
                    description: "Plan handovers and activities together.",
                    Icon { width: 32, height: 32, icon: FaCalendarDays }
                }
                Feature {
                    title: "Marketplace",
                    description: "Mediators, counselors, childcare and more.",
                    Icon { width: 32, height: 32, icon: FaStore }
                }
                Feature {
                    title: "Both parents",
                    description: "Each parent signs in with their own account.",
                    Icon { width: 32, height: 32, icon: FaUsers }
                }
            }
        }
    )
}
