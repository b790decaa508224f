use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let state = user_store.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-2",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl", "Coparent" }
                Link { to: Route::Marketplace {}, class: "btn btn-ghost", "Marketplace" }
            }
            div {
                class: "navbar-end gap-2",
                if state.user.is_some() {
                    Link { to: Route::Dashboard {}, class: "btn btn-primary", "Dashboard" }
                    a { href: "/api/auth/logout",
                        button { class: "btn btn-outline", "Logout" }
                    }
                } else if state.fetched {
                    a { href: "/api/auth/login",
                        button { class: "btn btn-primary", "Sign in" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
