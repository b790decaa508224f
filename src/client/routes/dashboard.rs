use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, store::user::UserState};

#[component]
pub fn Dashboard() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let state = user_store.read();

    rsx!(
        Title { "Dashboard | Coparent" }
        Meta {
            name: "description",
            content: "Your co-parenting dashboard."
        }
        Page { class: "flex flex-col items-center", heading: "Dashboard".to_string(),
            if let Some(user) = state.user.clone() {
                div { class: "card shadow-sm w-full max-w-96",
                    div { class: "card-body",
                        h2 { class: "card-title",
                            {user.name.clone().unwrap_or_else(|| user.email.clone())}
                        }
                        p { class: "text-sm opacity-70", "{user.email}" }
                        BillingActions { has_billing: user.has_billing }
                    }
                }
            } else if state.fetched {
                div { class: "flex flex-col items-center gap-2",
                    p { "Sign in to see your dashboard." }
                    a { href: "/api/auth/login",
                        button { class: "btn btn-primary", "Sign in" }
                    }
                }
            } else {
                div { class: "skeleton h-40 w-96" }
            }
        }
    )
}

/// Subscribe and manage-billing buttons, each redirecting to a Stripe hosted page
#[component]
fn BillingActions(has_billing: bool) -> Element {
    #[allow(unused_mut)]
    let mut pending = use_signal(|| false);

    let subscribe = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api::start_checkout;

            redirect_to(start_checkout, pending);
        }
    };

    let manage = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api::open_billing_portal;

            redirect_to(open_billing_portal, pending);
        }
    };

    rsx!(
        div { class: "card-actions justify-end",
            button {
                class: "btn btn-primary",
                disabled: pending(),
                onclick: subscribe,
                "Subscribe"
            }
            if has_billing {
                button {
                    class: "btn btn-outline",
                    disabled: pending(),
                    onclick: manage,
                    "Manage billing"
                }
            }
        }
    )
}

#[cfg(feature = "web")]
fn redirect_to<F, Fut>(request: F, mut pending: Signal<bool>)
where
    F: FnOnce() -> Fut + 'static,
    Fut: std::future::Future<Output = Result<String, String>> + 'static,
{
    use crate::client::components::toast::Toasts;

    let mut toasts = consume_context::<Toasts>();
    pending.set(true);

    spawn(async move {
        match request().await {
            Ok(url) => {
                let _ = document::eval(&format!("window.location.href = {:?};", url));
            }
            Err(err) => {
                toasts.error(err);
                pending.set(false);
            }
        }
    });
}
