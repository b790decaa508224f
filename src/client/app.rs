use dioxus::prelude::*;

use crate::client::{
    components::{toast::Toasts, ToastContainer},
    router::Route,
    store::user::UserState,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let user_store = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(Toasts::new);

    // Resolve the signed-in user once on load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api::get_user;

        let mut user_store = user_store;
        let _ = use_resource(move || async move {
            let user = match get_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::error!("{}", err);
                    None
                }
            };

            user_store.set(UserState {
                user,
                fetched: true,
            });
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = user_store;

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
        ToastContainer {}
    }
}
