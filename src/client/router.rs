use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Dashboard, Home, Marketplace, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/marketplace")]
    Marketplace {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
