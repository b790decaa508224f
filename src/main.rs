#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use coparent::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await?;
        let session = startup::session_layer(db.clone());

        if startup::start_scheduler(&config, db.clone()).await? {
            tracing::info!("In-process session cleanup scheduled");
        }

        let state = AppState::new(db, config)?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
