mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::time::Duration;

        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;

        tracing::info!(
            "Starting server (app url: {}, dev routes: {}, request timeout: {}s)",
            config.app_url,
            config.enable_dev_routes,
            config.request_timeout_secs
        );

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(
            config.enable_dev_routes,
            Duration::from_secs(config.request_timeout_secs),
        )
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.app_url.clone(),
        ))
        .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
