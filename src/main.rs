#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal case outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid host configuration");
            std::process::exit(2);
        }
    };

    let leptos_options = match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => {
            tracing::error!(error = %e, "leptos configuration missing or malformed");
            std::process::exit(2);
        }
    };

    let app = routes::app(leptos_options);
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "estate listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
