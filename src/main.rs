//! # workforce
//!
//! Host binary for the WorkForce portal. Serves the server-rendered Leptos
//! shell and the hydrate bundle built from `workforce-client`; all data calls
//! from the browser go straight to the external REST backend.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("ignoring unreadable .env: {err}");
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = HostConfig::from_env()?;
    let (app, leptos_options) = routes::app()?;
    tracing::info!(site_root = %leptos_options.site_root, "leptos options loaded");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "workforce listening");
    axum::serve(listener, app).await?;
    Ok(())
}
