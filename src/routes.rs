//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no API of its own: the REST backend is a separate service.
//! It renders the Leptos shell for every client route, serves the compiled
//! WASM/CSS bundle under `/pkg`, static assets from the site root, and a
//! liveness probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use workforce_client::app::{App, shell};

use crate::error::HostError;

/// Routes that do not depend on the Leptos build output.
pub fn host_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health probe, SSR routes and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn app() -> Result<(Router, LeptosOptions), HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let router = host_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join(leptos_options.site_pkg_dir.as_ref())))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok((router, leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
