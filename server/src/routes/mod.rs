//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: `/api/*` forwarded to the backend,
//! the compiled WASM/CSS bundle under `/pkg`, and the Leptos app. Page paths
//! come from the client's `<Routes>` via `generate_route_list`; anything else
//! falls through to `file_and_error_handler`, which renders the app's 404.


pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;
use crate::state::AppState;

/// Backend-facing routes: health check and the `/api` proxy.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host router built from the cargo-leptos configuration.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Config(format!("leptos configuration: {e}")))?;
    Ok(app_with_options(state, conf.leptos_options))
}

/// API routes + Leptos SSR routes + `/pkg` assets.
pub(crate) fn app_with_options(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(solo_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || solo_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(solo_client::app::shell))
        .with_state(leptos_options);

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
