use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use portal_core::route::Page;
use tower_http::trace::TraceLayer;

use crate::{asset::static_handler, config::PortalConfig, gate::require_identity, views::page::page_view};

/// Builds the router. Only the GET side of each page is served here; the
/// POST endpoints the forms submit to belong to the authentication backend.
pub fn router(config: Arc<PortalConfig>) -> Router {
    let gated = middleware::from_fn_with_state(config.clone(), require_identity);

    Router::new()
        .route(Page::Login.path(), get(page_view))
        .route(Page::Register.path(), get(page_view))
        .route(Page::Dashboard.path(), get(page_view).route_layer(gated))
        .route("/assets/*file", get(static_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
