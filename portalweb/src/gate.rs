use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use portal_core::route::Page;
use tracing::info;

use crate::config::PortalConfig;

/// Sends requests without the backend's identity header to the login page.
/// Authentication itself happens in the backend; this only checks that the
/// backend vouched for the request.
pub async fn require_identity(
    State(config): State<Arc<PortalConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if config.has_identity(request.headers()) {
        return next.run(request).await;
    }

    info!(path = %request.uri().path(), "No identity header, redirecting to login");
    Redirect::to(Page::Login.path()).into_response()
}
