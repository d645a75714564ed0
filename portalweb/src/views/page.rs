use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
};
use maud::Markup;
use portal_core::route::ViewRouter;
use tracing::{debug, instrument};

use crate::config::PortalConfig;

/// Returns the shell page with the routed page component mounted into it.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn page_view(
    State(config): State<Arc<PortalConfig>>,
    uri: Uri,
    headers: HeaderMap,
) -> Markup {
    let token = config.request_token(&headers);
    if token.is_none() {
        debug!("No CSRF token supplied, forms will post without one");
    }

    let mut document = config.shell(token);
    let router = ViewRouter::new(uri.path());
    config.app.mount(&mut document, &router);
    document.render()
}
