use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use tracing::debug;

/// The stylesheet every shell page links to.
pub const STYLESHEET: &str = "/assets/app.css";

#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
pub struct Asset;

/// Serves everything under "/assets/*file" out of the embedded 'assets'
/// folder.
pub async fn static_handler(Path(file): Path<String>) -> Response {
    match Asset::get(&file) {
        Some(content) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => {
            debug!("No embedded asset called {file:?}");
            (StatusCode::NOT_FOUND, format!("{file} not found")).into_response()
        }
    }
}
